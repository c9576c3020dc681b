//! Mago do Tube: AI content tools for YouTube creators and the state
//! machines behind the landing page.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
