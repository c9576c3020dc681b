// Application layer - Content tool use cases, model port and landing view model
pub mod content_tools_service;
pub mod generative_model;
pub mod landing_service;
pub mod prompts;
pub mod result_history;
