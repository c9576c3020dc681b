// Domain layer - Content tool models and landing page state machines
pub mod carousel;
pub mod landing;
pub mod reveal;
pub mod tool;
pub mod typewriter;
