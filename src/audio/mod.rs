pub mod commands;
pub mod engine;
pub mod error;
pub mod media;
pub mod state;
pub mod system;
pub mod traits;
