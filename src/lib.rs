pub mod audio;
pub mod config;
pub mod event;
pub mod http;
pub mod mood;
pub mod ui;
pub mod util;
