// UI modules
pub mod theme;
pub mod widgets;

// Main entry point
pub mod app;

pub use app::{run_app, PayloadSource};
