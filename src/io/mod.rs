/// Command-line interface and request dispatch
pub mod cli;
/// Rendering constants and runtime configuration
pub mod configuration;
/// Error types and helpers
pub mod error;
/// PNG loading and atomic saving
pub mod image;
/// Progress display for tile batches
pub mod progress;
