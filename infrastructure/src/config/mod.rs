//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::RelayConfig;
pub use loader::ConfigLoader;
