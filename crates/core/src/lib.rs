// Core types and configuration for Stitcher

pub mod config;
pub mod types;

pub use config::{AppConfig, ConfigError};
pub use types::*;
