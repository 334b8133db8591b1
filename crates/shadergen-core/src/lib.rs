// Core modules
pub mod catalog;
pub mod config;
pub mod error;
pub mod fs;
pub mod generator;
pub mod path;
pub mod project;
pub mod template;

// Re-export commonly used types
pub use error::{Result, ShadergenError};
