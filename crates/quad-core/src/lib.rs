//! Shared types, configuration, and errors for the Quad engine.

pub mod config;
pub mod error;
pub mod types;

pub use config::QuadConfig;
pub use error::{QuadError, Result};
pub use types::*;
