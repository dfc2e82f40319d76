//! Core types shared across the Vestor workspace.
//!
//! Holds the top-level error enum and the TOML-backed application
//! configuration. Domain logic lives in the sibling crates.

pub mod config;
pub mod error;

pub use config::{BackendConfig, ChatConfig, GeneralConfig, VestorConfig};
pub use error::{Result, VestorError};
