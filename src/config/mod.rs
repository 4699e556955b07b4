//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the client
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **tracker_client**: default tracker, socket timeouts, connection ID
//!   lifetime and socket buffer size
//!
//! # Example
//!
//! ```rust,ignore
//! use btshow::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, falling back to defaults
//! let config = Configuration::load_from_file("config.toml", false)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
