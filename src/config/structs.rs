//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// UDP tracker client settings (tracker address, timeouts, buffers).
pub mod tracker_client_config;
