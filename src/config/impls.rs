/// Configuration loading, saving and validation.
pub mod configuration;

/// Display and Error implementations for ConfigurationError.
pub mod configuration_error;

/// Conversions from raw tracker client settings to socket parameters.
pub mod tracker_client_config;
