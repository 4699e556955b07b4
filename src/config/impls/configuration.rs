use std::fs::File;
use std::io::Write;
use std::net::Ipv6Addr;
use std::path::Path;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::tracker_client_config::TrackerClientConfig;
use crate::udp::udp::{CONNECTION_ID_LIFETIME, DEFAULT_UDP_TRACKER_HOST};

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            tracker_client: TrackerClientConfig {
                udp_tracker_host: String::from(DEFAULT_UDP_TRACKER_HOST),
                receive_timeout: 15,
                send_timeout: 15,
                connection_id_lifetime: CONNECTION_ID_LIFETIME.as_secs(),
                recv_buffer_size: 0
            }
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file<P: AsRef<Path>>(path: P, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config<P: AsRef<Path>>(path: P, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads the configuration at `path`.
    ///
    /// A missing file is not an error: the defaults are used, and written to
    /// `path` when `create` is set. A file that exists but does not parse or
    /// validate is always an error.
    pub fn load_from_file<P: AsRef<Path>>(path: P, create: bool) -> Result<Configuration, CustomError> {
        let path = path.as_ref();
        let config = if path.exists() {
            match Configuration::load_file(path) {
                Ok(config) => config,
                Err(error) => {
                    eprintln!("Config file {} is corrupt.", path.display());
                    eprintln!("[ERROR] {error}");
                    return Err(CustomError::new("could not load config file"));
                }
            }
        } else {
            let config = Configuration::init();
            if create {
                eprintln!("Creating config file {}..", path.display());
                if let Err(e) = Configuration::save_from_config(path, &config) {
                    eprintln!("{} could not be created, check permissions...", path.display());
                    eprintln!("{e}");
                    return Err(CustomError::new("could not create config file"));
                }
            }
            config
        };

        if let Err(error) = Self::validate(&config) {
            eprintln!("[VALIDATE] {error}");
            return Err(CustomError::new("config file did not validate"));
        }
        Ok(config)
    }

    pub fn validate(config: &Configuration) -> Result<(), ConfigurationError> {
        parse_log_level(&config.log_level)
            .map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;

        let tracker_client = &config.tracker_client;
        Self::validate_tracker_host(&tracker_client.udp_tracker_host)?;

        if tracker_client.connection_id_lifetime == 0 || tracker_client.connection_id_lifetime > CONNECTION_ID_LIFETIME.as_secs() {
            return Err(ConfigurationError::ValidationError(format!(
                "connection_id_lifetime must be between 1 and {} seconds, got {}",
                CONNECTION_ID_LIFETIME.as_secs(),
                tracker_client.connection_id_lifetime
            )));
        }
        Ok(())
    }

    /// Checks the `host:port` shape without resolving the host.
    pub fn validate_tracker_host(host: &str) -> Result<(), ConfigurationError> {
        let invalid = || ConfigurationError::ValidationError(format!("udp_tracker_host '{host}' is not a valid host:port"));
        let (name, port) = host.rsplit_once(':').ok_or_else(invalid)?;
        if name.is_empty() || port.parse::<u16>().is_err() {
            return Err(invalid());
        }
        // IPv6 literals must be bracketed, names are left to the resolver.
        if let Some(literal) = name.strip_prefix('[') {
            let literal = literal.strip_suffix(']').ok_or_else(invalid)?;
            literal.parse::<Ipv6Addr>().map_err(|_| invalid())?;
        } else if name.contains(':') {
            return Err(invalid());
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}
