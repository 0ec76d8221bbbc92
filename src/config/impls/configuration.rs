use std::fs::File;
use std::io::{ErrorKind, Write};
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::scraper::scraper::{DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_SECS};
use crate::structs::Cli;
use crate::tracker::tracker::DEFAULT_TRACKERS;

pub const TRACKER_URI_PATTERN: &str = r"^(?i:udp)://(\[[0-9A-Fa-f:.]+\]|[A-Za-z0-9._-]+):[0-9]{1,5}(/\S*)?$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            timeout: DEFAULT_TIMEOUT_SECS,
            concurrency: DEFAULT_CONCURRENCY,
            trackers: DEFAULT_TRACKERS.iter().map(|tracker| tracker.to_string()).collect(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
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

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads `path` without validating it; call [`Configuration::validate`]
    /// once command line overrides are applied.
    ///
    /// A missing file means built-in defaults. With `create` set, a missing or
    /// broken file is replaced by the defaults and the caller is asked to
    /// review it before running again.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(ConfigurationError::IOError(error)) if error.kind() == ErrorKind::NotFound && !create => {
                eprintln!("No config file found at {path}, using built-in defaults.");
                Configuration::init()
            }
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either fix {path}, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create config file automatically"));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please review {path}, exiting now...");
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        Ok(config)
    }

    /// Overrides file values with the ones given on the command line.
    pub fn apply_cli(&mut self, args: &Cli) {
        if !args.trackers.is_empty() {
            self.trackers = args.trackers.clone();
        }
        if let Some(timeout) = args.timeout {
            self.timeout = timeout;
        }
        if let Some(concurrency) = args.concurrency {
            self.concurrency = concurrency;
        }
        if let Some(log_level) = &args.log_level {
            self.log_level = log_level.clone();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log level '{}'", self.log_level)));
        }
        if self.timeout == 0 {
            return Err(ConfigurationError::ValidationError(String::from("timeout must be at least 1 second")));
        }
        if self.concurrency == 0 {
            return Err(ConfigurationError::ValidationError(String::from("concurrency must be at least 1")));
        }

        let tracker_regex = Regex::new(TRACKER_URI_PATTERN)
            .map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        for tracker in &self.trackers {
            Self::validate_value("tracker", tracker, &tracker_regex)?;
        }

        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &Regex) -> Result<(), ConfigurationError> {
        if regex.is_match(value) {
            Ok(())
        } else {
            Err(ConfigurationError::ValidationError(format!("{name} '{value}' does not match {}", regex.as_str())))
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}
