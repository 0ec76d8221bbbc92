#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::structs::configuration::Configuration;
        use crate::tracker::tracker::DEFAULT_TRACKERS;

        #[test]
        fn test_configuration_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.timeout, 10);
            assert_eq!(config.concurrency, 8);
            assert_eq!(config.trackers.len(), DEFAULT_TRACKERS.len());
            assert_eq!(Configuration::default(), config);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_configuration_load_partial() {
            let config = Configuration::load(b"timeout = 3\ntrackers = [\"udp://127.0.0.1:6969\"]\n").unwrap();
            assert_eq!(config.timeout, 3);
            assert_eq!(config.log_level, "info");
            assert_eq!(config.concurrency, 8);
            assert_eq!(config.trackers, vec![String::from("udp://127.0.0.1:6969")]);
        }

        #[test]
        fn test_configuration_load_rejects_wrong_types() {
            assert!(Configuration::load(b"timeout = \"soon\"").is_err());
        }

        #[test]
        fn test_configuration_toml_roundtrip() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            assert_eq!(Configuration::load(serialized.as_bytes()).unwrap(), config);
        }
    }

    mod validation_tests {
        use regex::Regex;
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::impls::configuration::TRACKER_URI_PATTERN;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_validate_rejects_unknown_log_level() {
            let config = Configuration { log_level: String::from("loud"), ..Configuration::init() };
            match config.validate() {
                Err(ConfigurationError::ValidationError(message)) => assert!(message.contains("loud")),
                other => panic!("Expected ValidationError, got {:?}", other),
            }
        }

        #[test]
        fn test_validate_rejects_zero_timeout_and_concurrency() {
            assert!(Configuration { timeout: 0, ..Configuration::init() }.validate().is_err());
            assert!(Configuration { concurrency: 0, ..Configuration::init() }.validate().is_err());
        }

        #[test]
        fn test_validate_accepts_empty_tracker_list() {
            assert!(Configuration { trackers: vec![], ..Configuration::init() }.validate().is_ok());
        }

        #[test]
        fn test_validate_rejects_http_tracker() {
            let config = Configuration {
                trackers: vec![String::from("http://tracker.example.org:80/announce")],
                ..Configuration::init()
            };
            let error = config.validate().unwrap_err();
            assert!(error.to_string().starts_with("invalid configuration: tracker"));
        }

        #[test]
        fn test_tracker_uri_pattern() {
            let regex = Regex::new(TRACKER_URI_PATTERN).unwrap();
            assert!(regex.is_match("udp://tracker.opentrackr.org:1337/announce"));
            assert!(regex.is_match("UDP://bt2.archive.org:6969"));
            assert!(regex.is_match("udp://[2001:db8::1]:6969"));
            assert!(!regex.is_match("udp://tracker.example.org"));
            assert!(!regex.is_match("wss://tracker.example.org:443"));
            assert!(Configuration::validate_value("tracker", "udp://a:1", &regex).is_ok());
        }
    }

    mod file_tests {
        use clap::Parser;
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;
        use crate::structs::Cli;

        #[test]
        fn test_save_and_load_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();

            let config = Configuration { timeout: 4, concurrency: 2, ..Configuration::init() };
            Configuration::save_from_config(path, &config).unwrap();

            assert_eq!(Configuration::load_file(path).unwrap(), config);
            assert_eq!(Configuration::load_from_file(path, false).unwrap(), config);
        }

        #[test]
        fn test_load_file_missing() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("missing.toml");
            assert!(matches!(Configuration::load_file(path.to_str().unwrap()), Err(ConfigurationError::IOError(_))));
        }

        #[test]
        fn test_load_from_file_missing_uses_defaults() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("missing.toml");
            let config = Configuration::load_from_file(path.to_str().unwrap(), false).unwrap();
            assert_eq!(config, Configuration::init());
            assert!(!path.exists());
        }

        #[test]
        fn test_load_from_file_creates_defaults() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let error = Configuration::load_from_file(path.to_str().unwrap(), true).unwrap_err();
            assert_eq!(error.message(), "created config file");
            assert_eq!(Configuration::load_file(path.to_str().unwrap()).unwrap(), Configuration::init());
        }

        #[test]
        fn test_load_from_file_corrupt_without_create() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            std::fs::write(&path, "timeout = [").unwrap();
            let error = Configuration::load_from_file(path.to_str().unwrap(), false).unwrap_err();
            assert_eq!(error.message(), "will not create config file automatically");
        }

        #[test]
        fn test_load_from_file_leaves_validation_to_caller() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            std::fs::write(&path, "log_level = \"chatty\"\n").unwrap();

            let config = Configuration::load_from_file(path.to_str().unwrap(), false).unwrap();
            assert_eq!(config.log_level, "chatty");
            assert!(config.validate().unwrap_err().to_string().contains("chatty"));
        }

        #[test]
        fn test_cli_overrides_bad_file_value() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            std::fs::write(&path, "log_level = \"chatty\"\ntimeout = 0\n").unwrap();

            let args = Cli::parse_from([
                "torrent-tracker-scraper",
                "--log-level", "debug",
                "--timeout", "3",
                "-t", "udp://127.0.0.1:6969",
                "88334ec1d90afe94a22c6de5756268599f5f8ea2",
            ]);
            let mut config = Configuration::load_from_file(path.to_str().unwrap(), false).unwrap();
            config.apply_cli(&args);

            assert!(config.validate().is_ok());
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.timeout, 3);
            assert_eq!(config.concurrency, 8);
            assert_eq!(config.trackers, vec![String::from("udp://127.0.0.1:6969")]);
        }

        #[test]
        fn test_cli_without_overrides_keeps_file_values() {
            let args = Cli::parse_from(["torrent-tracker-scraper"]);
            let mut config = Configuration { timeout: 4, ..Configuration::init() };
            config.apply_cli(&args);
            assert_eq!(config, Configuration { timeout: 4, ..Configuration::init() });
        }
    }
}
