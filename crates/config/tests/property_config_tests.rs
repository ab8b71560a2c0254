//! Property-based tests for configuration serialization.
//!
//! These tests verify that session maps survive a trip through both file
//! formats, using randomly generated inputs to catch quoting and escaping
//! edge cases that might not be covered by unit tests.
//!
//! Test coverage:
//! - YAML: encode then decode yields the original config
//! - JSON: encode then decode yields the original config
//! - Cross-format: YAML and JSON encodings decode to equal configs
//! - Files on disk: the loader reads back what was written, per extension

use proptest::prelude::*;
use tempfile::TempDir;

use rcon_config::{Config, ConfigLoader, Format, Session};

/// Strategy for generating environment names.
fn environment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("default".to_string()),
        Just("staging".to_string()),
        Just("production".to_string()),
        "[a-z]{3,10}-[0-9]{1,3}".prop_map(String::from),
    ]
}

/// Strategy for generating `host:port` addresses.
fn address_strategy() -> impl Strategy<Value = String> {
    let ip_strategy = (1u8..=254u8, 0u8..=255u8, 1u8..=254u8)
        .prop_map(|(a, b, c)| format!("10.{}.{}.{}", a, b, c));

    let host_strategy = prop_oneof![
        Just("localhost".to_string()),
        Just("mc.example.com".to_string()),
        Just("rust.internal.local".to_string()),
    ];

    let port_strategy = 1024u16..=65535u16;

    prop_oneof![
        Just(String::new()),
        (prop_oneof![ip_strategy, host_strategy], port_strategy)
            .prop_map(|(host, port)| format!("{}:{}", host, port)),
    ]
}

/// Strategy for generating password strings, including the empty password.
fn password_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9!@#$%^&*]{0,32}".prop_map(String::from)
}

/// Strategy for generating valid protocol discriminators.
fn kind_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("rcon".to_string()),
        Just("telnet".to_string()),
        Just("web".to_string()),
    ]
}

fn session_strategy() -> impl Strategy<Value = Session> {
    (address_strategy(), password_strategy(), kind_strategy())
        .prop_map(|(address, password, kind)| Session::new(address, password, kind))
}

/// Strategy for generating valid configs with up to six environments.
fn config_strategy() -> impl Strategy<Value = Config> {
    prop::collection::btree_map(environment_strategy(), session_strategy(), 0..6)
        .prop_map(|map| map.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_yaml_round_trip(config in config_strategy()) {
        let text = Format::Yaml.encode(&config).unwrap();
        let decoded = Format::Yaml.decode(text.as_bytes()).unwrap();

        prop_assert_eq!(decoded, config);
    }

    #[test]
    fn prop_json_round_trip(config in config_strategy()) {
        let text = Format::Json.encode(&config).unwrap();
        let decoded = Format::Json.decode(text.as_bytes()).unwrap();

        prop_assert_eq!(decoded, config);
    }

    #[test]
    fn prop_yaml_and_json_decode_equal(config in config_strategy()) {
        let yaml = Format::Yaml.encode(&config).unwrap();
        let json = Format::Json.encode(&config).unwrap();

        let from_yaml = Format::Yaml.decode(yaml.as_bytes()).unwrap();
        let from_json = Format::Json.decode(json.as_bytes()).unwrap();

        prop_assert_eq!(from_yaml, from_json);
    }

    #[test]
    fn prop_valid_configs_pass_validation(config in config_strategy()) {
        prop_assert!(config.validate().is_ok());
    }

    #[test]
    fn prop_loader_reads_both_extensions(config in config_strategy()) {
        let temp_dir = TempDir::new().unwrap();
        let yaml_path = temp_dir.path().join("rcon.yaml");
        let json_path = temp_dir.path().join("rcon.json");
        std::fs::write(&yaml_path, Format::Yaml.encode(&config).unwrap()).unwrap();
        std::fs::write(&json_path, Format::Json.encode(&config).unwrap()).unwrap();

        let from_yaml = ConfigLoader::new().with_config_path(yaml_path).load_validated().unwrap();
        let from_json = ConfigLoader::new().with_config_path(json_path).load_validated().unwrap();

        prop_assert_eq!(&from_yaml, &config);
        prop_assert_eq!(from_yaml, from_json);
    }
}
