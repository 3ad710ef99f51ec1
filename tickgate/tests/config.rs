use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use tickgate::{Config, TickGateBuilder, TickGateError, ZoneConfig};
use tickgate_mock::{MockStore, WeekendOracle};

#[test]
fn parses_the_shared_zone_shape() {
    let config: Config = serde_json::from_str(
        r#"{ "tzdb": "/etc/tickgate/tzdb", "zones": { "shared": { "zone": "America/New_York" } } }"#,
    )
    .unwrap();
    assert_eq!(config.zones.feed_zone(), "America/New_York");
    assert_eq!(config.zones.calendar_zone(), "America/New_York");
    config.validate().unwrap();
}

#[test]
fn parses_the_split_zone_shape() {
    let config: Config = serde_json::from_str(
        r#"{
            "tzdb": "/etc/tickgate/tzdb",
            "zones": { "split": { "feed_zone": "Asia/Tokyo", "calendar_zone": "America/New_York" } }
        }"#,
    )
    .unwrap();
    assert_eq!(config.zones.feed_zone(), "Asia/Tokyo");
    assert_eq!(config.zones.calendar_zone(), "America/New_York");
    config.validate().unwrap();
}

#[test]
fn loads_and_validates_a_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "tzdb": "/etc/tickgate/tzdb", "zones": {{ "shared": {{ "zone": "UTC" }} }} }}"#
    )
    .unwrap();
    file.flush().unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.zones.feed_zone(), "UTC");

    let err = Config::from_file(std::path::Path::new("/no/such/config")).unwrap_err();
    assert!(matches!(err, TickGateError::Config(_)));
}

#[test]
fn undefined_settings_fail_validation() {
    let empty_zone = Config {
        tzdb: PathBuf::from("/etc/tickgate/tzdb"),
        zones: ZoneConfig::Shared { zone: String::new() },
    };
    assert!(matches!(
        empty_zone.validate(),
        Err(TickGateError::Config(_))
    ));

    let empty_tzdb = Config {
        tzdb: PathBuf::new(),
        zones: ZoneConfig::Shared {
            zone: "UTC".into(),
        },
    };
    assert!(matches!(
        empty_tzdb.validate(),
        Err(TickGateError::Config(_))
    ));
}

fn valid_config() -> (tempfile::NamedTempFile, Config) {
    let tzdb = tempfile::NamedTempFile::new().unwrap();
    let config = Config {
        tzdb: tzdb.path().to_path_buf(),
        zones: ZoneConfig::Shared {
            zone: "America/New_York".into(),
        },
    };
    (tzdb, config)
}

#[test]
fn build_requires_every_collaborator() {
    let (_tzdb, config) = valid_config();
    assert!(matches!(
        TickGateBuilder::new()
            .with_config(config.clone())
            .with_oracle(Arc::new(WeekendOracle))
            .build(),
        Err(TickGateError::Config(_))
    ));

    assert!(matches!(
        TickGateBuilder::new()
            .with_config(config)
            .with_store(Arc::new(MockStore::new()))
            .build(),
        Err(TickGateError::Config(_))
    ));

    assert!(matches!(
        TickGateBuilder::new()
            .with_store(Arc::new(MockStore::new()))
            .with_oracle(Arc::new(WeekendOracle))
            .build(),
        Err(TickGateError::Config(_))
    ));
}

#[test]
fn missing_tz_database_is_fatal_at_startup() {
    let config = Config {
        tzdb: PathBuf::from("/no/such/tzdb"),
        zones: ZoneConfig::Shared {
            zone: "America/New_York".into(),
        },
    };
    assert!(matches!(
        TickGateBuilder::new()
            .with_config(config)
            .with_store(Arc::new(MockStore::new()))
            .with_oracle(Arc::new(WeekendOracle))
            .build(),
        Err(TickGateError::Config(_))
    ));
}

#[test]
fn unresolvable_startup_zone_is_fatal() {
    let (_tzdb, mut config) = valid_config();
    config.zones = ZoneConfig::Split {
        feed_zone: "Nowhere/Special".into(),
        calendar_zone: "America/New_York".into(),
    };
    assert!(matches!(
        TickGateBuilder::new()
            .with_config(config)
            .with_store(Arc::new(MockStore::new()))
            .with_oracle(Arc::new(WeekendOracle))
            .build(),
        Err(TickGateError::Config(_))
    ));
}
