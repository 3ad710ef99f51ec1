use std::io::Write;

use chrono::{DateTime, FixedOffset, Utc};
use tickgate_core::{TickGateError, TimeZoneResolver, TimeZoneSpec};

fn utc(ts: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(ts, 0).unwrap()
}

#[test]
fn resolves_iana_region_names() {
    let resolver = TimeZoneResolver::new();
    let spec = resolver.resolve("America/New_York").unwrap();
    assert_eq!(spec, TimeZoneSpec::Region(chrono_tz::America::New_York));
}

#[test]
fn falls_back_to_posix_specification() {
    let resolver = TimeZoneResolver::new();
    // POSIX offsets count west of Greenwich: EST5 is UTC-5.
    let spec = resolver.resolve("EST5").unwrap();
    assert_eq!(
        spec,
        TimeZoneSpec::Posix(FixedOffset::west_opt(5 * 3600).unwrap())
    );

    let spec = resolver.resolve("JST-9").unwrap();
    assert_eq!(
        spec,
        TimeZoneSpec::Posix(FixedOffset::east_opt(9 * 3600).unwrap())
    );
}

#[test]
fn posix_accepts_minutes_and_dst_suffix() {
    let resolver = TimeZoneResolver::new();
    // Half-hour offset, east of Greenwich.
    let spec = resolver.resolve("IST-5:30").unwrap();
    assert_eq!(
        spec,
        TimeZoneSpec::Posix(FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap())
    );

    // Bare "EST5EDT" never reaches the POSIX parser: the IANA database ships
    // a zone under that exact name, and the database wins.
    let spec = resolver.resolve("EST5EDT").unwrap();
    assert_eq!(spec, TimeZoneSpec::Region(chrono_tz::EST5EDT));

    // With a rule suffix it is POSIX, and the rule yields the standard
    // offset; DST computation is the zone database's business, never ours.
    let spec = resolver.resolve("EST5EDT4,M3.2.0,M11.1.0").unwrap();
    assert_eq!(
        spec,
        TimeZoneSpec::Posix(FixedOffset::west_opt(5 * 3600).unwrap())
    );
}

#[test]
fn posix_accepts_quoted_abbreviations() {
    let resolver = TimeZoneResolver::new();
    let spec = resolver.resolve("<UTC+3>-3").unwrap();
    assert_eq!(
        spec,
        TimeZoneSpec::Posix(FixedOffset::east_opt(3 * 3600).unwrap())
    );
}

#[test]
fn unresolvable_identifier_errors() {
    let resolver = TimeZoneResolver::new();
    for id in ["", "Nowhere/Special", "E5", "EST25", "EST5garbage!"] {
        let err = resolver.resolve(id).unwrap_err();
        assert!(matches!(err, TickGateError::UnresolvedZone { .. }), "{id}");
    }
}

#[test]
fn alias_file_layers_over_embedded_database() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# exchange aliases").unwrap();
    writeln!(file, "NYSE = America/New_York").unwrap();
    writeln!(file, "FEED = EST5").unwrap();
    file.flush().unwrap();

    let resolver = TimeZoneResolver::from_spec_file(file.path()).unwrap();
    assert_eq!(
        resolver.resolve("NYSE").unwrap(),
        TimeZoneSpec::Region(chrono_tz::America::New_York)
    );
    assert_eq!(
        resolver.resolve("FEED").unwrap(),
        TimeZoneSpec::Posix(FixedOffset::west_opt(5 * 3600).unwrap())
    );
    // The embedded database is still reachable underneath the aliases.
    assert!(resolver.resolve("Europe/Berlin").is_ok());
}

#[test]
fn missing_or_malformed_spec_file_is_a_config_error() {
    let err = TimeZoneResolver::from_spec_file(std::path::Path::new("/no/such/tzdb")).unwrap_err();
    assert!(matches!(err, TickGateError::Config(_)));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "not an entry").unwrap();
    file.flush().unwrap();
    let err = TimeZoneResolver::from_spec_file(file.path()).unwrap_err();
    assert!(matches!(err, TickGateError::Config(_)));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "NYSE = Nowhere/Special").unwrap();
    file.flush().unwrap();
    let err = TimeZoneResolver::from_spec_file(file.path()).unwrap_err();
    assert!(matches!(err, TickGateError::Config(_)));
}

#[test]
fn date_at_follows_the_zone_rules() {
    let ny = TimeZoneSpec::Region(chrono_tz::America::New_York);
    let tokyo = TimeZoneSpec::Region(chrono_tz::Asia::Tokyo);
    // 2024-01-15 02:00 UTC: still the 14th in New York, already the 15th in Tokyo.
    let instant = utc(1_705_284_000);
    assert_eq!(ny.date_at(instant).to_string(), "2024-01-14");
    assert_eq!(tokyo.date_at(instant).to_string(), "2024-01-15");
}
