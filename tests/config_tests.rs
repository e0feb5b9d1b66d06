//! Integration tests for configuration loading

use manas::config::Config;
use std::fs;

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.general.default_therapist, "Dr. Emily Chen");
    assert_eq!(config.general.default_duration_minutes, 60);

    assert_eq!(config.pricing.individual_rate, 1499);
    assert_eq!(config.pricing.group_rate, 499);
    assert_eq!(config.pricing.vr_rate, 2499);
    assert!((config.pricing.payout_fraction - 0.60).abs() < f64::EPSILON);

    assert_eq!(config.countdown.tick_seconds, 1);
    assert_eq!(config.countdown.join_confirm_seconds, 2);
    assert_eq!(config.countdown.initial_waitlist, 8);
    assert_eq!(config.countdown.waitlist_cap, 15);
    assert!((config.countdown.waitlist_probability - 0.05).abs() < f64::EPSILON);
}

#[test]
fn test_missing_file_yields_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = Config::load_from(&dir.path().join("missing.toml"))?;

    assert_eq!(config.pricing.individual_rate, 1499);
    assert_eq!(config.countdown.waitlist_cap, 15);

    Ok(())
}

#[test]
fn test_file_overrides_merge_with_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[pricing]
individual_rate = 999
payout_fraction = 0.5

[countdown]
waitlist_cap = 10
"#,
    )?;

    let config = Config::load_from(&path)?;

    assert_eq!(config.pricing.individual_rate, 999);
    assert!((config.pricing.payout_fraction - 0.5).abs() < f64::EPSILON);
    // Untouched keys keep their section defaults
    assert_eq!(config.pricing.group_rate, 499);
    assert_eq!(config.countdown.waitlist_cap, 10);
    assert_eq!(config.countdown.tick_seconds, 1);
    assert_eq!(config.general.default_therapist, "Dr. Emily Chen");

    Ok(())
}

#[test]
fn test_malformed_file_is_an_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    fs::write(&path, "pricing = \"not a table\"")?;

    assert!(Config::load_from(&path).is_err());

    Ok(())
}
