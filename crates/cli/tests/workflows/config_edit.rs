//! `lull config` end to end

use crate::common::test_home;
use crate::lull;
use anyhow::Result;

#[test]
fn test_set_get_round_trip() -> Result<()> {
    let home = test_home();

    let before = lull!(home.path(), "config", "get", "debounce.delay_ms").assert_success()?;
    assert_eq!(before.out(), "300");

    lull!(home.path(), "config", "set", "debounce.delay_ms", "150").assert_success()?;
    let after = lull!(home.path(), "config", "get", "debounce.delay_ms").assert_success()?;
    assert_eq!(after.out(), "150");

    assert!(home.path().join("config.toml").exists());
    Ok(())
}

#[test]
fn test_invalid_values_are_not_saved() -> Result<()> {
    let home = test_home();

    lull!(home.path(), "config", "set", "debounce.delay_ms", "999999").assert_failure()?;
    lull!(home.path(), "config", "set", "cookie.default_path", "no-slash").assert_failure()?;
    lull!(home.path(), "config", "set", "unknown.key", "1").assert_failure()?;

    assert!(!home.path().join("config.toml").exists());
    Ok(())
}

#[test]
fn test_path_create_and_example() -> Result<()> {
    let home = test_home();

    lull!(home.path(), "config", "path", "--create").assert_success()?;
    let contents = std::fs::read_to_string(home.path().join("config.toml"))?;
    assert!(contents.contains("delay_ms = 300"));

    let example = lull!(home.path(), "config", "example").assert_success()?;
    assert!(example.stdout.contains("[debounce]"));
    assert!(example.stdout.contains("[cookie]"));
    Ok(())
}
