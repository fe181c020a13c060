//! `lull cookie` end to end

use crate::common::test_home;
use crate::lull;
use anyhow::Result;

#[test]
fn test_set_get_header() -> Result<()> {
    let home = test_home();

    lull!(home.path(), "cookie", "set", "session", "abc123", "--expires-minutes", "60").assert_success()?;
    lull!(home.path(), "cookie", "set", "lang", "en").assert_success()?;

    let value = lull!(home.path(), "cookie", "get", "session").assert_success()?;
    assert_eq!(value.out(), "abc123");

    let header = lull!(home.path(), "cookie", "header").assert_success()?;
    assert_eq!(header.out(), "lang=en; session=abc123");
    Ok(())
}

#[test]
fn test_remove_and_negative_expiry() -> Result<()> {
    let home = test_home();

    lull!(home.path(), "cookie", "set", "token", "t").assert_success()?;
    lull!(home.path(), "cookie", "remove", "token").assert_success()?;
    let exists = lull!(home.path(), "cookie", "exists", "token").assert_success()?;
    assert_eq!(exists.out(), "false");

    lull!(home.path(), "cookie", "set", "gone", "g", "--expires-minutes", "-1").assert_success()?;
    lull!(home.path(), "cookie", "get", "gone").assert_failure()?;
    Ok(())
}

#[test]
fn test_config_defaults_apply() -> Result<()> {
    let home = test_home();
    lull!(home.path(), "config", "set", "cookie.secure", "true").assert_success()?;
    lull!(home.path(), "config", "set", "cookie.default_path", "/app").assert_success()?;

    let result = lull!(home.path(), "cookie", "set", "pref", "1", "--domain", "example.com")
        .assert_success()?;
    assert!(result.stdout.contains("pref=1; path=/app; domain=example.com; secure"));
    Ok(())
}

#[test]
fn test_invalid_name_rejected() -> Result<()> {
    let home = test_home();

    let result = lull!(home.path(), "cookie", "set", "bad name", "v").assert_failure()?;
    assert!(result.contains_stderr("Invalid cookie name"));
    Ok(())
}

#[test]
fn test_huge_expiry_is_capped() -> Result<()> {
    let home = test_home();

    let result = lull!(home.path(), "cookie", "set", "long", "v", "--expires-minutes", "10000000000000")
        .assert_success()?;
    assert!(result.stdout.contains("31 Dec 9999 23:59:59 GMT"));

    let value = lull!(home.path(), "cookie", "get", "long").assert_success()?;
    assert_eq!(value.out(), "v");
    Ok(())
}
