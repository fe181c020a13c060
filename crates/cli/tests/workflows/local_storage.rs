//! `lull storage` end to end

use crate::common::test_home;
use crate::lull;
use anyhow::Result;

#[test]
fn test_values_persist_across_invocations() -> Result<()> {
    let home = test_home();

    lull!(home.path(), "storage", "set", "theme", "dark").assert_success()?;
    lull!(home.path(), "storage", "set", "prefs", r#"{"compact":true,"size":12}"#).assert_success()?;

    let theme = lull!(home.path(), "storage", "get", "theme").assert_success()?;
    assert_eq!(theme.out(), r#""dark""#);

    let prefs = lull!(home.path(), "storage", "get", "prefs").assert_success()?;
    let value: serde_json::Value = serde_json::from_str(prefs.out())?;
    assert_eq!(value["compact"], true);
    assert_eq!(value["size"], 12);

    let keys = lull!(home.path(), "storage", "keys").assert_success()?;
    assert_eq!(keys.lines(), vec!["prefs", "theme"]);

    let size = lull!(home.path(), "storage", "size").assert_success()?;
    assert_eq!(size.out(), "2");
    Ok(())
}

#[test]
fn test_remove_exists_clear() -> Result<()> {
    let home = test_home();

    lull!(home.path(), "storage", "set", "a", "1").assert_success()?;
    lull!(home.path(), "storage", "set", "b", "2").assert_success()?;

    let exists = lull!(home.path(), "storage", "exists", "a").assert_success()?;
    assert_eq!(exists.out(), "true");

    lull!(home.path(), "storage", "remove", "a").assert_success()?;
    let exists = lull!(home.path(), "storage", "exists", "a").assert_success()?;
    assert_eq!(exists.out(), "false");

    lull!(home.path(), "storage", "clear").assert_success()?;
    let size = lull!(home.path(), "storage", "size").assert_success()?;
    assert_eq!(size.out(), "0");
    Ok(())
}

#[test]
fn test_get_missing_fails() -> Result<()> {
    let home = test_home();

    let result = lull!(home.path(), "storage", "get", "missing").assert_failure()?;
    assert!(result.contains_stderr("No item stored under 'missing'"));
    Ok(())
}
