//! `lull debounce` end to end

use crate::common::test_home;
use crate::lull;
use anyhow::Result;

#[test]
fn test_burst_emits_only_last_line() -> Result<()> {
    let home = test_home();

    let result = lull!(home.path(), "debounce", "--delay-ms", "200")
        .stdin("r\nru\nrus\nrust\n")
        .assert_success()?;

    assert_eq!(result.lines(), vec!["rust"]);
    Ok(())
}

#[test]
fn test_waits_out_delay_at_eof() -> Result<()> {
    let home = test_home();

    let result = lull!(home.path(), "debounce", "--delay-ms", "400")
        .stdin("query\n")
        .assert_success()?;

    assert_eq!(result.out(), "query");
    assert!(
        result.duration.as_millis() >= 400,
        "finished before the quiet period: {:?}",
        result.duration
    );
    Ok(())
}

#[test]
fn test_flush_on_eof_emits_immediately() -> Result<()> {
    let home = test_home();

    let result = lull!(home.path(), "debounce", "--delay-ms", "60000", "--flush-on-eof")
        .stdin("a\nab\nabc\n")
        .assert_success()?;

    assert_eq!(result.lines(), vec!["abc"]);
    assert!(result.duration.as_secs() < 30);
    Ok(())
}

#[test]
fn test_empty_input_emits_nothing() -> Result<()> {
    let home = test_home();

    let result = lull!(home.path(), "debounce", "--delay-ms", "10").assert_success()?;
    assert!(result.lines().is_empty());
    Ok(())
}

#[test]
fn test_delay_defaults_from_config() -> Result<()> {
    let home = test_home();
    lull!(home.path(), "config", "set", "debounce.delay_ms", "0").assert_success()?;

    let result = lull!(home.path(), "debounce").stdin("x\ny\n").assert_success()?;
    assert_eq!(result.lines().last().copied(), Some("y"));
    Ok(())
}

#[test]
fn test_rejects_delay_out_of_range() -> Result<()> {
    let home = test_home();

    let result = lull!(home.path(), "debounce", "--delay-ms", "600000").assert_failure()?;
    assert!(result.contains_stderr("--delay-ms"));
    Ok(())
}
