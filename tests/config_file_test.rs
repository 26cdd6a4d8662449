//! Config files on disk driving the nullable policy.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;

use komposti::{Config, Either, Error, LogLevel, NullablePolicy, from_nullable_with};

/// Test that a `komposti.toml` on disk switches `from_nullable_with` to the falsy policy.
///
/// # GIVEN
/// A `komposti.toml` declaring `nullable_policy = "falsy"`
///
/// # WHEN
/// It is loaded with `Config::load` and its policy is used to lift values
///
/// # THEN
/// Zero and missing values go left, other values go right
#[test]
fn test_loaded_policy_drives_from_nullable_with() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("komposti.toml");
    fs::write(&path, "nullable_policy = \"falsy\"\nlog_level = \"debug\"\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.nullable_policy, NullablePolicy::Falsy);
    assert_eq!(config.log_level, LogLevel::Debug);

    let lifted: Vec<Either<Option<i32>, i32>> = [Some(0), Some(3), None]
        .into_iter()
        .map(|value| from_nullable_with(value, config.nullable_policy))
        .collect();
    assert_eq!(
        lifted,
        vec![Either::Left(Some(0)), Either::Right(3), Either::Left(None)]
    );
}

/// Test that an empty file falls back to the absent-only policy.
///
/// # GIVEN
/// An empty `komposti.toml`
///
/// # WHEN
/// It is loaded and `0` is lifted with its policy
///
/// # THEN
/// `0` is a present value
#[test]
fn test_empty_file_keeps_absent_only_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("komposti.toml");
    fs::write(&path, "").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(
        from_nullable_with(Some(0), config.nullable_policy),
        Either::Right(0)
    );
}

/// Test that a malformed file reports which file failed.
///
/// # GIVEN
/// A `komposti.toml` with a value of the wrong type
///
/// # WHEN
/// It is loaded
///
/// # THEN
/// The error is `ConfigParse` and names the file
#[test]
fn test_malformed_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("komposti.toml");
    fs::write(&path, "log_level = 5\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(&err, Error::ConfigParse { path: p, .. } if *p == path));
    assert!(err.to_string().contains("komposti.toml"));
}
