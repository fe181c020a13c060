//! Common utilities for integration tests

pub mod cli;

use tempfile::TempDir;

/// Isolated home for one test: config file and data dir live inside
pub fn test_home() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}
