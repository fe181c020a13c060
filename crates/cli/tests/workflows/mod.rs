//! Workflow integration tests
//!
//! Tests for complete workflows that exercise the binary end to end,
//! including state persisted across invocations.

pub mod config_edit;
pub mod cookie_jar;
pub mod debounce_stdin;
pub mod local_storage;
