//! CLI command implementations

pub mod config;
pub mod cookie;
pub mod debounce;
pub mod storage;
