//! # fsnd Common Library
//!
//! Shared code for the fsnd services (fyyur listings site, trivia API):
//! - Error type used across database and configuration code
//! - Bootstrap configuration loading (CLI → ENV → TOML → defaults)
//! - SQLite pool setup and case-insensitive search matching
//! - Pagination arithmetic
//! - Tracing subscriber initialisation and graceful shutdown signal

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod pagination;
pub mod shutdown;

pub use error::{Error, Result};
