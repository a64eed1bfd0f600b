//! Database connection setup and shared query helpers

pub mod init;
pub mod search;

pub use init::*;
pub use search::*;
