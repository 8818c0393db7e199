// Library root — exposes internals for integration tests and crate consumers.
// The binary entry point is src/main.rs.

pub mod config;
pub mod error;
pub mod logger;
pub mod util;
