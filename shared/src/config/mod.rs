//! Configuration modules
//!
//! Environment-driven configuration structs shared across the workspace.
//! Every struct has sensible defaults and a `from_env` loader.

pub mod database;
pub mod server;
pub mod verification;
