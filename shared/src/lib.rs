//! Shared utilities and configuration for the Ajar backend.
//!
//! This crate holds code used across the workspace: phone number
//! utilities and environment-driven configuration structs.

pub mod config;
pub mod utils;
