//! Response handlers

pub mod error;
