//! Utility modules

pub mod phone;
