//! Request and response DTOs

pub mod verification;
