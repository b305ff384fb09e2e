//! Service layer

pub mod verification;
