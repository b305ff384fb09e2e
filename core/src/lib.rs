//! # Ajar Core
//!
//! Domain layer for the Ajar phone verification workflow: the
//! verification record entity, the error taxonomy, the code store
//! abstraction, and the service orchestrating the send and verify flows.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
