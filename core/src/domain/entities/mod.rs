//! Entity definitions

pub mod verification_record;

pub use verification_record::{
    generate_code, CodeStatus, VerificationRecord, CODE_LENGTH, CODE_MAX, CODE_MIN,
    DEFAULT_EXPIRATION_MINUTES,
};
