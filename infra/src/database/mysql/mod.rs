//! MySQL implementations

mod code_store;

pub use code_store::MySqlCodeStore;
