//! CLI command implementations.

pub mod mutate;
pub mod query;
