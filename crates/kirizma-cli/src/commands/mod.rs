//! CLI command implementations.

pub mod convert;
pub mod lanes;
