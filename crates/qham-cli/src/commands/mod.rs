//! CLI command implementations.

pub mod info;
pub mod load;
pub mod version;
