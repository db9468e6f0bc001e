//! Role capabilities and user lookup.

pub mod capability;
pub mod directory;
