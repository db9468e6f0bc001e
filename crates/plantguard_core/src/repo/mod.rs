//! Repository layer: record ownership and state-mutating operations.
//!
//! # Responsibility
//! - Define the use-case oriented record repository contract.
//! - Keep collection storage details away from services and callers.
//!
//! # Invariants
//! - Review operations on unknown ids report `NotFound` and change nothing.
//! - All timestamps come from the store's `Clock`.

pub mod clock;
pub mod record_store;
