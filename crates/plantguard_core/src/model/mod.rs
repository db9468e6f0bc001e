//! Domain model for plant-health reports.
//!
//! # Responsibility
//! - Define canonical disease, pest and remedy records and their drafts.
//! - Share one review block and one `Reviewable` surface across kinds.
//!
//! # Invariants
//! - Every record is identified by a `RecordId` unique within its kind.
//! - Records are never deleted; only review fields change after creation.

pub mod disease;
pub mod pest;
pub mod record;
pub mod remedy;
pub mod severity;
pub mod user;
