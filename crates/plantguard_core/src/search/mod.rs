//! Listing search entry points.
//!
//! # Responsibility
//! - Expose browse-page predicate filters over record collections.
//! - Keep filter semantics inside core so every front end agrees.

pub mod filter;
