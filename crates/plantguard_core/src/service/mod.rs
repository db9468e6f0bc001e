//! Core use-case services.
//!
//! # Responsibility
//! - Build use-case level APIs on top of the record repository.
//! - Keep front ends decoupled from collection storage details.

pub mod dashboard_service;
pub mod relation_service;
pub mod review_service;
