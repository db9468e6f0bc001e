//! Core domain logic for PlantGuard plant-health reports.
//! This crate is the single source of truth for record invariants.

pub mod access;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod seed;
pub mod service;

pub use access::capability::Capability;
pub use access::directory::UserDirectory;
pub use logging::{init_logging, logging_status, LogLevel, LoggingConfig, LoggingError};
pub use model::disease::{CausedBy, Disease, DiseaseDraft, Location, WeatherData};
pub use model::pest::{Harm, Pest, PestDraft};
pub use model::record::{
    ParseEnumError, RecordDraft, RecordId, RecordKind, RecordRef, RecordStatus, Review, Reviewable,
};
pub use model::remedy::{Effectiveness, Remedy, RemedyCategory, RemedyDraft};
pub use model::severity::Severity;
pub use model::user::{Role, User, UserId};
pub use repo::clock::{Clock, ManualClock, SystemClock};
pub use repo::record_store::{RecordRepository, RecordStore, StoreError, StoreResult};
pub use search::filter::{
    filter_diseases, filter_pests, filter_remedies, DiseaseFilter, PestFilter, RemedyFilter,
};
pub use seed::demo_catalog;
pub use service::dashboard_service::{summarize, DashboardSummary, RecentReport, DEFAULT_RECENT_LIMIT};
pub use service::relation_service::{related_items, resolve_related, RelatedItem, RelationSource};
pub use service::review_service::{ReviewError, ReviewResult, ReviewService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
