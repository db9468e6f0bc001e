//! Dashboard summary over the whole catalog.

use crate::model::record::{RecordId, RecordKind, RecordStatus};
use crate::model::severity::Severity;
use crate::repo::record_store::RecordRepository;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Reverse;

/// Number of recent reports shown when the caller does not choose.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentReport {
    pub id: RecordId,
    pub kind: RecordKind,
    pub name: String,
    pub status: RecordStatus,
    pub reported_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_diseases: usize,
    pub total_pests: usize,
    pub total_remedies: usize,
    /// Pending records of every kind.
    pub pending_approvals: usize,
    /// Diseases and pests graded `critical`.
    pub critical_issues: usize,
    /// Newest first.
    pub recent_reports: Vec<RecentReport>,
}

/// Computes the dashboard counters and the `recent_limit` newest reports.
///
/// Ties on `reported_at` keep catalog order (diseases, pests, remedies).
pub fn summarize<R>(repo: &R, recent_limit: usize) -> DashboardSummary
where
    R: RecordRepository + ?Sized,
{
    let records = repo.records();

    let pending_approvals = records
        .iter()
        .filter(|record| record.status() == RecordStatus::Pending)
        .count();

    let critical_issues = repo
        .diseases()
        .iter()
        .map(|disease| disease.severity)
        .chain(repo.pests().iter().map(|pest| pest.severity))
        .filter(|severity| *severity == Severity::Critical)
        .count();

    let mut recent_reports: Vec<RecentReport> = records
        .iter()
        .map(|record| RecentReport {
            id: record.id(),
            kind: record.kind(),
            name: record.name().to_string(),
            status: record.status(),
            reported_at: record.review().reported_at,
        })
        .collect();
    recent_reports.sort_by_key(|report| Reverse(report.reported_at));
    recent_reports.truncate(recent_limit);

    DashboardSummary {
        total_diseases: repo.count(RecordKind::Disease),
        total_pests: repo.count(RecordKind::Pest),
        total_remedies: repo.count(RecordKind::Remedy),
        pending_approvals,
        critical_issues,
        recent_reports,
    }
}
