//! Shared record identity, review metadata and kind dispatch.
//!
//! # Responsibility
//! - Define the identity and review block every record kind carries.
//! - Provide tagged unions (`RecordDraft`, `RecordRef`) so store operations
//!   can dispatch on kind without runtime field probing.
//!
//! # Invariants
//! - `status` starts as `Pending` and only changes through store review ops.
//! - `reported_by` / `reported_at` never change after creation.
//! - `approved_by` / `approved_at` are only written on approval.

use crate::model::disease::{Disease, DiseaseDraft};
use crate::model::pest::{Pest, PestDraft};
use crate::model::remedy::{Remedy, RemedyDraft};
use crate::model::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque record identifier, unique within one collection.
pub type RecordId = Uuid;

/// Which of the three collections a record or operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Disease,
    Pest,
    Remedy,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [Self::Disease, Self::Pest, Self::Remedy];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disease => "disease",
            Self::Pest => "pest",
            Self::Remedy => "remedy",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "disease" | "diseases" => Ok(Self::Disease),
            "pest" | "pests" => Ok(Self::Pest),
            "remedy" | "remedies" => Ok(Self::Remedy),
            other => Err(ParseEnumError::new("record kind", other)),
        }
    }
}

/// Review lifecycle state.
///
/// `Approved` and `Rejected` are terminal: no operation leads back to
/// `Pending`, although a repeated approve/reject overwrites the status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RecordStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl Display for RecordStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(ParseEnumError::new("record status", other)),
        }
    }
}

/// Error returned when a string does not name a known enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub expected: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(expected: &'static str, value: &str) -> Self {
        Self {
            expected,
            value: value.to_string(),
        }
    }
}

impl Display for ParseEnumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {}: `{}`", self.expected, self.value)
    }
}

impl Error for ParseEnumError {}

/// Reporting and review metadata shared by every record kind.
///
/// Serialized flattened into the owning record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub status: RecordStatus,
    pub reported_by: UserId,
    pub reported_at: DateTime<Utc>,
    pub approved_by: Option<UserId>,
    pub approved_at: Option<DateTime<Utc>>,
}

impl Review {
    /// Review block for a freshly created record.
    pub fn pending(reported_by: UserId, reported_at: DateTime<Utc>) -> Self {
        Self {
            status: RecordStatus::Pending,
            reported_by,
            reported_at,
            approved_by: None,
            approved_at: None,
        }
    }

    pub(crate) fn approve(&mut self, approved_by: UserId, approved_at: DateTime<Utc>) {
        self.status = RecordStatus::Approved;
        self.approved_by = Some(approved_by);
        self.approved_at = Some(approved_at);
    }

    /// Approval fields are left as they were.
    pub(crate) fn reject(&mut self) {
        self.status = RecordStatus::Rejected;
    }
}

/// Common surface of the three record kinds.
pub trait Reviewable {
    const KIND: RecordKind;

    fn id(&self) -> RecordId;
    fn name(&self) -> &str;
    fn review(&self) -> &Review;
    fn review_mut(&mut self) -> &mut Review;

    fn status(&self) -> RecordStatus {
        self.review().status
    }
}

/// Creation payload: a full record minus `id`, `reported_at` and `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordDraft {
    Disease(DiseaseDraft),
    Pest(PestDraft),
    Remedy(RemedyDraft),
}

impl RecordDraft {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Disease(_) => RecordKind::Disease,
            Self::Pest(_) => RecordKind::Pest,
            Self::Remedy(_) => RecordKind::Remedy,
        }
    }

    pub fn reported_by(&self) -> &str {
        match self {
            Self::Disease(draft) => &draft.reported_by,
            Self::Pest(draft) => &draft.reported_by,
            Self::Remedy(draft) => &draft.reported_by,
        }
    }

    /// Overwrites the reporter, used when the acting user is known.
    pub fn set_reported_by(&mut self, reported_by: impl Into<UserId>) {
        let reported_by = reported_by.into();
        match self {
            Self::Disease(draft) => draft.reported_by = reported_by,
            Self::Pest(draft) => draft.reported_by = reported_by,
            Self::Remedy(draft) => draft.reported_by = reported_by,
        }
    }
}

impl From<DiseaseDraft> for RecordDraft {
    fn from(value: DiseaseDraft) -> Self {
        Self::Disease(value)
    }
}

impl From<PestDraft> for RecordDraft {
    fn from(value: PestDraft) -> Self {
        Self::Pest(value)
    }
}

impl From<RemedyDraft> for RecordDraft {
    fn from(value: RemedyDraft) -> Self {
        Self::Remedy(value)
    }
}

/// Borrowed view of one record of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordRef<'a> {
    Disease(&'a Disease),
    Pest(&'a Pest),
    Remedy(&'a Remedy),
}

impl<'a> RecordRef<'a> {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Disease(_) => Disease::KIND,
            Self::Pest(_) => Pest::KIND,
            Self::Remedy(_) => Remedy::KIND,
        }
    }

    pub fn id(&self) -> RecordId {
        match *self {
            Self::Disease(record) => record.id(),
            Self::Pest(record) => record.id(),
            Self::Remedy(record) => record.id(),
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            Self::Disease(record) => record.name(),
            Self::Pest(record) => record.name(),
            Self::Remedy(record) => record.name(),
        }
    }

    pub fn review(&self) -> &'a Review {
        match *self {
            Self::Disease(record) => record.review(),
            Self::Pest(record) => record.review(),
            Self::Remedy(record) => record.review(),
        }
    }

    pub fn status(&self) -> RecordStatus {
        match *self {
            Self::Disease(record) => record.status(),
            Self::Pest(record) => record.status(),
            Self::Remedy(record) => record.status(),
        }
    }

    /// Explicit foreign ids stored on the record, in relation-field order.
    pub fn explicit_relations(&self) -> Vec<RecordId> {
        match self {
            Self::Disease(record) => record.explicit_relations(),
            Self::Pest(record) => record.explicit_relations(),
            Self::Remedy(record) => record.explicit_relations(),
        }
    }
}

/// Concatenates optional relation lists, skipping absent ones.
pub(crate) fn chain_relations(lists: &[&Option<Vec<RecordId>>]) -> Vec<RecordId> {
    lists
        .iter()
        .filter_map(|list| list.as_ref())
        .flat_map(|ids| ids.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{RecordKind, RecordStatus, Review};
    use chrono::{TimeZone, Utc};

    #[test]
    fn record_kind_parses_singular_and_plural() {
        assert_eq!("Pest".parse::<RecordKind>().unwrap(), RecordKind::Pest);
        assert_eq!(" remedies ".parse::<RecordKind>().unwrap(), RecordKind::Remedy);
        let err = "weed".parse::<RecordKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown record kind: `weed`");
    }

    #[test]
    fn only_pending_is_non_terminal() {
        assert!(!RecordStatus::Pending.is_terminal());
        assert!(RecordStatus::Approved.is_terminal());
        assert!(RecordStatus::Rejected.is_terminal());
    }

    #[test]
    fn reject_keeps_previous_approval_fields() {
        let reported_at = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let approved_at = Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 0).unwrap();
        let mut review = Review::pending("3".to_string(), reported_at);

        review.approve("2".to_string(), approved_at);
        review.reject();

        assert_eq!(review.status, RecordStatus::Rejected);
        assert_eq!(review.approved_by.as_deref(), Some("2"));
        assert_eq!(review.approved_at, Some(approved_at));
    }
}
