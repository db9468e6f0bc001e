//! Natural remedy model.

use crate::model::record::{
    chain_relations, ParseEnumError, RecordId, RecordKind, Review, Reviewable,
};
use crate::model::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Reported effectiveness of a remedy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effectiveness {
    Low,
    #[default]
    Medium,
    High,
}

impl Effectiveness {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Effectiveness {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Effectiveness {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ParseEnumError::new("effectiveness", other)),
        }
    }
}

/// Treatment approach of a remedy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemedyCategory {
    #[default]
    Organic,
    Biological,
    Mechanical,
    Cultural,
}

impl RemedyCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Organic => "organic",
            Self::Biological => "biological",
            Self::Mechanical => "mechanical",
            Self::Cultural => "cultural",
        }
    }
}

impl Display for RemedyCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RemedyCategory {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "organic" => Ok(Self::Organic),
            "biological" => Ok(Self::Biological),
            "mechanical" => Ok(Self::Mechanical),
            "cultural" => Ok(Self::Cultural),
            other => Err(ParseEnumError::new("remedy category", other)),
        }
    }
}

/// Stored remedy report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remedy {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub preparation: Vec<String>,
    pub application: Vec<String>,
    /// Free-text targets, matched against disease names.
    pub effective_against: Vec<String>,
    pub safety_notes: Vec<String>,
    pub effectiveness: Effectiveness,
    pub category: RemedyCategory,
    #[serde(flatten)]
    pub review: Review,
    pub related_diseases: Option<Vec<RecordId>>,
    pub related_pests: Option<Vec<RecordId>>,
}

/// Remedy payload as submitted by a reporter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemedyDraft {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub preparation: Vec<String>,
    pub application: Vec<String>,
    pub effective_against: Vec<String>,
    pub safety_notes: Vec<String>,
    pub effectiveness: Effectiveness,
    pub category: RemedyCategory,
    pub reported_by: UserId,
    pub related_diseases: Option<Vec<RecordId>>,
    pub related_pests: Option<Vec<RecordId>>,
}

impl RemedyDraft {
    pub fn new(name: impl Into<String>, reported_by: impl Into<UserId>) -> Self {
        Self {
            name: name.into(),
            reported_by: reported_by.into(),
            ..Self::default()
        }
    }
}

impl Remedy {
    pub(crate) fn from_draft(id: RecordId, reported_at: DateTime<Utc>, draft: RemedyDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            ingredients: draft.ingredients,
            preparation: draft.preparation,
            application: draft.application,
            effective_against: draft.effective_against,
            safety_notes: draft.safety_notes,
            effectiveness: draft.effectiveness,
            category: draft.category,
            review: Review::pending(draft.reported_by, reported_at),
            related_diseases: draft.related_diseases,
            related_pests: draft.related_pests,
        }
    }

    /// `related_diseases` followed by `related_pests`.
    pub fn explicit_relations(&self) -> Vec<RecordId> {
        chain_relations(&[&self.related_diseases, &self.related_pests])
    }

    pub fn references_disease(&self, disease_id: RecordId) -> bool {
        self.related_diseases
            .as_ref()
            .is_some_and(|ids| ids.contains(&disease_id))
    }

    /// Case-insensitive: some `effective_against` entry contains `needle`.
    ///
    /// The needle is the substring; remedy targets are the haystacks.
    pub fn targets_mention(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.effective_against
            .iter()
            .any(|target| target.to_lowercase().contains(&needle))
    }
}

impl Reviewable for Remedy {
    const KIND: RecordKind = RecordKind::Remedy;

    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn review(&self) -> &Review {
        &self.review
    }

    fn review_mut(&mut self) -> &mut Review {
        &mut self.review
    }
}
