//! Pest report model.

use crate::model::record::{chain_relations, RecordId, RecordKind, Review, Reviewable};
use crate::model::severity::Severity;
use crate::model::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who a pest is harmful to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Harm {
    Plants,
    Humans,
    Animals,
}

/// Stored pest report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pest {
    pub id: RecordId,
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub images: Vec<String>,
    pub affected_plants: Vec<String>,
    pub symptoms: Vec<String>,
    pub lifecycle: String,
    pub prevention: Vec<String>,
    pub treatment: Vec<String>,
    pub natural_remedies: Vec<String>,
    pub harmful_to: Vec<Harm>,
    pub severity: Severity,
    /// Free-text season names, e.g. `Spring`, `Early Fall`.
    pub seasonality: Vec<String>,
    #[serde(flatten)]
    pub review: Review,
    pub related_diseases: Option<Vec<RecordId>>,
    pub related_remedies: Option<Vec<RecordId>>,
}

/// Pest payload as submitted by a reporter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PestDraft {
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub images: Vec<String>,
    pub affected_plants: Vec<String>,
    pub symptoms: Vec<String>,
    pub lifecycle: String,
    pub prevention: Vec<String>,
    pub treatment: Vec<String>,
    pub natural_remedies: Vec<String>,
    pub harmful_to: Vec<Harm>,
    pub severity: Severity,
    pub seasonality: Vec<String>,
    pub reported_by: UserId,
    pub related_diseases: Option<Vec<RecordId>>,
    pub related_remedies: Option<Vec<RecordId>>,
}

impl PestDraft {
    pub fn new(name: impl Into<String>, reported_by: impl Into<UserId>) -> Self {
        Self {
            name: name.into(),
            reported_by: reported_by.into(),
            ..Self::default()
        }
    }
}

impl Pest {
    pub(crate) fn from_draft(id: RecordId, reported_at: DateTime<Utc>, draft: PestDraft) -> Self {
        Self {
            id,
            name: draft.name,
            scientific_name: draft.scientific_name,
            description: draft.description,
            images: draft.images,
            affected_plants: draft.affected_plants,
            symptoms: draft.symptoms,
            lifecycle: draft.lifecycle,
            prevention: draft.prevention,
            treatment: draft.treatment,
            natural_remedies: draft.natural_remedies,
            harmful_to: draft.harmful_to,
            severity: draft.severity,
            seasonality: draft.seasonality,
            review: Review::pending(draft.reported_by, reported_at),
            related_diseases: draft.related_diseases,
            related_remedies: draft.related_remedies,
        }
    }

    /// `related_diseases` followed by `related_remedies`.
    pub fn explicit_relations(&self) -> Vec<RecordId> {
        chain_relations(&[&self.related_diseases, &self.related_remedies])
    }

    /// Whether this pest names `disease_id` in its own back-references.
    pub fn references_disease(&self, disease_id: RecordId) -> bool {
        self.related_diseases
            .as_ref()
            .is_some_and(|ids| ids.contains(&disease_id))
    }
}

impl Reviewable for Pest {
    const KIND: RecordKind = RecordKind::Pest;

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
