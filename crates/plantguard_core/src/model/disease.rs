//! Disease report model.
//!
//! # Invariants
//! - `caused_by == Pest` widens related-item discovery to every pest.
//! - `related_pests` / `related_remedies` hold ids from the pest and remedy
//!   collections; dangling ids are tolerated and simply never resolve.

use crate::model::record::{chain_relations, RecordId, RecordKind, Review, Reviewable};
use crate::model::severity::Severity;
use crate::model::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Agent responsible for a disease.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CausedBy {
    Pest,
    Weather,
    #[default]
    Fungal,
    Bacterial,
    Viral,
    Nutrient,
}

impl CausedBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pest => "pest",
            Self::Weather => "weather",
            Self::Fungal => "fungal",
            Self::Bacterial => "bacterial",
            Self::Viral => "viral",
            Self::Nutrient => "nutrient",
        }
    }
}

impl Display for CausedBy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a disease was observed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub region: String,
    pub country: String,
}

/// Weather conditions at the time of observation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Millimetres.
    pub rainfall: f64,
    /// Kilometres per hour.
    pub wind_speed: f64,
    pub conditions: String,
    pub date: DateTime<Utc>,
}

/// Stored disease report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub symptoms: Vec<String>,
    pub images: Vec<String>,
    pub location: Location,
    pub weather: WeatherData,
    pub caused_by: CausedBy,
    pub severity: Severity,
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
    #[serde(flatten)]
    pub review: Review,
    pub related_pests: Option<Vec<RecordId>>,
    pub related_remedies: Option<Vec<RecordId>>,
}

/// Disease payload as submitted by a reporter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiseaseDraft {
    pub name: String,
    pub description: String,
    pub symptoms: Vec<String>,
    pub images: Vec<String>,
    pub location: Location,
    pub weather: WeatherData,
    pub caused_by: CausedBy,
    pub severity: Severity,
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
    pub reported_by: UserId,
    pub related_pests: Option<Vec<RecordId>>,
    pub related_remedies: Option<Vec<RecordId>>,
}

impl DiseaseDraft {
    /// Draft with form defaults (`fungal`, `medium`) and empty lists.
    pub fn new(name: impl Into<String>, reported_by: impl Into<UserId>) -> Self {
        Self {
            name: name.into(),
            reported_by: reported_by.into(),
            ..Self::default()
        }
    }
}

impl Disease {
    pub(crate) fn from_draft(id: RecordId, reported_at: DateTime<Utc>, draft: DiseaseDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            symptoms: draft.symptoms,
            images: draft.images,
            location: draft.location,
            weather: draft.weather,
            caused_by: draft.caused_by,
            severity: draft.severity,
            treatment: draft.treatment,
            prevention: draft.prevention,
            review: Review::pending(draft.reported_by, reported_at),
            related_pests: draft.related_pests,
            related_remedies: draft.related_remedies,
        }
    }

    /// `related_pests` followed by `related_remedies`.
    pub fn explicit_relations(&self) -> Vec<RecordId> {
        chain_relations(&[&self.related_pests, &self.related_remedies])
    }
}

impl Reviewable for Disease {
    const KIND: RecordKind = RecordKind::Disease;

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
