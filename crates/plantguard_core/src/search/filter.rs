//! Listing filters for diseases, pests and remedies.
//!
//! # Responsibility
//! - Apply the browse-page predicates over whole collections.
//!
//! # Invariants
//! - Unset criteria match everything.
//! - Text matching is a case-insensitive substring test on the trimmed query.
//! - Results keep collection order; there is no index or ranking.

use crate::model::disease::Disease;
use crate::model::pest::Pest;
use crate::model::record::RecordStatus;
use crate::model::remedy::{Effectiveness, Remedy, RemedyCategory};
use crate::model::severity::Severity;
use crate::repo::record_store::RecordRepository;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiseaseFilter {
    /// Matched against name and description.
    pub text: Option<String>,
    pub severity: Option<Severity>,
    pub status: Option<RecordStatus>,
}

impl DiseaseFilter {
    pub fn matches(&self, disease: &Disease) -> bool {
        text_matches(
            self.text.as_deref(),
            [disease.name.as_str(), disease.description.as_str()],
        ) && self.severity.map_or(true, |severity| disease.severity == severity)
            && self.status.map_or(true, |status| disease.review.status == status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PestFilter {
    /// Matched against name, scientific name and description.
    pub text: Option<String>,
    pub severity: Option<Severity>,
    pub status: Option<RecordStatus>,
    /// Exact entry of `seasonality`, e.g. `Summer`.
    pub season: Option<String>,
}

impl PestFilter {
    pub fn matches(&self, pest: &Pest) -> bool {
        text_matches(
            self.text.as_deref(),
            [
                pest.name.as_str(),
                pest.scientific_name.as_str(),
                pest.description.as_str(),
            ],
        ) && self.severity.map_or(true, |severity| pest.severity == severity)
            && self.status.map_or(true, |status| pest.review.status == status)
            && self
                .season
                .as_deref()
                .map_or(true, |season| pest.seasonality.iter().any(|value| value == season))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemedyFilter {
    /// Matched against name, description and every `effective_against` entry.
    pub text: Option<String>,
    pub category: Option<RemedyCategory>,
    pub effectiveness: Option<Effectiveness>,
    pub status: Option<RecordStatus>,
}

impl RemedyFilter {
    pub fn matches(&self, remedy: &Remedy) -> bool {
        let fields = [remedy.name.as_str(), remedy.description.as_str()]
            .into_iter()
            .chain(remedy.effective_against.iter().map(String::as_str));

        text_matches(self.text.as_deref(), fields)
            && self.category.map_or(true, |category| remedy.category == category)
            && self
                .effectiveness
                .map_or(true, |effectiveness| remedy.effectiveness == effectiveness)
            && self.status.map_or(true, |status| remedy.review.status == status)
    }
}

pub fn filter_diseases<'a, R>(repo: &'a R, filter: &DiseaseFilter) -> Vec<&'a Disease>
where
    R: RecordRepository + ?Sized,
{
    repo.diseases()
        .iter()
        .filter(|disease| filter.matches(disease))
        .collect()
}

pub fn filter_pests<'a, R>(repo: &'a R, filter: &PestFilter) -> Vec<&'a Pest>
where
    R: RecordRepository + ?Sized,
{
    repo.pests()
        .iter()
        .filter(|pest| filter.matches(pest))
        .collect()
}

pub fn filter_remedies<'a, R>(repo: &'a R, filter: &RemedyFilter) -> Vec<&'a Remedy>
where
    R: RecordRepository + ?Sized,
{
    repo.remedies()
        .iter()
        .filter(|remedy| filter.matches(remedy))
        .collect()
}

fn text_matches<'a>(query: Option<&str>, fields: impl IntoIterator<Item = &'a str>) -> bool {
    let Some(query) = normalize_query(query) else {
        return true;
    };
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&query))
}

fn normalize_query(query: Option<&str>) -> Option<String> {
    let trimmed = query?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}
