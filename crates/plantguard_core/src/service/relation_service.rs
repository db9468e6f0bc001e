//! Related-item discovery across diseases, pests and remedies.
//!
//! # Responsibility
//! - Resolve a record's explicit foreign ids against all three collections.
//! - Expand disease sources with content-based pest and remedy matches.
//!
//! # Invariants
//! - Output never contains the same id twice.
//! - Order: explicit items in list order, then heuristic pests, then
//!   heuristic remedies, each in collection order.
//! - Only disease sources get heuristic expansion. Pest and remedy sources
//!   resolve their explicit ids and nothing else.
//! - Resolution never fails; "nothing related" is an empty vector.

use crate::model::disease::{CausedBy, Disease};
use crate::model::pest::Pest;
use crate::model::record::{RecordId, RecordKind};
use crate::model::remedy::{Effectiveness, Remedy, RemedyCategory};
use crate::model::severity::Severity;
use crate::repo::record_store::RecordRepository;
use log::debug;
use serde::Serialize;
use std::collections::HashSet;

/// Display summary of one related record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedItem {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effectiveness: Option<Effectiveness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<RemedyCategory>,
}

impl From<&Disease> for RelatedItem {
    fn from(value: &Disease) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            kind: RecordKind::Disease,
            severity: Some(value.severity),
            effectiveness: None,
            category: None,
        }
    }
}

impl From<&Pest> for RelatedItem {
    fn from(value: &Pest) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            kind: RecordKind::Pest,
            severity: Some(value.severity),
            effectiveness: None,
            category: None,
        }
    }
}

impl From<&Remedy> for RelatedItem {
    fn from(value: &Remedy) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            kind: RecordKind::Remedy,
            severity: None,
            effectiveness: Some(value.effectiveness),
            category: Some(value.category),
        }
    }
}

/// Input of one resolution: the source record and its explicit foreign ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationSource {
    pub kind: RecordKind,
    pub id: RecordId,
    pub related_ids: Vec<RecordId>,
}

/// Resolves related items for an explicitly described source.
///
/// The source record itself need not exist; without it the heuristic pass
/// is skipped and only explicit ids are resolved.
pub fn resolve_related<R>(repo: &R, source: &RelationSource) -> Vec<RelatedItem>
where
    R: RecordRepository + ?Sized,
{
    let mut related = RelatedSet::default();

    for &id in &source.related_ids {
        if let Some(item) = lookup_any(repo, id) {
            related.push(item);
        }
    }
    let explicit_count = related.items.len();

    if source.kind == RecordKind::Disease {
        if let Some(disease) = repo.disease(source.id) {
            expand_disease(repo, disease, &mut related);
        }
    }

    debug!(
        "event=related_resolve module=service status=ok kind={} explicit={} heuristic={}",
        source.kind,
        explicit_count,
        related.items.len() - explicit_count
    );
    related.items
}

/// Resolves related items for a stored record using its own relation lists.
///
/// Unknown records yield an empty vector.
pub fn related_items<R>(repo: &R, kind: RecordKind, id: RecordId) -> Vec<RelatedItem>
where
    R: RecordRepository + ?Sized,
{
    let Some(record) = repo.get(kind, id) else {
        return Vec::new();
    };

    let source = RelationSource {
        kind,
        id,
        related_ids: record.explicit_relations(),
    };
    resolve_related(repo, &source)
}

/// Tries diseases, then pests, then remedies; first hit wins.
fn lookup_any<R>(repo: &R, id: RecordId) -> Option<RelatedItem>
where
    R: RecordRepository + ?Sized,
{
    if let Some(disease) = repo.disease(id) {
        return Some(disease.into());
    }
    if let Some(pest) = repo.pest(id) {
        return Some(pest.into());
    }
    repo.remedy(id).map(RelatedItem::from)
}

fn expand_disease<R>(repo: &R, disease: &Disease, related: &mut RelatedSet)
where
    R: RecordRepository + ?Sized,
{
    let pest_borne = disease.caused_by == CausedBy::Pest;
    for pest in repo.pests() {
        if pest_borne || pest.references_disease(disease.id) {
            related.push(pest.into());
        }
    }

    for remedy in repo.remedies() {
        if remedy.references_disease(disease.id) || remedy.targets_mention(&disease.name) {
            related.push(remedy.into());
        }
    }
}

#[derive(Default)]
struct RelatedSet {
    seen: HashSet<RecordId>,
    items: Vec<RelatedItem>,
}

impl RelatedSet {
    fn push(&mut self, item: RelatedItem) {
        if self.seen.insert(item.id) {
            self.items.push(item);
        }
    }
}
