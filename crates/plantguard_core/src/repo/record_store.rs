//! Record repository contract and in-memory store.
//!
//! # Responsibility
//! - Own the disease, pest and remedy collections.
//! - Provide the only mutating operations: create, approve, reject.
//!
//! # Invariants
//! - Created records always start `pending` with a fresh id and `reported_at`.
//! - Approve/reject mutate at most one record, matched by exact id.
//! - A miss leaves every collection untouched and returns `NotFound`.
//! - Collections keep append order; nothing is removed.

use crate::model::disease::{Disease, DiseaseDraft};
use crate::model::pest::{Pest, PestDraft};
use crate::model::record::{RecordDraft, RecordId, RecordKind, RecordRef, Review, Reviewable};
use crate::model::remedy::{Remedy, RemedyDraft};
use crate::model::user::UserId;
use crate::repo::clock::{Clock, SystemClock};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for review operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with `id` exists in the `kind` collection.
    NotFound { kind: RecordKind, id: RecordId },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Repository interface for report records.
///
/// Read access hands out slices in append order so the relationship resolver
/// can scan a consistent snapshot.
pub trait RecordRepository {
    fn create(&mut self, draft: RecordDraft) -> RecordId;
    fn approve(&mut self, kind: RecordKind, id: RecordId, approved_by: &str) -> StoreResult<()>;
    fn reject(&mut self, kind: RecordKind, id: RecordId) -> StoreResult<()>;

    fn diseases(&self) -> &[Disease];
    fn pests(&self) -> &[Pest];
    fn remedies(&self) -> &[Remedy];

    fn disease(&self, id: RecordId) -> Option<&Disease> {
        self.diseases().iter().find(|record| record.id == id)
    }

    fn pest(&self, id: RecordId) -> Option<&Pest> {
        self.pests().iter().find(|record| record.id == id)
    }

    fn remedy(&self, id: RecordId) -> Option<&Remedy> {
        self.remedies().iter().find(|record| record.id == id)
    }

    /// Looks `id` up in the `kind` collection only.
    fn get(&self, kind: RecordKind, id: RecordId) -> Option<RecordRef<'_>> {
        match kind {
            RecordKind::Disease => self.disease(id).map(RecordRef::Disease),
            RecordKind::Pest => self.pest(id).map(RecordRef::Pest),
            RecordKind::Remedy => self.remedy(id).map(RecordRef::Remedy),
        }
    }

    /// Every record across kinds: diseases, then pests, then remedies.
    fn records(&self) -> Vec<RecordRef<'_>> {
        let diseases = self.diseases().iter().map(RecordRef::Disease);
        let pests = self.pests().iter().map(RecordRef::Pest);
        let remedies = self.remedies().iter().map(RecordRef::Remedy);
        diseases.chain(pests).chain(remedies).collect()
    }

    fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Disease => self.diseases().len(),
            RecordKind::Pest => self.pests().len(),
            RecordKind::Remedy => self.remedies().len(),
        }
    }
}

impl<R: RecordRepository + ?Sized> RecordRepository for &mut R {
    fn create(&mut self, draft: RecordDraft) -> RecordId {
        (**self).create(draft)
    }

    fn approve(&mut self, kind: RecordKind, id: RecordId, approved_by: &str) -> StoreResult<()> {
        (**self).approve(kind, id, approved_by)
    }

    fn reject(&mut self, kind: RecordKind, id: RecordId) -> StoreResult<()> {
        (**self).reject(kind, id)
    }

    fn diseases(&self) -> &[Disease] {
        (**self).diseases()
    }

    fn pests(&self) -> &[Pest] {
        (**self).pests()
    }

    fn remedies(&self) -> &[Remedy] {
        (**self).remedies()
    }
}

/// In-memory record store.
///
/// Mutations take `&mut self`, so one owner serializes all writes. Share
/// across threads by wrapping in `Arc<RwLock<RecordStore>>`.
#[derive(Debug, Clone, Default)]
pub struct RecordStore<C: Clock = SystemClock> {
    diseases: Vec<Disease>,
    pests: Vec<Pest>,
    remedies: Vec<Remedy>,
    clock: C,
}

impl RecordStore {
    /// Creates an empty store stamped by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> RecordStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            diseases: Vec::new(),
            pests: Vec::new(),
            remedies: Vec::new(),
            clock,
        }
    }

    /// Keeps all records and swaps the time source for later writes.
    pub fn into_clock<D: Clock>(self, clock: D) -> RecordStore<D> {
        RecordStore {
            diseases: self.diseases,
            pests: self.pests,
            remedies: self.remedies,
            clock,
        }
    }

    pub fn create_disease(&mut self, draft: DiseaseDraft) -> RecordId {
        let id = fresh_id(&self.diseases);
        let record = Disease::from_draft(id, self.clock.now(), draft);
        log_created(&record);
        self.diseases.push(record);
        id
    }

    pub fn create_pest(&mut self, draft: PestDraft) -> RecordId {
        let id = fresh_id(&self.pests);
        let record = Pest::from_draft(id, self.clock.now(), draft);
        log_created(&record);
        self.pests.push(record);
        id
    }

    pub fn create_remedy(&mut self, draft: RemedyDraft) -> RecordId {
        let id = fresh_id(&self.remedies);
        let record = Remedy::from_draft(id, self.clock.now(), draft);
        log_created(&record);
        self.remedies.push(record);
        id
    }

    /// Total number of records across kinds.
    pub fn len(&self) -> usize {
        self.diseases.len() + self.pests.len() + self.remedies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn review_mut(&mut self, kind: RecordKind, id: RecordId) -> StoreResult<&mut Review> {
        match kind {
            RecordKind::Disease => find_review(&mut self.diseases, id),
            RecordKind::Pest => find_review(&mut self.pests, id),
            RecordKind::Remedy => find_review(&mut self.remedies, id),
        }
    }
}

impl<C: Clock> RecordRepository for RecordStore<C> {
    fn create(&mut self, draft: RecordDraft) -> RecordId {
        match draft {
            RecordDraft::Disease(draft) => self.create_disease(draft),
            RecordDraft::Pest(draft) => self.create_pest(draft),
            RecordDraft::Remedy(draft) => self.create_remedy(draft),
        }
    }

    fn approve(&mut self, kind: RecordKind, id: RecordId, approved_by: &str) -> StoreResult<()> {
        let now = self.clock.now();
        let review = self.review_mut(kind, id)?;
        review.approve(UserId::from(approved_by), now);
        info!("event=record_approve module=repo status=ok kind={kind} id={id}");
        Ok(())
    }

    fn reject(&mut self, kind: RecordKind, id: RecordId) -> StoreResult<()> {
        let review = self.review_mut(kind, id)?;
        review.reject();
        info!("event=record_reject module=repo status=ok kind={kind} id={id}");
        Ok(())
    }

    fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    fn pests(&self) -> &[Pest] {
        &self.pests
    }

    fn remedies(&self) -> &[Remedy] {
        &self.remedies
    }
}

/// Review block of the record with `id`, or `NotFound` for `T`'s kind.
fn find_review<T: Reviewable>(items: &mut [T], id: RecordId) -> StoreResult<&mut Review> {
    let Some(item) = items.iter_mut().find(|item| item.id() == id) else {
        warn!(
            "event=record_review module=repo status=not_found kind={} id={id}",
            T::KIND
        );
        return Err(StoreError::NotFound { kind: T::KIND, id });
    };

    if item.status().is_terminal() {
        debug!(
            "event=record_review module=repo status=overwrite kind={} id={id} previous={}",
            T::KIND,
            item.status()
        );
    }
    Ok(item.review_mut())
}

fn fresh_id<T: Reviewable>(existing: &[T]) -> RecordId {
    loop {
        let candidate = Uuid::new_v4();
        if !existing.iter().any(|item| item.id() == candidate) {
            return candidate;
        }
    }
}

fn log_created<T: Reviewable>(record: &T) {
    debug!(
        "event=record_create module=repo status=ok kind={} id={} reported_by={}",
        T::KIND,
        record.id(),
        record.review().reported_by
    );
}
