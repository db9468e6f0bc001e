//! Report submission and approval use-case service.
//!
//! # Responsibility
//! - Stamp the acting user into drafts and approvals.
//! - Gate submission and review by role capability before touching the
//!   repository.
//!
//! # Invariants
//! - A forbidden call never reaches the repository.
//! - Store errors are passed through unchanged inside `ReviewError::Store`.

use crate::access::capability::Capability;
use crate::model::record::{RecordDraft, RecordId, RecordKind, RecordRef};
use crate::model::user::{Role, User};
use crate::repo::record_store::{RecordRepository, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ReviewResult<T> = Result<T, ReviewError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// Acting role lacks the capability required by the operation.
    Forbidden { role: Role, capability: Capability },
    /// Repository-level failure.
    Store(StoreError),
}

impl Display for ReviewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forbidden { role, capability } => {
                write!(f, "role `{role}` lacks capability `{capability}`")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ReviewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Forbidden { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ReviewError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case service wrapper for report submission and review.
pub struct ReviewService<R: RecordRepository> {
    repo: R,
}

impl<R: RecordRepository> ReviewService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn into_inner(self) -> R {
        self.repo
    }

    /// Creates a report on behalf of `actor`.
    ///
    /// # Contract
    /// - `reported_by` is overwritten with `actor.id`.
    /// - Requires `Capability::SubmitReports`.
    pub fn submit(&mut self, actor: &User, draft: impl Into<RecordDraft>) -> ReviewResult<RecordId> {
        ensure(actor, Capability::SubmitReports)?;
        let mut draft = draft.into();
        draft.set_reported_by(actor.id.as_str());
        info!(
            "event=report_submit module=service status=ok kind={} reported_by={}",
            draft.kind(),
            draft.reported_by()
        );
        Ok(self.repo.create(draft))
    }

    /// Approves a report as `actor`. Requires `Capability::ReviewReports`.
    pub fn approve(&mut self, actor: &User, kind: RecordKind, id: RecordId) -> ReviewResult<()> {
        ensure(actor, Capability::ReviewReports)?;
        self.repo.approve(kind, id, &actor.id)?;
        Ok(())
    }

    /// Rejects a report as `actor`. Requires `Capability::ReviewReports`.
    pub fn reject(&mut self, actor: &User, kind: RecordKind, id: RecordId) -> ReviewResult<()> {
        ensure(actor, Capability::ReviewReports)?;
        self.repo.reject(kind, id)?;
        Ok(())
    }

    /// Pending reports across kinds, oldest report first.
    pub fn pending_queue(&self) -> Vec<RecordRef<'_>> {
        let mut pending: Vec<RecordRef<'_>> = self
            .repo
            .records()
            .into_iter()
            .filter(|record| !record.status().is_terminal())
            .collect();
        pending.sort_by_key(|record| record.review().reported_at);
        pending
    }
}

fn ensure(actor: &User, capability: Capability) -> ReviewResult<()> {
    if actor.role.has(capability) {
        return Ok(());
    }

    warn!(
        "event=review_denied module=service status=forbidden role={} capability={}",
        actor.role, capability
    );
    Err(ReviewError::Forbidden {
        role: actor.role,
        capability,
    })
}
