//! Job queue state: the ordered deck of postings and the decision cursor.
//!
//! The queue holds the postings of one session in presentation order, a
//! zero-based cursor marking the next undecided job, and the set of applied
//! job identifiers. Decisions are committed through [`JobQueue::commit_apply`]
//! and [`JobQueue::commit_pass`], which only succeed for the job currently under
//! the cursor. That rule guarantees at most one decision per position.
//!
//! # Invariants
//!
//! - The cursor never decreases between two loads.
//! - `position() == len()` means exhausted; [`JobQueue::current`] then yields `None`.
//! - An identifier appears in the applied set at most once.
//!
//! # Example
//!
//! ```rust
//! use directapply::{JobPosting, JobQueue};
//!
//! let mut queue = JobQueue::new();
//! queue.load(vec![
//!     JobPosting::new("A", "Backend Engineer", "CloudTech", "Seattle, WA"),
//!     JobPosting::new("B", "UX Designer", "Design Studio Pro", "Austin, TX"),
//! ]);
//!
//! queue.commit_apply("A")?;
//! assert_eq!(queue.current().map(|j| j.id.as_str()), Some("B"));
//! assert!(queue.applied_ids().contains("A"));
//! # Ok::<(), directapply::CommitRejected>(())
//! ```

use crate::domain::{CommitRejected, JobPosting};
use std::collections::HashSet;

/// Ordered job postings with a decision cursor and applied set.
#[derive(Debug, Clone, Default)]
pub struct JobQueue {
    /// Postings in presentation order, fixed until the next load.
    jobs: Vec<JobPosting>,

    /// Index of the next undecided job.
    cursor: usize,

    /// Identifiers of jobs committed with an apply decision.
    applied: HashSet<String>,
}

impl JobQueue {
    /// Creates an empty, already exhausted queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the sequence wholesale, resets the cursor and clears the applied set.
    ///
    /// Postings whose identifier already appeared earlier in `postings` are
    /// dropped so identifiers stay unique within the session.
    pub fn load(&mut self, postings: Vec<JobPosting>) {
        let _span = tracing::debug_span!("queue_load", incoming = postings.len()).entered();

        let mut seen = HashSet::with_capacity(postings.len());
        let mut jobs = Vec::with_capacity(postings.len());
        for posting in postings {
            if seen.insert(posting.id.clone()) {
                jobs.push(posting);
            } else {
                tracing::warn!(job_id = %posting.id, "dropping duplicate job id");
            }
        }

        self.jobs = jobs;
        self.cursor = 0;
        self.applied.clear();

        tracing::debug!(loaded = self.jobs.len(), "job queue loaded");
    }

    /// Returns the posting under the cursor, or `None` once exhausted.
    #[must_use]
    pub fn current(&self) -> Option<&JobPosting> {
        self.jobs.get(self.cursor)
    }

    /// Records an apply decision for the current job and advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`CommitRejected`] without touching any state if `job_id` is not
    /// the current job or the queue is exhausted.
    pub fn commit_apply(&mut self, job_id: &str) -> Result<(), CommitRejected> {
        self.check_current(job_id)?;

        if !self.applied.insert(job_id.to_string()) {
            tracing::debug!(job_id = %job_id, "job already in applied set");
        }
        self.cursor += 1;

        tracing::debug!(job_id = %job_id, cursor = self.cursor, "apply committed");
        Ok(())
    }

    /// Records a pass decision for the current job and advances the cursor.
    ///
    /// # Errors
    ///
    /// Same rules as [`JobQueue::commit_apply`].
    pub fn commit_pass(&mut self, job_id: &str) -> Result<(), CommitRejected> {
        self.check_current(job_id)?;
        self.cursor += 1;

        tracing::debug!(job_id = %job_id, cursor = self.cursor, "pass committed");
        Ok(())
    }

    /// Returns the applied identifiers. Order carries no meaning.
    #[must_use]
    pub const fn applied_ids(&self) -> &HashSet<String> {
        &self.applied
    }

    /// Number of distinct applied jobs.
    #[must_use]
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }

    /// Returns up to `n` postings queued after the current one.
    #[must_use]
    pub fn upcoming(&self, n: usize) -> &[JobPosting] {
        let start = (self.cursor + 1).min(self.jobs.len());
        let end = start.saturating_add(n).min(self.jobs.len());
        &self.jobs[start..end]
    }

    /// Looks up a loaded posting by identifier.
    #[must_use]
    pub fn get(&self, job_id: &str) -> Option<&JobPosting> {
        self.jobs.iter().find(|job| job.id == job_id)
    }

    /// Zero-based cursor position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Number of loaded postings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether no postings are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Whether every loaded posting has been decided.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.jobs.len()
    }

    /// Number of postings not yet decided, including the current one.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.jobs.len().saturating_sub(self.cursor)
    }

    fn check_current(&self, job_id: &str) -> Result<(), CommitRejected> {
        match self.current() {
            Some(current) if current.id == job_id => Ok(()),
            Some(current) => {
                tracing::debug!(expected = %current.id, got = %job_id, "commit out of order");
                Err(CommitRejected::OutOfOrder {
                    expected: current.id.clone(),
                    got: job_id.to_string(),
                })
            }
            None => {
                tracing::debug!(got = %job_id, "commit on exhausted queue");
                Err(CommitRejected::Exhausted {
                    got: job_id.to_string(),
                })
            }
        }
    }
}
