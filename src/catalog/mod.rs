//! Job sources feeding the deck.
//!
//! This module defines the [`JobSource`] trait that abstracts over where job
//! postings come from. The deck only ever sees a finished `Vec<JobPosting>`;
//! how it was fetched is the source's business.
//!
//! # Implementations
//!
//! - [`MockCatalog`]: Built-in ten-posting catalog compiled into the binary
//! - [`JsonFileCatalog`]: JSON array of postings read from disk
//!
//! # Example
//!
//! ```rust
//! use directapply::catalog::{fetch_or_empty, MockCatalog};
//!
//! let jobs = fetch_or_empty(&MockCatalog);
//! assert_eq!(jobs.len(), 10);
//! assert_eq!(jobs[0].title, "Senior Frontend Developer");
//! ```

use crate::domain::error::{DeckError, Result};
use crate::domain::job::MAX_MATCH_SCORE;
use crate::domain::JobPosting;
use serde::Deserialize;
use std::path::PathBuf;

/// Built-in catalog in TOML form.
const MOCK_CATALOG: &str = include_str!("../../catalog/jobs.toml");

/// Abstraction over job posting providers.
///
/// Implementations return postings in presentation order. Sanitizing is done
/// by [`fetch_or_empty`], not by each source.
pub trait JobSource: Send {
    /// Fetches the next batch of postings.
    ///
    /// # Errors
    ///
    /// Returns an error if the postings cannot be read or parsed.
    fn fetch(&self) -> Result<Vec<JobPosting>>;
}

/// Top-level shape of the embedded TOML catalog.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    jobs: Vec<JobPosting>,
}

/// The built-in catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCatalog;

impl JobSource for MockCatalog {
    fn fetch(&self) -> Result<Vec<JobPosting>> {
        let catalog: CatalogFile =
            toml::from_str(MOCK_CATALOG).map_err(|e| DeckError::Catalog(e.to_string()))?;
        tracing::debug!(count = catalog.jobs.len(), "built-in catalog parsed");
        Ok(catalog.jobs)
    }
}

/// Postings read from a JSON file holding an array of postings.
///
/// # File Format
///
/// ```json
/// [
///   {
///     "id": "1",
///     "title": "Senior Frontend Developer",
///     "company": "TechCorp Inc.",
///     "location": "San Francisco, CA",
///     "salary": "$120k - $150k",
///     "isVerified": true,
///     "remote": true,
///     "skills": ["React", "TypeScript"],
///     "matchScore": 92,
///     "logo": "🚀"
///   }
/// ]
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl JobSource for JsonFileCatalog {
    fn fetch(&self) -> Result<Vec<JobPosting>> {
        tracing::debug!(path = ?self.path, "reading catalog file");
        let contents = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&contents)
            .map_err(|e| DeckError::Catalog(format!("{}: {e}", self.path.display())))
    }
}

/// Fetches from `source`, degrading any failure to an empty batch.
///
/// The result is sanitized: postings with a blank identifier are dropped and
/// match scores are clamped to 100.
pub fn fetch_or_empty(source: &dyn JobSource) -> Vec<JobPosting> {
    let _span = tracing::debug_span!("fetch_jobs").entered();

    match source.fetch() {
        Ok(postings) => {
            let postings = sanitize(postings);
            tracing::debug!(count = postings.len(), "jobs fetched");
            postings
        }
        Err(e) => {
            tracing::warn!(error = %e, "job fetch failed, showing empty deck");
            Vec::new()
        }
    }
}

fn sanitize(postings: Vec<JobPosting>) -> Vec<JobPosting> {
    postings
        .into_iter()
        .filter_map(|mut job| {
            if job.id.trim().is_empty() {
                tracing::warn!(title = %job.title, "dropping posting without id");
                return None;
            }
            job.match_score = job.match_score.min(MAX_MATCH_SCORE);
            Some(job)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl JobSource for Failing {
        fn fetch(&self) -> Result<Vec<JobPosting>> {
            Err(DeckError::Catalog("backend unavailable".to_string()))
        }
    }

    struct Fixed(Vec<JobPosting>);

    impl JobSource for Fixed {
        fn fetch(&self) -> Result<Vec<JobPosting>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn mock_catalog_has_ten_unique_jobs() {
        let jobs = MockCatalog.fetch().unwrap();
        assert_eq!(jobs.len(), 10);

        let ids: Vec<_> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);

        let ml = &jobs[9];
        assert_eq!(ml.company, "Neural Networks Inc");
        assert_eq!(ml.match_score, 94);
        assert!(ml.is_verified && ml.remote);
        assert_eq!(ml.skills, ["TensorFlow", "Python", "MLOps"]);
    }

    #[test]
    fn failure_degrades_to_empty() {
        assert!(fetch_or_empty(&Failing).is_empty());
    }

    #[test]
    fn blank_ids_dropped_and_scores_clamped() {
        let mut high = JobPosting::new("A", "Role", "Acme", "Remote");
        high.match_score = 140;
        let blank = JobPosting::new("  ", "Ghost", "Acme", "Remote");

        let jobs = fetch_or_empty(&Fixed(vec![blank, high]));
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].match_score, 100);
    }
}
