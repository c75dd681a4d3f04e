//! Domain layer for the swipe deck.
//!
//! Core records and error types, independent of gesture handling, hosts or
//! collaborators.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`job`]: Job posting model
//! - [`application`]: Application records and review status
//!
//! # Examples
//!
//! ```
//! use directapply::domain::{ApplicationRecord, JobPosting};
//!
//! let job = JobPosting::new("1", "Senior Frontend Developer", "TechCorp Inc.", "San Francisco, CA");
//! let record = ApplicationRecord::applied(&job);
//! assert_eq!(record.status.label(), "Applied");
//! ```

pub mod application;
pub mod error;
pub mod job;

pub use application::{ApplicationRecord, ApplicationStatus};
pub use error::{CommitRejected, DeckError, Result};
pub use job::JobPosting;
