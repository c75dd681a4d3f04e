//! Application records shown in the applications list.
//!
//! A record is created locally whenever an apply decision is committed. The
//! status lifecycle beyond `Applied` is owned by the backend; the enum carries
//! every state the list knows how to display.

use super::job::JobPosting;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review stage of a submitted application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationStatus {
    Applied,
    Viewed,
    InReview,
    Interview,
    Rejected,
    Offered,
}

impl ApplicationStatus {
    /// Returns the label displayed on the status badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Viewed => "Viewed",
            Self::InReview => "In Review",
            Self::Interview => "Interview",
            Self::Rejected => "Rejected",
            Self::Offered => "Offered",
        }
    }

    /// Whether the application has reached a final outcome.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Rejected | Self::Offered)
    }
}

/// A submitted application as listed on the applications screen.
///
/// Job fields are copied out of the posting at commit time so the record
/// survives a later reload of the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub logo: String,
    pub is_verified: bool,
    pub match_score: u8,
    pub applied_at: DateTime<Utc>,
    pub status: ApplicationStatus,
}

impl ApplicationRecord {
    /// Creates an `Applied` record for `job`, timestamped now.
    #[must_use]
    pub fn applied(job: &JobPosting) -> Self {
        Self::applied_at(job, Utc::now())
    }

    /// Creates an `Applied` record for `job` with an explicit timestamp.
    #[must_use]
    pub fn applied_at(job: &JobPosting, applied_at: DateTime<Utc>) -> Self {
        Self {
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            company: job.company.clone(),
            logo: job.logo.clone(),
            is_verified: job.is_verified,
            match_score: job.match_score,
            applied_at,
            status: ApplicationStatus::Applied,
        }
    }

    /// Returns the applied date formatted for the list footer.
    #[must_use]
    pub fn applied_date(&self) -> String {
        self.applied_at.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn applied_record_copies_job_fields() {
        let mut job = JobPosting::new("3", "UX Designer", "Design Studio Pro", "Austin, TX");
        job.is_verified = true;
        job.match_score = 85;
        let at = Utc.with_ymd_and_hms(2025, 3, 9, 12, 0, 0).unwrap();

        let record = ApplicationRecord::applied_at(&job, at);

        assert_eq!(record.job_id, "3");
        assert_eq!(record.status, ApplicationStatus::Applied);
        assert_eq!(record.match_score, 85);
        assert_eq!(record.applied_date(), "Mar 9, 2025");
    }

    #[test]
    fn status_labels_and_serialization() {
        assert_eq!(ApplicationStatus::InReview.label(), "In Review");
        assert!(ApplicationStatus::Offered.is_final());
        assert!(!ApplicationStatus::Viewed.is_final());
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::InReview).unwrap(),
            "\"in-review\""
        );
    }
}
