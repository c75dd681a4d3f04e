//! Job posting domain model.
//!
//! A [`JobPosting`] is produced by a job source and never mutated after it has
//! been loaded into the queue. Field names serialize in camelCase so the JSON
//! shape returned by the hosted backend deserializes without adapters.

use serde::{Deserialize, Serialize};

/// Highest match score a posting can carry.
pub const MAX_MATCH_SCORE: u8 = 100;

/// Number of skills shown on the front of a card.
pub const CARD_SKILL_COUNT: usize = 3;

/// An immutable job posting shown as one card in the deck.
///
/// # Fields
///
/// - `id`: Unique identifier within one loaded sequence
/// - `title`: Role title, e.g. "Backend Engineer"
/// - `company`: Hiring organization name
/// - `location`: Free-form location text
/// - `salary`: Optional salary range text, e.g. "$110k - $140k"
/// - `is_verified`: Whether the organization has been verified
/// - `remote`: Whether the role allows remote work
/// - `description`: Free-text description revealed by the details panel
/// - `skills`: Ordered skill tags, most relevant first
/// - `match_score`: Profile match score between 0 and 100
/// - `logo`: Display glyph used in place of a logo image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub match_score: u8,
    #[serde(default)]
    pub logo: String,
}

impl JobPosting {
    /// Creates a posting with the required fields and empty optional details.
    ///
    /// # Examples
    ///
    /// ```
    /// use directapply::JobPosting;
    ///
    /// let job = JobPosting::new("42", "Data Scientist", "AI Innovations", "Boston, MA");
    /// assert_eq!(job.id, "42");
    /// assert!(job.salary.is_none());
    /// assert_eq!(job.match_score, 0);
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            company: company.into(),
            location: location.into(),
            salary: None,
            is_verified: false,
            remote: false,
            description: String::new(),
            skills: Vec::new(),
            match_score: 0,
            logo: String::new(),
        }
    }

    /// Returns the first `n` skill tags.
    #[must_use]
    pub fn top_skills(&self, n: usize) -> &[String] {
        &self.skills[..self.skills.len().min(n)]
    }

    /// Returns the verification badge label shown on the card header.
    #[must_use]
    pub const fn verification_label(&self) -> &'static str {
        if self.is_verified {
            "Verified"
        } else {
            "Unverified"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_skills_never_exceeds_available_tags() {
        let mut job = JobPosting::new("1", "Dev", "Acme", "Remote");
        job.skills = vec!["Rust".into(), "SQL".into()];
        assert_eq!(job.top_skills(CARD_SKILL_COUNT).len(), 2);

        job.skills.push("AWS".into());
        job.skills.push("Go".into());
        assert_eq!(job.top_skills(CARD_SKILL_COUNT), ["Rust", "SQL", "AWS"]);
    }

    #[test]
    fn deserializes_backend_field_names() {
        let json = r#"{
            "id": "7",
            "title": "DevOps Engineer",
            "company": "Infrastructure Pro",
            "location": "Denver, CO",
            "salary": "$115k - $145k",
            "isVerified": true,
            "remote": true,
            "description": "Manage cloud infrastructure.",
            "skills": ["Docker", "Kubernetes", "AWS"],
            "matchScore": 75,
            "logo": "⚙️"
        }"#;

        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert!(job.is_verified);
        assert_eq!(job.match_score, 75);
        assert_eq!(job.salary.as_deref(), Some("$115k - $145k"));
        assert_eq!(job.verification_label(), "Verified");
    }
}
