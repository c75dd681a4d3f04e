//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for one swipe
//! session: the job queue, the gesture engine, the details panel flag and the
//! list of applications submitted so far.
//!
//! # Architecture
//!
//! `AppState` separates core data (queue, engine, application records) from
//! derived display data. View models are computed on demand from state
//! snapshots and never stored.
//!
//! # Example
//!
//! ```rust
//! use directapply::app::AppState;
//! use directapply::JobPosting;
//!
//! let mut state = AppState::default();
//! state.load_jobs(vec![
//!     JobPosting::new("1", "Senior Frontend Developer", "TechCorp Inc.", "San Francisco, CA"),
//!     JobPosting::new("2", "Product Manager", "StartupXYZ", "New York, NY"),
//! ]);
//! let vm = state.compute_viewmodel();
//! assert_eq!(vm.header.subtitle, "1 of 2 jobs");
//! ```

use crate::domain::job::CARD_SKILL_COUNT;
use crate::domain::{ApplicationRecord, JobPosting};
use crate::gesture::{GestureConfig, SwipeEngine};
use crate::queue::JobQueue;
use crate::ui::viewmodel::{
    ApplicationRow, ApplicationsViewModel, BackgroundCard, CardTransform, CardView,
    DeckViewModel, EmptyState, HeaderInfo, ProfileStats,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Number of cards drawn behind the top card by default.
pub const DEFAULT_STACK_DEPTH: usize = 2;

const APP_TITLE: &str = "DirectApply";

/// Central application state container.
///
/// Mutated by the event handler in response to host events. The queue and the
/// engine guard their own invariants; this type only adds session bookkeeping.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Ordered deck of postings and the decision cursor.
    pub queue: JobQueue,

    /// Gesture state machine for the top card.
    pub engine: SwipeEngine,

    /// Applications in submission order.
    ///
    /// Survives reloads so the applications screen keeps its history.
    pub applications: Vec<ApplicationRecord>,

    /// Jobs passed since the last load.
    pub passed: usize,

    /// Whether the description panel of the top card is expanded.
    pub show_details: bool,

    /// Number of background cards to draw.
    pub stack_depth: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GestureConfig::default(), DEFAULT_STACK_DEPTH)
    }
}

impl AppState {
    /// Creates an empty session with the given gesture tuning.
    #[must_use]
    pub fn new(gesture: GestureConfig, stack_depth: usize) -> Self {
        Self {
            queue: JobQueue::new(),
            engine: SwipeEngine::new(gesture),
            applications: Vec::new(),
            passed: 0,
            show_details: false,
            stack_depth,
        }
    }

    /// Loads a fresh sequence and resets per-deck state.
    pub fn load_jobs(&mut self, postings: Vec<JobPosting>) {
        self.queue.load(postings);
        self.engine.queue_reloaded(&self.queue);
        self.passed = 0;
        self.show_details = false;
    }

    /// Adds an application record for `job_id` unless one already exists.
    ///
    /// The job must be present in the current sequence; unknown identifiers are
    /// ignored.
    pub fn record_application(&mut self, job_id: &str) {
        if self.applications.iter().any(|r| r.job_id == job_id) {
            return;
        }
        match self.queue.get(job_id) {
            Some(job) => self.applications.push(ApplicationRecord::applied(job)),
            None => tracing::warn!(job_id, "applied job missing from queue"),
        }
    }

    /// Computes the deck view model for the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> DeckViewModel {
        let card = self.queue.current().map(|job| self.compute_card(job));
        let background = self
            .queue
            .upcoming(self.stack_depth)
            .iter()
            .enumerate()
            .map(|(i, job)| Self::compute_background_card(job, i))
            .collect();

        let empty_state = self.queue.is_exhausted().then(|| EmptyState {
            message: "No More Jobs!".to_string(),
            subtitle: "You've seen every job in this batch. Refresh for more.".to_string(),
            action_label: "Refresh".to_string(),
        });

        DeckViewModel {
            header: self.compute_header(),
            card,
            background,
            empty_state,
            applied_count: self.applications.len(),
            batch_applied_count: self.queue.applied_count(),
            interactive: !self.queue.is_exhausted() && !self.engine.phase().is_resolving(),
        }
    }

    /// Computes the applications list, newest first, filtered by `query`.
    ///
    /// Every whitespace-separated token of the query must fuzzy-match the
    /// title or the company. A blank query matches everything.
    #[must_use]
    pub fn compute_applications(&self, query: Option<&str>) -> ApplicationsViewModel {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let _span = tracing::debug_span!(
            "compute_applications",
            total = self.applications.len(),
            query = query.unwrap_or_default()
        )
        .entered();

        let tokens: Vec<String> = query
            .map(|q| q.split_whitespace().map(str::to_lowercase).collect())
            .unwrap_or_default();
        let matcher = SkimMatcherV2::default();

        let rows: Vec<ApplicationRow> = self
            .applications
            .iter()
            .rev()
            .filter(|record| {
                let haystack =
                    format!("{} {}", record.job_title, record.company).to_lowercase();
                tokens
                    .iter()
                    .all(|token| matcher.fuzzy_match(&haystack, token).is_some())
            })
            .map(|record| ApplicationRow {
                job_id: record.job_id.clone(),
                title: record.job_title.clone(),
                company: record.company.clone(),
                logo: record.logo.clone(),
                is_verified: record.is_verified,
                match_label: format!("{}% Match", record.match_score),
                status_label: record.status.label(),
                applied_date: record.applied_date(),
                highlight_ranges: query.map_or_else(Vec::new, |q| {
                    compute_highlight_ranges(&record.job_title, q, &matcher)
                }),
            })
            .collect();

        tracing::debug!(matched = rows.len(), "applications filtered");

        ApplicationsViewModel {
            rows,
            total: self.applications.len(),
            query: query.map(str::to_string),
        }
    }

    /// Computes the profile statistics.
    #[must_use]
    pub fn profile_stats(&self) -> ProfileStats {
        let average_match = if self.applications.is_empty() {
            None
        } else {
            let sum: usize = self
                .applications
                .iter()
                .map(|r| usize::from(r.match_score))
                .sum();
            let count = self.applications.len();
            let rounded = (sum + count / 2) / count;
            u8::try_from(rounded).ok()
        };

        ProfileStats {
            applied: self.applications.len(),
            passed: self.passed,
            remaining: self.queue.remaining(),
            average_match,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let len = self.queue.len();
        let shown = (self.queue.position() + 1).min(len);
        HeaderInfo {
            title: APP_TITLE.to_string(),
            subtitle: format!("{shown} of {len} jobs"),
        }
    }

    fn compute_card(&self, job: &JobPosting) -> CardView {
        let engine = &self.engine;
        let pose = engine.pose();

        CardView {
            job_id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            logo: job.logo.clone(),
            is_verified: job.is_verified,
            verification: job.verification_label(),
            location: job.location.clone(),
            remote: job.remote,
            salary: job.salary.clone(),
            match_score: job.match_score,
            skills: job.top_skills(CARD_SKILL_COUNT).to_vec(),
            details: self.show_details.then(|| job.description.clone()),
            details_label: if self.show_details {
                "Hide Details"
            } else {
                "View Details"
            },
            transform: CardTransform {
                dx: pose.dx,
                dy: pose.dy,
                rotation_degrees: engine.rotation_degrees(),
                scale: engine.scale(),
                opacity: pose.opacity,
                apply_overlay: engine.apply_opacity(),
                pass_overlay: engine.pass_opacity(),
            },
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn compute_background_card(job: &JobPosting, index: usize) -> BackgroundCard {
        let depth = (index + 1) as f64;
        BackgroundCard {
            job_id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            logo: job.logo.clone(),
            scale: (1.0 - depth * 0.05).max(0.0),
            translate_y: depth * 10.0,
            opacity: (1.0 - depth * 0.3).max(0.0),
        }
    }
}

/// Computes character index ranges of `text` matched by `query`.
///
/// Consecutive match indices are coalesced into `(start, end)` ranges with an
/// exclusive end.
fn compute_highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Point;

    fn job(id: &str, title: &str, company: &str, score: u8) -> JobPosting {
        let mut job = JobPosting::new(id, title, company, "Remote");
        job.match_score = score;
        job.skills = vec!["Rust".into(), "SQL".into(), "Go".into(), "K8s".into()];
        job.description = format!("{title} at {company}");
        job
    }

    fn state_with(jobs: Vec<JobPosting>) -> AppState {
        let mut state = AppState::default();
        state.load_jobs(jobs);
        state
    }

    fn apply_current(state: &mut AppState) {
        let id = state.queue.current().map(|j| j.id.clone()).unwrap();
        state.queue.commit_apply(&id).unwrap();
        state.record_application(&id);
    }

    #[test]
    fn header_counts_from_one_and_clamps_when_exhausted() {
        let mut state = state_with(vec![job("A", "A", "X", 1), job("B", "B", "X", 1)]);
        assert_eq!(state.compute_viewmodel().header.subtitle, "1 of 2 jobs");

        state.queue.commit_pass("A").unwrap();
        state.queue.commit_pass("B").unwrap();
        assert_eq!(state.compute_viewmodel().header.subtitle, "2 of 2 jobs");

        let empty = AppState::default().compute_viewmodel();
        assert_eq!(empty.header.subtitle, "0 of 0 jobs");
    }

    #[test]
    fn card_shows_three_skills_and_details_on_demand() {
        let mut state = state_with(vec![job("A", "Backend Engineer", "CloudTech", 67)]);

        let card = state.compute_viewmodel().card.unwrap();
        assert_eq!(card.skills.len(), 3);
        assert!(card.details.is_none());
        assert_eq!(card.details_label, "View Details");

        state.show_details = true;
        let card = state.compute_viewmodel().card.unwrap();
        assert_eq!(card.details.as_deref(), Some("Backend Engineer at CloudTech"));
        assert_eq!(card.details_label, "Hide Details");
    }

    #[test]
    fn background_cards_shrink_and_fade_with_depth() {
        let state = state_with(vec![
            job("A", "A", "X", 1),
            job("B", "B", "X", 1),
            job("C", "C", "X", 1),
            job("D", "D", "X", 1),
        ]);

        let background = state.compute_viewmodel().background;
        assert_eq!(background.len(), 2);
        assert_eq!(background[0].job_id, "B");
        assert!((background[0].scale - 0.95).abs() < 1e-12);
        assert!((background[1].translate_y - 20.0).abs() < 1e-12);
        assert!((background[1].opacity - 0.4).abs() < 1e-12);
    }

    #[test]
    fn deep_stacks_fade_out_instead_of_going_negative() {
        let mut state = AppState::new(GestureConfig::default(), 5);
        state.load_jobs(["A", "B", "C", "D", "E", "F"].map(|id| job(id, id, "X", 1)).to_vec());

        let background = state.compute_viewmodel().background;
        assert_eq!(background.len(), 5);
        assert!((background[2].opacity - 0.1).abs() < 1e-12);
        assert!(background[3..].iter().all(|card| card.opacity == 0.0));
        assert!(background.iter().all(|card| card.scale > 0.0));
    }

    #[test]
    fn oversized_stack_depth_shows_every_remaining_job() {
        let mut state = AppState::new(GestureConfig::default(), usize::MAX);
        state.load_jobs(vec![job("A", "A", "X", 1), job("B", "B", "X", 1)]);

        let background = state.compute_viewmodel().background;
        assert_eq!(background.len(), 1);
        assert_eq!(background[0].job_id, "B");
    }

    #[test]
    fn dragging_card_reports_transform() {
        let mut state = state_with(vec![job("A", "A", "X", 1)]);
        state.engine.pointer_down(&state.queue, Point::new(0.0, 0.0));
        state.engine.pointer_move(Point::new(75.0, 10.0));

        let transform = state.compute_viewmodel().card.unwrap().transform;
        assert!((transform.dx - 75.0).abs() < 1e-12);
        assert!((transform.apply_overlay - 0.5).abs() < 1e-12);
        assert_eq!(transform.pass_overlay, 0.0);
        assert!((transform.scale - 0.95).abs() < 1e-12);
    }

    #[test]
    fn exhausted_deck_shows_empty_state() {
        let vm = state_with(vec![]).compute_viewmodel();
        assert!(vm.card.is_none());
        assert!(!vm.interactive);
        assert_eq!(vm.empty_state.unwrap().action_label, "Refresh");
    }

    #[test]
    fn applications_newest_first_and_filtered() {
        let mut state = state_with(vec![
            job("1", "Senior Frontend Developer", "TechCorp Inc.", 92),
            job("2", "Data Scientist", "AI Innovations", 88),
            job("3", "DevOps Engineer", "Infrastructure Pro", 75),
        ]);
        apply_current(&mut state);
        apply_current(&mut state);
        apply_current(&mut state);

        let all = state.compute_applications(None);
        let ids: Vec<_> = all.rows.iter().map(|r| r.job_id.as_str()).collect();
        assert_eq!(ids, ["3", "2", "1"]);
        assert_eq!(all.rows[0].match_label, "75% Match");

        let filtered = state.compute_applications(Some("innov"));
        assert_eq!(filtered.rows.len(), 1);
        assert_eq!(filtered.rows[0].job_id, "2");
        assert_eq!(filtered.total, 3);

        let blank = state.compute_applications(Some("   "));
        assert_eq!(blank.rows.len(), 3);
        assert!(blank.query.is_none());
    }

    #[test]
    fn title_matches_are_highlighted() {
        let mut state = state_with(vec![job("1", "Data Scientist", "AI Innovations", 88)]);
        apply_current(&mut state);

        let row = &state.compute_applications(Some("data")).rows[0];
        assert_eq!(row.highlight_ranges, vec![(0, 4)]);
    }

    #[test]
    fn applications_survive_reload_without_duplicates() {
        let mut state = state_with(vec![job("1", "A", "X", 80)]);
        apply_current(&mut state);
        state.record_application("1");
        assert_eq!(state.applications.len(), 1);

        state.load_jobs(vec![job("9", "B", "Y", 60)]);
        assert_eq!(state.applications.len(), 1);
        assert!(state.queue.applied_ids().is_empty());
    }

    #[test]
    fn applied_count_spans_loads_while_batch_count_resets() {
        let mut state = state_with(vec![job("1", "A", "X", 80), job("2", "B", "X", 70)]);
        apply_current(&mut state);
        state.record_application("1");

        let vm = state.compute_viewmodel();
        assert_eq!((vm.applied_count, vm.batch_applied_count), (1, 1));

        state.load_jobs(vec![job("9", "C", "Y", 60)]);
        let vm = state.compute_viewmodel();
        assert_eq!((vm.applied_count, vm.batch_applied_count), (1, 0));
    }

    #[test]
    fn profile_stats_average_applied_scores() {
        let mut state = state_with(vec![
            job("1", "A", "X", 92),
            job("2", "B", "X", 85),
            job("3", "C", "X", 10),
        ]);
        assert_eq!(state.profile_stats().average_match, None);

        apply_current(&mut state);
        apply_current(&mut state);
        state.queue.commit_pass("3").unwrap();
        state.passed += 1;

        let stats = state.profile_stats();
        assert_eq!(stats.applied, 2);
        assert_eq!(stats.passed, 1);
        assert_eq!(stats.remaining, 0);
        assert_eq!(stats.average_match, Some(89));
    }
}
