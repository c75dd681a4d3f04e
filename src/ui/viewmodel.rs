//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed from application state by
//! `AppState::compute_viewmodel`, `AppState::compute_applications` and
//! `AppState::profile_stats`. They contain no business logic, only
//! display-ready data, and are consumed by the renderer or any other host.
//!
//! # Example
//!
//! ```rust
//! use directapply::app::AppState;
//!
//! let state = AppState::default();
//! let vm = state.compute_viewmodel();
//! assert!(vm.card.is_none());
//! assert_eq!(vm.empty_state.map(|e| e.message), Some("No More Jobs!".to_string()));
//! ```

/// Swipe deck screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckViewModel {
    pub header: HeaderInfo,

    /// Top card, absent when the deck is exhausted.
    pub card: Option<CardView>,

    /// Cards peeking out below the top card, nearest first.
    pub background: Vec<BackgroundCard>,

    /// Shown instead of the card when the deck is exhausted.
    pub empty_state: Option<EmptyState>,

    /// Applications recorded this session. Unlike the queue's applied set,
    /// this count is not reset when a new batch is loaded.
    pub applied_count: usize,

    /// Jobs applied to in the current batch, reset on every load.
    pub batch_applied_count: usize,

    /// Whether the top card accepts drags and button presses.
    pub interactive: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// Progress text such as "3 of 10 jobs".
    pub subtitle: String,
}

/// The top card with its current pose.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub logo: String,
    pub is_verified: bool,
    /// "Verified" or "Unverified".
    pub verification: &'static str,
    pub location: String,
    pub remote: bool,
    pub salary: Option<String>,
    pub match_score: u8,
    /// Leading skills, at most three.
    pub skills: Vec<String>,
    /// Description text, present only while the details panel is expanded.
    pub details: Option<String>,
    pub details_label: &'static str,
    pub transform: CardTransform,
}

/// Visual transform of the top card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub dx: f64,
    pub dy: f64,
    pub rotation_degrees: f64,
    pub scale: f64,
    pub opacity: f64,
    /// Opacity of the "APPLY" stamp.
    pub apply_overlay: f64,
    /// Opacity of the "PASS" stamp.
    pub pass_overlay: f64,
}

/// A card stacked behind the top card.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundCard {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub logo: String,
    pub scale: f64,
    pub translate_y: f64,
    pub opacity: f64,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No More Jobs!").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,

    /// Label of the button that requests a fresh batch.
    pub action_label: String,
}

/// Applications screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationsViewModel {
    /// Matching applications, newest first.
    pub rows: Vec<ApplicationRow>,

    /// All applications, regardless of the query.
    pub total: usize,

    /// Active query, if any.
    pub query: Option<String>,
}

/// One application in the applications list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRow {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub logo: String,
    pub is_verified: bool,
    /// e.g. "92% Match".
    pub match_label: String,
    pub status_label: &'static str,
    /// e.g. "Mar 4, 2026".
    pub applied_date: String,

    /// Character ranges of `title` matched by the query.
    ///
    /// Each tuple is `(start_index, end_index)` with an exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Profile screen statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStats {
    pub applied: usize,
    pub passed: usize,
    /// Undecided jobs left in the current deck.
    pub remaining: usize,
    /// Mean match score of applied jobs, rounded; `None` before the first apply.
    pub average_match: Option<u8>,
}
