//! Actions representing side effects to be executed by the host.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! host executes them in order: it plays animations, fires haptics, forwards
//! applications to the application sink and fetches jobs. None of them feed a
//! result back into the state except through new events (`AnimationFinished`,
//! `JobsLoaded`).
//!
//! # Example
//!
//! ```rust
//! use directapply::app::{Action, Feedback};
//!
//! let actions = vec![
//!     Action::Feedback(Feedback::Success),
//!     Action::RecordApplication { job_id: "7".to_string() },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::gesture::AnimationSpec;

/// Device feedback requested at gesture milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Light tap when a card is picked up.
    Grab,
    /// Success notification when a card is thrown right.
    Success,
    /// Light impact when a card is thrown left.
    Light,
}

/// Commands representing side effects to be executed by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Plays an animation on the top card.
    ///
    /// The host reports completion with `Event::AnimationFinished { id }`.
    Animate(AnimationSpec),

    /// Triggers device feedback. Purely observational.
    Feedback(Feedback),

    /// Notifies the application sink that `job_id` was applied to.
    ///
    /// Fire-and-forget: a failure is logged by the host and never rolls back
    /// the local decision.
    RecordApplication {
        /// Identifier of the applied job.
        job_id: String,
    },

    /// Shows a dismissible notice.
    ShowNotice {
        /// Notice heading.
        title: String,
        /// Notice body text.
        message: String,
    },

    /// Asks the host to fetch jobs and answer with `Event::JobsLoaded`.
    RequestJobs,
}
