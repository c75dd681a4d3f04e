//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes pointer input,
//! button presses, animation completions and job loads, translating them into
//! state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host (pointer input, buttons, animation callbacks)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. The queue and gesture engine are mutated through their own methods
//! 4. Actions are collected and returned for execution
//!
//! # Example
//!
//! ```rust
//! use directapply::app::{handle_event, AppState, Event};
//! use directapply::JobPosting;
//!
//! let mut state = AppState::default();
//! let postings = vec![JobPosting::new("A", "Backend Engineer", "CloudTech", "Seattle, WA")];
//! let (render, actions) = handle_event(&mut state, &Event::JobsLoaded { postings })?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), directapply::DeckError>(())
//! ```

use crate::app::{Action, AppState, Feedback};
use crate::domain::error::Result;
use crate::domain::JobPosting;
use crate::gesture::{Completion, Decision, Point, Transition};

/// Heading of the premium-feature notice.
const SUPER_APPLY_TITLE: &str = "Super Apply! ⭐";

/// Body of the premium-feature notice.
const SUPER_APPLY_MESSAGE: &str =
    "This premium feature makes your application stand out. Upgrade to Pro to use Super Apply.";

/// Events triggered by user input, animation callbacks or job loads.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A fresh job sequence is available (initial load or refresh).
    JobsLoaded {
        /// Postings in presentation order.
        postings: Vec<JobPosting>,
    },

    /// Pointer pressed over the top card.
    PointerDown { x: f64, y: f64 },

    /// Pointer moved while pressed.
    PointerMove { x: f64, y: f64 },

    /// Pointer released.
    PointerUp,

    /// The input system interrupted the gesture.
    PointerCancel,

    /// Apply or pass button pressed.
    ForceSwipe(Decision),

    /// The host finished playing animation `id`.
    AnimationFinished { id: u64 },

    /// Expands or collapses the description of the top card.
    ToggleDetails,

    /// Super apply button pressed.
    SuperApply,

    /// Refresh button pressed on the empty deck.
    Refresh,
}

impl Event {
    /// Short name used in log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::JobsLoaded { .. } => "jobs_loaded",
            Self::PointerDown { .. } => "pointer_down",
            Self::PointerMove { .. } => "pointer_move",
            Self::PointerUp => "pointer_up",
            Self::PointerCancel => "pointer_cancel",
            Self::ForceSwipe(_) => "force_swipe",
            Self::AnimationFinished { .. } => "animation_finished",
            Self::ToggleDetails => "toggle_details",
            Self::SuperApply => "super_apply",
            Self::Refresh => "refresh",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// A pair of "should re-render" and the actions to execute in sequence. The
/// action list is empty when the event needs no side effects.
///
/// # Errors
///
/// Reserved for host-facing failures; every engine and queue failure
/// degrades to a no-op that preserves the queue invariants.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!(
        "handle_event",
        event_type = event.name(),
        phase = state.engine.phase().name()
    )
    .entered();

    match event {
        Event::JobsLoaded { postings } => {
            tracing::debug!(count = postings.len(), "loading jobs");
            state.load_jobs(postings.clone());
            Ok((true, vec![]))
        }
        Event::PointerDown { x, y } => {
            let transition = state.engine.pointer_down(&state.queue, Point::new(*x, *y));
            Ok(transition_actions(transition))
        }
        Event::PointerMove { x, y } => {
            let transition = state.engine.pointer_move(Point::new(*x, *y));
            Ok(transition_actions(transition))
        }
        Event::PointerUp => {
            let transition = state.engine.release();
            Ok(transition_actions(transition))
        }
        Event::PointerCancel => {
            let transition = state.engine.cancel();
            Ok(transition_actions(transition))
        }
        Event::ForceSwipe(decision) => {
            let transition = state.engine.force_swipe(&state.queue, *decision);
            Ok(transition_actions(transition))
        }
        Event::AnimationFinished { id } => {
            match state.engine.animation_finished(&mut state.queue, *id) {
                Completion::Ignored => Ok((false, vec![])),
                Completion::Committed { job_id, decision } => {
                    state.show_details = false;
                    match decision {
                        Decision::Apply => {
                            state.record_application(&job_id);
                            tracing::debug!(job_id = %job_id, "application recorded");
                            Ok((true, vec![Action::RecordApplication { job_id }]))
                        }
                        Decision::Pass => {
                            state.passed += 1;
                            Ok((true, vec![]))
                        }
                    }
                }
                Completion::Discarded { job_id, reason, .. } => {
                    tracing::debug!(job_id = %job_id, error = %reason, "decision discarded");
                    Ok((true, vec![]))
                }
            }
        }
        Event::ToggleDetails => {
            if state.queue.current().is_none() {
                return Ok((false, vec![]));
            }
            state.show_details = !state.show_details;
            Ok((true, vec![]))
        }
        Event::SuperApply => Ok((
            false,
            vec![Action::ShowNotice {
                title: SUPER_APPLY_TITLE.to_string(),
                message: SUPER_APPLY_MESSAGE.to_string(),
            }],
        )),
        Event::Refresh => {
            tracing::debug!("refresh requested");
            Ok((false, vec![Action::RequestJobs]))
        }
    }
}

/// Maps an engine transition to a render flag and host actions.
fn transition_actions(transition: Transition) -> (bool, Vec<Action>) {
    match transition {
        Transition::Ignored => (false, vec![]),
        Transition::Grabbed { .. } => (true, vec![Action::Feedback(Feedback::Grab)]),
        Transition::Moved => (true, vec![]),
        Transition::SnapBack(animation) => (true, vec![Action::Animate(animation)]),
        Transition::Resolving {
            decision,
            animation,
            ..
        } => {
            let feedback = match decision {
                Decision::Apply => Feedback::Success,
                Decision::Pass => Feedback::Light,
            };
            (
                true,
                vec![Action::Feedback(feedback), Action::Animate(animation)],
            )
        }
    }
}
