//! Host-side session driver.
//!
//! [`Session`] owns the application state and its collaborators. It feeds
//! events into [`handle_event`] and executes the resulting actions: it plays
//! (or immediately finishes) animations, forwards feedback and applications to
//! the sinks, fetches jobs from the source and collects notices for display.
//!
//! Follow-up events produced while executing actions (`JobsLoaded` after a
//! fetch, `AnimationFinished` in auto-finish mode) are processed in the same
//! [`Session::dispatch`] call, in order.
//!
//! # Example
//!
//! ```rust
//! use directapply::app::{AppState, Event};
//! use directapply::catalog::MockCatalog;
//! use directapply::gesture::Decision;
//! use directapply::runtime::Session;
//!
//! let mut session = Session::new(AppState::default(), Box::new(MockCatalog)).with_auto_finish(true);
//! session.start();
//! session.dispatch(Event::ForceSwipe(Decision::Apply));
//!
//! assert_eq!(session.state().queue.position(), 1);
//! assert_eq!(session.state().applications.len(), 1);
//! ```

use crate::app::{handle_event, Action, AppState, Event};
use crate::catalog::{fetch_or_empty, JobSource};
use crate::gesture::AnimationSpec;
use crate::sinks::{ApplicationSink, FeedbackSink, TracingSink};
use std::collections::VecDeque;

/// A notice the host should show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// One running swipe session.
pub struct Session {
    state: AppState,
    source: Box<dyn JobSource>,
    applications: Box<dyn ApplicationSink>,
    feedback: Box<dyn FeedbackSink>,
    /// Complete every animation as soon as it is requested.
    auto_finish: bool,
    animations: Vec<AnimationSpec>,
    notices: Vec<Notice>,
}

impl Session {
    /// Creates a session that logs applications and feedback through `tracing`.
    #[must_use]
    pub fn new(state: AppState, source: Box<dyn JobSource>) -> Self {
        Self {
            state,
            source,
            applications: Box::new(TracingSink),
            feedback: Box::new(TracingSink),
            auto_finish: false,
            animations: Vec::new(),
            notices: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_application_sink(mut self, sink: Box<dyn ApplicationSink>) -> Self {
        self.applications = sink;
        self
    }

    #[must_use]
    pub fn with_feedback_sink(mut self, sink: Box<dyn FeedbackSink>) -> Self {
        self.feedback = sink;
        self
    }

    #[must_use]
    pub const fn with_auto_finish(mut self, auto_finish: bool) -> Self {
        self.auto_finish = auto_finish;
        self
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Fetches the first batch of jobs.
    pub fn start(&mut self) -> bool {
        self.dispatch(Event::Refresh)
    }

    /// Handles `event` and every follow-up event it causes.
    ///
    /// Returns whether any handled event asked for a re-render.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let span = tracing::debug_span!("dispatch", event_type = event.name());
        let _guard = span.entered();

        let mut pending = VecDeque::from([event]);
        let mut should_render = false;

        while let Some(event) = pending.pop_front() {
            match handle_event(&mut self.state, &event) {
                Ok((render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = render,
                        "event handled successfully"
                    );
                    should_render |= render;
                    for action in actions {
                        self.execute_action(action, &mut pending);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                }
            }
        }

        should_render
    }

    /// Animations requested since the last call, oldest first.
    ///
    /// Always empty in auto-finish mode.
    pub fn take_animations(&mut self) -> Vec<AnimationSpec> {
        std::mem::take(&mut self.animations)
    }

    /// Notices raised since the last call, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    #[tracing::instrument(level = "debug", skip(self, follow_ups))]
    fn execute_action(&mut self, action: Action, follow_ups: &mut VecDeque<Event>) {
        match action {
            Action::Animate(spec) => {
                if self.auto_finish {
                    follow_ups.push_back(Event::AnimationFinished { id: spec.id });
                } else {
                    self.animations.push(spec);
                }
            }
            Action::Feedback(feedback) => self.feedback.feedback(feedback),
            Action::RecordApplication { job_id } => {
                if let Err(e) = self.applications.record(&job_id) {
                    tracing::warn!(job_id = %job_id, error = %e, "application sink failed");
                }
            }
            Action::ShowNotice { title, message } => {
                self.notices.push(Notice { title, message });
            }
            Action::RequestJobs => {
                let postings = fetch_or_empty(self.source.as_ref());
                follow_ups.push_back(Event::JobsLoaded { postings });
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("auto_finish", &self.auto_finish)
            .field("animations", &self.animations)
            .field("notices", &self.notices)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalog;
    use crate::gesture::Decision;

    #[test]
    fn manual_mode_queues_animations_until_host_reports() {
        let mut session = Session::new(AppState::default(), Box::new(MockCatalog));
        session.start();

        session.dispatch(Event::ForceSwipe(Decision::Pass));
        let animations = session.take_animations();
        assert_eq!(animations.len(), 1);
        assert_eq!(session.state().queue.position(), 0);

        session.dispatch(Event::AnimationFinished { id: animations[0].id });
        assert_eq!(session.state().queue.position(), 1);
        assert!(session.take_animations().is_empty());
    }

    #[test]
    fn super_apply_raises_notice() {
        let mut session = Session::new(AppState::default(), Box::new(MockCatalog));
        session.start();

        assert!(!session.dispatch(Event::SuperApply));
        let notices = session.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Super Apply! ⭐");
    }
}
