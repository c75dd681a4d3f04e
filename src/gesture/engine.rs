//! The swipe gesture engine.
//!
//! [`SwipeEngine`] turns pointer input into swipe decisions. It reads the
//! current job from a [`JobQueue`] when a gesture starts and writes to it only
//! when an exit animation completes, through the queue's commit operations.
//!
//! Every input method returns a [`Transition`] describing what happened so the
//! caller can translate it into haptics, animations and notifications. The
//! engine itself performs no side effects beyond mutating its own state and,
//! on completion, the queue.

use super::animation::{AnimationSpec, CardPose, Curve};
use super::config::GestureConfig;
use super::phase::{Decision, GesturePhase};
use super::sample::{GestureSample, Point};
use crate::domain::CommitRejected;
use crate::queue::JobQueue;

/// Outcome of feeding one input into the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The input did not apply in the current phase.
    Ignored,

    /// Idle → Dragging.
    Grabbed { job_id: String },

    /// Dragging → Dragging with a new displacement.
    Moved,

    /// Dragging → Idle; the card springs back to rest.
    SnapBack(AnimationSpec),

    /// → Resolving; the card is thrown off screen.
    Resolving {
        job_id: String,
        decision: Decision,
        animation: AnimationSpec,
    },
}

/// Outcome of an animation completion notice.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Not the pending exit animation; nothing changed.
    Ignored,

    /// The decision was committed to the queue.
    Committed { job_id: String, decision: Decision },

    /// The queue refused the decision; it was dropped and the engine reset.
    Discarded {
        job_id: String,
        decision: Decision,
        reason: CommitRejected,
    },
}

/// State machine converting drag gestures into swipe decisions.
#[derive(Debug, Clone)]
pub struct SwipeEngine {
    config: GestureConfig,
    phase: GesturePhase,
    sample: GestureSample,
    opacity: f64,
    next_animation_id: u64,
}

impl Default for SwipeEngine {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl SwipeEngine {
    #[must_use]
    pub const fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: GesturePhase::Idle,
            sample: GestureSample::ORIGIN,
            opacity: 1.0,
            next_animation_id: 1,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }

    #[must_use]
    pub const fn phase(&self) -> &GesturePhase {
        &self.phase
    }

    #[must_use]
    pub const fn sample(&self) -> GestureSample {
        self.sample
    }

    /// Current target pose of the top card.
    #[must_use]
    pub const fn pose(&self) -> CardPose {
        CardPose {
            dx: self.sample.dx,
            dy: self.sample.dy,
            opacity: self.opacity,
        }
    }

    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.sample.rotation_degrees(&self.config)
    }

    #[must_use]
    pub fn apply_opacity(&self) -> f64 {
        self.sample.apply_opacity(&self.config)
    }

    #[must_use]
    pub fn pass_opacity(&self) -> f64 {
        self.sample.pass_opacity(&self.config)
    }

    /// Card scale: shrunk while held, full size otherwise.
    #[must_use]
    pub fn scale(&self) -> f64 {
        if self.phase.is_dragging() {
            self.config.grab_scale
        } else {
            1.0
        }
    }

    /// Starts a drag on the current card.
    ///
    /// Ignored outside `Idle` and when the queue has no current job.
    pub fn pointer_down(&mut self, queue: &JobQueue, at: Point) -> Transition {
        if !self.phase.is_idle() {
            tracing::debug!(phase = self.phase.name(), "pointer down ignored");
            return Transition::Ignored;
        }

        let Some(job) = queue.current() else {
            tracing::debug!("pointer down on exhausted queue");
            return Transition::Ignored;
        };

        let job_id = job.id.clone();
        self.phase = GesturePhase::Dragging {
            job_id: job_id.clone(),
            origin: at,
        };
        self.reset_pose();

        tracing::debug!(job_id = %job_id, x = at.x, y = at.y, "drag started");
        Transition::Grabbed { job_id }
    }

    /// Updates the displacement of an active drag.
    pub fn pointer_move(&mut self, to: Point) -> Transition {
        let GesturePhase::Dragging { origin, .. } = &self.phase else {
            return Transition::Ignored;
        };

        self.sample = GestureSample::between(*origin, to);

        tracing::trace!(dx = self.sample.dx, dy = self.sample.dy, "drag moved");
        Transition::Moved
    }

    /// Ends an active drag, either resolving a decision or snapping back.
    pub fn release(&mut self) -> Transition {
        let GesturePhase::Dragging { job_id, .. } = &self.phase else {
            return Transition::Ignored;
        };

        match self.sample.classify(self.config.swipe_threshold) {
            Some(decision) => {
                let job_id = job_id.clone();
                tracing::debug!(job_id = %job_id, dx = self.sample.dx, ?decision, "release resolved");
                self.resolve(job_id, decision)
            }
            None => {
                tracing::debug!(dx = self.sample.dx, "release within threshold");
                self.snap_back()
            }
        }
    }

    /// Aborts an active drag. Treated exactly like a release within threshold.
    pub fn cancel(&mut self) -> Transition {
        if !self.phase.is_dragging() {
            return Transition::Ignored;
        }

        tracing::debug!(dx = self.sample.dx, "drag cancelled");
        self.snap_back()
    }

    /// Commits to `decision` without a drag, e.g. from a button press.
    ///
    /// Allowed from `Idle` or `Dragging` while the queue has a current job.
    pub fn force_swipe(&mut self, queue: &JobQueue, decision: Decision) -> Transition {
        if self.phase.is_resolving() {
            tracing::debug!(?decision, "force swipe ignored while resolving");
            return Transition::Ignored;
        }

        let Some(job) = queue.current() else {
            tracing::debug!(?decision, "force swipe on exhausted queue");
            return Transition::Ignored;
        };

        tracing::debug!(job_id = %job.id, ?decision, "force swipe");
        self.resolve(job.id.clone(), decision)
    }

    /// Handles completion of animation `id`.
    ///
    /// Only the pending exit animation has an effect: its decision is committed
    /// to `queue` and the engine returns to `Idle` with the pose reset. A commit
    /// the queue rejects is discarded; queue state is never corrupted.
    pub fn animation_finished(&mut self, queue: &mut JobQueue, id: u64) -> Completion {
        let GesturePhase::Resolving {
            job_id,
            decision,
            animation_id,
        } = &self.phase
        else {
            tracing::trace!(animation_id = id, "animation finished outside resolving");
            return Completion::Ignored;
        };

        if *animation_id != id {
            tracing::trace!(animation_id = id, pending = *animation_id, "stale animation");
            return Completion::Ignored;
        }

        let job_id = job_id.clone();
        let decision = *decision;

        self.phase = GesturePhase::Idle;
        self.reset_pose();

        let result = match decision {
            Decision::Apply => queue.commit_apply(&job_id),
            Decision::Pass => queue.commit_pass(&job_id),
        };

        match result {
            Ok(()) => Completion::Committed { job_id, decision },
            Err(reason) => {
                tracing::debug!(job_id = %job_id, error = %reason, "discarding stale decision");
                Completion::Discarded {
                    job_id,
                    decision,
                    reason,
                }
            }
        }
    }

    /// Re-synchronizes after the queue was reloaded.
    ///
    /// A drag on a card that is no longer current is dropped. A pending exit
    /// animation is kept; its commit is validated against the new queue when
    /// it completes.
    pub fn queue_reloaded(&mut self, queue: &JobQueue) {
        match &self.phase {
            GesturePhase::Resolving { .. } => {}
            GesturePhase::Dragging { job_id, .. }
                if queue.current().is_some_and(|job| &job.id == job_id) =>
            {
                self.reset_pose();
            }
            GesturePhase::Dragging { .. } | GesturePhase::Idle => {
                self.phase = GesturePhase::Idle;
                self.reset_pose();
            }
        }
    }

    fn resolve(&mut self, job_id: String, decision: Decision) -> Transition {
        let from = self.pose();
        let target = CardPose {
            dx: decision.direction() * self.config.exit_distance(),
            dy: 0.0,
            opacity: 0.0,
        };

        let animation = AnimationSpec {
            id: self.allocate_animation_id(),
            from,
            to: target,
            curve: Curve::Timing {
                duration_ms: self.config.exit_duration_ms,
            },
        };

        self.phase = GesturePhase::Resolving {
            job_id: job_id.clone(),
            decision,
            animation_id: animation.id,
        };
        self.sample = GestureSample {
            dx: target.dx,
            dy: target.dy,
        };
        self.opacity = target.opacity;

        Transition::Resolving {
            job_id,
            decision,
            animation,
        }
    }

    fn snap_back(&mut self) -> Transition {
        let animation = AnimationSpec {
            id: self.allocate_animation_id(),
            from: self.pose(),
            to: CardPose::REST,
            curve: Curve::Spring {
                tension: self.config.spring_tension,
                friction: self.config.spring_friction,
            },
        };

        self.phase = GesturePhase::Idle;
        self.reset_pose();

        Transition::SnapBack(animation)
    }

    fn reset_pose(&mut self) {
        self.sample = GestureSample::ORIGIN;
        self.opacity = 1.0;
    }

    fn allocate_animation_id(&mut self) -> u64 {
        let id = self.next_animation_id;
        self.next_animation_id = self.next_animation_id.wrapping_add(1);
        id
    }
}
