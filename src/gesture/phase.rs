//! Gesture engine state machine types.
//!
//! # State Machine
//!
//! ```text
//!            pointer down                 release |dx| > threshold
//!   Idle ─────────────────▶ Dragging ───────────────────────────▶ Resolving
//!    ▲                        │  ▲ move                              │
//!    │  release within        │  └───┘                               │
//!    ├──── threshold/cancel ──┘                                      │
//!    └───────────────────── exit animation finished ─────────────────┘
//! ```
//!
//! A force swipe enters `Resolving` directly from `Idle` or `Dragging`.

use super::sample::Point;

/// A discrete swipe decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Swipe right: apply to the job.
    Apply,
    /// Swipe left: skip the job.
    Pass,
}

impl Decision {
    /// Horizontal direction of the exit animation: `1.0` right, `-1.0` left.
    #[must_use]
    pub const fn direction(self) -> f64 {
        match self {
            Self::Apply => 1.0,
            Self::Pass => -1.0,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apply => "APPLY",
            Self::Pass => "PASS",
        }
    }
}

/// Current phase of the gesture engine.
#[derive(Debug, Clone, PartialEq)]
pub enum GesturePhase {
    /// No pointer interaction in progress.
    Idle,

    /// Pointer is down on the card of `job_id`.
    Dragging {
        /// Job whose card is being dragged.
        job_id: String,
        /// Pointer position captured on pointer-down.
        origin: Point,
    },

    /// A decision was made; waiting for the exit animation to finish.
    Resolving {
        /// Job the decision applies to, captured at resolve time.
        job_id: String,
        /// The pending decision.
        decision: Decision,
        /// Identifier of the exit animation whose completion commits the decision.
        animation_id: u64,
    },
}

impl GesturePhase {
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    #[must_use]
    pub const fn is_resolving(&self) -> bool {
        matches!(self, Self::Resolving { .. })
    }

    /// Short name used in log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging { .. } => "dragging",
            Self::Resolving { .. } => "resolving",
        }
    }
}
