//! Swipe gesture engine.
//!
//! Converts a continuous pointer drag over the top card into a discrete
//! decision (apply, pass, or none) and describes the animations that give the
//! user visual feedback along the way.
//!
//! # Modules
//!
//! - [`engine`]: The Idle / Dragging / Resolving state machine
//! - [`phase`]: Phase and decision types
//! - [`sample`]: Displacement and the rotation/overlay values derived from it
//! - [`animation`]: Spring and timing animation descriptions
//! - [`config`]: Thresholds and animation tuning
//!
//! # Example
//!
//! ```rust
//! use directapply::gesture::{Completion, Point, SwipeEngine, Transition};
//! use directapply::{JobPosting, JobQueue};
//!
//! let mut queue = JobQueue::new();
//! queue.load(vec![JobPosting::new("A", "Backend Engineer", "CloudTech", "Seattle, WA")]);
//!
//! let mut engine = SwipeEngine::default();
//! engine.pointer_down(&queue, Point::new(0.0, 0.0));
//! engine.pointer_move(Point::new(200.0, 0.0));
//!
//! let Transition::Resolving { animation, .. } = engine.release() else {
//!     unreachable!("a 200 unit drag resolves");
//! };
//! let completion = engine.animation_finished(&mut queue, animation.id);
//! assert!(matches!(completion, Completion::Committed { .. }));
//! assert!(queue.applied_ids().contains("A"));
//! ```

pub mod animation;
pub mod config;
pub mod engine;
pub mod phase;
pub mod sample;

pub use animation::{AnimationSpec, CardPose, Curve};
pub use config::GestureConfig;
pub use engine::{Completion, SwipeEngine, Transition};
pub use phase::{Decision, GesturePhase};
pub use sample::{interpolate_clamped, GestureSample, Point};
