//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the host (see [`crate::runtime`]) and the queue and
//! gesture layers. It implements the event-driven architecture that powers the
//! swipe deck.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Host Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── AnimationFinished / JobsLoaded ────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use directapply::app::{handle_event, Action, AppState, Event};
//! use directapply::gesture::Decision;
//! use directapply::JobPosting;
//!
//! let mut state = AppState::default();
//! let postings = vec![JobPosting::new("1", "UX Designer", "Design Studio Pro", "Austin, TX")];
//! handle_event(&mut state, &Event::JobsLoaded { postings })?;
//!
//! let (_, actions) = handle_event(&mut state, &Event::ForceSwipe(Decision::Apply))?;
//! assert!(actions.iter().any(|a| matches!(a, Action::Animate(_))));
//! # Ok::<(), directapply::DeckError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::{Action, Feedback};
pub use handler::{handle_event, Event};
pub use state::AppState;
