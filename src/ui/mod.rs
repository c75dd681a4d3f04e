//! User interface layer: view models and a plain-text renderer.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel / compute_applications / profile_stats → view model → render_* → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Plain-text renderers for each screen
//! - [`helpers`]: Shared text formatting (highlighting, gauges, truncation)

pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use renderer::{render_applications, render_deck, render_profile};
pub use viewmodel::{
    ApplicationRow, ApplicationsViewModel, BackgroundCard, CardTransform, CardView,
    DeckViewModel, EmptyState, HeaderInfo, ProfileStats,
};
