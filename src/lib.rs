//! DirectApply: a swipe-to-apply job deck.
//!
//! Job postings are presented one at a time as a card. Dragging the card right
//! past a threshold applies, dragging it left passes, and releasing inside the
//! threshold springs the card back. Buttons trigger the same decisions without
//! a drag. The crate provides:
//! - An ordered job queue that accepts exactly one decision per position
//! - A gesture engine that turns pointer input into decisions and animations
//! - An event/action application layer with computed view models
//! - Pluggable job sources and application/feedback sinks
//! - A host session driver and a plain-text terminal host

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Host (main.rs) / Session (runtime/)       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Gesture       │   │ Queue         │   │ UI Layer      │
//! │ (gesture/)    │   │ (queue/)      │   │ (ui/)         │
//! │ - Phases      │   │ - Cursor      │   │ - View models │
//! │ - Animations  │   │ - Applied set │   │ - Text render │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Collaborators & Domain                             │
//! │  - Job sources (catalog/)                           │
//! │  - Application and feedback sinks (sinks/)          │
//! │  - Job posting, application record, errors (domain/)│
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - JSON-lines file export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Job sources (built-in catalog, JSON file)
//! - [`domain`]: Core domain types (postings, application records, errors)
//! - [`gesture`]: Swipe gesture engine and animation descriptions
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: OpenTelemetry tracing with file export
//! - [`queue`]: Job queue state
//! - [`runtime`]: Host-side session driver
//! - [`sinks`]: Application and feedback collaborators
//! - [`ui`]: View models and plain-text rendering
//!
//! # Example
//!
//! ```rust
//! use directapply::app::Event;
//! use directapply::gesture::Decision;
//! use directapply::runtime::Session;
//! use directapply::{initialize, Config};
//!
//! let config = Config::default();
//! let mut session = Session::new(initialize(&config), config.job_source()).with_auto_finish(true);
//! session.start();
//!
//! session.dispatch(Event::PointerDown { x: 0.0, y: 0.0 });
//! session.dispatch(Event::PointerMove { x: -200.0, y: 5.0 });
//! session.dispatch(Event::PointerUp);
//! session.dispatch(Event::ForceSwipe(Decision::Apply));
//!
//! let stats = session.state().profile_stats();
//! assert_eq!((stats.applied, stats.passed, stats.remaining), (1, 1, 8));
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod gesture;
pub mod infrastructure;
pub mod observability;
pub mod queue;
pub mod runtime;
pub mod sinks;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Feedback};
pub use domain::{ApplicationRecord, ApplicationStatus, CommitRejected, DeckError, JobPosting, Result};
pub use gesture::{Decision, GestureConfig};
pub use queue::JobQueue;

use app::state::DEFAULT_STACK_DEPTH;
use catalog::{JobSource, JsonFileCatalog, MockCatalog};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Application configuration.
///
/// Built from defaults, from a key/value map ([`Config::from_map`]) or from a
/// flat TOML file ([`Config::from_file`]).
///
/// # Example
///
/// ```toml
/// swipe_threshold = 100
/// exit_duration_ms = 250
/// stack_depth = 3
/// catalog_file = "~/jobs.json"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Gesture thresholds and animation tuning.
    pub gesture: GestureConfig,

    /// Number of cards drawn behind the top card. Default: 2
    pub stack_depth: usize,

    /// JSON file of postings. The built-in catalog is used when unset.
    pub catalog_file: Option<PathBuf>,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Directory for trace files. Default: the data directory.
    pub trace_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            stack_depth: DEFAULT_STACK_DEPTH,
            catalog_file: None,
            trace_level: None,
            trace_dir: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - Numeric keys fall back to their default on parse error
    /// - Unknown keys are ignored
    /// - Path keys expand a leading `~`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use directapply::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("swipe_threshold".to_string(), "90".to_string());
    /// map.insert("stack_depth".to_string(), "many".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.gesture.swipe_threshold, 90.0);
    /// assert_eq!(config.stack_depth, 2);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = GestureConfig::default();

        let float = |key: &str, default: f64| {
            map.get(key)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .unwrap_or(default)
        };
        let text = |key: &str| {
            map.get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let gesture = GestureConfig {
            swipe_threshold: float("swipe_threshold", defaults.swipe_threshold),
            overlay_ramp: float("overlay_ramp", defaults.overlay_ramp),
            rotation_factor: float("rotation_factor", defaults.rotation_factor),
            rotation_input_range: float("rotation_input_range", defaults.rotation_input_range),
            rotation_max_degrees: float("rotation_max_degrees", defaults.rotation_max_degrees),
            screen_width: float("screen_width", defaults.screen_width),
            exit_margin: float("exit_margin", defaults.exit_margin),
            exit_duration_ms: map
                .get("exit_duration_ms")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(defaults.exit_duration_ms),
            spring_tension: float("spring_tension", defaults.spring_tension),
            spring_friction: float("spring_friction", defaults.spring_friction),
            grab_scale: float("grab_scale", defaults.grab_scale),
        };

        Self {
            gesture,
            stack_depth: map
                .get("stack_depth")
                .and_then(|s| s.trim().parse::<usize>().ok())
                .unwrap_or(DEFAULT_STACK_DEPTH),
            catalog_file: text("catalog_file").map(|p| infrastructure::expand_tilde(&p)),
            trace_level: text("trace_level"),
            trace_dir: text("trace_dir").map(|p| infrastructure::expand_tilde(&p)),
        }
    }

    /// Loads configuration from a flat TOML file.
    ///
    /// Values follow the same rules as [`Config::from_map`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let table: toml::Table = toml::from_str(&contents)
            .map_err(|e| DeckError::Config(format!("{}: {e}", path.display())))?;

        let map = table
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    toml::Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect();

        Ok(Self::from_map(&map))
    }

    /// Checks values that would make the deck unusable.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Config`] when the swipe threshold, overlay ramp or
    /// screen width is not positive.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("swipe_threshold", self.gesture.swipe_threshold),
            ("overlay_ramp", self.gesture.overlay_ramp),
            ("screen_width", self.gesture.screen_width),
        ];
        for (key, value) in checks {
            if value <= 0.0 {
                return Err(DeckError::Config(format!("{key} must be positive, got {value}")));
            }
        }
        Ok(())
    }

    /// Job source selected by this configuration.
    #[must_use]
    pub fn job_source(&self) -> Box<dyn JobSource> {
        match &self.catalog_file {
            Some(path) => Box::new(JsonFileCatalog::new(path.clone())),
            None => Box::new(MockCatalog),
        }
    }
}

/// Creates an empty application state from configuration.
///
/// Jobs are loaded afterwards through `Event::JobsLoaded`, typically by a
/// [`runtime::Session`] answering its first refresh.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        swipe_threshold = config.gesture.swipe_threshold,
        stack_depth = config.stack_depth,
        "initializing directapply"
    );
    AppState::new(config.gesture.clone(), config.stack_depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_map_reads_every_gesture_key() {
        let map: BTreeMap<String, String> = [
            ("overlay_ramp", "100"),
            ("rotation_factor", "0.2"),
            ("exit_duration_ms", "250"),
            ("grab_scale", "0.9"),
            ("trace_level", "debug"),
            ("catalog_file", "/tmp/jobs.json"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_map(&map);
        assert_eq!(config.gesture.overlay_ramp, 100.0);
        assert_eq!(config.gesture.rotation_factor, 0.2);
        assert_eq!(config.gesture.exit_duration_ms, 250);
        assert_eq!(config.gesture.grab_scale, 0.9);
        assert_eq!(config.gesture.swipe_threshold, 120.0);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.catalog_file, Some(PathBuf::from("/tmp/jobs.json")));
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let map: BTreeMap<String, String> = [("swipe_threshold", "far"), ("screen_width", "NaN")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        assert_eq!(Config::from_map(&map), Config::default());
    }

    #[test]
    fn non_positive_threshold_is_rejected() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.gesture.swipe_threshold = 0.0;
        assert!(matches!(config.validate(), Err(DeckError::Config(_))));
    }
}
