//! Tunable constants for gesture classification and card animation.

use serde::{Deserialize, Serialize};

/// Gesture and animation tuning.
///
/// Defaults reproduce the reference phone layout: a 390-unit wide screen, a
/// 120-unit decision threshold and a 150-unit overlay ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Horizontal displacement a release must exceed to commit a decision.
    pub swipe_threshold: f64,

    /// Displacement at which an overlay reaches full opacity.
    pub overlay_ramp: f64,

    /// Tilt produced per unit of horizontal displacement.
    pub rotation_factor: f64,

    /// Tilt magnitude mapped onto the maximum rotation.
    pub rotation_input_range: f64,

    /// Largest rotation, in degrees, a card can show.
    pub rotation_max_degrees: f64,

    /// Width of the presentation surface.
    pub screen_width: f64,

    /// Distance past the screen edge the card travels when swiped away.
    pub exit_margin: f64,

    /// Duration of the exit animation.
    pub exit_duration_ms: u64,

    /// Spring stiffness of the snap-back animation.
    pub spring_tension: f64,

    /// Spring damping of the snap-back animation.
    pub spring_friction: f64,

    /// Scale applied to the card while it is held.
    pub grab_scale: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 120.0,
            overlay_ramp: 150.0,
            rotation_factor: 0.1,
            rotation_input_range: 500.0,
            rotation_max_degrees: 30.0,
            screen_width: 390.0,
            exit_margin: 100.0,
            exit_duration_ms: 300,
            spring_tension: 100.0,
            spring_friction: 8.0,
            grab_scale: 0.95,
        }
    }
}

impl GestureConfig {
    /// Horizontal offset at which a card is fully off screen.
    #[must_use]
    pub fn exit_distance(&self) -> f64 {
        self.screen_width + self.exit_margin
    }
}
