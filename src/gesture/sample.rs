//! Per-interaction gesture displacement and the visual quantities derived from it.
//!
//! Only the displacement is stored. Rotation and overlay opacities are pure
//! functions of it, recomputed on every read so they can never drift apart.

use super::config::GestureConfig;
use super::phase::Decision;

/// A position in presentation-layer units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Displacement of the card from its resting position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSample {
    pub dx: f64,
    pub dy: f64,
}

impl GestureSample {
    /// The resting position.
    pub const ORIGIN: Self = Self { dx: 0.0, dy: 0.0 };

    /// Displacement of `to` relative to `origin`.
    #[must_use]
    pub fn between(origin: Point, to: Point) -> Self {
        Self {
            dx: to.x - origin.x,
            dy: to.y - origin.y,
        }
    }

    /// Raw tilt value, proportional to the horizontal displacement.
    #[must_use]
    pub fn tilt(&self, config: &GestureConfig) -> f64 {
        self.dx * config.rotation_factor
    }

    /// Card rotation in degrees.
    ///
    /// The tilt is mapped linearly from `[-rotation_input_range, rotation_input_range]`
    /// onto `[-rotation_max_degrees, rotation_max_degrees]` and clamped at the edges.
    #[must_use]
    pub fn rotation_degrees(&self, config: &GestureConfig) -> f64 {
        let range = config.rotation_input_range;
        let max = config.rotation_max_degrees;
        interpolate_clamped(self.tilt(config), (-range, range), (-max, max))
    }

    /// Opacity of the "apply" overlay: 0 at `dx <= 0`, 1 from `dx >= overlay_ramp`.
    #[must_use]
    pub fn apply_opacity(&self, config: &GestureConfig) -> f64 {
        interpolate_clamped(self.dx, (0.0, config.overlay_ramp), (0.0, 1.0))
    }

    /// Opacity of the "pass" overlay, the mirror image of [`Self::apply_opacity`].
    #[must_use]
    pub fn pass_opacity(&self, config: &GestureConfig) -> f64 {
        interpolate_clamped(self.dx, (-config.overlay_ramp, 0.0), (1.0, 0.0))
    }

    /// Classifies a release at this displacement.
    ///
    /// A decision requires the horizontal displacement to exceed the threshold
    /// strictly; a release exactly at the threshold snaps back.
    #[must_use]
    pub fn classify(&self, threshold: f64) -> Option<Decision> {
        if self.dx > threshold {
            Some(Decision::Apply)
        } else if self.dx < -threshold {
            Some(Decision::Pass)
        } else {
            None
        }
    }
}

/// Maps `value` linearly from `input` onto `output`, clamping outside `input`.
///
/// A degenerate input range yields the start of the output range.
#[must_use]
pub fn interpolate_clamped(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;

    let span = in_hi - in_lo;
    if span.abs() < f64::EPSILON {
        return out_lo;
    }

    let t = ((value - in_lo) / span).clamp(0.0, 1.0);
    out_lo + t * (out_hi - out_lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(dx: f64) -> GestureSample {
        GestureSample { dx, dy: 0.0 }
    }

    #[test]
    fn overlays_mirror_each_other() {
        let config = GestureConfig::default();
        assert_eq!(at(75.0).apply_opacity(&config), 0.5);
        assert_eq!(at(75.0).apply_opacity(&config), at(-75.0).pass_opacity(&config));
        assert_eq!(at(-40.0).apply_opacity(&config), 0.0);
        assert_eq!(at(40.0).pass_opacity(&config), 0.0);
    }

    #[test]
    fn overlays_clamp_past_the_ramp() {
        let config = GestureConfig::default();
        assert_eq!(at(150.0).apply_opacity(&config), 1.0);
        assert_eq!(at(900.0).apply_opacity(&config), 1.0);
        assert_eq!(at(-900.0).pass_opacity(&config), 1.0);
    }

    #[test]
    fn rotation_follows_tilt_and_clamps() {
        let config = GestureConfig::default();
        assert_eq!(at(0.0).rotation_degrees(&config), 0.0);

        // tilt 250 sits halfway into the [-500, 500] domain
        let half = at(2500.0).rotation_degrees(&config);
        assert!((half - 15.0).abs() < 1e-9);

        assert_eq!(at(1.0e6).rotation_degrees(&config), 30.0);
        assert_eq!(at(-1.0e6).rotation_degrees(&config), -30.0);
    }

    #[test]
    fn threshold_boundary_is_strict() {
        let threshold = GestureConfig::default().swipe_threshold;
        assert_eq!(at(threshold).classify(threshold), None);
        assert_eq!(at(-threshold).classify(threshold), None);
        assert_eq!(at(threshold - 1.0).classify(threshold), None);
        assert_eq!(at(threshold + 0.5).classify(threshold), Some(Decision::Apply));
        assert_eq!(at(-200.0).classify(threshold), Some(Decision::Pass));
    }

    #[test]
    fn degenerate_range_returns_output_start() {
        assert_eq!(interpolate_clamped(5.0, (1.0, 1.0), (0.25, 1.0)), 0.25);
    }
}
