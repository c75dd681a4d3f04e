//! Card animation descriptions and sampling.
//!
//! The engine never plays animations itself. It hands an [`AnimationSpec`] to
//! the host, which either samples it frame by frame or plays it with a native
//! animation driver, then reports completion back with the spec's `id`.
//!
//! Two curves are supported:
//! - [`Curve::Spring`]: damped spring used to snap a card back to rest
//! - [`Curve::Timing`]: fixed-duration ease-in-out used to throw a card off screen

/// Fraction of the initial displacement below which a spring counts as settled.
const SPRING_REST_FRACTION: f64 = 0.001;

/// Visual pose of the top card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    pub dx: f64,
    pub dy: f64,
    pub opacity: f64,
}

impl CardPose {
    /// Centered, fully opaque.
    pub const REST: Self = Self {
        dx: 0.0,
        dy: 0.0,
        opacity: 1.0,
    };

    /// Linear blend between `self` and `to`; `t` may overshoot for springs.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            dx: self.dx + (to.dx - self.dx) * t,
            dy: self.dy + (to.dy - self.dy) * t,
            opacity: (self.opacity + (to.opacity - self.opacity) * t).clamp(0.0, 1.0),
        }
    }
}

/// Easing curve of an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Damped harmonic spring with unit mass.
    Spring { tension: f64, friction: f64 },
    /// Ease-in-out over a fixed duration.
    Timing { duration_ms: u64 },
}

/// An animation the host should play on the top card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Identifier reported back on completion.
    pub id: u64,
    pub from: CardPose,
    pub to: CardPose,
    pub curve: Curve,
}

impl AnimationSpec {
    /// Pose of the card `elapsed_ms` after the animation started.
    #[must_use]
    pub fn sample(&self, elapsed_ms: f64) -> CardPose {
        if self.is_settled(elapsed_ms) {
            return self.to;
        }
        self.from.lerp(self.to, self.progress(elapsed_ms))
    }

    /// Progress along the curve; 0 at start, 1 at the target.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        let elapsed_ms = elapsed_ms.max(0.0);
        match self.curve {
            Curve::Spring { tension, friction } => {
                spring_progress(tension, friction, elapsed_ms / 1000.0)
            }
            Curve::Timing { duration_ms } => {
                if duration_ms == 0 {
                    return 1.0;
                }
                #[allow(clippy::cast_precision_loss)]
                let t = (elapsed_ms / duration_ms as f64).min(1.0);
                ease_in_out(t)
            }
        }
    }

    /// Time after which the animation is visually at rest.
    #[must_use]
    pub fn settle_ms(&self) -> f64 {
        match self.curve {
            Curve::Spring { tension, friction } => spring_settle_ms(tension, friction),
            #[allow(clippy::cast_precision_loss)]
            Curve::Timing { duration_ms } => duration_ms as f64,
        }
    }

    #[must_use]
    pub fn is_settled(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.settle_ms()
    }
}

/// Cubic ease-in-out on `t` in `[0, 1]`.
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Normalized position of a unit-mass spring released from rest at 0 toward 1.
fn spring_progress(tension: f64, friction: f64, t: f64) -> f64 {
    if tension <= 0.0 {
        return 1.0;
    }

    let omega = tension.sqrt();
    let zeta = friction.max(0.0) / (2.0 * omega);

    let remaining = if zeta < 1.0 {
        let damped = omega * (1.0 - zeta * zeta).sqrt();
        (-zeta * omega * t).exp()
            * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin())
    } else if (zeta - 1.0).abs() < 1e-9 {
        (-omega * t).exp() * (1.0 + omega * t)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
    };

    1.0 - remaining
}

fn spring_settle_ms(tension: f64, friction: f64) -> f64 {
    if tension <= 0.0 {
        return 0.0;
    }

    let omega = tension.sqrt();
    let zeta = friction.max(0.0) / (2.0 * omega);

    let decay_rate = if zeta <= 1.0 {
        zeta * omega
    } else {
        omega * (zeta - (zeta * zeta - 1.0).sqrt())
    };

    if decay_rate <= 0.0 {
        // undamped springs oscillate forever
        return f64::INFINITY;
    }

    (1.0 / SPRING_REST_FRACTION).ln() / decay_rate * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exit(duration_ms: u64) -> AnimationSpec {
        AnimationSpec {
            id: 1,
            from: CardPose::REST,
            to: CardPose {
                dx: 490.0,
                dy: 0.0,
                opacity: 0.0,
            },
            curve: Curve::Timing { duration_ms },
        }
    }

    fn snap_back(tension: f64, friction: f64) -> AnimationSpec {
        AnimationSpec {
            id: 2,
            from: CardPose {
                dx: 80.0,
                dy: -20.0,
                opacity: 1.0,
            },
            to: CardPose::REST,
            curve: Curve::Spring { tension, friction },
        }
    }

    #[test]
    fn timing_hits_endpoints_and_midpoint() {
        let spec = exit(300);
        assert_eq!(spec.sample(0.0), CardPose::REST);
        assert!((spec.progress(150.0) - 0.5).abs() < 1e-12);
        assert_eq!(spec.sample(300.0).dx, 490.0);
        assert_eq!(spec.sample(10_000.0).opacity, 0.0);
        assert_eq!(spec.settle_ms(), 300.0);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        assert_eq!(exit(0).progress(0.0), 1.0);
    }

    #[test]
    fn underdamped_spring_overshoots_then_settles() {
        let spec = snap_back(100.0, 8.0);
        assert_eq!(spec.progress(0.0), 0.0);

        let overshoot = (1..400)
            .map(|ms| spec.progress(f64::from(ms)))
            .fold(f64::MIN, f64::max);
        assert!(overshoot > 1.0);

        let settle = spec.settle_ms();
        assert!(settle.is_finite());
        assert_eq!(spec.sample(settle), CardPose::REST);
    }

    #[test]
    fn overdamped_and_critical_springs_approach_target_monotonically() {
        for friction in [20.0, 40.0] {
            let spec = snap_back(100.0, friction);
            let mut previous = spec.progress(0.0);
            for ms in (10..2000).step_by(10) {
                let next = spec.progress(f64::from(ms));
                assert!(next + 1e-12 >= previous);
                assert!(next <= 1.0 + 1e-9);
                previous = next;
            }
        }
    }
}
