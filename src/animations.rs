//! Animation primitives for the profile-circle screen.
//!
//! This module provides the time-based building blocks every animated value
//! on the screen is made of:
//! - **Springs**: damped harmonic interpolation toward a target value
//! - **Ease-out-back**: overshoot-then-settle curve for the ring "pop"
//! - **Bounce**: decaying wobble layered on top of the eased size
//! - **Rotation**: free-running ring angle derived from elapsed time
//!
//! # Springs
//!
//! A spring has unit mass, a stiffness `k` and a damping ratio `ζ`. Whenever
//! its target changes, the value glides toward the new target carrying its
//! current velocity, so retargeting mid-flight never jumps.
//!
//! Each update solves the spring equation in closed form for the elapsed
//! frame delta instead of integrating step by step:
//!
//! ```text
//! ζ < 1   x(t) = e^(-ζωt) · (x0·cos(ωd·t) + (v0 + ζω·x0)/ωd · sin(ωd·t))
//! ζ = 1   x(t) = (x0 + (v0 + ω·x0)·t) · e^(-ωt)
//! ζ > 1   x(t) = c1·e^(r1·t) + c2·e^(r2·t)
//! ```
//!
//! where `x` is the displacement from the target and `ω = √k`. This keeps the
//! motion identical at 30 or 120 FPS.
//!
//! # Rotation
//!
//! The ring angle is `(elapsed mod period) / period · 360°`. Deriving it from
//! wall-clock time instead of accumulating per-frame increments means it never
//! drifts, no matter how irregular the frame timing is.

use std::f32::consts::PI;

use crate::config::ROTATION_PERIOD_MS;

// =============================================================================
// Spring Presets
// =============================================================================

/// Damping ratio with a clearly visible bounce.
pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;

/// Damping ratio with a subtle bounce.
pub const DAMPING_RATIO_LOW_BOUNCY: f32 = 0.75;

/// Fast spring.
pub const STIFFNESS_MEDIUM: f32 = 1500.0;

/// Slow spring.
pub const STIFFNESS_LOW: f32 = 200.0;

/// Displacement and velocity below which a spring snaps to its target.
const SETTLE_THRESHOLD: f32 = 0.01;

// =============================================================================
// Easing Constants
// =============================================================================

/// Ease-out-back overshoot coefficient.
const BACK_C1: f32 = 1.70158;

/// Cubic ease-out-back coefficient.
const BACK_C3: f32 = BACK_C1 + 1.0;

/// Peak amplitude of the bounce wobble.
const BOUNCE_AMPLITUDE: f32 = 0.15;

/// Number of half-waves the bounce completes over the eased range.
const BOUNCE_FREQUENCY: f32 = 3.0;

// =============================================================================
// Spring
// =============================================================================

/// Stiffness and damping of a spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio `ζ` (1.0 = critically damped, below 1.0 bounces).
    pub damping_ratio: f32,
    /// Stiffness `k` with unit mass.
    pub stiffness: f32,
}

impl SpringSpec {
    /// Create a spring spec.
    pub const fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
        }
    }
}

/// A value animated toward a target by a damped spring.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    spec: SpringSpec,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Create a spring resting at `initial`.
    pub const fn new(spec: SpringSpec, initial: f32) -> Self {
        Self {
            spec,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Retarget the spring. The current value and velocity are kept.
    #[inline]
    pub const fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Current animated value.
    #[inline]
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Current velocity (units per second).
    #[inline]
    pub const fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Target the spring is moving toward.
    #[inline]
    pub const fn target(&self) -> f32 {
        self.target
    }

    /// Whether the spring rests exactly on its target.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance the spring by `dt` seconds.
    ///
    /// Returns `true` if the value moved.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.is_settled() || dt <= 0.0 {
            return false;
        }

        let (displacement, velocity) = self.solve(self.value - self.target, self.velocity, dt);

        if displacement.abs() < SETTLE_THRESHOLD && velocity.abs() < SETTLE_THRESHOLD {
            self.value = self.target;
            self.velocity = 0.0;
        } else {
            self.value = self.target + displacement;
            self.velocity = velocity;
        }
        true
    }

    /// Closed-form displacement and velocity after `t` seconds.
    fn solve(&self, x0: f32, v0: f32, t: f32) -> (f32, f32) {
        let omega = self.spec.stiffness.sqrt();
        let zeta = self.spec.damping_ratio;

        if zeta < 1.0 {
            // Underdamped: decaying oscillation
            let decay = zeta * omega;
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a = x0;
            let b = (v0 + decay * x0) / omega_d;
            let envelope = (-decay * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();

            let x = envelope * (a * cos + b * sin);
            let v = envelope * (v0 * cos - (decay * b + a * omega_d) * sin);
            (x, v)
        } else if zeta == 1.0 {
            // Critically damped
            let c = v0 + omega * x0;
            let envelope = (-omega * t).exp();

            let x = (x0 + c * t) * envelope;
            let v = (v0 - omega * c * t) * envelope;
            (x, v)
        } else {
            // Overdamped: sum of two decaying exponentials
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());

            let x = c1 * e1 + c2 * e2;
            let v = r1 * c1 * e1 + r2 * c2 * e2;
            (x, v)
        }
    }
}

// =============================================================================
// Easing
// =============================================================================

/// Ease-out-back curve: `1 + c3·(t−1)³ + c1·(t−1)²`.
///
/// `f(0) = 0`, `f(1) = 1`, and the curve rises above 1 before settling,
/// which produces the overshoot "pop".
#[inline]
pub fn ease_out_back(t: f32) -> f32 {
    let u = t - 1.0;
    BACK_C3.mul_add(u * u * u, BACK_C1.mul_add(u * u, 1.0))
}

/// Size multiplier adding a decaying wobble while an image pops in.
///
/// `1 + 0.15·(1−e)·sin(e·π·3)` while `e < 1`, exactly `1.0` once settled.
#[inline]
pub fn bounce_scale(eased: f32) -> f32 {
    if eased < 1.0 {
        (BOUNCE_AMPLITUDE * (1.0 - eased)).mul_add((eased * PI * BOUNCE_FREQUENCY).sin(), 1.0)
    } else {
        1.0
    }
}

// =============================================================================
// Rotation
// =============================================================================

/// Ring rotation angle in degrees (0.0-360.0) after `elapsed_ms` milliseconds.
///
/// One revolution every [`ROTATION_PERIOD_MS`], restarting at 0 each cycle.
#[inline]
pub fn rotation_angle(elapsed_ms: u64) -> f32 {
    (elapsed_ms % ROTATION_PERIOD_MS) as f32 / ROTATION_PERIOD_MS as f32 * 360.0
}

// =============================================================================
// Unit Tests
// =============================================================================
