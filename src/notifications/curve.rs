// SPDX-License-Identifier: MPL-2.0
//! Easing curves for the show and hide animations.
//!
//! A curve maps normalized time to an interpolation weight. Weights are NOT
//! bounded to `[0, 1]`: overshooting curves make the slot grow past full
//! scale for a moment before settling.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Overshoot amount of [`Curve::EaseOutBack`].
const BACK_OVERSHOOT: f32 = 1.701_58;

/// A `(time, value)` control point of a [`Curve::Keyframes`] curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

impl Keyframe {
    #[must_use]
    pub const fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    #[default]
    Linear,
    /// Quadratic acceleration.
    EaseIn,
    /// Quadratic deceleration.
    EaseOut,
    EaseInOut,
    /// Decelerates past the end value, then settles back.
    EaseOutBack,
    /// Springy overshoot decaying onto the end value.
    EaseOutElastic,
    /// Piecewise linear through the given points. Evaluation expects them
    /// sorted by time; see [`Curve::sanitized`].
    Keyframes(Vec<Keyframe>),
    /// Arbitrary function supplied in code. Not serializable.
    #[serde(skip)]
    Custom(fn(f32) -> f32),
}

impl Curve {
    /// Interpolation weight at normalized time `t`.
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t,
            Curve::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Curve::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Curve::EaseOutBack => {
                let c3 = BACK_OVERSHOOT + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u.powi(3) + BACK_OVERSHOOT * u.powi(2)
            }
            Curve::EaseOutElastic => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else {
                    let c4 = (2.0 * PI) / 3.0;
                    2f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
                }
            }
            Curve::Keyframes(keys) => evaluate_keyframes(keys, t),
            Curve::Custom(f) => f(t),
        }
    }

    /// Returns a copy whose keyframes are sorted by time, with non-finite
    /// points dropped. Other curves are returned unchanged.
    #[must_use]
    pub fn sanitized(&self) -> Curve {
        match self {
            Curve::Keyframes(keys) => {
                let mut keys: Vec<Keyframe> = keys
                    .iter()
                    .copied()
                    .filter(|k| k.time.is_finite() && k.value.is_finite())
                    .collect();
                keys.sort_by(|a, b| a.time.total_cmp(&b.time));
                Curve::Keyframes(keys)
            }
            other => other.clone(),
        }
    }
}

fn evaluate_keyframes(keys: &[Keyframe], t: f32) -> f32 {
    let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
        return t;
    };
    if t <= first.time {
        return first.value;
    }
    if t >= last.time {
        return last.value;
    }
    for pair in keys.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.time {
            let span = b.time - a.time;
            if span <= f32::EPSILON {
                return b.value;
            }
            return a.value + (b.value - a.value) * ((t - a.time) / span);
        }
    }
    last.value
}
