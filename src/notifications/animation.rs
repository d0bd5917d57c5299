// SPDX-License-Identifier: MPL-2.0
//! Tick-driven scale animation with an initial delay.

use super::curve::Curve;
use crate::domain::Vec3;

/// Result of advancing a [`ScaleAnimation`] by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStep {
    /// Still waiting out the delay; scale untouched.
    Delaying,
    /// Scale was updated; more ticks to go.
    Running,
    /// Final value applied. Returned exactly once.
    Finished,
    /// Already finished earlier; nothing happened.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Delay,
    Run,
    Done,
}

/// Interpolates a scale toward `target` after `delay` seconds.
///
/// The start value is captured when the delay ends, not at construction, so
/// whatever happened to the scale during the delay is the starting point.
/// Weights come from the curve without clamping.
#[derive(Debug, Clone)]
pub struct ScaleAnimation {
    target: Vec3,
    duration: f32,
    delay: f32,
    curve: Curve,
    start: Vec3,
    elapsed: f32,
    phase: Phase,
}

impl ScaleAnimation {
    #[must_use]
    pub fn new(target: Vec3, duration: f32, delay: f32, curve: Curve) -> Self {
        Self {
            target,
            duration,
            delay,
            curve,
            start: Vec3::ZERO,
            elapsed: 0.0,
            phase: Phase::Delay,
        }
    }

    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// True while the delay has not elapsed.
    #[must_use]
    pub fn is_delaying(&self) -> bool {
        self.phase == Phase::Delay
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advances by `dt` seconds, writing the interpolated value into `scale`.
    ///
    /// The tick that ends the delay captures the start value and applies the
    /// weight at `t = 0`; interpolation time starts counting on the next tick.
    /// A non-positive duration completes on the tick that ends the delay.
    pub fn tick(&mut self, dt: f32, scale: &mut Vec3) -> AnimationStep {
        match self.phase {
            Phase::Done => AnimationStep::Idle,
            Phase::Delay => {
                self.elapsed += dt;
                if self.elapsed < self.delay {
                    return AnimationStep::Delaying;
                }
                self.phase = Phase::Run;
                self.elapsed = 0.0;
                self.start = *scale;
                if self.duration <= 0.0 {
                    return self.finish(scale);
                }
                *scale = self.sample(0.0);
                AnimationStep::Running
            }
            Phase::Run => {
                self.elapsed += dt;
                if self.elapsed >= self.duration {
                    return self.finish(scale);
                }
                *scale = self.sample(self.elapsed / self.duration);
                AnimationStep::Running
            }
        }
    }

    fn sample(&self, t: f32) -> Vec3 {
        self.start.lerp_unclamped(self.target, self.curve.evaluate(t))
    }

    fn finish(&mut self, scale: &mut Vec3) -> AnimationStep {
        *scale = self.sample(1.0);
        self.phase = Phase::Done;
        AnimationStep::Finished
    }
}
