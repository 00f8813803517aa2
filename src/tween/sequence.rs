//! Ordered tween steps and their playback.

use bevy::math::curve::{Curve, EaseFunction};
use bevy::prelude::*;
use serde::Deserialize;
use std::collections::VecDeque;

use super::Cue;

/// Easing curves available to config and animation plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Ease {
    Linear,
    #[default]
    OutQuart,
    OutCubic,
    InOutSine,
}

impl Ease {
    fn function(self) -> EaseFunction {
        match self {
            Ease::Linear => EaseFunction::Linear,
            Ease::OutQuart => EaseFunction::QuarticOut,
            Ease::OutCubic => EaseFunction::CubicOut,
            Ease::InOutSine => EaseFunction::SineInOut,
        }
    }

    /// Eased progress for linear progress `t` in [0, 1].
    pub fn sample(self, t: f32) -> f32 {
        self.function().sample_clamped(t.clamp(0.0, 1.0))
    }
}

/// The animated values of one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// XY position; depth is left to the entity.
    pub position: Vec2,
    pub scale: Vec3,
    pub alpha: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec3::ONE,
            alpha: 1.0,
        }
    }
}

/// What a step animates, and towards which value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tweened {
    Position(Vec2),
    Scale(Vec3),
    Alpha(f32),
    /// Hold still for the step duration.
    Wait,
}

/// One timed step of a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenStep {
    pub target: Tweened,
    /// Seconds for a single pass.
    pub duration: f32,
    pub ease: Ease,
    /// Number of passes. Odd passes run forward, even passes run back.
    pub loops: u32,
    /// Reported once the last pass finishes.
    pub cue: Option<Cue>,
}

impl TweenStep {
    fn new(target: Tweened, duration: f32) -> Self {
        Self {
            target,
            duration: duration.max(0.0),
            ease: Ease::Linear,
            loops: 1,
            cue: None,
        }
    }

    pub fn move_to(position: Vec2, duration: f32) -> Self {
        Self::new(Tweened::Position(position), duration)
    }

    pub fn scale_to(scale: Vec3, duration: f32) -> Self {
        Self::new(Tweened::Scale(scale), duration)
    }

    pub fn fade_to(alpha: f32, duration: f32) -> Self {
        Self::new(Tweened::Alpha(alpha), duration)
    }

    pub fn wait(duration: f32) -> Self {
        Self::new(Tweened::Wait, duration)
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Ping-pong between the start value and the target `loops` times.
    pub fn yoyo(mut self, loops: u32) -> Self {
        self.loops = loops.max(1);
        self
    }

    pub fn cue(mut self, cue: Cue) -> Self {
        self.cue = Some(cue);
        self
    }

    pub fn total_duration(&self) -> f32 {
        self.duration * self.loops as f32
    }

    /// Progress from start (0) to target (1) after `elapsed` seconds.
    fn progress(&self, elapsed: f32) -> f32 {
        let total = self.total_duration();
        let (pass, local) = if self.duration <= 0.0 || elapsed >= total {
            (self.loops - 1, 1.0)
        } else {
            let pass = ((elapsed / self.duration) as u32).min(self.loops - 1);
            let local = (elapsed - pass as f32 * self.duration) / self.duration;
            (pass, local.clamp(0.0, 1.0))
        };

        let eased = self.ease.sample(local);
        if pass % 2 == 0 { eased } else { 1.0 - eased }
    }
}

#[derive(Debug, Clone)]
struct ActiveStep {
    step: TweenStep,
    start: Pose,
    elapsed: f32,
}

impl ActiveStep {
    fn apply(&self, pose: &mut Pose) {
        let p = self.step.progress(self.elapsed);
        match self.step.target {
            Tweened::Position(to) => pose.position = self.start.position.lerp(to, p),
            Tweened::Scale(to) => pose.scale = self.start.scale.lerp(to, p),
            Tweened::Alpha(to) => pose.alpha = self.start.alpha + (to - self.start.alpha) * p,
            Tweened::Wait => {}
        }
    }
}

/// Component playing a list of steps strictly in order.
///
/// Inserting a new sequence on an entity replaces whatever was playing,
/// which is how an in-flight animation gets cancelled.
#[derive(Component, Debug, Clone, Default)]
pub struct TweenSequence {
    steps: VecDeque<TweenStep>,
    active: Option<ActiveStep>,
}

impl TweenSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, step: TweenStep) -> Self {
        self.steps.push_back(step);
        self
    }

    /// Steps not yet started.
    #[cfg(test)]
    pub fn pending(&self) -> impl Iterator<Item = &TweenStep> {
        self.steps.iter()
    }

    pub fn is_finished(&self) -> bool {
        self.active.is_none() && self.steps.is_empty()
    }

    /// Seconds left until the sequence finishes.
    #[cfg(test)]
    pub fn remaining(&self) -> f32 {
        let active = self
            .active
            .as_ref()
            .map_or(0.0, |a| a.step.total_duration() - a.elapsed);
        active + self.steps.iter().map(TweenStep::total_duration).sum::<f32>()
    }

    /// Advance by `dt` seconds, writing into `pose`. Returns the cues of every
    /// step that finished, in order.
    pub fn advance(&mut self, dt: f32, pose: &mut Pose) -> Vec<Cue> {
        let mut cues = Vec::new();
        let mut remaining = dt.max(0.0);

        loop {
            if self.active.is_none() {
                let Some(step) = self.steps.pop_front() else {
                    break;
                };
                self.active = Some(ActiveStep {
                    step,
                    start: *pose,
                    elapsed: 0.0,
                });
            }

            let Some(active) = self.active.as_mut() else {
                break;
            };

            let left = active.step.total_duration() - active.elapsed;
            let done = remaining >= left;
            if done {
                active.elapsed = active.step.total_duration();
                remaining -= left;
            } else {
                active.elapsed += remaining;
                remaining = 0.0;
            }
            active.apply(pose);

            if !done {
                break;
            }
            if let Some(cue) = active.step.cue {
                cues.push(cue);
            }
            self.active = None;
        }

        cues
    }
}
