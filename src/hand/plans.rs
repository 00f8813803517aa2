//! Hand domain: animation plans for each interaction.
//!
//! All positions are hand-origin targets: a point the grip should reach
//! plus the hand's position offset.

use bevy::prelude::*;

use super::state::{FaceTargets, HandMotion, HeldItem, LayerRect};
use crate::items::ItemKind;
use crate::tween::{Cue, TweenSequence, TweenStep};

/// How far below the eyeshadow the brush dips to pick up color.
pub const PALETTE_DROP: f32 = 50.0;
/// Lateral reach of the brush swipe over the palette.
pub const BRUSH_SWING: f32 = 50.0;
/// Passes of every back-and-forth flourish.
pub const FLOURISH_LOOPS: u32 = 6;

/// Plan for picking up `item`. Ends with [`Cue::ItemSecured`].
pub fn take_sequence(motion: &HandMotion, item: &HeldItem, face: &FaceTargets) -> TweenSequence {
    let item_pos = item.rest_position + motion.position_offset;
    let reach = motion
        .step(item_pos, motion.move_duration)
        .cue(Cue::GripReachedItem);

    match item.kind {
        ItemKind::EyeShadow => eyeshadow_take(motion, item_pos, reach),
        ItemKind::Cream => {
            let midpoint = (item_pos + face.center) / 2.0;
            TweenSequence::new().then(reach).then(
                motion
                    .step(midpoint, motion.move_duration)
                    .cue(Cue::ItemSecured),
            )
        }
        ItemKind::Lipstick | ItemKind::Other => TweenSequence::new().then(reach).then(
            motion
                .step(motion.hold_anchor, motion.move_duration)
                .cue(Cue::ItemSecured),
        ),
    }
}

fn eyeshadow_take(motion: &HandMotion, item_pos: Vec2, reach: TweenStep) -> TweenSequence {
    let d = motion.move_duration;
    let palette = item_pos - Vec2::new(0.0, PALETTE_DROP);

    TweenSequence::new()
        .then(reach)
        .then(motion.step(palette, d))
        .then(TweenStep::wait(d / 3.0))
        .then(TweenStep::move_to(palette - Vec2::new(BRUSH_SWING, 0.0), d / 6.0))
        .then(
            TweenStep::move_to(palette + Vec2::new(BRUSH_SWING, 0.0), d / 6.0)
                .yoyo(FLOURISH_LOOPS),
        )
        .then(TweenStep::move_to(palette, d / 6.0).cue(Cue::BrushLoaded))
        .then(TweenStep::wait(d / 3.0))
        .then(TweenStep::scale_to(Vec3::ONE, d / 6.0))
        .then(motion.step(motion.hold_anchor, d).cue(Cue::ItemSecured))
}

/// Plan for rubbing the held item over `layer`. Ends with
/// [`Cue::MakeupApplied`].
pub fn apply_sequence(motion: &HandMotion, layer: &LayerRect) -> TweenSequence {
    let d = motion.move_duration;
    let offset = motion.position_offset;
    // The swipe spans the layer's own edges; only the height follows the grip.
    let y = layer.center.y + offset.y;

    TweenSequence::new()
        .then(motion.step(layer.center + offset, d))
        .then(TweenStep::move_to(Vec2::new(layer.left_edge().x, y), d / 4.0))
        .then(
            TweenStep::move_to(Vec2::new(layer.right_edge().x, y), d / 4.0)
                .yoyo(FLOURISH_LOOPS)
                .cue(Cue::MakeupApplied),
        )
}

/// Plan for carrying the item back. Ends with [`Cue::ItemReturned`].
pub fn return_sequence(motion: &HandMotion, rest_position: Vec2) -> TweenSequence {
    TweenSequence::new().then(
        motion
            .step(rest_position + motion.position_offset, motion.move_duration)
            .cue(Cue::ItemReturned),
    )
}

/// Plan for sliding the empty hand off screen. Ends with
/// [`Cue::HandHidden`].
pub fn hide_sequence(motion: &HandMotion) -> TweenSequence {
    TweenSequence::new().then(
        motion
            .step(motion.hidden_position, motion.move_duration)
            .cue(Cue::HandHidden),
    )
}

impl HandMotion {
    /// An eased move, the hand's default.
    fn step(&self, target: Vec2, duration: f32) -> TweenStep {
        TweenStep::move_to(target, duration).with_ease(self.ease)
    }
}
