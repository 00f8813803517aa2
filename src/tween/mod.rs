//! Tween domain: time-based position, scale and opacity animation.
//!
//! Animations are a [`TweenSequence`] component ticked by [`Time`]. Steps
//! that carry a [`Cue`] report it through a [`TweenCue`] message when they
//! finish, which is how controllers resume after a timed step.

pub mod sequence;

pub use sequence::{Ease, Pose, TweenSequence, TweenStep};

use bevy::color::Alpha;
use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use crate::core::MakeupSet;

/// Points in an animation that a controller waits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// The hand's grip has arrived at the item it is taking.
    GripReachedItem,
    /// The eyeshadow brush finished its swipe over the palette.
    BrushLoaded,
    /// The take animation is over; the hand holds the item.
    ItemSecured,
    /// The application flourish over the face finished.
    MakeupApplied,
    /// The hand brought the item back to its rest position.
    ItemReturned,
    /// The hand is back at its hidden position.
    HandHidden,
    /// The skin layer finished fading out.
    SkinFaded,
}

/// Message fired when a step carrying a cue finishes.
#[derive(Debug, Clone, Copy)]
pub struct TweenCue {
    pub entity: Entity,
    pub cue: Cue,
}

impl Message for TweenCue {}

pub struct TweenPlugin;

impl Plugin for TweenPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<TweenCue>()
            .add_systems(Update, advance_tweens.in_set(MakeupSet::Animate));
    }
}

/// System that plays every active sequence and reports finished cues.
pub fn advance_tweens(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut TweenSequence, &mut Transform, Option<&mut Sprite>)>,
    mut cues: MessageWriter<TweenCue>,
) {
    let dt = time.delta_secs();

    for (entity, mut sequence, mut transform, sprite) in &mut query {
        let mut pose = Pose {
            position: transform.translation.truncate(),
            scale: transform.scale,
            alpha: sprite.as_ref().map_or(1.0, |s| s.color.alpha()),
        };

        for cue in sequence.advance(dt, &mut pose) {
            cues.write(TweenCue { entity, cue });
        }

        transform.translation.x = pose.position.x;
        transform.translation.y = pose.position.y;
        transform.scale = pose.scale;
        if let Some(mut sprite) = sprite {
            sprite.color.set_alpha(pose.alpha);
        }

        if sequence.is_finished() {
            commands.entity(entity).remove::<TweenSequence>();
        }
    }
}
