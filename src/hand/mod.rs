//! Hand domain: the virtual hand that picks up, carries and applies items.
//!
//! Phases run Idle -> TakingItem -> Holding -> Applying -> Returning -> Idle.
//! At most one item is held, and nothing new starts while animating.

mod plans;
mod state;
mod systems;
#[cfg(test)]
mod tests;

pub use state::{FaceTargets, Hand, HandMotion, LayerRect};

use bevy::prelude::*;

use crate::core::{HandConfig, MakeupSet};
use crate::hand::systems::{handle_face_clicks, handle_item_clicks, react_to_hand_cues};

/// Links the hand to the child entity items attach to.
#[derive(Component, Debug, Clone, Copy)]
pub struct HandRig {
    pub grip: Entity,
}

impl HandMotion {
    pub fn from_config(config: &HandConfig) -> Self {
        Self {
            hidden_position: config.hidden_position.into(),
            hold_anchor: config.hold_anchor.into(),
            position_offset: -Vec2::from(config.grip_offset),
            move_duration: config.move_duration.max(0.0),
            ease: config.ease,
        }
    }
}

pub struct HandPlugin;

impl Plugin for HandPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (handle_item_clicks, handle_face_clicks)
                .chain()
                .in_set(MakeupSet::Control),
        )
        .add_systems(Update, react_to_hand_cues.in_set(MakeupSet::React));
    }
}
