//! Items domain: carrying out take / put-down requests from the hand.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

use super::{BrushIndicator, HeldState, Item, ItemBrush, RestPose};
use crate::core::MakeupError;
use crate::sprites::Sprites;

/// Depth of a held item relative to the grip, so it draws over the hand.
const HELD_ITEM_DEPTH: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemActionKind {
    /// Reparent the item under the hand's grip point.
    Take { grip: Entity },
    /// The take animation finished; eyeshadow shows its loaded brush.
    TakeComplete,
    /// Reparent back to the rest container at its rest translation.
    PutDown,
}

/// Message asking an item to change hands.
#[derive(Debug, Clone, Copy)]
pub struct ItemAction {
    pub item: Entity,
    pub action: ItemActionKind,
}

impl Message for ItemAction {}

pub fn apply_item_actions(
    mut commands: Commands,
    mut actions: MessageReader<ItemAction>,
    mut items: Query<(
        &Item,
        &RestPose,
        &mut HeldState,
        &mut Transform,
        Option<&ItemBrush>,
    )>,
    mut brushes: Query<(&mut Sprite, &mut Visibility), With<BrushIndicator>>,
    mut sprites: ResMut<Sprites>,
) {
    for action in actions.read() {
        let Ok((item, rest, mut held, mut transform, brush)) = items.get_mut(action.item) else {
            warn!(
                "[Item] {} ({:?})",
                MakeupError::InvalidReference("item for action"),
                action.action
            );
            continue;
        };

        match action.action {
            ItemActionKind::Take { grip } => {
                commands.entity(action.item).insert(ChildOf(grip));
                transform.translation = Vec3::new(0.0, 0.0, HELD_ITEM_DEPTH);
                *held = HeldState::Held;
            }
            ItemActionKind::TakeComplete => {
                let Some(brush) = brush else {
                    continue;
                };
                let Some(image) = item.brush_sprite(&mut sprites) else {
                    continue;
                };
                if let Ok((mut sprite, mut visibility)) = brushes.get_mut(brush.indicator) {
                    sprite.image = image;
                    *visibility = Visibility::Inherited;
                }
            }
            ItemActionKind::PutDown => {
                commands.entity(action.item).insert(ChildOf(rest.parent));
                transform.translation = rest.translation;
                *held = HeldState::AtRest;

                if let Some(brush) = brush {
                    if let Ok((mut sprite, mut visibility)) = brushes.get_mut(brush.indicator) {
                        sprite.image = Handle::default();
                        *visibility = Visibility::Hidden;
                    }
                }
            }
        }
    }
}
