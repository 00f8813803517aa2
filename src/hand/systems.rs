//! Hand domain: systems feeding clicks and cues into the state machine.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::state::{Hand, HandCommand, HeldItem};
use super::HandRig;
use crate::core::{FaceClicked, ItemClicked, MakeupError};
use crate::face::{ApplyMakeup, FaceLayout};
use crate::items::{Item, ItemAction, ItemActionKind, RestPose};
use crate::tween::TweenCue;

pub(crate) fn handle_item_clicks(
    mut commands: Commands,
    mut clicks: MessageReader<ItemClicked>,
    mut hands: Query<(Entity, &mut Hand, &HandRig)>,
    items: Query<(&Item, &RestPose)>,
    faces: Query<&FaceLayout>,
    mut item_actions: MessageWriter<ItemAction>,
    mut makeup: MessageWriter<ApplyMakeup>,
) {
    for click in clicks.read() {
        let Ok((hand_entity, mut hand, rig)) = hands.single_mut() else {
            warn!("[Hand] {}", MakeupError::InvalidReference("hand"));
            return;
        };
        let Ok(layout) = faces.single() else {
            warn!("[Hand] {}", MakeupError::InvalidReference("face"));
            return;
        };
        let Ok((item, rest)) = items.get(click.item) else {
            warn!(
                "[Hand] {}",
                MakeupError::InvalidArgument(format!("{:?} is not an item", click.item))
            );
            continue;
        };

        let held = HeldItem {
            entity: click.item,
            kind: item.kind,
            color_index: item.color_index,
            rest_position: rest.world,
        };

        let out = hand.on_item_clicked(held, &layout.targets());
        if out.is_empty() {
            debug!("[Hand] Ignoring click on {:?} while {:?}", item.kind, hand.phase());
            continue;
        }

        info!("[Hand] Taking {:?} {}", item.kind, item.color_index);
        dispatch(
            &mut commands,
            hand_entity,
            rig,
            out,
            &mut item_actions,
            &mut makeup,
        );
    }
}

pub(crate) fn handle_face_clicks(
    mut commands: Commands,
    mut clicks: MessageReader<FaceClicked>,
    mut hands: Query<(Entity, &mut Hand, &HandRig)>,
    items: Query<(), With<Item>>,
    faces: Query<&FaceLayout>,
    mut item_actions: MessageWriter<ItemAction>,
    mut makeup: MessageWriter<ApplyMakeup>,
) {
    for _ in clicks.read() {
        let Ok((hand_entity, mut hand, rig)) = hands.single_mut() else {
            warn!("[Hand] {}", MakeupError::InvalidReference("hand"));
            return;
        };
        let Ok(layout) = faces.single() else {
            warn!("[Hand] {}", MakeupError::InvalidReference("face"));
            return;
        };

        let out = match hand.held_item().copied() {
            Some(held) if !items.contains(held.entity) => {
                warn!("[Hand] Held item {:?} no longer exists", held.entity);
                hand.on_item_lost()
            }
            _ => hand.on_face_clicked(&layout.targets()),
        };

        dispatch(
            &mut commands,
            hand_entity,
            rig,
            out,
            &mut item_actions,
            &mut makeup,
        );
    }
}

pub(crate) fn react_to_hand_cues(
    mut commands: Commands,
    mut cues: MessageReader<TweenCue>,
    mut hands: Query<(Entity, &mut Hand, &HandRig)>,
    items: Query<(), With<Item>>,
    mut item_actions: MessageWriter<ItemAction>,
    mut makeup: MessageWriter<ApplyMakeup>,
) {
    for event in cues.read() {
        let Ok((hand_entity, mut hand, rig)) = hands.get_mut(event.entity) else {
            continue;
        };

        let before = hand.phase();
        let out = match hand.held_item().copied() {
            Some(held) if !items.contains(held.entity) => {
                warn!("[Hand] Held item {:?} was destroyed mid-animation", held.entity);
                hand.on_item_lost()
            }
            _ => hand.on_cue(event.cue),
        };

        if hand.phase() != before {
            debug!("[Hand] {:?} -> {:?}", before, hand.phase());
        }

        dispatch(
            &mut commands,
            hand_entity,
            rig,
            out,
            &mut item_actions,
            &mut makeup,
        );
    }
}

fn dispatch(
    commands: &mut Commands,
    hand: Entity,
    rig: &HandRig,
    out: Vec<HandCommand>,
    item_actions: &mut MessageWriter<ItemAction>,
    makeup: &mut MessageWriter<ApplyMakeup>,
) {
    for command in out {
        match command {
            HandCommand::Show => {
                commands.entity(hand).insert(Visibility::Visible);
            }
            HandCommand::Hide => {
                commands.entity(hand).insert(Visibility::Hidden);
            }
            HandCommand::Animate(sequence) => {
                commands.entity(hand).insert(sequence);
            }
            HandCommand::AttachItem(item) => {
                item_actions.write(ItemAction {
                    item,
                    action: ItemActionKind::Take { grip: rig.grip },
                });
            }
            HandCommand::LoadBrush(item) => {
                item_actions.write(ItemAction {
                    item,
                    action: ItemActionKind::TakeComplete,
                });
            }
            HandCommand::PutDown(item) => {
                item_actions.write(ItemAction {
                    item,
                    action: ItemActionKind::PutDown,
                });
            }
            HandCommand::ApplyToFace(held) => {
                makeup.write(ApplyMakeup {
                    kind: held.kind,
                    color_index: held.color_index,
                });
            }
        }
    }
}
