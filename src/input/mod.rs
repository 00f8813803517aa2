//! Input domain: turns mouse and touch presses into item and face clicks.


use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::{FaceClicked, ItemClicked, MakeupSet};
use crate::face::FaceLayout;
use crate::hand::LayerRect;
use crate::items::HeldState;

/// Clickable area of an item, centered on its transform.
#[derive(Component, Debug, Clone, Copy)]
pub struct ClickZone {
    pub size: Vec2,
}

/// A clickable rectangle in world space, with its draw depth.
#[derive(Debug, Clone, Copy)]
pub struct HitTarget {
    pub entity: Entity,
    pub rect: LayerRect,
    pub depth: f32,
}

/// Topmost target under `point`, if any.
pub fn topmost_hit(point: Vec2, targets: impl IntoIterator<Item = HitTarget>) -> Option<Entity> {
    targets
        .into_iter()
        .filter(|target| target.rect.contains(point))
        .max_by(|a, b| a.depth.total_cmp(&b.depth))
        .map(|target| target.entity)
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, emit_pointer_clicks.in_set(MakeupSet::Input));
    }
}

fn emit_pointer_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    buttons: Query<&Interaction, With<Button>>,
    items: Query<(Entity, &ClickZone, &HeldState, &GlobalTransform, &InheritedVisibility)>,
    faces: Query<&FaceLayout>,
    mut item_clicks: MessageWriter<ItemClicked>,
    mut face_clicks: MessageWriter<FaceClicked>,
) {
    let mut presses: Vec<Vec2> = touches.iter_just_pressed().map(|t| t.position()).collect();
    if mouse.just_pressed(MouseButton::Left) {
        if let Ok(window) = windows.single() {
            presses.extend(window.cursor_position());
        }
    }
    if presses.is_empty() {
        return;
    }

    // The tab buttons sit over the scene; presses on them are theirs.
    if buttons.iter().any(|i| *i == Interaction::Pressed) {
        return;
    }

    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    for screen in presses {
        let Ok(point) = camera.viewport_to_world_2d(camera_transform, screen) else {
            continue;
        };

        let targets = items
            .iter()
            .filter(|(_, _, held, _, visible)| **held == HeldState::AtRest && visible.get())
            .map(|(entity, zone, _, transform, _)| {
                let translation = transform.translation();
                HitTarget {
                    entity,
                    rect: LayerRect::new(translation.truncate(), zone.size),
                    depth: translation.z,
                }
            });

        if let Some(item) = topmost_hit(point, targets) {
            item_clicks.write(ItemClicked { item });
            continue;
        }

        if faces.iter().any(|layout| layout.skin.contains(point)) {
            face_clicks.write(FaceClicked);
        }
    }
}
