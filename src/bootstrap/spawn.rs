//! Bootstrap domain: scene spawning.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::book::{BookPanel, Tab};
use crate::core::{BookConfig, FaceConfig, HandConfig, ItemConfig, SceneConfig, SceneReady};
use crate::face::{FaceFades, FaceLayers, FaceLayout, FaceLook};
use crate::hand::{Hand, HandMotion, HandRig};
use crate::input::ClickZone;
use crate::items::{BrushIndicator, HeldState, Item, ItemBrush, ItemKind, RestPose};
use crate::sprites::Sprites;

// Draw order, back to front.
const FACE_DEPTH: f32 = 0.0;
const PANEL_DEPTH: f32 = 1.0;
const ITEM_DEPTH: f32 = 2.0;
const HAND_DEPTH: f32 = 10.0;

const SKIN_TONE: Color = Color::srgb(0.96, 0.8, 0.69);
const PANEL_COLOR: Color = Color::srgb(0.93, 0.87, 0.9);

/// Origin of a book panel in world space.
pub fn panel_origin(book: &BookConfig, tab: Tab) -> Vec2 {
    match tab {
        Tab::EyeShadows => book.eyeshadow_panel.into(),
        Tab::Lipsticks => book.lipstick_panel.into(),
    }
}

/// Placeholder color for an item, so products are told apart without art.
pub fn item_tint(kind: ItemKind, color_index: u32) -> Color {
    let hue = (color_index as f32 * 67.0) % 360.0;
    match kind {
        ItemKind::Cream => Color::srgb(0.98, 0.97, 0.92),
        ItemKind::Lipstick => Color::hsl((340.0 + hue) % 360.0, 0.7, 0.45),
        ItemKind::EyeShadow => Color::hsl((260.0 + hue) % 360.0, 0.55, 0.55),
        ItemKind::Other => Color::srgb(0.6, 0.6, 0.6),
    }
}

pub(crate) fn spawn_scene(
    mut commands: Commands,
    config: Res<SceneConfig>,
    mut sprites: ResMut<Sprites>,
) {
    spawn_face(&mut commands, &config.face);
    let panels = spawn_panels(&mut commands, &config.book);
    let table = commands
        .spawn((Transform::default(), Visibility::default()))
        .id();

    for item in &config.items {
        let (parent, origin) = match item.panel {
            Some(tab) => match panels.get(&tab) {
                Some(panel) => (*panel, panel_origin(&config.book, tab)),
                None => (table, Vec2::ZERO),
            },
            None => (table, Vec2::ZERO),
        };
        spawn_item(&mut commands, item, parent, origin);
        item.kind.preload(item.color_index, &mut sprites);
    }

    spawn_hand(&mut commands, &config.hand);

    commands.insert_resource(SceneReady);
    info!(
        "Scene ready with {} items ({} sprites preloaded)",
        config.items.len(),
        sprites.len()
    );
}

fn spawn_face(commands: &mut Commands, config: &FaceConfig) {
    let layout = FaceLayout::from_config(config);
    let center = layout.skin.center;

    let root = commands
        .spawn((
            Transform::from_translation(center.extend(FACE_DEPTH)),
            Visibility::default(),
        ))
        .id();

    let skin = commands
        .spawn((
            Sprite::from_color(SKIN_TONE, layout.skin.size),
            Transform::from_xyz(0.0, 0.0, 0.0),
            Visibility::Inherited,
            ChildOf(root),
        ))
        .id();
    let eyes_offset = layout.eyes.center - center;
    let lips_offset = layout.lips.center - center;
    let eyes = spawn_hidden_layer(commands, root, eyes_offset, layout.eyes.size, 1.0);
    let lips = spawn_hidden_layer(commands, root, lips_offset, layout.lips.size, 2.0);

    commands.entity(root).insert((
        FaceLook::default(),
        layout,
        FaceLayers { skin, eyes, lips },
        FaceFades {
            skin: config.skin_fade_duration,
            layer: config.layer_fade_duration,
        },
    ));
}

/// A layer that stays hidden until makeup is applied to it.
fn spawn_hidden_layer(
    commands: &mut Commands,
    root: Entity,
    offset: Vec2,
    size: Vec2,
    depth: f32,
) -> Entity {
    commands
        .spawn((
            Sprite {
                color: Color::srgba(1.0, 1.0, 1.0, 0.0),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(offset.extend(depth)),
            Visibility::Hidden,
            ChildOf(root),
        ))
        .id()
}

fn spawn_panels(commands: &mut Commands, config: &BookConfig) -> HashMap<Tab, Entity> {
    Tab::ALL
        .into_iter()
        .map(|tab| {
            let panel = commands
                .spawn((
                    BookPanel { tab },
                    Sprite::from_color(PANEL_COLOR, config.panel_size.into()),
                    Transform::from_translation(panel_origin(config, tab).extend(PANEL_DEPTH)),
                    Visibility::Hidden,
                ))
                .id();
            (tab, panel)
        })
        .collect()
}

fn spawn_item(commands: &mut Commands, config: &ItemConfig, parent: Entity, origin: Vec2) {
    let size: Vec2 = config.size.into();
    let translation = Vec2::from(config.position).extend(ITEM_DEPTH);

    let item = commands
        .spawn((
            Item {
                kind: config.kind,
                color_index: config.color_index,
            },
            HeldState::AtRest,
            RestPose::capture(parent, origin, translation),
            ClickZone { size },
            Sprite::from_color(item_tint(config.kind, config.color_index), size),
            Transform::from_translation(translation),
            Visibility::Inherited,
            ChildOf(parent),
        ))
        .id();

    if config.kind == ItemKind::EyeShadow {
        let indicator = commands
            .spawn((
                BrushIndicator,
                Sprite {
                    custom_size: Some(size * 0.6),
                    ..default()
                },
                Transform::from_xyz(0.0, size.y * 0.5, 0.5),
                Visibility::Hidden,
                ChildOf(item),
            ))
            .id();
        commands.entity(item).insert(ItemBrush { indicator });
    }
}

fn spawn_hand(commands: &mut Commands, config: &HandConfig) {
    let hidden: Vec2 = config.hidden_position.into();

    let hand = commands
        .spawn((
            Hand::new(HandMotion::from_config(config)),
            Sprite::from_color(SKIN_TONE, config.size.into()),
            Transform::from_translation(hidden.extend(HAND_DEPTH)),
            Visibility::Hidden,
        ))
        .id();

    let grip = commands
        .spawn((
            Transform::from_translation(Vec2::from(config.grip_offset).extend(0.0)),
            Visibility::Inherited,
            ChildOf(hand),
        ))
        .id();

    commands.entity(hand).insert(HandRig { grip });
}
