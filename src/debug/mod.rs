//! Debug overlay for dev builds.
//!
//! F3 toggles a corner readout of the hand phase, the held item, the open
//! tab and the sprite cache size.

use bevy::prelude::*;

use crate::book::Book;
use crate::hand::Hand;
use crate::sprites::Sprites;

/// Resource tracking whether the overlay is shown
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_info: bool,
}

/// Marker for the info overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_debug_info,
                update_debug_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
            )
                .chain(),
        );
    }
}

/// Toggle the overlay with F3
fn toggle_debug_info(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    debug_state.show_info = !debug_state.show_info;
    if debug_state.show_info {
        spawn_debug_info_overlay(&mut commands);
    } else {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

fn update_debug_info_overlay(
    hands: Query<&Hand>,
    book: Res<Book>,
    sprites: Option<Res<Sprites>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    let (phase, held) = match hands.single() {
        Ok(hand) => (
            format!("{:?}", hand.phase()),
            hand.held_item()
                .map_or("-".to_string(), |h| format!("{:?} {}", h.kind, h.color_index)),
        ),
        Err(_) => ("-".to_string(), "-".to_string()),
    };

    **text = format!(
        "Hand: {}\nHeld: {}\nTab: {:?}\nSprites cached: {}",
        phase,
        held,
        book.active(),
        sprites.map_or(0, |s| s.len())
    );
}
