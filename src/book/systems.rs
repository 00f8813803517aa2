//! Book domain: tab buttons, panel toggling and icon swaps.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::state::{Book, Tab, TabChange};
use super::{BookPanel, TabButton};
use crate::core::{SceneConfig, TabClicked};
use crate::hand::Hand;
use crate::sprites::Sprites;

const TAB_ACTIVE_TINT: Color = Color::WHITE;
const TAB_INACTIVE_TINT: Color = Color::srgb(0.55, 0.55, 0.6);
const TAB_PADDING: f32 = 24.0;

pub(crate) fn spawn_book_tabs(mut commands: Commands, config: Res<SceneConfig>) {
    let size: Vec2 = config.book.tab_size.into();

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            right: Val::Px(TAB_PADDING),
            top: Val::Px(TAB_PADDING),
            flex_direction: FlexDirection::Row,
            column_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|parent| {
            for tab in Tab::ALL {
                parent
                    .spawn((
                        TabButton { tab },
                        Button,
                        Node {
                            width: Val::Px(size.x),
                            height: Val::Px(size.y),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        ImageNode {
                            color: TAB_INACTIVE_TINT,
                            ..default()
                        },
                    ))
                    .with_child((
                        Text::new(tab.label()),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.25, 0.1, 0.2)),
                    ));
            }
        });
}

/// Preload the tab icons and open the eyeshadow tab.
pub(crate) fn initialize_book(
    mut book: ResMut<Book>,
    mut panels: Query<(&BookPanel, &mut Visibility)>,
    mut tabs: Query<(&TabButton, &mut ImageNode)>,
    mut sprites: ResMut<Sprites>,
) {
    for tab in Tab::ALL {
        sprites.preload(tab.icon_key(true));
        sprites.preload(tab.icon_key(false));
    }

    if let Some(change) = book.select(Tab::EyeShadows) {
        apply_tab_change(change, &mut panels, &mut tabs, &mut sprites);
    }
}

pub(crate) fn emit_tab_clicks(
    buttons: Query<(&Interaction, &TabButton), Changed<Interaction>>,
    mut clicks: MessageWriter<TabClicked>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            clicks.write(TabClicked { tab: button.tab });
        }
    }
}

pub(crate) fn handle_tab_clicks(
    mut clicks: MessageReader<TabClicked>,
    hands: Query<&Hand>,
    mut book: ResMut<Book>,
    mut panels: Query<(&BookPanel, &mut Visibility)>,
    mut tabs: Query<(&TabButton, &mut ImageNode)>,
    mut sprites: ResMut<Sprites>,
) {
    for click in clicks.read() {
        if hands.iter().any(Hand::has_item) {
            debug!("[Book] Ignoring {:?} tab while the hand holds an item", click.tab);
            continue;
        }

        if let Some(change) = book.select(click.tab) {
            info!("[Book] Switched to {:?}", change.activate);
            apply_tab_change(change, &mut panels, &mut tabs, &mut sprites);
        }
    }
}

fn apply_tab_change(
    change: TabChange,
    panels: &mut Query<(&BookPanel, &mut Visibility)>,
    tabs: &mut Query<(&TabButton, &mut ImageNode)>,
    sprites: &mut Sprites,
) {
    for (panel, mut visibility) in panels.iter_mut() {
        *visibility = if change.is_active(panel.tab) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }

    for (tab, key) in change.icons() {
        for (button, mut image) in tabs.iter_mut() {
            if button.tab != tab {
                continue;
            }
            image.color = if change.is_active(tab) {
                TAB_ACTIVE_TINT
            } else {
                TAB_INACTIVE_TINT
            };
            match sprites.load(key) {
                Some(handle) => image.image = handle,
                None => warn!("[Book] Failed to load sprite: {}", key),
            }
        }
    }
}
