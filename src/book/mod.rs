//! Book domain: two exclusive item panels behind eyeshadow/lipstick tabs.

mod state;
mod systems;

pub use state::{Book, Tab};

use bevy::prelude::*;

use crate::book::systems::{emit_tab_clicks, handle_tab_clicks, initialize_book, spawn_book_tabs};
use crate::core::{MakeupSet, StartupSet};

/// A world-space panel holding the items of one tab.
#[derive(Component, Debug, Clone, Copy)]
pub struct BookPanel {
    pub tab: Tab,
}

/// A tab button in the book UI.
#[derive(Component, Debug, Clone, Copy)]
pub struct TabButton {
    pub tab: Tab,
}

pub struct BookPlugin;

impl Plugin for BookPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Book>()
            .add_systems(Startup, spawn_book_tabs.in_set(StartupSet::Scene))
            .add_systems(Startup, initialize_book.in_set(StartupSet::Wiring))
            .add_systems(Update, emit_tab_clicks.in_set(MakeupSet::Input))
            .add_systems(Update, handle_tab_clicks.in_set(MakeupSet::Control));
    }
}
