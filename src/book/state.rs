//! Book domain: which tab is open.

use bevy::prelude::*;
use serde::Deserialize;

use crate::sprites::{
    TAB_EYESHADOWS_DISABLE, TAB_EYESHADOWS_ENABLE, TAB_LIPSTICKS_DISABLE, TAB_LIPSTICKS_ENABLE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Tab {
    EyeShadows,
    Lipsticks,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::EyeShadows, Tab::Lipsticks];

    pub fn other(self) -> Tab {
        match self {
            Tab::EyeShadows => Tab::Lipsticks,
            Tab::Lipsticks => Tab::EyeShadows,
        }
    }

    /// Sprite key for this tab's icon.
    pub fn icon_key(self, enabled: bool) -> &'static str {
        match (self, enabled) {
            (Tab::EyeShadows, true) => TAB_EYESHADOWS_ENABLE,
            (Tab::EyeShadows, false) => TAB_EYESHADOWS_DISABLE,
            (Tab::Lipsticks, true) => TAB_LIPSTICKS_ENABLE,
            (Tab::Lipsticks, false) => TAB_LIPSTICKS_DISABLE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::EyeShadows => "Eyeshadows",
            Tab::Lipsticks => "Lipsticks",
        }
    }
}

/// A tab switch the panels and icons should follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabChange {
    pub activate: Tab,
    pub deactivate: Tab,
}

impl TabChange {
    /// Icon each tab should show after the switch.
    pub fn icons(&self) -> [(Tab, &'static str); 2] {
        [
            (self.activate, self.activate.icon_key(true)),
            (self.deactivate, self.deactivate.icon_key(false)),
        ]
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        tab == self.activate
    }
}

/// Resource holding the open tab. None until the book is initialized.
#[derive(Resource, Debug, Default)]
pub struct Book {
    active: Option<Tab>,
}

impl Book {
    pub fn active(&self) -> Option<Tab> {
        self.active
    }

    /// Open `tab`. Returns None if it is already open.
    pub fn select(&mut self, tab: Tab) -> Option<TabChange> {
        if self.active == Some(tab) {
            return None;
        }

        self.active = Some(tab);
        Some(TabChange {
            activate: tab,
            deactivate: tab.other(),
        })
    }
}
