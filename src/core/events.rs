//! Core domain: entry-point messages raised by the host UI layer.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::book::Tab;

/// Message fired when a resting item is clicked
#[derive(Debug, Clone, Copy)]
pub struct ItemClicked {
    pub item: Entity,
}

impl Message for ItemClicked {}

/// Message fired when the face zone is clicked
#[derive(Debug, Clone, Copy)]
pub struct FaceClicked;

impl Message for FaceClicked {}

/// Message fired when a book tab is clicked
#[derive(Debug, Clone, Copy)]
pub struct TabClicked {
    pub tab: Tab,
}

impl Message for TabClicked {}
