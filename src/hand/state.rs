//! Hand domain: the interaction state machine.
//!
//! The machine is plain data. Click handlers and tween cues drive it, and it
//! answers with [`HandCommand`]s for the systems to carry out.

use bevy::prelude::*;

use super::plans::{apply_sequence, hide_sequence, return_sequence, take_sequence};
use crate::items::ItemKind;
use crate::tween::{Cue, Ease, TweenSequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HandPhase {
    #[default]
    Idle,
    TakingItem,
    Holding,
    Applying,
    Returning,
}

/// What the hand knows about the item it carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeldItem {
    pub entity: Entity,
    pub kind: ItemKind,
    pub color_index: u32,
    /// World position of the item at rest.
    pub rest_position: Vec2,
}

/// Axis-aligned face layer in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerRect {
    pub center: Vec2,
    pub size: Vec2,
}

impl LayerRect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    pub fn left_edge(&self) -> Vec2 {
        self.center - Vec2::new(self.size.x / 2.0, 0.0)
    }

    pub fn right_edge(&self) -> Vec2 {
        self.center + Vec2::new(self.size.x / 2.0, 0.0)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.size / 2.0;
        (point.x - self.center.x).abs() <= half.x && (point.y - self.center.y).abs() <= half.y
    }
}

/// Face geometry the hand aims at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceTargets {
    pub center: Vec2,
    pub skin: LayerRect,
    pub lips: LayerRect,
}

impl FaceTargets {
    /// Layer a product is rubbed over.
    pub fn layer_for(&self, kind: ItemKind) -> &LayerRect {
        match kind {
            ItemKind::Lipstick => &self.lips,
            _ => &self.skin,
        }
    }
}

/// Anchors and timing the hand animates with.
#[derive(Debug, Clone, PartialEq)]
pub struct HandMotion {
    pub hidden_position: Vec2,
    pub hold_anchor: Vec2,
    /// Hand origin minus grip point; added to every grip target.
    pub position_offset: Vec2,
    pub move_duration: f32,
    pub ease: Ease,
}

/// Side effects requested by the state machine.
#[derive(Debug, Clone)]
pub enum HandCommand {
    Show,
    /// Start a sequence on the hand, replacing any in flight.
    Animate(TweenSequence),
    AttachItem(Entity),
    LoadBrush(Entity),
    ApplyToFace(HeldItem),
    PutDown(Entity),
    Hide,
}

/// Component holding the hand's interaction state.
#[derive(Component, Debug, Clone)]
pub struct Hand {
    phase: HandPhase,
    held: Option<HeldItem>,
    pub motion: HandMotion,
}

impl Hand {
    pub fn new(motion: HandMotion) -> Self {
        Self {
            phase: HandPhase::Idle,
            held: None,
            motion,
        }
    }

    pub fn phase(&self) -> HandPhase {
        self.phase
    }

    pub fn held_item(&self) -> Option<&HeldItem> {
        self.held.as_ref()
    }

    pub fn has_item(&self) -> bool {
        self.held.is_some()
    }

    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            HandPhase::TakingItem | HandPhase::Applying | HandPhase::Returning
        )
    }

    /// An item was clicked. Ignored while animating or already holding.
    pub fn on_item_clicked(&mut self, item: HeldItem, face: &FaceTargets) -> Vec<HandCommand> {
        if self.is_animating() || self.has_item() {
            return Vec::new();
        }

        self.held = Some(item);
        self.phase = HandPhase::TakingItem;

        vec![
            HandCommand::Show,
            HandCommand::Animate(take_sequence(&self.motion, &item, face)),
        ]
    }

    /// The face zone was clicked. Ignored unless holding and at rest.
    pub fn on_face_clicked(&mut self, face: &FaceTargets) -> Vec<HandCommand> {
        let Some(held) = self.held else {
            return Vec::new();
        };
        if self.is_animating() {
            return Vec::new();
        }

        self.phase = HandPhase::Applying;
        let layer = face.layer_for(held.kind);
        vec![HandCommand::Animate(apply_sequence(&self.motion, layer))]
    }

    /// A step of the hand's own animation finished.
    pub fn on_cue(&mut self, cue: Cue) -> Vec<HandCommand> {
        match (self.phase, cue, self.held) {
            (HandPhase::TakingItem, Cue::GripReachedItem, Some(held)) => {
                vec![HandCommand::AttachItem(held.entity)]
            }
            (HandPhase::TakingItem, Cue::BrushLoaded, Some(held)) => {
                vec![HandCommand::LoadBrush(held.entity)]
            }
            (HandPhase::TakingItem, Cue::ItemSecured, Some(_)) => {
                self.phase = HandPhase::Holding;
                Vec::new()
            }
            (HandPhase::Applying, Cue::MakeupApplied, Some(held)) => {
                self.phase = HandPhase::Returning;
                vec![
                    HandCommand::ApplyToFace(held),
                    HandCommand::Animate(return_sequence(&self.motion, held.rest_position)),
                ]
            }
            (HandPhase::Returning, Cue::ItemReturned, Some(held)) => {
                self.held = None;
                vec![
                    HandCommand::PutDown(held.entity),
                    HandCommand::Animate(hide_sequence(&self.motion)),
                ]
            }
            (HandPhase::Returning, Cue::HandHidden, None) => {
                self.phase = HandPhase::Idle;
                vec![HandCommand::Hide]
            }
            _ => Vec::new(),
        }
    }

    /// The held item disappeared mid-flight. Drop the reference and send the
    /// empty hand home.
    pub fn on_item_lost(&mut self) -> Vec<HandCommand> {
        if self.held.take().is_none() {
            return Vec::new();
        }

        self.phase = HandPhase::Returning;
        vec![HandCommand::Animate(hide_sequence(&self.motion))]
    }
}
