//! Hand domain: tests for the interaction state machine and its plans.

use bevy::color::Alpha;
use bevy::prelude::*;

use super::plans::{FLOURISH_LOOPS, PALETTE_DROP};
use super::state::{FaceTargets, Hand, HandCommand, HandMotion, HandPhase, HeldItem, LayerRect};
use crate::bootstrap::tests::{find_item, hand_rig, image_path, parent_of, run_until, scene_app};
use crate::core::{FaceClicked, ItemClicked};
use crate::face::FaceLayers;
use crate::items::{ItemBrush, ItemKind, RestPose};
use crate::tween::sequence::Tweened;
use crate::tween::{Cue, Ease, Pose, TweenSequence};

const HIDDEN: Vec2 = Vec2::new(0.0, -560.0);
const ANCHOR: Vec2 = Vec2::new(120.0, -140.0);
const OFFSET: Vec2 = Vec2::new(0.0, -90.0);

fn motion() -> HandMotion {
    HandMotion {
        hidden_position: HIDDEN,
        hold_anchor: ANCHOR,
        position_offset: OFFSET,
        move_duration: 0.5,
        ease: Ease::OutQuart,
    }
}

fn face() -> FaceTargets {
    FaceTargets {
        center: Vec2::new(-220.0, 40.0),
        skin: LayerRect::new(Vec2::new(-220.0, 40.0), Vec2::new(360.0, 460.0)),
        lips: LayerRect::new(Vec2::new(-220.0, -70.0), Vec2::new(120.0, 50.0)),
    }
}

fn item(world: &mut World, kind: ItemKind, color_index: u32) -> HeldItem {
    HeldItem {
        entity: world.spawn_empty().id(),
        kind,
        color_index,
        rest_position: Vec2::new(330.0, 100.0),
    }
}

fn close(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < 1e-2
}

/// Plays hand commands the way the systems would, without an App.
struct Sim {
    hand: Hand,
    pose: Pose,
    active: Option<TweenSequence>,
    visible: bool,
    attached: Option<Entity>,
    brush: Option<Entity>,
    applied: Vec<(ItemKind, u32)>,
    put_down: Vec<Entity>,
    phases: Vec<HandPhase>,
}

impl Sim {
    fn new() -> Self {
        Self {
            hand: Hand::new(motion()),
            pose: Pose {
                position: HIDDEN,
                ..default()
            },
            active: None,
            visible: false,
            attached: None,
            brush: None,
            applied: Vec::new(),
            put_down: Vec::new(),
            phases: Vec::new(),
        }
    }

    fn run(&mut self, out: Vec<HandCommand>) {
        for command in out {
            match command {
                HandCommand::Show => self.visible = true,
                HandCommand::Hide => self.visible = false,
                HandCommand::Animate(sequence) => self.active = Some(sequence),
                HandCommand::AttachItem(e) => self.attached = Some(e),
                HandCommand::LoadBrush(e) => self.brush = Some(e),
                HandCommand::ApplyToFace(held) => self.applied.push((held.kind, held.color_index)),
                HandCommand::PutDown(e) => {
                    self.put_down.push(e);
                    self.attached = None;
                    self.brush = None;
                }
            }
        }
        self.record_phase();
    }

    fn record_phase(&mut self) {
        let phase = self.hand.phase();
        if self.phases.last() != Some(&phase) {
            self.phases.push(phase);
        }
    }

    fn click_item(&mut self, item: HeldItem) -> bool {
        let out = self.hand.on_item_clicked(item, &face());
        let accepted = !out.is_empty();
        self.run(out);
        accepted
    }

    fn click_face(&mut self) -> bool {
        let out = self.hand.on_face_clicked(&face());
        let accepted = !out.is_empty();
        self.run(out);
        accepted
    }

    fn tick(&mut self, dt: f32) {
        let Some(sequence) = self.active.as_mut() else {
            return;
        };
        let cues = sequence.advance(dt, &mut self.pose);
        if sequence.is_finished() {
            self.active = None;
        }
        for cue in cues {
            let out = self.hand.on_cue(cue);
            self.run(out);
        }
    }

    fn settle(&mut self) {
        for _ in 0..10_000 {
            if self.active.is_none() {
                return;
            }
            self.tick(1.0 / 60.0);
        }
        panic!("animation never settled");
    }
}

// -----------------------------------------------------------------------------
// Taking
// -----------------------------------------------------------------------------

#[test]
fn test_eyeshadow_take_reaches_holding() {
    let mut world = World::new();
    let eyeshadow = item(&mut world, ItemKind::EyeShadow, 2);
    let mut sim = Sim::new();

    assert!(sim.click_item(eyeshadow));
    assert_eq!(sim.hand.phase(), HandPhase::TakingItem);
    assert!(sim.visible);
    assert!(sim.hand.is_animating());

    sim.settle();

    assert_eq!(sim.phases, vec![HandPhase::TakingItem, HandPhase::Holding]);
    assert_eq!(sim.attached, Some(eyeshadow.entity));
    assert_eq!(sim.brush, Some(eyeshadow.entity));
    assert_eq!(sim.hand.held_item(), Some(&eyeshadow));
    assert!(!sim.hand.is_animating());
    assert!(close(sim.pose.position, ANCHOR));
}

#[test]
fn test_item_attaches_before_brush_loads() {
    let mut world = World::new();
    let eyeshadow = item(&mut world, ItemKind::EyeShadow, 1);
    let mut sim = Sim::new();
    sim.click_item(eyeshadow);

    // The first move only takes one move duration.
    sim.tick(0.5);
    assert_eq!(sim.attached, Some(eyeshadow.entity));
    assert_eq!(sim.brush, None);
    assert!(close(sim.pose.position, eyeshadow.rest_position + OFFSET));
}

#[test]
fn test_lipstick_take_ends_at_anchor_without_brush() {
    let mut world = World::new();
    let lipstick = item(&mut world, ItemKind::Lipstick, 0);
    let mut sim = Sim::new();

    sim.click_item(lipstick);
    sim.settle();

    assert_eq!(sim.hand.phase(), HandPhase::Holding);
    assert_eq!(sim.attached, Some(lipstick.entity));
    assert_eq!(sim.brush, None);
    assert!(close(sim.pose.position, ANCHOR));
}

#[test]
fn test_cream_take_ends_halfway_to_face() {
    let mut world = World::new();
    let cream = item(&mut world, ItemKind::Cream, 0);
    let mut sim = Sim::new();

    sim.click_item(cream);
    sim.settle();

    let expected = (cream.rest_position + OFFSET + face().center) / 2.0;
    assert_eq!(sim.hand.phase(), HandPhase::Holding);
    assert!(close(sim.pose.position, expected));
}

#[test]
fn test_other_kind_uses_default_path() {
    let mut world = World::new();
    let other = item(&mut world, ItemKind::Other, 0);
    let mut sim = Sim::new();

    sim.click_item(other);
    sim.settle();

    assert_eq!(sim.hand.phase(), HandPhase::Holding);
    assert!(close(sim.pose.position, ANCHOR));
}

#[test]
fn test_eyeshadow_plan_shape() {
    let mut world = World::new();
    let eyeshadow = item(&mut world, ItemKind::EyeShadow, 0);
    let mut hand = Hand::new(motion());

    let out = hand.on_item_clicked(eyeshadow, &face());
    let Some(HandCommand::Animate(sequence)) = out.into_iter().nth(1) else {
        panic!("expected a take animation");
    };

    let steps: Vec<_> = sequence.pending().collect();
    assert_eq!(steps.len(), 9);
    assert_eq!(
        steps[1].target,
        Tweened::Position(eyeshadow.rest_position + OFFSET - Vec2::new(0.0, PALETTE_DROP))
    );
    assert!(steps.iter().any(|s| s.loops == FLOURISH_LOOPS));
    assert_eq!(steps[5].cue, Some(Cue::BrushLoaded));
    assert_eq!(steps[8].cue, Some(Cue::ItemSecured));
}

// -----------------------------------------------------------------------------
// Gating
// -----------------------------------------------------------------------------

#[test]
fn test_click_while_animating_is_ignored() {
    let mut world = World::new();
    let first = item(&mut world, ItemKind::Lipstick, 0);
    let second = item(&mut world, ItemKind::Lipstick, 1);
    let mut sim = Sim::new();

    sim.click_item(first);
    sim.tick(0.1);

    assert!(!sim.click_item(second));
    assert_eq!(sim.hand.held_item(), Some(&first));
}

#[test]
fn test_click_while_holding_is_ignored() {
    let mut world = World::new();
    let first = item(&mut world, ItemKind::EyeShadow, 0);
    let second = item(&mut world, ItemKind::Cream, 0);
    let mut sim = Sim::new();

    sim.click_item(first);
    sim.settle();

    assert!(!sim.click_item(second));
    assert_eq!(sim.hand.held_item(), Some(&first));
    assert_eq!(sim.hand.phase(), HandPhase::Holding);
}

#[test]
fn test_face_click_without_item_is_noop() {
    let mut sim = Sim::new();

    assert!(!sim.click_face());
    assert_eq!(sim.hand.phase(), HandPhase::Idle);
    assert!(sim.active.is_none());
}

#[test]
fn test_face_click_while_taking_is_ignored() {
    let mut world = World::new();
    let lipstick = item(&mut world, ItemKind::Lipstick, 0);
    let mut sim = Sim::new();

    sim.click_item(lipstick);
    sim.tick(0.2);

    assert!(!sim.click_face());
    assert_eq!(sim.hand.phase(), HandPhase::TakingItem);
}

#[test]
fn test_stray_cue_is_ignored() {
    let mut hand = Hand::new(motion());

    assert!(hand.on_cue(Cue::MakeupApplied).is_empty());
    assert!(hand.on_cue(Cue::ItemReturned).is_empty());
    assert!(hand.on_cue(Cue::SkinFaded).is_empty());
    assert_eq!(hand.phase(), HandPhase::Idle);
}

// -----------------------------------------------------------------------------
// Applying and returning
// -----------------------------------------------------------------------------

#[test]
fn test_eyeshadow_full_cycle_returns_to_idle() {
    let mut world = World::new();
    let eyeshadow = item(&mut world, ItemKind::EyeShadow, 2);
    let mut sim = Sim::new();

    sim.click_item(eyeshadow);
    sim.settle();
    assert!(sim.click_face());
    assert_eq!(sim.hand.phase(), HandPhase::Applying);
    sim.settle();

    assert_eq!(
        sim.phases,
        vec![
            HandPhase::TakingItem,
            HandPhase::Holding,
            HandPhase::Applying,
            HandPhase::Returning,
            HandPhase::Idle,
        ]
    );
    assert_eq!(sim.applied, vec![(ItemKind::EyeShadow, 2)]);
    assert_eq!(sim.put_down, vec![eyeshadow.entity]);
    assert_eq!(sim.brush, None);
    assert_eq!(sim.hand.held_item(), None);
    assert!(!sim.hand.is_animating());
    assert!(!sim.visible);
    assert!(close(sim.pose.position, HIDDEN));
}

#[test]
fn test_item_is_put_down_before_hand_hides() {
    let mut world = World::new();
    let cream = item(&mut world, ItemKind::Cream, 0);
    let mut sim = Sim::new();

    sim.click_item(cream);
    sim.settle();
    sim.click_face();

    while sim.put_down.is_empty() {
        sim.tick(1.0 / 60.0);
    }

    assert_eq!(sim.hand.phase(), HandPhase::Returning);
    assert!(sim.visible);
    assert!(close(sim.pose.position, cream.rest_position + OFFSET));
    assert_eq!(sim.hand.held_item(), None);
}

#[test]
fn test_lipstick_is_applied_over_lips() {
    let mut world = World::new();
    let lipstick = item(&mut world, ItemKind::Lipstick, 3);
    let mut hand = Hand::new(motion());
    hand.on_item_clicked(lipstick, &face());
    hand.on_cue(Cue::ItemSecured);

    let out = hand.on_face_clicked(&face());
    let Some(HandCommand::Animate(sequence)) = out.into_iter().next() else {
        panic!("expected an apply animation");
    };

    let steps: Vec<_> = sequence.pending().collect();
    let lips = face().lips;
    assert_eq!(steps[0].target, Tweened::Position(lips.center + OFFSET));
    assert_eq!(steps[1].target, Tweened::Position(lips.left_edge() + OFFSET));
    assert_eq!(steps[2].target, Tweened::Position(lips.right_edge() + OFFSET));
    assert_eq!(steps[2].loops, FLOURISH_LOOPS);
    assert_eq!(steps[2].cue, Some(Cue::MakeupApplied));
}

#[test]
fn test_swipe_spans_layer_edges_with_sideways_grip() {
    let mut world = World::new();
    let lipstick = item(&mut world, ItemKind::Lipstick, 1);
    let mut hand = Hand::new(HandMotion {
        position_offset: Vec2::new(-30.0, -90.0),
        ..motion()
    });
    hand.on_item_clicked(lipstick, &face());
    hand.on_cue(Cue::ItemSecured);

    let out = hand.on_face_clicked(&face());
    let Some(HandCommand::Animate(sequence)) = out.into_iter().next() else {
        panic!("expected an apply animation");
    };

    let steps: Vec<_> = sequence.pending().collect();
    let lips = face().lips;
    assert_eq!(
        steps[0].target,
        Tweened::Position(lips.center + Vec2::new(-30.0, -90.0))
    );
    assert_eq!(
        steps[1].target,
        Tweened::Position(Vec2::new(lips.left_edge().x, lips.center.y - 90.0))
    );
    assert_eq!(
        steps[2].target,
        Tweened::Position(Vec2::new(lips.right_edge().x, lips.center.y - 90.0))
    );
}

#[test]
fn test_cream_is_applied_over_skin() {
    let mut world = World::new();
    let cream = item(&mut world, ItemKind::Cream, 0);
    let mut hand = Hand::new(motion());
    hand.on_item_clicked(cream, &face());
    hand.on_cue(Cue::ItemSecured);

    let out = hand.on_face_clicked(&face());
    let Some(HandCommand::Animate(sequence)) = out.into_iter().next() else {
        panic!("expected an apply animation");
    };

    let first = sequence.pending().next().map(|s| s.target);
    assert_eq!(first, Some(Tweened::Position(face().skin.center + OFFSET)));
}

#[test]
fn test_lost_item_sends_hand_home() {
    let mut world = World::new();
    let lipstick = item(&mut world, ItemKind::Lipstick, 0);
    let mut sim = Sim::new();
    sim.click_item(lipstick);
    sim.settle();

    let out = sim.hand.on_item_lost();
    sim.run(out);
    assert_eq!(sim.hand.phase(), HandPhase::Returning);
    assert_eq!(sim.hand.held_item(), None);

    sim.settle();
    assert_eq!(sim.hand.phase(), HandPhase::Idle);
    assert!(!sim.visible);
    assert!(sim.applied.is_empty());
}

#[test]
fn test_lost_item_when_empty_is_noop() {
    let mut hand = Hand::new(motion());
    assert!(hand.on_item_lost().is_empty());
    assert_eq!(hand.phase(), HandPhase::Idle);
}

// -----------------------------------------------------------------------------
// LayerRect
// -----------------------------------------------------------------------------

#[test]
fn test_layer_rect_edges_and_hits() {
    let rect = LayerRect::new(Vec2::new(10.0, 20.0), Vec2::new(100.0, 40.0));

    assert_eq!(rect.left_edge(), Vec2::new(-40.0, 20.0));
    assert_eq!(rect.right_edge(), Vec2::new(60.0, 20.0));
    assert!(rect.contains(Vec2::new(10.0, 20.0)));
    assert!(rect.contains(Vec2::new(60.0, 40.0)));
    assert!(!rect.contains(Vec2::new(61.0, 20.0)));
    assert!(!rect.contains(Vec2::new(10.0, -1.0)));
}

// -----------------------------------------------------------------------------
// Full cycle in the scene
// -----------------------------------------------------------------------------

fn phase_is(world: &World, hand: Entity, phase: HandPhase) -> bool {
    world.get::<Hand>(hand).is_some_and(|h| h.phase() == phase)
}

#[test]
fn test_eyeshadow_cycle_in_scene() {
    let mut app = scene_app();
    let item = find_item(&mut app, ItemKind::EyeShadow, 2);
    let (hand, grip) = hand_rig(&mut app);
    let rest = *app.world().get::<RestPose>(item).unwrap();
    let brush = app.world().get::<ItemBrush>(item).unwrap().indicator;

    app.world_mut().write_message(ItemClicked { item });
    app.update();
    assert!(phase_is(app.world(), hand, HandPhase::TakingItem));

    run_until(&mut app, 600, |world| phase_is(world, hand, HandPhase::Holding));
    {
        let world = app.world();
        assert_eq!(world.get::<Visibility>(hand), Some(&Visibility::Visible));
        assert_eq!(parent_of(world, item), Some(grip));
        assert_eq!(world.get::<Visibility>(brush), Some(&Visibility::Inherited));
        assert_eq!(
            image_path(&world.get::<Sprite>(brush).unwrap().image).as_deref(),
            Some("sprites/Brush/EyeShadowColor2.png")
        );
    }

    app.world_mut().write_message(FaceClicked);
    app.update();
    assert!(phase_is(app.world(), hand, HandPhase::Applying));

    run_until(&mut app, 600, |world| phase_is(world, hand, HandPhase::Idle));

    let world_mut = app.world_mut();
    let mut faces = world_mut.query::<&FaceLayers>();
    let eyes = faces.single(world_mut).unwrap().eyes;
    let world = app.world();

    assert_eq!(world.get::<Visibility>(eyes), Some(&Visibility::Inherited));
    assert_eq!(
        image_path(&world.get::<Sprite>(eyes).unwrap().image).as_deref(),
        Some("sprites/Eyes/eyes_2.png")
    );
    assert!(world.get::<Sprite>(eyes).unwrap().color.alpha() >= 0.999);

    assert_eq!(parent_of(world, item), Some(rest.parent));
    assert_eq!(world.get::<Transform>(item).unwrap().translation, rest.translation);
    assert_eq!(world.get::<Visibility>(brush), Some(&Visibility::Hidden));

    let held = world.get::<Hand>(hand).unwrap();
    assert!(!held.has_item());
    assert!(!held.is_animating());
    assert_eq!(world.get::<Visibility>(hand), Some(&Visibility::Hidden));
    let position = world.get::<Transform>(hand).unwrap().translation.truncate();
    assert!(close(position, HIDDEN));
}

#[test]
fn test_second_item_click_in_scene_is_ignored() {
    let mut app = scene_app();
    let first = find_item(&mut app, ItemKind::Lipstick, 0);
    let second = find_item(&mut app, ItemKind::Cream, 0);
    let (hand, grip) = hand_rig(&mut app);

    app.world_mut().write_message(ItemClicked { item: first });
    app.update();
    run_until(&mut app, 600, |world| phase_is(world, hand, HandPhase::Holding));

    app.world_mut().write_message(ItemClicked { item: second });
    app.update();

    let world = app.world();
    assert!(phase_is(world, hand, HandPhase::Holding));
    assert_eq!(world.get::<Hand>(hand).unwrap().held_item().map(|h| h.entity), Some(first));
    assert_eq!(parent_of(world, first), Some(grip));
    assert_ne!(parent_of(world, second), Some(grip));
}
