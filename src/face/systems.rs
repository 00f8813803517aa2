//! Face domain: systems playing makeup effects on the layer sprites.

use bevy::color::Alpha;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::{ApplyMakeup, FaceEffect, FaceFades, FaceLayers, FaceLook};
use crate::core::MakeupError;
use crate::sprites::Sprites;
use crate::tween::{Cue, TweenCue, TweenSequence, TweenStep};

pub(crate) fn apply_makeup(
    mut commands: Commands,
    mut requests: MessageReader<ApplyMakeup>,
    mut faces: Query<(&mut FaceLook, &FaceLayers, &FaceFades)>,
    mut layers: Query<(&mut Sprite, &mut Visibility)>,
    mut sprites: ResMut<Sprites>,
) {
    for request in requests.read() {
        let Ok((mut look, face_layers, fades)) = faces.single_mut() else {
            warn!("[Face] {}", MakeupError::InvalidReference("face"));
            return;
        };

        let effect = look.apply_item(request.kind, request.color_index, &mut sprites);
        let (layer, image) = match effect {
            FaceEffect::FadeOutSkin => {
                let fade = TweenStep::fade_to(0.0, fades.skin).cue(Cue::SkinFaded);
                commands
                    .entity(face_layers.skin)
                    .insert(TweenSequence::new().then(fade));
                info!("[Face] Cream applied, fading out skin");
                continue;
            }
            FaceEffect::ShowLips(image) => (face_layers.lips, image),
            FaceEffect::ShowEyes(image) => (face_layers.eyes, image),
            FaceEffect::Unchanged => continue,
        };

        let Ok((mut sprite, mut visibility)) = layers.get_mut(layer) else {
            warn!("[Face] {}", MakeupError::InvalidReference("face layer"));
            continue;
        };
        sprite.image = image;
        // A layer already on screen fades from where it is.
        if *visibility == Visibility::Hidden {
            sprite.color.set_alpha(0.0);
        }
        *visibility = Visibility::Inherited;
        commands
            .entity(layer)
            .insert(TweenSequence::new().then(TweenStep::fade_to(1.0, fades.layer)));
        info!("[Face] Applied {:?} {}", request.kind, request.color_index);
    }
}

/// Disables the skin layer once its fade-out finishes.
pub(crate) fn hide_faded_skin(
    mut cues: MessageReader<TweenCue>,
    mut layers: Query<&mut Visibility>,
) {
    for event in cues.read() {
        if event.cue != Cue::SkinFaded {
            continue;
        }
        if let Ok(mut visibility) = layers.get_mut(event.entity) {
            *visibility = Visibility::Hidden;
        }
    }
}
