//! Animation systems.
//!
//! - [`facing_animation_selector`] maps the body's velocity to a [`Facing`]
//!   and either plays that facing's walk track or stops and shows its idle
//!   frame.
//! - [`animation`] advances playing tracks based on elapsed time and updates
//!   the visible sprite frame.
//!
//! # Animation Flow
//!
//! 1. Track data is defined in [`AnimationStore`] as lists of sheet indices
//! 2. Entities have an [`Animation`] component pointing to a key
//! 3. The selector picks the key (or stops playback) from the velocity
//! 4. The `animation` system advances frames based on `fps` and updates the
//!    [`Sprite`] offset using the [`SpriteSheetStore`] geometry

use bevy_ecs::prelude::*;

use crate::components::animation::{Animation, WalkCycle};
use crate::components::facing::Facing;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::spritesheet::SpriteSheetStore;
use crate::resources::worldtime::WorldTime;

/// Pick a facing and a walk track from the current velocity.
///
/// Contract
/// - Non-zero velocity: the dominant axis sets [`Facing`] and the matching
///   track of the entity's [`WalkCycle`] is played (left running if it
///   already is).
/// - Zero velocity: playback stops and the sprite shows the idle frame of the
///   last known facing.
pub fn facing_animation_selector(
    mut query: Query<(
        &RigidBody,
        &WalkCycle,
        &mut Facing,
        &mut Animation,
        &mut Sprite,
    )>,
    sheets: Res<SpriteSheetStore>,
) {
    for (rigidbody, cycle, mut facing, mut anim, mut sprite) in query.iter_mut() {
        match Facing::from_velocity(rigidbody.velocity) {
            Some(new_facing) => {
                if *facing != new_facing {
                    *facing = new_facing;
                }
                let key = cycle.track_key(new_facing);
                if !anim.is_playing(&key) {
                    anim.play(&key, true);
                }
            }
            None => {
                if anim.playing {
                    anim.stop();
                }
                if let Some(sheet) = sheets.get(&sprite.tex_key) {
                    let offset = sheet.frame_offset(cycle.idle_frame(*facing));
                    if sprite.offset != offset {
                        sprite.offset = offset;
                    }
                }
            }
        }
    }
}

/// Advance animation playback and update the sprite frame.
///
/// Contract
/// - Reads [`WorldTime`] for the delta.
/// - Looks up track data from [`AnimationStore`] and frame geometry from
///   [`SpriteSheetStore`].
/// - Stopped animations are left alone so a static frame set elsewhere stays
///   visible.
/// - A non-looping track stops on its last frame.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    sheets: Res<SpriteSheetStore>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, mut sprite) in query.iter_mut() {
        if !anim_comp.playing {
            continue;
        }
        let Some(animation) = animation_store.get(&anim_comp.animation_key) else {
            continue;
        };
        if animation.frames.is_empty() {
            continue;
        }

        if animation.fps > 0.0 {
            anim_comp.elapsed_time += time.delta;
            let frame_duration = 1.0 / animation.fps;
            if anim_comp.elapsed_time >= frame_duration {
                anim_comp.frame_index += 1;
                anim_comp.elapsed_time -= frame_duration;

                if anim_comp.frame_index >= animation.frame_count() {
                    if animation.looped {
                        anim_comp.frame_index = 0;
                    } else {
                        anim_comp.frame_index = animation.frame_count() - 1;
                        anim_comp.stop();
                    }
                }
            }
        }

        let frame = animation.frames[anim_comp.frame_index.min(animation.frame_count() - 1)];
        if let Some(sheet) = sheets.get(&animation.tex_key) {
            sprite.offset = sheet.frame_offset(frame);
        }
    }
}
