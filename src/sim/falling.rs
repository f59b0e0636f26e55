//! Falling-object lifecycle
//!
//! Objects fall faster as `state_time` grows; they leave the collection when
//! they reach the bottom or overlap the character.

use super::collision::Rect;
use super::state::{FallingObject, GameEvent};
use crate::settings::Settings;

/// Fall speed (px/s) for a velocity tier at the given accumulated time
#[inline]
pub fn fall_speed(settings: &Settings, velocity_tier: u8, state_time: f32) -> f32 {
    settings.base_fall_speed + velocity_tier as f32 * settings.tier_fall_speed + state_time
}

/// Advance every live object by one frame and remove the finished ones.
///
/// Survivors keep spawn order. An object that lands and overlaps in the same
/// frame counts as caught.
pub fn advance(
    objects: &mut Vec<FallingObject>,
    character: &Rect,
    dt: f32,
    state_time: f32,
    settings: &Settings,
    events: &mut Vec<GameEvent>,
) {
    objects.retain_mut(|object| {
        object.rect.y -= fall_speed(settings, object.velocity_tier, state_time) * dt;

        if object.rect.overlaps(character) {
            log::debug!("Caught sushi {} (sprite {})", object.id, object.sprite_index);
            events.push(GameEvent::ObjectCaught {
                id: object.id,
                sprite_index: object.sprite_index,
            });
            false
        } else if object.rect.y < settings.landing_y {
            log::debug!("Sushi {} landed", object.id);
            events.push(GameEvent::ObjectLanded { id: object.id });
            false
        } else {
            true
        }
    });
}
