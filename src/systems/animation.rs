//! Animation playback system.
//!
//! [`animation_tick`] advances the active clip of every visible
//! [`AnimatedVisual`] by the frame delta. Frame selection itself is a pure
//! function of each clip's elapsed time, so nothing else needs updating.
//!
//! Hidden entities do not advance: a part that is made invisible freezes on
//! its current frame and continues from there when shown again.

use bevy_ecs::prelude::*;

use crate::components::animation::AnimatedVisual;
use crate::components::visibility::{Visibility, is_visible};
use crate::resources::worldtime::WorldTime;

pub fn animation_tick(
    mut query: Query<(&mut AnimatedVisual, Option<&Visibility>)>,
    time: Res<WorldTime>,
) {
    for (mut visual, visibility) in query.iter_mut() {
        if is_visible(visibility) {
            visual.tick(time.delta);
        }
    }
}
