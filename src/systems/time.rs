//! Frame clock.
//!
//! The host calls [`update_world_time`] with its raw frame delta before running
//! the update schedule; systems read the scaled delta from
//! [`WorldTime`](crate::resources::worldtime::WorldTime).
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Scale `dt` (seconds), store it as the frame delta and count the frame.
/// Negative deltas count as zero.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt.max(0.0) * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}
