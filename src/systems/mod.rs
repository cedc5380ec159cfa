//! Engine systems.
//!
//! Submodules overview
//! - [`animation`] – advance the clips of visible entities
//! - [`movement`] – walk directional actors and keep body anchors on their parts
//! - [`render`] – turn visible clips into draw calls for a host batch
//! - [`time`] – update simulation time and delta
//!
//! A host frame is: [`time::update_world_time`], run the schedule from
//! [`update_schedule`], then [`render::render_pass`].

pub mod animation;
pub mod movement;
pub mod render;
pub mod time;

use bevy_ecs::prelude::*;

use crate::components::compositebody::BodyPart;

/// Per-frame update: clips advance before actors move.
pub fn update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems((animation::animation_tick, movement::directional_movement).chain());
    update
}

/// Add anchor tracking for bodies made of `P` to a schedule built by
/// [`update_schedule`].
pub fn add_body_systems<P: BodyPart>(schedule: &mut Schedule) {
    schedule.add_systems(
        movement::composite_anchor_system::<P>.after(movement::directional_movement),
    );
}
