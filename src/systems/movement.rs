//! Directional movement and body anchoring.
//!
//! - [`directional_movement`] walks every directional actor along its current
//!   direction while its clip plays. Visibility is not consulted, so hidden
//!   body parts stay aligned with the visible ones.
//! - [`composite_anchor_system`] moves each body root onto its first part after
//!   movement, keeping the body anchor usable for cameras and collision.
use bevy_ecs::prelude::*;

use crate::components::animation::AnimatedVisual;
use crate::components::compositebody::{BodyPart, CompositeBody};
use crate::components::directional::DirectionalController;
use crate::components::mapposition::MapPosition;
use crate::resources::worldtime::WorldTime;

pub fn directional_movement(
    mut query: Query<(&DirectionalController, &AnimatedVisual, &mut MapPosition)>,
    time: Res<WorldTime>,
) {
    for (controller, visual, mut position) in query.iter_mut() {
        let delta = controller.displacement(visual, time.delta);
        if delta != glam::Vec2::ZERO {
            position.translate(delta);
        }
    }
}

pub fn composite_anchor_system<P: BodyPart>(
    mut bodies: Query<(&CompositeBody<P>, &mut MapPosition)>,
    parts: Query<&MapPosition, Without<CompositeBody<P>>>,
) {
    for (body, mut anchor) in bodies.iter_mut() {
        let Some(first) = body.entities().next() else {
            continue;
        };
        if let Ok(part_pos) = parts.get(first) {
            anchor.pos = part_pos.pos;
        }
    }
}
