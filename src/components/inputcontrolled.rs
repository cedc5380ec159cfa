//! Input routing marker.
//!
//! Only entities carrying [`InputControlled`] receive
//! [`DirectionInputEvent`](crate::events::input::DirectionInputEvent)s: a
//! standalone directional actor is driven directly, a body root forwards the
//! input to every one of its parts.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct InputControlled;
