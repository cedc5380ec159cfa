//! Rotation of a drawn frame around its visual's origin.
use bevy_ecs::prelude::Component;

/// Degrees, counter-clockwise in the y-up world.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub fn new(degrees: f32) -> Self {
        Self { degrees }
    }
}
