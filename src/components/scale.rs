use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Per-axis scale applied around the visual's origin. Defaults to 1.
#[derive(Component, Clone, Debug, Copy, PartialEq)]
pub struct Scale {
    pub scale: Vec2,
}

impl Scale {
    pub fn new(sx: f32, sy: f32) -> Self {
        Self {
            scale: Vec2::new(sx, sy),
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self { scale: Vec2::ONE }
    }
}
