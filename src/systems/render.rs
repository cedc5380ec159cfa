//! Render pass.
//!
//! The core never talks to a graphics API. [`render_pass`] turns every
//! visible entity with an active clip into one [`DrawFrame`] and hands it to a
//! [`FrameBatch`] supplied by the host, in painter's order.
use std::sync::Arc;

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::animation::AnimatedVisual;
use crate::components::frameatlas::FrameRect;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::tint::{Color, Tint};
use crate::components::visibility::{Visibility, is_visible};
use crate::components::zindex::ZIndex;

/// One textured quad.
///
/// `position` is the frame's lower-left corner in world space (y up);
/// `origin` is the pivot for scale and rotation, relative to that corner.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawFrame {
    /// [`TextureStore`](crate::resources::texturestore::TextureStore) key.
    pub texture: Arc<str>,
    pub source: FrameRect,
    pub position: Vec2,
    pub origin: Vec2,
    pub size: Vec2,
    pub scale: Vec2,
    /// Degrees, counter-clockwise.
    pub rotation: f32,
    pub tint: Color,
}

/// Draw target of the render pass.
pub trait FrameBatch {
    fn draw_frame(&mut self, frame: &DrawFrame);
}

/// Collects frames instead of drawing them.
impl FrameBatch for Vec<DrawFrame> {
    fn draw_frame(&mut self, frame: &DrawFrame) {
        self.push(frame.clone());
    }
}

/// Draw every visible clip, lowest [`ZIndex`] first; ties keep entity order so
/// the output is stable from frame to frame. Returns the number of frames
/// drawn.
pub fn render_pass(world: &mut World, batch: &mut impl FrameBatch) -> usize {
    let mut to_draw: Vec<(ZIndex, Entity, DrawFrame)> = {
        let mut q = world.query::<(
            Entity,
            &AnimatedVisual,
            &MapPosition,
            Option<&Rotation>,
            Option<&Scale>,
            Option<&Tint>,
            Option<&Visibility>,
            Option<&ZIndex>,
        )>();
        q.iter(world)
            .filter(|(_, _, _, _, _, _, visibility, _)| is_visible(*visibility))
            .filter_map(|(entity, visual, pos, rot, scale, tint, _, z)| {
                let clip = visual.clip()?;
                let frame = DrawFrame {
                    texture: Arc::clone(clip.texture_key()),
                    source: *clip.current_frame(),
                    position: pos.pos,
                    origin: visual.origin,
                    size: Vec2::new(visual.width, visual.height),
                    scale: scale.copied().unwrap_or_default().scale,
                    rotation: rot.map_or(0.0, |r| r.degrees),
                    tint: tint.copied().unwrap_or_default().color,
                };
                Some((z.copied().unwrap_or_default(), entity, frame))
            })
            .collect()
    };

    to_draw.sort_by_key(|(z, entity, _)| (*z, *entity));

    for (_, _, frame) in to_draw.iter() {
        batch.draw_frame(frame);
    }
    to_draw.len()
}
