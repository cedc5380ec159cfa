//! Time-driven sprite animation.
//!
//! - [`AnimationClip`] – an immutable frame sequence with its own run state
//!   (elapsed time and a paused flag).
//! - [`AnimatedVisual`] – component giving an entity 0..1 active clip plus the
//!   size and pivot derived from the clip's first frame.
//!
//! Frame selection is a pure function of elapsed time:
//! `index = floor(elapsed / frame_duration)`, wrapped modulo the frame count
//! for [`PlayMode::Loop`] and clamped to the last frame for [`PlayMode::Once`].

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::frameatlas::{FrameAtlas, FrameRect};
use crate::error::AnimError;
use crate::resources::texturestore::Texture;

/// Seconds each frame stays on screen when nothing else is configured.
pub const DEFAULT_FRAME_DURATION: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayMode {
    /// Cycle through the frames indefinitely.
    #[default]
    Loop,
    /// Play through once and hold the final frame.
    Once,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    texture: Arc<str>,
    frames: Vec<FrameRect>,
    frame_duration: f32,
    mode: PlayMode,
    elapsed: f32,
    paused: bool,
}

impl AnimationClip {
    /// Build a clip over `frames` of the texture stored under `texture`.
    ///
    /// Fails if `frames` is empty or `frame_duration` is not a positive,
    /// finite number of seconds. New clips start unpaused at time zero.
    pub fn new(
        texture: impl Into<Arc<str>>,
        frames: Vec<FrameRect>,
        frame_duration: f32,
        mode: PlayMode,
    ) -> Result<Self, AnimError> {
        if frames.is_empty() {
            return Err(AnimError::config("animation clip needs at least one frame"));
        }
        if !(frame_duration.is_finite() && frame_duration > 0.0) {
            return Err(AnimError::config(format!(
                "frame duration must be positive, got {}",
                frame_duration
            )));
        }
        Ok(Self {
            texture: texture.into(),
            frames,
            frame_duration,
            mode,
            elapsed: 0.0,
            paused: false,
        })
    }

    /// Every cell of `texture` laid out as `atlas`, in row-major order.
    pub fn from_sheet(
        texture: &Texture,
        atlas: FrameAtlas,
        frame_duration: f32,
        mode: PlayMode,
    ) -> Result<Self, AnimError> {
        let frames = atlas.split(texture.width, texture.height)?;
        Self::new(Arc::clone(&texture.key), frames, frame_duration, mode)
    }

    /// One row of `texture` laid out as `atlas`.
    pub fn from_sheet_row(
        texture: &Texture,
        atlas: FrameAtlas,
        row: u32,
        frame_duration: f32,
        mode: PlayMode,
    ) -> Result<Self, AnimError> {
        let frames = atlas.row(texture.width, texture.height, row)?;
        Self::new(Arc::clone(&texture.key), frames, frame_duration, mode)
    }

    /// Accumulate `dt` seconds unless paused. Negative deltas are ignored so
    /// elapsed time never runs backwards.
    ///
    /// Elapsed time stays bounded: a looping clip wraps it by one full cycle,
    /// a one-shot clip stops counting a frame after its end. Small deltas
    /// therefore keep advancing however long the clip runs.
    pub fn advance(&mut self, dt: f32) {
        if self.paused || dt <= 0.0 {
            return;
        }
        let total = self.frame_duration * self.frames.len() as f32;
        self.elapsed += dt;
        match self.mode {
            PlayMode::Loop => {
                if self.elapsed >= total {
                    self.elapsed %= total;
                }
            }
            PlayMode::Once => {
                self.elapsed = self.elapsed.min(total + self.frame_duration);
            }
        }
    }

    /// Same texture, frames, timing and mode, whatever the run state.
    pub fn same_layout(&self, other: &AnimationClip) -> bool {
        self.texture == other.texture
            && self.frames == other.frames
            && self.frame_duration == other.frame_duration
            && self.mode == other.mode
    }

    pub fn frame_index(&self) -> usize {
        let n = self.frames.len();
        let raw = (self.elapsed / self.frame_duration).floor() as usize;
        match self.mode {
            PlayMode::Loop => raw % n,
            PlayMode::Once => raw.min(n - 1),
        }
    }

    pub fn current_frame(&self) -> &FrameRect {
        &self.frames[self.frame_index()]
    }

    /// True once a [`PlayMode::Once`] clip has shown its last frame for a full
    /// frame duration. Looping clips never finish.
    pub fn is_finished(&self) -> bool {
        match self.mode {
            PlayMode::Loop => false,
            PlayMode::Once => {
                (self.elapsed / self.frame_duration).floor() as usize >= self.frames.len()
            }
        }
    }

    /// Rewind to frame zero. The paused flag is left as it was.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn play(&mut self) {
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frames(&self) -> &[FrameRect] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    pub fn play_mode(&self) -> PlayMode {
        self.mode
    }

    pub fn texture_key(&self) -> &Arc<str> {
        &self.texture
    }
}

/// Animated visual capability of an entity.
///
/// Size and origin follow the attached clip's first frame and stay fixed until
/// another clip is attached. Position, rotation, scale and tint live in their
/// own components and are never touched here.
#[derive(Component, Debug, Clone, Default)]
pub struct AnimatedVisual {
    clip: Option<AnimationClip>,
    pub width: f32,
    pub height: f32,
    /// Pivot in pixels from the frame's corner.
    pub origin: Vec2,
}

impl AnimatedVisual {
    pub fn new(clip: AnimationClip) -> Self {
        let mut visual = Self::default();
        visual.attach_clip(clip);
        visual
    }

    /// Make `clip` the active clip and return the one it replaces.
    ///
    /// Crate-private: on a directional actor the controller decides which
    /// clip is active.
    pub(crate) fn attach_clip(&mut self, clip: AnimationClip) -> Option<AnimationClip> {
        let first = clip.frames[0];
        self.width = first.width as f32;
        self.height = first.height as f32;
        self.origin = Vec2::new(self.width / 2.0, self.height / 2.0);
        self.clip.replace(clip)
    }

    pub fn has_clip(&self) -> bool {
        self.clip.is_some()
    }

    pub fn clip(&self) -> Option<&AnimationClip> {
        self.clip.as_ref()
    }

    /// Advance the active clip. Visibility gating is the caller's concern.
    pub fn tick(&mut self, dt: f32) {
        if let Some(clip) = self.clip.as_mut() {
            clip.advance(dt);
        }
    }

    pub fn start(&mut self) {
        if let Some(clip) = self.clip.as_mut() {
            clip.play();
        }
    }

    pub fn stop(&mut self) {
        if let Some(clip) = self.clip.as_mut() {
            clip.pause();
        }
    }

    /// True while a clip is attached and not paused.
    pub fn is_playing(&self) -> bool {
        self.clip.as_ref().is_some_and(|c| !c.is_paused())
    }

    pub fn current_frame(&self) -> Option<&FrameRect> {
        self.clip.as_ref().map(|c| c.current_frame())
    }

    /// Drop the active clip. Shared textures stay in the
    /// [`TextureStore`](crate::resources::texturestore::TextureStore).
    pub fn dispose(&mut self) {
        self.clip = None;
    }
}
