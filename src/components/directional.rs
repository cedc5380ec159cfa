//! Four-direction actor controller.
//!
//! A [`DirectionalController`] owns one [`AnimationClip`] per mapped
//! [`Direction`], sliced from one row of a sprite sheet each. The clip of the
//! current direction is the one attached to the entity's [`AnimatedVisual`];
//! the controller keeps the others. On a direction switch the two are swapped,
//! so every direction keeps its own elapsed time and pressing a direction
//! again resumes where it stopped rather than restarting at frame zero.
//!
//! State machine:
//! - press(d), d mapped: attach clip(d), current = d, play. Movement starts.
//! - press(d), d unmapped: ignored, nothing changes.
//! - release: pause. Direction and elapsed time are kept. Movement stops.
//!
//! Movement and playback share the clip's paused flag, so they can only start
//! and stop together.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use log::{debug, trace, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::animation::{
    AnimatedVisual, AnimationClip, DEFAULT_FRAME_DURATION, PlayMode,
};
use crate::components::frameatlas::FrameAtlas;
use crate::error::AnimError;
use crate::resources::texturestore::Texture;

/// Translation speed in pixels per second when nothing else is configured.
pub const DEFAULT_SPEED: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit step in world space (y up).
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Right => Vec2::X,
            Direction::Left => Vec2::NEG_X,
            Direction::Up => Vec2::Y,
            Direction::Down => Vec2::NEG_Y,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// A direction key going down or up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionInput {
    pub direction: Direction,
    pub pressed: bool,
}

/// Construction parameters of a directional actor.
///
/// Every field has a default, so data files only need to list what differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionalConfig {
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Rows of the sheet.
    pub rows: u32,
    /// Frames per row.
    pub columns: u32,
    /// Direction shown by each row, top row first. Rows past the end of this
    /// list are not used.
    pub row_directions: Vec<Direction>,
    /// Direction whose clip is attached at construction.
    pub initial_direction: Direction,
    /// Pixels per second while moving.
    pub speed: f32,
    pub play_mode: PlayMode,
    /// Start playing (and moving) before any input arrives.
    pub auto_start: bool,
    /// Receive direction input directly. Ignored for body parts, which get
    /// their input through the body.
    pub input_controlled: bool,
}

impl Default for DirectionalConfig {
    fn default() -> Self {
        Self {
            frame_duration: DEFAULT_FRAME_DURATION,
            rows: 4,
            columns: 9,
            row_directions: vec![
                Direction::Up,
                Direction::Left,
                Direction::Down,
                Direction::Right,
            ],
            initial_direction: Direction::Right,
            speed: DEFAULT_SPEED,
            play_mode: PlayMode::Loop,
            auto_start: false,
            input_controlled: true,
        }
    }
}

impl DirectionalConfig {
    pub fn atlas(&self) -> FrameAtlas {
        FrameAtlas::new(self.rows, self.columns)
    }

    pub fn validate(&self) -> Result<(), AnimError> {
        if self.row_directions.len() > self.rows as usize {
            return Err(AnimError::config(format!(
                "{} row directions for a sheet of {} rows",
                self.row_directions.len(),
                self.rows
            )));
        }
        for (i, dir) in self.row_directions.iter().enumerate() {
            if self.row_directions[..i].contains(dir) {
                return Err(AnimError::config(format!(
                    "direction {:?} is mapped to more than one row",
                    dir
                )));
            }
        }
        if !self.row_directions.contains(&self.initial_direction) {
            return Err(AnimError::config(format!(
                "initial direction {:?} has no row in the sheet",
                self.initial_direction
            )));
        }
        check_speed(self.speed)
    }
}

fn check_speed(speed: f32) -> Result<(), AnimError> {
    if !(speed.is_finite() && speed >= 0.0) {
        return Err(AnimError::config(format!(
            "speed must be a non-negative number, got {}",
            speed
        )));
    }
    Ok(())
}

#[derive(Component, Debug, Clone)]
pub struct DirectionalController {
    /// Clips of every mapped direction except the current one.
    idle_clips: FxHashMap<Direction, AnimationClip>,
    /// Fresh, paused copy of every mapped direction's clip. Identifies the
    /// active clip and replaces it if it went missing.
    layouts: FxHashMap<Direction, AnimationClip>,
    current: Direction,
    speed: f32,
}

impl DirectionalController {
    /// Slice `texture` into one clip per configured row and return the
    /// controller together with the visual holding the initial direction's
    /// clip. The initial clip is paused unless `auto_start` is set.
    pub fn from_sheet(
        texture: &Texture,
        config: &DirectionalConfig,
    ) -> Result<(Self, AnimatedVisual), AnimError> {
        config.validate()?;
        let atlas = config.atlas();
        let mut clips = FxHashMap::default();
        for (row, dir) in config.row_directions.iter().enumerate() {
            let clip = AnimationClip::from_sheet_row(
                texture,
                atlas,
                row as u32,
                config.frame_duration,
                config.play_mode,
            )?;
            clips.insert(*dir, clip);
        }
        Self::new(clips, config.initial_direction, config.speed).into_actor(config.auto_start)
    }

    /// Build from clips made elsewhere. `initial` must be one of the keys and
    /// `speed` a non-negative number.
    pub fn from_clips(
        clips: impl IntoIterator<Item = (Direction, AnimationClip)>,
        initial: Direction,
        speed: f32,
    ) -> Result<(Self, AnimatedVisual), AnimError> {
        check_speed(speed)?;
        Self::new(clips.into_iter().collect(), initial, speed).into_actor(false)
    }

    fn new(clips: FxHashMap<Direction, AnimationClip>, current: Direction, speed: f32) -> Self {
        let layouts = clips
            .iter()
            .map(|(dir, clip)| {
                let mut fresh = clip.clone();
                fresh.reset();
                fresh.pause();
                (*dir, fresh)
            })
            .collect();
        Self {
            idle_clips: clips,
            layouts,
            current,
            speed,
        }
    }

    fn into_actor(mut self, auto_start: bool) -> Result<(Self, AnimatedVisual), AnimError> {
        let Some(mut initial) = self.idle_clips.remove(&self.current) else {
            return Err(AnimError::config(format!(
                "no clip for initial direction {:?}",
                self.current
            )));
        };
        if auto_start {
            initial.play();
        } else {
            initial.pause();
        }
        debug!(
            "Directional actor built with {} directions, facing {:?}",
            self.idle_clips.len() + 1,
            self.current
        );
        Ok((self, AnimatedVisual::new(initial)))
    }

    pub fn current_direction(&self) -> Direction {
        self.current
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn has_direction(&self, direction: Direction) -> bool {
        self.layouts.contains_key(&direction)
    }

    /// Mapped directions, in [`Direction::ALL`] order.
    pub fn directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.has_direction(*d))
            .collect()
    }

    /// The stored clip of a direction that is not the current one.
    pub fn idle_clip(&self, direction: Direction) -> Option<&AnimationClip> {
        self.idle_clips.get(&direction)
    }

    /// Switch to `direction` and start playing. Returns `false`, changing
    /// nothing, when this actor has no clip for `direction`.
    ///
    /// An active clip that is not the current direction's own (disposed or
    /// replaced) is dropped, and the direction gets a fresh clip from its
    /// layout.
    pub fn press(&mut self, direction: Direction, visual: &mut AnimatedVisual) -> bool {
        if !self.has_direction(direction) {
            trace!("Ignoring {:?}: no clip for that direction", direction);
            return false;
        }
        if direction != self.current {
            let Some(clip) = self
                .idle_clips
                .remove(&direction)
                .or_else(|| self.fresh_clip(direction))
            else {
                return false;
            };
            let previous = visual.attach_clip(clip);
            let current = self.current;
            let kept = match previous {
                Some(clip) if self.owns(current, &clip) => Some(clip),
                _ => self.fresh_clip(current),
            };
            if let Some(kept) = kept {
                self.idle_clips.insert(current, kept);
            }
            self.current = direction;
        } else if !visual.clip().is_some_and(|c| self.owns(direction, c)) {
            if let Some(clip) = self.fresh_clip(direction) {
                visual.attach_clip(clip);
            }
        }
        visual.start();
        true
    }

    fn owns(&self, direction: Direction, clip: &AnimationClip) -> bool {
        self.layouts
            .get(&direction)
            .is_some_and(|layout| layout.same_layout(clip))
    }

    fn fresh_clip(&self, direction: Direction) -> Option<AnimationClip> {
        warn!(
            "Clip of {:?} was replaced or disposed; restarting it from frame zero",
            direction
        );
        self.layouts.get(&direction).cloned()
    }

    /// Stop playback and movement without changing direction or rewinding.
    pub fn release(&mut self, visual: &mut AnimatedVisual) {
        visual.stop();
    }

    pub fn apply(&mut self, input: DirectionInput, visual: &mut AnimatedVisual) -> bool {
        if input.pressed {
            self.press(input.direction, visual)
        } else {
            self.release(visual);
            true
        }
    }

    /// Translation for a tick of `dt` seconds: `speed * dt` along the current
    /// direction while the visual is playing, zero otherwise.
    pub fn displacement(&self, visual: &AnimatedVisual, dt: f32) -> Vec2 {
        if visual.is_playing() {
            self.current.unit() * self.speed * dt
        } else {
            Vec2::ZERO
        }
    }
}
