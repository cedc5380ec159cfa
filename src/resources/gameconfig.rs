//! Game configuration resource.
//!
//! Window settings and actor defaults loaded from an INI configuration file.
//! Every value has a safe default so the host can start without a file.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 480
//! target_fps = 60
//!
//! [animation]
//! frame_duration = 0.1
//! speed = 100
//! columns = 9
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::animation::DEFAULT_FRAME_DURATION;
use crate::components::directional::{DEFAULT_SPEED, DirectionalConfig};
use crate::error::AnimError;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 480;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_COLUMNS: u32 = 9;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Seconds per animation frame.
    pub frame_duration: f32,
    /// Walking speed in pixels per second.
    pub speed: f32,
    /// Frames per row of the directional sheets.
    pub columns: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            frame_duration: DEFAULT_FRAME_DURATION,
            speed: DEFAULT_SPEED,
            columns: DEFAULT_COLUMNS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    fn file_error(&self, reason: impl Into<String>) -> AnimError {
        AnimError::ConfigFile {
            path: self.config_path.clone(),
            reason: reason.into(),
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), AnimError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| self.file_error(e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [animation] section
        if let Some(duration) = config.getfloat("animation", "frame_duration").ok().flatten() {
            self.frame_duration = duration as f32;
        }
        if let Some(speed) = config.getfloat("animation", "speed").ok().flatten() {
            self.speed = speed as f32;
        }
        if let Some(columns) = config.getuint("animation", "columns").ok().flatten() {
            self.columns = columns as u32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, frame_duration={}, speed={}, columns={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.frame_duration,
            self.speed,
            self.columns
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), AnimError> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [animation] section
        config.set(
            "animation",
            "frame_duration",
            Some(self.frame_duration.to_string()),
        );
        config.set("animation", "speed", Some(self.speed.to_string()));
        config.set("animation", "columns", Some(self.columns.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| self.file_error(e.to_string()))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Directional actor settings derived from the `[animation]` section.
    pub fn actor_defaults(&self) -> DirectionalConfig {
        DirectionalConfig {
            frame_duration: self.frame_duration,
            columns: self.columns,
            speed: self.speed,
            ..DirectionalConfig::default()
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
