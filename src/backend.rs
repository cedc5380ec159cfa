//! raylib host backend (feature `raylib`).
//!
//! - [`RaylibTextures`] keeps the GPU textures; [`RaylibLoader`] fills it and
//!   is the [`TextureLoader`] handed to the
//!   [`TextureStore`](crate::resources::texturestore::TextureStore).
//! - [`RaylibBatch`] draws [`DrawFrame`]s with `draw_texture_pro`, flipping the
//!   y-up world onto raylib's y-down screen.
//! - [`poll_key_events`] turns raylib key transitions into [`KeyEvent`]s.

use ::raylib::prelude::*;
use log::warn;
use rustc_hash::FxHashMap;

use crate::events::input::KeyEvent;
use crate::resources::input::Key;
use crate::resources::texturestore::{TextureLoader, TextureSize};
use crate::systems::render::{DrawFrame, FrameBatch};

/// GPU textures keyed like the store. Dropping a texture unloads it.
#[derive(Default)]
pub struct RaylibTextures {
    map: FxHashMap<String, Texture2D>,
}

impl RaylibTextures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}

pub struct RaylibLoader<'a> {
    pub rl: &'a mut RaylibHandle,
    pub thread: &'a RaylibThread,
    pub textures: &'a mut RaylibTextures,
}

impl TextureLoader for RaylibLoader<'_> {
    fn load_texture(&mut self, filename: &str) -> Result<TextureSize, String> {
        let texture = self
            .rl
            .load_texture(self.thread, filename)
            .map_err(|e| e.to_string())?;
        let size = TextureSize {
            width: texture.width as u32,
            height: texture.height as u32,
        };
        self.textures.map.insert(filename.to_string(), texture);
        Ok(size)
    }

    fn unload_texture(&mut self, filename: &str) {
        self.textures.map.remove(filename);
    }
}

pub struct RaylibBatch<'a, D: RaylibDraw> {
    pub draw: &'a mut D,
    pub textures: &'a RaylibTextures,
    /// Screen height in pixels, used to flip the y axis.
    pub screen_height: f32,
}

impl<D: RaylibDraw> FrameBatch for RaylibBatch<'_, D> {
    fn draw_frame(&mut self, frame: &DrawFrame) {
        let Some(texture) = self.textures.get(&frame.texture) else {
            warn!("No GPU texture for '{}'", frame.texture);
            return;
        };
        let src = Rectangle {
            x: frame.source.x as f32,
            y: frame.source.y as f32,
            width: frame.source.width as f32,
            height: frame.source.height as f32,
        };
        // World pivot, then the same point on screen.
        let pivot = frame.position + frame.origin;
        let dest = Rectangle {
            x: pivot.x,
            y: self.screen_height - pivot.y,
            width: frame.size.x * frame.scale.x,
            height: frame.size.y * frame.scale.y,
        };
        let origin = Vector2 {
            x: frame.origin.x * frame.scale.x,
            y: (frame.size.y - frame.origin.y) * frame.scale.y,
        };
        let tint = Color::new(frame.tint.r, frame.tint.g, frame.tint.b, frame.tint.a);
        self.draw
            .draw_texture_pro(texture, src, dest, origin, -frame.rotation, tint);
    }
}

const POLLED_KEYS: [(KeyboardKey, Key); 11] = [
    (KeyboardKey::KEY_W, Key::W),
    (KeyboardKey::KEY_A, Key::A),
    (KeyboardKey::KEY_S, Key::S),
    (KeyboardKey::KEY_D, Key::D),
    (KeyboardKey::KEY_UP, Key::Up),
    (KeyboardKey::KEY_DOWN, Key::Down),
    (KeyboardKey::KEY_LEFT, Key::Left),
    (KeyboardKey::KEY_RIGHT, Key::Right),
    (KeyboardKey::KEY_ESCAPE, Key::Escape),
    (KeyboardKey::KEY_SPACE, Key::Space),
    (KeyboardKey::KEY_ENTER, Key::Enter),
];

/// Key transitions since the previous frame, presses before releases.
pub fn poll_key_events(rl: &RaylibHandle) -> Vec<KeyEvent> {
    let mut events = Vec::new();
    for (rl_key, key) in POLLED_KEYS {
        if rl.is_key_pressed(rl_key) {
            events.push(KeyEvent { key, pressed: true });
        }
    }
    for (rl_key, key) in POLLED_KEYS {
        if rl.is_key_released(rl_key) {
            events.push(KeyEvent {
                key,
                pressed: false,
            });
        }
    }
    events
}
