//! Keyboard resources.
//!
//! - [`InputBindings`] is the mapping layer between host key codes and the
//!   four [`Direction`]s. Keys without a binding never reach an actor.
//! - [`KeyboardState`] tracks which keys are currently held, so game code can
//!   ask whether a key (or any key) is down without listening to events.
//!
//! Defaults use WASD and the arrow keys for the same four directions.
use bevy_ecs::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::components::directional::Direction;

/// Abstract key code. Backends translate their own key enums into this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Escape,
    Space,
    Enter,
    Other(u32),
}

/// Key → direction map.
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    map: FxHashMap<Key, Direction>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(Key::W, Direction::Up);
        bindings.bind(Key::Up, Direction::Up);
        bindings.bind(Key::S, Direction::Down);
        bindings.bind(Key::Down, Direction::Down);
        bindings.bind(Key::A, Direction::Left);
        bindings.bind(Key::Left, Direction::Left);
        bindings.bind(Key::D, Direction::Right);
        bindings.bind(Key::Right, Direction::Right);
        bindings
    }
}

impl InputBindings {
    pub fn empty() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Bind `key` to `direction`, replacing any previous binding of `key`.
    pub fn bind(&mut self, key: Key, direction: Direction) {
        self.map.insert(key, direction);
    }

    pub fn unbind(&mut self, key: Key) -> Option<Direction> {
        self.map.remove(&key)
    }

    pub fn direction_for(&self, key: Key) -> Option<Direction> {
        self.map.get(&key).copied()
    }

    /// Keys currently bound to `direction`.
    pub fn keys_for(&self, direction: Direction) -> Vec<Key> {
        self.map
            .iter()
            .filter(|(_, d)| **d == direction)
            .map(|(k, _)| *k)
            .collect()
    }
}

/// Set of keys currently held down.
#[derive(Resource, Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: FxHashSet<Key>,
}

impl KeyboardState {
    /// Mark `key` as held. Returns `false` if it already was (key repeat).
    pub fn press(&mut self, key: Key) -> bool {
        self.pressed.insert(key)
    }

    pub fn release(&mut self, key: Key) -> bool {
        self.pressed.remove(&key)
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn any_pressed(&self) -> bool {
        !self.pressed.is_empty()
    }

    pub fn pressed_count(&self) -> usize {
        self.pressed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = InputBindings::default();
        assert_eq!(bindings.direction_for(Key::W), Some(Direction::Up));
        assert_eq!(bindings.direction_for(Key::Up), Some(Direction::Up));
        assert_eq!(bindings.direction_for(Key::S), Some(Direction::Down));
        assert_eq!(bindings.direction_for(Key::A), Some(Direction::Left));
        assert_eq!(bindings.direction_for(Key::Right), Some(Direction::Right));
        assert_eq!(bindings.direction_for(Key::Space), None);
        assert_eq!(bindings.direction_for(Key::Other(42)), None);
        assert_eq!(bindings.keys_for(Direction::Left).len(), 2);
    }

    #[test]
    fn test_rebind_and_unbind() {
        let mut bindings = InputBindings::default();
        bindings.bind(Key::W, Direction::Down);
        assert_eq!(bindings.direction_for(Key::W), Some(Direction::Down));
        assert_eq!(bindings.unbind(Key::W), Some(Direction::Down));
        assert_eq!(bindings.direction_for(Key::W), None);
    }

    #[test]
    fn test_keyboard_state_tracks_held_keys() {
        let mut keyboard = KeyboardState::default();
        assert!(!keyboard.any_pressed());
        assert!(keyboard.press(Key::D));
        assert!(!keyboard.press(Key::D));
        keyboard.press(Key::Space);
        assert_eq!(keyboard.pressed_count(), 2);
        assert!(keyboard.is_pressed(Key::D));
        assert!(keyboard.release(Key::D));
        assert!(!keyboard.is_pressed(Key::D));
        assert!(keyboard.any_pressed());
    }
}
