//! Per-entity visibility flag.
//!
//! A hidden entity is skipped by the render pass and its clip does not
//! advance (see [`animation_tick`](crate::systems::animation::animation_tick)).
//! Entities without this component are treated as visible.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub visible: bool,
}

impl Visibility {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// Visibility of an entity that may lack the component.
pub fn is_visible(visibility: Option<&Visibility>) -> bool {
    visibility.is_none_or(|v| v.visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut v = Visibility::new(false);
        assert!(v.toggle());
        assert!(!v.toggle());
        assert_eq!(v, Visibility::new(false));
    }

    #[test]
    fn test_missing_component_is_visible() {
        assert!(is_visible(None));
        assert!(!is_visible(Some(&Visibility::new(false))));
    }
}
