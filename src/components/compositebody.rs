//! Multi-part directional body.
//!
//! A body is a root entity carrying [`CompositeBody`] plus one directional
//! actor entity per [`BodyPart`]. Every part is built from its own sheet with
//! the same layout, receives the same input (broadcast from the root) and
//! therefore animates and moves in lock-step with the others. Visibility is
//! per part and does not affect input handling or movement.
//!
//! See [`crate::scene::spawn_body`] for construction and
//! [`crate::scene::toggle_body_part`] for visibility changes.

use std::fmt::Debug;
use std::hash::Hash;

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec2;

use crate::components::directional::DirectionalConfig;
use crate::error::AnimError;

/// Caller-defined enumeration of the parts of a body.
///
/// ```ignore
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum Knight { Body, Armor, Cape }
///
/// impl BodyPart for Knight {
///     fn all() -> &'static [Self] { &[Knight::Body, Knight::Armor, Knight::Cape] }
///     fn file_name(&self) -> &str {
///         match self {
///             Knight::Body => "knight/body.png",
///             Knight::Armor => "knight/armor.png",
///             Knight::Cape => "knight/cape.png",
///         }
///     }
///     fn default_visibility(&self) -> bool { !matches!(self, Knight::Cape) }
/// }
/// ```
pub trait BodyPart: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every part, in draw order (first is drawn at the bottom).
    fn all() -> &'static [Self];

    /// Sprite sheet of this part.
    fn file_name(&self) -> &str;

    fn default_visibility(&self) -> bool {
        true
    }
}

/// Parameters shared by every part of a body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyConfig {
    /// Where every part starts; also the body's anchor.
    pub position: Vec2,
    /// Start every part's animation immediately.
    pub auto_motion: bool,
    /// Route direction input to the body.
    pub input_controlled: bool,
    /// ZIndex of the first part; later parts stack on top.
    pub z_base: i32,
    /// Sheet layout, timing and speed of each part.
    pub actor: DirectionalConfig,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            auto_motion: false,
            input_controlled: true,
            z_base: 0,
            actor: DirectionalConfig::default(),
        }
    }
}

/// Part id → part entity, in [`BodyPart::all`] order.
#[derive(Component, Debug, Clone)]
pub struct CompositeBody<P: BodyPart> {
    parts: Vec<(P, Entity)>,
}

impl<P: BodyPart> CompositeBody<P> {
    pub(crate) fn new(parts: Vec<(P, Entity)>) -> Self {
        Self { parts }
    }

    pub fn part_entity(&self, part: P) -> Result<Entity, AnimError> {
        self.parts
            .iter()
            .find(|(p, _)| *p == part)
            .map(|(_, e)| *e)
            .ok_or_else(|| AnimError::UnknownBodyPart(format!("{:?}", part)))
    }

    pub fn contains(&self, part: P) -> bool {
        self.parts.iter().any(|(p, _)| *p == part)
    }

    pub fn parts(&self) -> impl Iterator<Item = (P, Entity)> + '_ {
        self.parts.iter().copied()
    }

    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.parts.iter().map(|(_, e)| *e)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Distinct parts of `P`, first occurrence wins.
pub fn distinct_parts<P: BodyPart>() -> Vec<P> {
    let mut parts: Vec<P> = Vec::with_capacity(P::all().len());
    for part in P::all() {
        if !parts.contains(part) {
            parts.push(*part);
        }
    }
    parts
}
