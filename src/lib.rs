//! Sprite-sheet actors for a 2D `bevy_ecs` scene.
//!
//! Turns sprite sheets into animated entities, gives them a four-direction
//! walk cycle driven by key events, and composes several of them into one
//! multi-part body that moves and animates in lock-step.
//!
//! - [`components`] – clips, visuals, directional controllers, bodies, transform
//! - [`events`] – key and direction events with their routing observers
//! - [`resources`] – texture store, key bindings, time, configuration
//! - [`scene`] – spawning and tearing down actors and bodies
//! - [`systems`] – per-frame update and the render pass
//! - `backend` – raylib texture loading, drawing and key polling (feature `raylib`)

pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod scene;
pub mod systems;

#[cfg(feature = "raylib")]
pub mod backend;

pub use error::AnimError;
