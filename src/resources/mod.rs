//! ECS resources made available to systems.
//!
//! Overview
//! - `gameconfig` – window and actor defaults loaded from an INI file
//! - `input` – key bindings and the set of held keys
//! - `texturestore` – loaded sprite sheets keyed by filename
//! - `worldtime` – simulation time and delta
pub mod gameconfig;
pub mod input;
pub mod texturestore;
pub mod worldtime;
