//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – animation clips and the animated-visual capability
//! - [`compositebody`] – multi-part bodies keyed by a caller enumeration
//! - [`directional`] – four-direction controller swapping clips on input
//! - [`frameatlas`] – slicing sprite sheets into frame rectangles
//! - [`inputcontrolled`] – marker for entities that receive direction input
//! - [`mapposition`] – world-space position (y up)
//! - [`rotation`] – rotation angle in degrees
//! - [`scale`] – 2D scale factor
//! - [`tint`] – color modulation applied when drawing
//! - [`visibility`] – per-entity visibility flag
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod compositebody;
pub mod directional;
pub mod frameatlas;
pub mod inputcontrolled;
pub mod mapposition;
pub mod rotation;
pub mod scale;
pub mod tint;
pub mod visibility;
pub mod zindex;
