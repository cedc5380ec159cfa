//! Error type shared by the animation core.
//!
//! Construction failures ([`AnimError::Configuration`]), body-part lookups
//! ([`AnimError::UnknownBodyPart`]) and texture cache misses
//! ([`AnimError::TextureNotLoaded`]) are surfaced synchronously to the caller.
//! Nothing here is retried.

use bevy_ecs::entity::Entity;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimError {
    /// Invalid clip, atlas or actor configuration. Fatal to the construction
    /// that reported it.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A body-part id that the composite does not own.
    #[error("unknown body part: {0}")]
    UnknownBodyPart(String),

    /// The entity handle no longer refers to a live actor or body.
    #[error("entity {0} is not an actor of this world")]
    MissingEntity(Entity),

    /// A clip was requested for a texture that is not in the store.
    #[error("texture '{0}' is not loaded")]
    TextureNotLoaded(String),

    /// The backend failed to load a texture file.
    #[error("failed to load texture '{filename}': {reason}")]
    TextureLoad { filename: String, reason: String },

    /// Reading or writing the configuration file failed.
    #[error("config file {path:?}: {reason}")]
    ConfigFile { path: PathBuf, reason: String },
}

impl AnimError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        AnimError::Configuration(msg.into())
    }
}
