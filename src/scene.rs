//! Scene membership: spawning and tearing down actors and bodies.
//!
//! Every builder here validates and slices all sheets before touching the
//! world, so a failed construction leaves nothing behind.
//!
//! Textures must already be in the [`TextureStore`] resource; use
//! [`preload_body_textures`] or [`TextureStore::load`] first.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::animation::AnimatedVisual;
use crate::components::compositebody::{BodyConfig, BodyPart, CompositeBody, distinct_parts};
use crate::components::directional::{DirectionalConfig, DirectionalController};
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::tint::Tint;
use crate::components::visibility::Visibility;
use crate::components::zindex::ZIndex;
use crate::error::AnimError;
use crate::resources::texturestore::{TextureLoader, TextureStore};

/// Spawn a single directional actor from `texture` (a store key).
pub fn spawn_directional_actor(
    world: &mut World,
    texture: &str,
    position: Vec2,
    config: &DirectionalConfig,
) -> Result<Entity, AnimError> {
    let sheet = world.resource::<TextureStore>().get(texture)?;
    let (controller, visual) = DirectionalController::from_sheet(&sheet, config)?;
    let mut entity = world.spawn((
        visual,
        controller,
        MapPosition {
            pos: position,
        },
        Rotation::default(),
        Scale::default(),
        Tint::default(),
        Visibility::default(),
        ZIndex::default(),
    ));
    if config.input_controlled {
        entity.insert(InputControlled);
    }
    let id = entity.id();
    debug!("Spawned directional actor {} from '{}'", id, texture);
    Ok(id)
}

/// Load the sheet of every part of `P`.
pub fn preload_body_textures<P: BodyPart>(
    store: &mut TextureStore,
    loader: &mut impl TextureLoader,
) -> Result<(), AnimError> {
    store.load_all(distinct_parts::<P>().iter().map(|p| p.file_name()), loader)
}

/// Spawn a body: one directional actor per distinct part of `P`, plus a root
/// entity holding the [`CompositeBody`] and the anchor position.
pub fn spawn_body<P: BodyPart>(world: &mut World, config: &BodyConfig) -> Result<Entity, AnimError> {
    let parts = distinct_parts::<P>();
    let mut built = Vec::with_capacity(parts.len());
    {
        let store = world.resource::<TextureStore>();
        for part in &parts {
            let sheet = store.get(part.file_name())?;
            let (controller, mut visual) = DirectionalController::from_sheet(&sheet, &config.actor)?;
            if config.auto_motion {
                visual.start();
            }
            built.push((*part, controller, visual));
        }
    }

    let mut entries = Vec::with_capacity(built.len());
    for (i, (part, controller, visual)) in built.into_iter().enumerate() {
        let entity = world
            .spawn((
                visual,
                controller,
                MapPosition {
                    pos: config.position,
                },
                Rotation::default(),
                Scale::default(),
                Tint::default(),
                Visibility::new(part.default_visibility()),
                ZIndex(config.z_base + i as i32),
            ))
            .id();
        entries.push((part, entity));
    }

    let mut root = world.spawn((
        CompositeBody::new(entries),
        MapPosition {
            pos: config.position,
        },
    ));
    if config.input_controlled {
        root.insert(InputControlled);
    }
    let id = root.id();
    debug!("Spawned body {} with {} parts", id, parts.len());
    Ok(id)
}

fn body_of<P: BodyPart>(world: &World, body: Entity) -> Result<&CompositeBody<P>, AnimError> {
    world
        .get::<CompositeBody<P>>(body)
        .ok_or(AnimError::MissingEntity(body))
}

/// Flip the visibility of one part and return its new value.
pub fn toggle_body_part<P: BodyPart>(
    world: &mut World,
    body: Entity,
    part: P,
) -> Result<bool, AnimError> {
    let entity = body_of::<P>(world, body)?.part_entity(part)?;
    let mut visibility = world
        .get_mut::<Visibility>(entity)
        .ok_or(AnimError::MissingEntity(entity))?;
    Ok(visibility.toggle())
}

pub fn body_part_visible<P: BodyPart>(
    world: &World,
    body: Entity,
    part: P,
) -> Result<bool, AnimError> {
    let entity = body_of::<P>(world, body)?.part_entity(part)?;
    world
        .get::<Visibility>(entity)
        .map(|v| v.visible)
        .ok_or(AnimError::MissingEntity(entity))
}

/// Move the anchor and every part of `body` to `position`.
pub fn place_body<P: BodyPart>(
    world: &mut World,
    body: Entity,
    position: Vec2,
) -> Result<(), AnimError> {
    let entities: Vec<Entity> = body_of::<P>(world, body)?.entities().collect();
    for entity in entities.into_iter().chain(std::iter::once(body)) {
        if let Some(mut pos) = world.get_mut::<MapPosition>(entity) {
            pos.pos = position;
        }
    }
    Ok(())
}

/// Dispose the actor's clip and remove it from the world.
pub fn despawn_actor(world: &mut World, entity: Entity) -> Result<(), AnimError> {
    {
        let mut visual = world
            .get_mut::<AnimatedVisual>(entity)
            .ok_or(AnimError::MissingEntity(entity))?;
        visual.dispose();
    }
    world.despawn(entity);
    debug!("Despawned actor {}", entity);
    Ok(())
}

/// Dispose and remove every part of `body`, then the body root. Textures stay
/// in the store.
pub fn despawn_body<P: BodyPart>(world: &mut World, body: Entity) -> Result<(), AnimError> {
    let entities: Vec<Entity> = body_of::<P>(world, body)?.entities().collect();
    for entity in entities {
        if let Some(mut visual) = world.get_mut::<AnimatedVisual>(entity) {
            visual.dispose();
        }
        world.despawn(entity);
    }
    world.despawn(body);
    debug!("Despawned body {}", body);
    Ok(())
}
