//! Composite body integration tests: input broadcast, lock-step movement,
//! part visibility and teardown.

use bevy_ecs::prelude::*;
use glam::Vec2;

use spritebody::AnimError;
use spritebody::components::animation::AnimatedVisual;
use spritebody::components::compositebody::{BodyConfig, BodyPart, CompositeBody};
use spritebody::components::directional::{Direction, DirectionalController};
use spritebody::components::mapposition::MapPosition;
use spritebody::components::zindex::ZIndex;
use spritebody::events::input::{KeyEvent, register_body_observers, register_input_observers};
use spritebody::resources::input::Key;
use spritebody::resources::texturestore::{TextureLoader, TextureSize, TextureStore};
use spritebody::resources::worldtime::WorldTime;
use spritebody::scene::{
    body_part_visible, despawn_body, place_body, preload_body_textures, spawn_body,
    toggle_body_part,
};
use spritebody::systems::render::{DrawFrame, render_pass};
use spritebody::systems::time::update_world_time;
use spritebody::systems::{add_body_systems, update_schedule};

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Part {
    Body,
    Hair,
    /// Declared but never part of a body.
    Hat,
}

impl BodyPart for Part {
    fn all() -> &'static [Self] {
        &[Part::Body, Part::Hair, Part::Body]
    }

    fn file_name(&self) -> &str {
        match self {
            Part::Body => "body.png",
            Part::Hair => "hair.png",
            Part::Hat => "hat.png",
        }
    }

    fn default_visibility(&self) -> bool {
        !matches!(self, Part::Hair)
    }
}

#[derive(Default)]
struct CountingLoader {
    loads: usize,
}

impl TextureLoader for CountingLoader {
    fn load_texture(&mut self, _filename: &str) -> Result<TextureSize, String> {
        self.loads += 1;
        Ok(TextureSize {
            width: 288,
            height: 128,
        })
    }
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    let mut store = TextureStore::new();
    preload_body_textures::<Part>(&mut store, &mut CountingLoader::default()).unwrap();
    world.insert_resource(store);
    register_input_observers(&mut world);
    register_body_observers::<Part>(&mut world);
    world
}

fn make_schedule() -> Schedule {
    let mut schedule = update_schedule();
    add_body_systems::<Part>(&mut schedule);
    schedule
}

fn spawn(world: &mut World, position: Vec2) -> Entity {
    spawn_body::<Part>(
        world,
        &BodyConfig {
            position,
            ..Default::default()
        },
    )
    .unwrap()
}

fn part(world: &World, body: Entity, part: Part) -> Entity {
    world
        .get::<CompositeBody<Part>>(body)
        .unwrap()
        .part_entity(part)
        .unwrap()
}

fn key(world: &mut World, key: Key, pressed: bool) {
    world.trigger(KeyEvent { key, pressed });
    world.flush();
}

fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
}

#[test]
fn test_preload_loads_each_sheet_once() {
    let mut store = TextureStore::new();
    let mut loader = CountingLoader::default();
    preload_body_textures::<Part>(&mut store, &mut loader).unwrap();
    preload_body_textures::<Part>(&mut store, &mut loader).unwrap();
    assert_eq!(loader.loads, 2);
    assert!(!store.contains("hat.png"));
}

#[test]
fn test_spawn_builds_one_entity_per_distinct_part() {
    let mut world = make_world();
    let body = spawn(&mut world, Vec2::new(5.0, 6.0));

    let composite = world.get::<CompositeBody<Part>>(body).unwrap();
    assert_eq!(composite.len(), 2);
    assert!(composite.contains(Part::Body));
    assert!(composite.contains(Part::Hair));
    assert!(!composite.contains(Part::Hat));

    let body_part = part(&world, body, Part::Body);
    let hair = part(&world, body, Part::Hair);
    assert_eq!(world.get::<ZIndex>(body_part), Some(&ZIndex(0)));
    assert_eq!(world.get::<ZIndex>(hair), Some(&ZIndex(1)));
    for entity in [body_part, hair, body] {
        assert_eq!(
            world.get::<MapPosition>(entity).unwrap().pos,
            Vec2::new(5.0, 6.0)
        );
    }
}

#[test]
fn test_spawn_fails_atomically_without_textures() {
    let mut world = World::new();
    let mut store = TextureStore::new();
    store.load("body.png", &mut CountingLoader::default()).unwrap();
    world.insert_resource(store);

    let result = spawn_body::<Part>(&mut world, &BodyConfig::default());

    assert_eq!(
        result,
        Err(AnimError::TextureNotLoaded("hair.png".to_string()))
    );
    let mut visuals = world.query::<&AnimatedVisual>();
    assert_eq!(visuals.iter(&world).count(), 0);
}

#[test]
fn test_input_moves_all_parts_in_lock_step() {
    let mut world = make_world();
    let body = spawn(&mut world, Vec2::ZERO);
    let mut schedule = make_schedule();

    key(&mut world, Key::D, true);
    tick(&mut world, &mut schedule, 0.25);
    key(&mut world, Key::D, false);
    key(&mut world, Key::W, true);
    tick(&mut world, &mut schedule, 0.5);

    let body_part = part(&world, body, Part::Body);
    let hair = part(&world, body, Part::Hair);
    let a = world.get::<MapPosition>(body_part).unwrap().pos;
    let b = world.get::<MapPosition>(hair).unwrap().pos;
    assert!(approx_eq(a.x, 25.0));
    assert!(approx_eq(a.y, 50.0));
    assert_eq!(a, b);
    // Anchor follows the first part.
    assert_eq!(world.get::<MapPosition>(body).unwrap().pos, a);
    for entity in [body_part, hair] {
        assert_eq!(
            world
                .get::<DirectionalController>(entity)
                .unwrap()
                .current_direction(),
            Direction::Up
        );
    }
}

#[test]
fn test_hidden_part_freezes_but_keeps_moving() {
    let mut world = make_world();
    let body = spawn(&mut world, Vec2::ZERO);
    let mut schedule = make_schedule();
    let body_part = part(&world, body, Part::Body);
    let hair = part(&world, body, Part::Hair);
    assert!(!body_part_visible::<Part>(&world, body, Part::Hair).unwrap());

    key(&mut world, Key::Left, true);
    tick(&mut world, &mut schedule, 0.35);

    let clip_index = |world: &World, e: Entity| {
        world
            .get::<AnimatedVisual>(e)
            .unwrap()
            .clip()
            .unwrap()
            .frame_index()
    };
    assert_eq!(clip_index(&world, body_part), 3);
    assert_eq!(clip_index(&world, hair), 0);
    assert_eq!(
        world.get::<MapPosition>(hair).unwrap().pos,
        world.get::<MapPosition>(body_part).unwrap().pos
    );
}

#[test]
fn test_only_visible_parts_render() {
    let mut world = make_world();
    let body = spawn(&mut world, Vec2::ZERO);

    let mut frames: Vec<DrawFrame> = Vec::new();
    assert_eq!(render_pass(&mut world, &mut frames), 1);
    assert_eq!(&*frames[0].texture, "body.png");

    assert!(toggle_body_part::<Part>(&mut world, body, Part::Hair).unwrap());
    let mut frames: Vec<DrawFrame> = Vec::new();
    assert_eq!(render_pass(&mut world, &mut frames), 2);
    // Painter's order: hair stacks on the body.
    assert_eq!(&*frames[0].texture, "body.png");
    assert_eq!(&*frames[1].texture, "hair.png");
}

#[test]
fn test_toggle_twice_restores_visibility() {
    let mut world = make_world();
    let body = spawn(&mut world, Vec2::ZERO);

    assert!(!toggle_body_part::<Part>(&mut world, body, Part::Body).unwrap());
    assert!(toggle_body_part::<Part>(&mut world, body, Part::Body).unwrap());
    assert!(body_part_visible::<Part>(&world, body, Part::Body).unwrap());
}

#[test]
fn test_toggle_unknown_part_fails() {
    let mut world = make_world();
    let body = spawn(&mut world, Vec2::ZERO);

    assert_eq!(
        toggle_body_part::<Part>(&mut world, body, Part::Hat),
        Err(AnimError::UnknownBodyPart("Hat".to_string()))
    );
}

#[test]
fn test_place_body_moves_anchor_and_parts() {
    let mut world = make_world();
    let body = spawn(&mut world, Vec2::ZERO);

    place_body::<Part>(&mut world, body, Vec2::new(40.0, -8.0)).unwrap();

    for p in [Part::Body, Part::Hair] {
        let entity = part(&world, body, p);
        assert_eq!(
            world.get::<MapPosition>(entity).unwrap().pos,
            Vec2::new(40.0, -8.0)
        );
    }
    assert_eq!(
        world.get::<MapPosition>(body).unwrap().pos,
        Vec2::new(40.0, -8.0)
    );
}

#[test]
fn test_auto_motion_body_walks_without_input() {
    let mut world = make_world();
    let body = spawn_body::<Part>(
        &mut world,
        &BodyConfig {
            auto_motion: true,
            input_controlled: false,
            ..Default::default()
        },
    )
    .unwrap();
    let mut schedule = make_schedule();

    key(&mut world, Key::Down, true);
    tick(&mut world, &mut schedule, 0.5);

    let anchor = world.get::<MapPosition>(body).unwrap().pos;
    assert!(approx_eq(anchor.x, 50.0));
    assert!(approx_eq(anchor.y, 0.0));
}

#[test]
fn test_despawn_body_removes_everything() {
    let mut world = make_world();
    let body = spawn(&mut world, Vec2::ZERO);
    let parts: Vec<Entity> = world
        .get::<CompositeBody<Part>>(body)
        .unwrap()
        .entities()
        .collect();

    despawn_body::<Part>(&mut world, body).unwrap();

    assert!(world.get_entity(body).is_err());
    for entity in parts {
        assert!(world.get_entity(entity).is_err());
    }
    assert!(world.resource::<TextureStore>().contains("hair.png"));
    assert_eq!(
        despawn_body::<Part>(&mut world, body),
        Err(AnimError::MissingEntity(body))
    );
}
