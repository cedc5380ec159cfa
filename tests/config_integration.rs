//! Actor configuration loaded from data: JSON layouts and the INI game
//! configuration feeding actor spawning.

use std::io::Write;

use bevy_ecs::prelude::*;
use glam::Vec2;

use spritebody::AnimError;
use spritebody::components::animation::{AnimatedVisual, PlayMode};
use spritebody::components::directional::{Direction, DirectionalConfig, DirectionalController};
use spritebody::resources::gameconfig::GameConfig;
use spritebody::resources::texturestore::{TextureLoader, TextureSize, TextureStore};
use spritebody::scene::spawn_directional_actor;

struct WideSheetLoader;

impl TextureLoader for WideSheetLoader {
    fn load_texture(&mut self, _filename: &str) -> Result<TextureSize, String> {
        Ok(TextureSize {
            width: 192,
            height: 64,
        })
    }
}

fn make_world() -> World {
    let mut world = World::new();
    let mut store = TextureStore::new();
    store.load("npc.png", &mut WideSheetLoader).unwrap();
    world.insert_resource(store);
    world
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config: DirectionalConfig =
        serde_json::from_str(r#"{ "speed": 60.0, "initial_direction": "Down" }"#).unwrap();

    assert_eq!(config.speed, 60.0);
    assert_eq!(config.initial_direction, Direction::Down);
    assert_eq!(config.rows, 4);
    assert_eq!(config.columns, 9);
    assert_eq!(config.play_mode, PlayMode::Loop);
    assert!(config.input_controlled);
}

#[test]
fn test_json_layout_drives_slicing() {
    let json = r#"{
        "rows": 2,
        "columns": 6,
        "row_directions": ["Left", "Right"],
        "initial_direction": "Left",
        "play_mode": "Once",
        "frame_duration": 0.2
    }"#;
    let config: DirectionalConfig = serde_json::from_str(json).unwrap();
    let mut world = make_world();

    let actor = spawn_directional_actor(&mut world, "npc.png", Vec2::ZERO, &config).unwrap();

    let visual = world.get::<AnimatedVisual>(actor).unwrap();
    assert_eq!((visual.width, visual.height), (32.0, 32.0));
    let clip = visual.clip().unwrap();
    assert_eq!(clip.frame_count(), 6);
    assert_eq!(clip.play_mode(), PlayMode::Once);
    assert_eq!(clip.current_frame().y, 0);
    let ctrl = world.get::<DirectionalController>(actor).unwrap();
    assert_eq!(ctrl.directions(), vec![Direction::Right, Direction::Left]);
    assert_eq!(ctrl.idle_clip(Direction::Right).unwrap().frames()[0].y, 32);
}

#[test]
fn test_invalid_layout_is_rejected() {
    let config: DirectionalConfig =
        serde_json::from_str(r#"{ "row_directions": ["Up", "Up"] }"#).unwrap();
    let mut world = make_world();

    let result = spawn_directional_actor(&mut world, "npc.png", Vec2::ZERO, &config);

    assert!(matches!(result, Err(AnimError::Configuration(_))));
}

#[test]
fn test_ini_defaults_reach_spawned_actor() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[animation]\nframe_duration = 0.05\nspeed = 40\ncolumns = 6").unwrap();
    let mut config = GameConfig::with_path(file.path());
    config.load_from_file().unwrap();

    let mut world = make_world();
    world.insert_resource(config);
    let actor_config = DirectionalConfig {
        rows: 2,
        row_directions: vec![Direction::Up, Direction::Right],
        ..world.resource::<GameConfig>().actor_defaults()
    };
    let actor = spawn_directional_actor(&mut world, "npc.png", Vec2::ZERO, &actor_config).unwrap();

    let ctrl = world.get::<DirectionalController>(actor).unwrap();
    assert_eq!(ctrl.speed(), 40.0);
    let clip = world.get::<AnimatedVisual>(actor).unwrap().clip().unwrap();
    assert_eq!(clip.frame_count(), 6);
    assert_eq!(clip.frame_duration(), 0.05);
}
