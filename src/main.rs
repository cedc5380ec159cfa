//! spritebody demo host.
//!
//! Opens a raylib window, spawns a two-part body (body and hair) driven by
//! WASD or the arrow keys, and optionally a standalone actor from `--sheet`.
//! Space toggles the hair, Escape quits.
//!
//! ```sh
//! cargo run --release --features raylib -- --sheet assets/textures/body.png
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec2;
use log::{error, info};
use raylib::prelude::*;

use spritebody::AnimError;
use spritebody::backend::{RaylibBatch, RaylibLoader, RaylibTextures, poll_key_events};
use spritebody::components::compositebody::{BodyConfig, BodyPart};
use spritebody::events::input::{register_body_observers, register_input_observers};
use spritebody::resources::gameconfig::GameConfig;
use spritebody::resources::input::Key;
use spritebody::resources::texturestore::TextureStore;
use spritebody::resources::worldtime::WorldTime;
use spritebody::scene::{
    preload_body_textures, spawn_body, spawn_directional_actor, toggle_body_part,
};
use spritebody::systems::render::render_pass;
use spritebody::systems::time::update_world_time;
use spritebody::systems::{add_body_systems, update_schedule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum DemoPart {
    Body,
    Hair,
}

impl BodyPart for DemoPart {
    fn all() -> &'static [Self] {
        &[DemoPart::Body, DemoPart::Hair]
    }

    fn file_name(&self) -> &str {
        match self {
            DemoPart::Body => "assets/textures/body.png",
            DemoPart::Hair => "assets/textures/hair.png",
        }
    }
}

/// Sprite-sheet body demo
#[derive(Parser)]
#[command(version, about = "Walk a multi-part sprite-sheet body around the window.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Extra sheet spawned as a standalone actor next to the body.
    #[arg(long, value_name = "PATH")]
    sheet: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AnimError> {
    let mut config = GameConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        info!("Using default configuration: {e}");
    }
    let (width, height) = config.window_size();

    let (mut rl, thread) = raylib::init()
        .size(width as i32, height as i32)
        .title("spritebody")
        .build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(config);
    register_input_observers(&mut world);
    register_body_observers::<DemoPart>(&mut world);

    let mut textures = RaylibTextures::new();
    let mut store = TextureStore::new();
    {
        let mut loader = RaylibLoader {
            rl: &mut rl,
            thread: &thread,
            textures: &mut textures,
        };
        preload_body_textures::<DemoPart>(&mut store, &mut loader)?;
        if let Some(sheet) = cli.sheet.as_deref() {
            store.load(sheet, &mut loader)?;
        }
    }
    world.insert_resource(store);

    let actor = world.resource::<GameConfig>().actor_defaults();
    let body = spawn_body::<DemoPart>(
        &mut world,
        &BodyConfig {
            position: Vec2::new(width as f32 / 2.0, height as f32 / 2.0),
            actor: actor.clone(),
            ..Default::default()
        },
    )?;
    if let Some(sheet) = cli.sheet.as_deref() {
        let mut standalone = actor;
        standalone.auto_start = true;
        standalone.input_controlled = false;
        spawn_directional_actor(
            &mut world,
            sheet,
            Vec2::new(width as f32 / 4.0, height as f32 / 2.0),
            &standalone,
        )?;
    }

    let mut update = update_schedule();
    add_body_systems::<DemoPart>(&mut update);

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);

        let mut quit = false;
        for event in poll_key_events(&rl) {
            if event.pressed {
                match event.key {
                    Key::Escape => quit = true,
                    Key::Space => {
                        let visible = toggle_body_part(&mut world, body, DemoPart::Hair)?;
                        info!("Hair visible: {visible}");
                    }
                    _ => {}
                }
            }
            world.trigger(event);
        }
        world.flush();
        if quit {
            break;
        }

        update.run(&mut world);

        let screen_height = rl.get_screen_height() as f32;
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::DARKGRAY);
        let mut batch = RaylibBatch {
            draw: &mut d,
            textures: &textures,
            screen_height,
        };
        render_pass(&mut world, &mut batch);
    }

    info!("Bye");
    Ok(())
}
