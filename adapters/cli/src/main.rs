#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Labyrinth game.

mod autoplay;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use labyrinth_controller::Controller;
use labyrinth_rendering::{Color, Presentation, RenderingBackend, Scene};
use labyrinth_rendering_macroquad::MacroquadBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

use self::config::Overrides;

/// Command-line arguments accepted by the Labyrinth binary.
#[derive(Debug, Parser)]
#[command(name = "labyrinth", version, about = "Guide the player through ever larger mazes")]
struct CliArgs {
    /// TOML file with game settings.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Number of levels to play before the final screen.
    #[arg(long, value_name = "COUNT")]
    levels: Option<u32>,
    /// Seed for maze generation; mazes are random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Solve every level without opening a window.
    #[arg(long)]
    autoplay: bool,
    /// Print the frame rate once per second.
    #[arg(long)]
    show_fps: bool,
}

/// Entry point for the Labyrinth command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();
    let config = config::apply_overrides(
        config::load(args.config.as_deref())?,
        Overrides {
            levels: args.levels,
            seed: args.seed,
        },
    );
    let mut controller = Controller::new(config).context("failed to create the game")?;

    if args.autoplay {
        let summary = autoplay::run(&mut controller)?;
        println!(
            "{}: solved {} levels in {} moves ({:.1}s simulated)",
            controller.welcome_banner(),
            summary.levels,
            summary.moves,
            summary.elapsed.as_secs_f32(),
        );
        return Ok(());
    }

    run_window(controller, args.show_fps)
}

fn run_window(mut controller: Controller, show_fps: bool) -> Result<()> {
    controller
        .render()
        .context("failed to render the start screen")?;
    let mut scene = Scene::new();
    for command in controller.drain_view_commands() {
        scene.apply(command);
    }

    info!("opening game window");
    let presentation = Presentation::new(
        controller.welcome_banner(),
        Color::from_rgb_u8(24, 26, 32),
        controller.config().screen_transition(),
        scene,
    );

    MacroquadBackend::new()
        .with_vsync(true)
        .with_show_fps(show_fps)
        .run(presentation, move |dt, input, scene| {
            controller
                .handle_input(&input)
                .context("failed to handle player input")?;
            controller
                .advance(dt)
                .context("failed to advance the game clock")?;
            for command in controller.drain_view_commands() {
                scene.apply(command);
            }
            Ok(())
        })
}
