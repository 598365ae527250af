//! Headless frontend that solves every level along its shortest path.

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use labyrinth_controller::Controller;
use labyrinth_core::{Direction, GameState, Position};
use tracing::info;

/// Outcome of an autoplay session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AutoplaySummary {
    /// Levels completed.
    pub(crate) levels: u32,
    /// Accepted moves across all levels.
    pub(crate) moves: u32,
    /// Simulated time the session took.
    pub(crate) elapsed: Duration,
}

/// Plays from the start screen until the final screen is shown.
pub(crate) fn run(controller: &mut Controller) -> Result<AutoplaySummary> {
    let config = controller.config().clone();
    let mut elapsed = Duration::ZERO;
    let mut levels = 0;
    let mut moves = 0;
    let mut advance = |controller: &mut Controller, dt: Duration| -> Result<()> {
        elapsed += dt;
        controller.advance(dt).context("failed to advance the game clock")
    };

    controller.render().context("failed to render the start screen")?;
    controller
        .start_requested()
        .context("failed to start the game")?;
    advance(controller, config.screen_transition())?;

    loop {
        expect_state(controller, GameState::LevelGameplay)?;
        let level = controller.level();
        let maze = controller.maze();
        let path = maze
            .shortest_path(controller.player_position(), maze.end_point())
            .ok_or_else(|| anyhow!("level {level} has no path to its exit"))?;

        for pair in path.windows(2) {
            let direction = step_direction(pair[0], pair[1]).ok_or_else(|| {
                anyhow!("path cells {:?} and {:?} are not adjacent", pair[0], pair[1])
            })?;
            controller
                .directional_input(direction)
                .context("failed to move the player")?;
            moves += 1;
            advance(controller, config.move_settle())?;
        }

        levels += 1;
        info!(level, steps = path.len().saturating_sub(1), "level solved");

        match controller.state() {
            GameState::FinalLevelComplete => break,
            GameState::LevelComplete => {
                advance(controller, config.level_complete_pause())?;
                advance(controller, config.screen_transition())?;
            }
            other => bail!("unexpected state {other:?} after reaching the exit"),
        }
    }

    Ok(AutoplaySummary {
        levels,
        moves,
        elapsed,
    })
}

fn expect_state(controller: &Controller, expected: GameState) -> Result<()> {
    let actual = controller.state();
    if actual != expected {
        bail!("expected {expected:?} but the game is in {actual:?}");
    }
    Ok(())
}

fn step_direction(from: Position, to: Position) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|direction| from.step(*direction) == to)
}
