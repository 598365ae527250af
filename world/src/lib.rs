#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Labyrinth.
//!
//! The world owns the maze, the player, the level counter and the current
//! [`GameState`]. It is mutated exclusively through [`apply`], which resolves
//! each command against the transition table and reports what happened as
//! [`Event`] values.

mod flow;
mod maze;
mod player;

use std::time::Duration;

use labyrinth_core::{
    Command, Event, GameConfig, GameState, Timer, TransitionToken, FIRST_LEVEL,
    INITIAL_MAZE_SIZE, WELCOME_BANNER,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use self::flow::{Transition, Trigger};

pub use self::maze::{Cell, Maze, MazeError};
pub use self::player::Player;

/// Represents the authoritative Labyrinth world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    config: GameConfig,
    state: GameState,
    level: u32,
    maze_size: u32,
    maze: Maze,
    player: Player,
    rng: ChaCha8Rng,
}

impl World {
    /// Creates a world that has not rendered anything yet.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Self {
            banner: WELCOME_BANNER,
            config,
            state: GameState::NotStarted,
            level: FIRST_LEVEL,
            maze_size: INITIAL_MAZE_SIZE,
            maze: Maze::default(),
            player: Player::default(),
            rng,
        }
    }

    fn enter(&mut self, to: GameState, out_events: &mut Vec<Event>) {
        let from = self.state;
        self.state = to;
        debug!(?from, ?to, "game state changed");
        out_events.push(Event::StateChanged { from, to });
    }

    fn schedule(&self, timer: Timer, delay: Duration, out_events: &mut Vec<Event>) {
        let token = TransitionToken::new(self.state, timer);
        out_events.push(Event::TransitionScheduled { token, delay });
    }

    fn regenerate(&mut self, out_events: &mut Vec<Event>) -> Result<(), MazeError> {
        let size = self.maze_size;
        self.maze.generate(size, size, &mut self.rng)?;
        out_events.push(Event::MazeGenerated {
            width: size,
            height: size,
        });

        let start = self.maze.start_point();
        self.player.set_position(start);
        out_events.push(Event::PlayerPlaced { position: start });
        Ok(())
    }

    fn execute(
        &mut self,
        transition: Transition,
        out_events: &mut Vec<Event>,
    ) -> Result<(), MazeError> {
        match transition {
            Transition::ShowStartScreen => self.enter(GameState::StartScreen, out_events),
            Transition::BeginGame => {
                self.enter(GameState::RemovingStartScreen, out_events);
                self.regenerate(out_events)?;
                self.schedule(
                    Timer::GameplayStart,
                    self.config.screen_transition(),
                    out_events,
                );
            }
            Transition::EnterGameplay => self.enter(GameState::LevelGameplay, out_events),
            Transition::AttemptMove(direction) => {
                let from = self.player.position();
                let to = from.step(direction);
                let accepted = self.maze.is_free_space(to);
                out_events.push(Event::MoveAttempted {
                    direction,
                    accepted,
                });
                if accepted {
                    self.enter(GameState::PlayerIsMoving, out_events);
                    self.player.set_position(to);
                    out_events.push(Event::PlayerMoved { from, to });
                    self.schedule(Timer::MoveSettle, self.config.move_settle(), out_events);
                }
            }
            Transition::SettleMove => self.settle_move(out_events),
            Transition::HideLevelComplete => {
                self.enter(GameState::RemovingLevelCompleteScreen, out_events);
                self.regenerate(out_events)?;
                self.schedule(
                    Timer::GameplayStart,
                    self.config.screen_transition(),
                    out_events,
                );
            }
            Transition::ClearFinalEffect => out_events.push(Event::FinalEffectCleared),
            Transition::Restart => {
                self.enter(GameState::RemovingFinalScreen, out_events);
                self.level = FIRST_LEVEL;
                self.maze_size = INITIAL_MAZE_SIZE;
                info!("game restarted");
                out_events.push(Event::GameRestarted);
                self.regenerate(out_events)?;
                self.schedule(
                    Timer::GameplayStart,
                    self.config.screen_transition(),
                    out_events,
                );
            }
        }
        Ok(())
    }

    fn settle_move(&mut self, out_events: &mut Vec<Event>) {
        if self.player.position() != self.maze.end_point() {
            self.enter(GameState::LevelGameplay, out_events);
            return;
        }

        if self.level >= self.config.level_count {
            info!(level = self.level, "final level complete");
            self.enter(GameState::FinalLevelComplete, out_events);
            out_events.push(Event::FinalLevelReached { level: self.level });
            self.schedule(
                Timer::FinalEffectClear,
                self.config.screen_transition(),
                out_events,
            );
            return;
        }

        self.level += 1;
        self.maze_size += 1;
        info!(level = self.level, maze_size = self.maze_size, "level complete");
        self.enter(GameState::LevelComplete, out_events);
        out_events.push(Event::LevelAdvanced { level: self.level });
        self.schedule(
            Timer::LevelCompleteHide,
            self.config.level_complete_pause(),
            out_events,
        );
    }
}

/// Applies the provided command to the world.
///
/// Commands that do not match the current state are absorbed without side
/// effects. An error is only returned when maze generation breaks its
/// contract, which leaves the session unusable.
pub fn apply(
    world: &mut World,
    command: Command,
    out_events: &mut Vec<Event>,
) -> Result<(), MazeError> {
    let trigger = match command {
        Command::Tick { dt } => {
            out_events.push(Event::TimeAdvanced { dt });
            return Ok(());
        }
        Command::Render => Trigger::Render,
        Command::RequestStart => Trigger::StartRequested,
        Command::Move { direction } => Trigger::Move(direction),
        Command::RequestRestart => Trigger::RestartRequested,
        Command::CompleteTransition { token } => Trigger::Elapsed(token),
    };

    let Some(transition) = flow::resolve(world.state, trigger) else {
        if let Trigger::Elapsed(token) = trigger {
            if token.expected() != world.state {
                debug!(?token, actual = ?world.state, "ignoring stale transition");
                out_events.push(Event::TransitionIgnored {
                    token,
                    actual: world.state,
                });
            }
        }
        return Ok(());
    };

    world.execute(transition, out_events)
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use labyrinth_core::{GameConfig, GameState, Position};

    use super::{Maze, World};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Current state of the game flow.
    #[must_use]
    pub fn state(world: &World) -> GameState {
        world.state
    }

    /// Level the player is on.
    #[must_use]
    pub fn level(world: &World) -> u32 {
        world.level
    }

    /// Side length used for the current or upcoming maze.
    #[must_use]
    pub fn maze_size(world: &World) -> u32 {
        world.maze_size
    }

    /// Provides read-only access to the maze.
    #[must_use]
    pub fn maze(world: &World) -> &Maze {
        &world.maze
    }

    /// Cell currently occupied by the player.
    #[must_use]
    pub fn player_position(world: &World) -> Position {
        world.player.position()
    }

    /// Configuration the world was created with.
    #[must_use]
    pub fn config(world: &World) -> &GameConfig {
        &world.config
    }
}
