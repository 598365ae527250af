#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Labyrinth game.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to. Systems consume event streams and respond exclusively with new
//! command batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Labyrinth";

/// Side length of the square maze generated for the first level.
pub const INITIAL_MAZE_SIZE: u32 = 5;

/// Level the game starts at, and returns to on restart.
pub const FIRST_LEVEL: u32 = 1;

/// Discrete states the game flow can occupy. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Nothing has been rendered yet.
    #[default]
    NotStarted,
    /// Start screen is shown and waits for the player.
    StartScreen,
    /// Start screen is animating out above a freshly generated maze.
    RemovingStartScreen,
    /// Player may move.
    LevelGameplay,
    /// A move was accepted and is settling before input resumes.
    PlayerIsMoving,
    /// Level-complete screen is shown.
    LevelComplete,
    /// Level-complete screen is animating out above the next maze.
    RemovingLevelCompleteScreen,
    /// Final level was completed and the final screen is shown.
    FinalLevelComplete,
    /// Final screen is animating out above a restarted game.
    RemovingFinalScreen,
}

/// Cardinal movement directions available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// Every direction in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Column and row offset produced by a single step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Grid coordinate of a maze cell. Bounds are enforced by the maze, not here.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Column of the position.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Row of the position.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Neighbouring position one step away in the provided direction.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Kinds of delayed transitions the world may schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Timer {
    /// Gameplay resumes once an overlay screen finished animating out.
    GameplayStart,
    /// A player move settles.
    MoveSettle,
    /// The level-complete screen starts hiding.
    LevelCompleteHide,
    /// The final screen's show animation is cleared.
    FinalEffectClear,
}

/// Handle carried by every scheduled transition.
///
/// The world only honours a completed transition while it still occupies the
/// state recorded in `expected`; any other completion is stale and ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionToken {
    expected: GameState,
    timer: Timer,
}

impl TransitionToken {
    /// Creates a token for a timer scheduled while in `expected`.
    #[must_use]
    pub const fn new(expected: GameState, timer: Timer) -> Self {
        Self { expected, timer }
    }

    /// State the world must still be in for the transition to apply.
    #[must_use]
    pub const fn expected(&self) -> GameState {
        self.expected
    }

    /// Kind of delayed transition.
    #[must_use]
    pub const fn timer(&self) -> Timer {
        self.timer
    }
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Shows the start screen for the first time.
    Render,
    /// Player asked to start the game from the start screen.
    RequestStart,
    /// Player asked to move one cell.
    Move {
        /// Direction of the attempted step.
        direction: Direction,
    },
    /// Player asked to play again from the final screen.
    RequestRestart,
    /// Advances the clock by the provided delta time.
    Tick {
        /// Duration that elapsed since the previous tick.
        dt: Duration,
    },
    /// A scheduled transition's delay elapsed.
    CompleteTransition {
        /// Token handed out when the transition was scheduled.
        token: TransitionToken,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The clock advanced.
    TimeAdvanced {
        /// Duration that elapsed in the tick.
        dt: Duration,
    },
    /// The active game state changed.
    StateChanged {
        /// State before the transition.
        from: GameState,
        /// State after the transition.
        to: GameState,
    },
    /// A new maze layout replaced the previous one.
    MazeGenerated {
        /// Number of columns in the maze.
        width: u32,
        /// Number of rows in the maze.
        height: u32,
    },
    /// The player was placed on a maze start point.
    PlayerPlaced {
        /// Cell the player now occupies.
        position: Position,
    },
    /// Directional input was interpreted during gameplay.
    MoveAttempted {
        /// Requested direction.
        direction: Direction,
        /// Whether the target cell was free.
        accepted: bool,
    },
    /// The player moved between two adjacent cells.
    PlayerMoved {
        /// Cell before the move.
        from: Position,
        /// Cell after the move.
        to: Position,
    },
    /// The level counter advanced after the exit was reached.
    LevelAdvanced {
        /// Level the player advanced to.
        level: u32,
    },
    /// The last level was completed.
    FinalLevelReached {
        /// Level that was completed.
        level: u32,
    },
    /// The final screen's show animation should be cleared.
    FinalEffectCleared,
    /// The game was reset to its first level.
    GameRestarted,
    /// A delayed transition was scheduled.
    TransitionScheduled {
        /// Token that must be passed back once the delay elapses.
        token: TransitionToken,
        /// Delay before the transition fires.
        delay: Duration,
    },
    /// A completed transition arrived after the world left its expected state.
    TransitionIgnored {
        /// Stale token.
        token: TransitionToken,
        /// State the world occupied when the token arrived.
        actual: GameState,
    },
}

/// Reasons a [`GameConfig`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// At least one level is required.
    #[error("level_count must be at least 1")]
    NoLevels,
}

/// Tunable parameters consumed by the game flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Total number of levels; completing the last one shows the final screen.
    pub level_count: u32,
    /// Delay in milliseconds used while overlay screens animate in or out.
    pub screen_transition_ms: u64,
    /// Delay in milliseconds a single move takes to settle.
    pub move_settle_ms: u64,
    /// Delay in milliseconds the level-complete screen stays up.
    pub level_complete_ms: u64,
    /// Seed for maze generation. Entropy is used when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level_count: 3,
            screen_transition_ms: 1000,
            move_settle_ms: 100,
            level_complete_ms: 3000,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Checks the configuration for values the game flow cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level_count == 0 {
            return Err(ConfigError::NoLevels);
        }
        Ok(())
    }

    /// Delay used while overlay screens animate (D1).
    #[must_use]
    pub const fn screen_transition(&self) -> Duration {
        Duration::from_millis(self.screen_transition_ms)
    }

    /// Delay before a move settles (D2).
    #[must_use]
    pub const fn move_settle(&self) -> Duration {
        Duration::from_millis(self.move_settle_ms)
    }

    /// Delay the level-complete screen stays up (D3).
    #[must_use]
    pub const fn level_complete_pause(&self) -> Duration {
        Duration::from_millis(self.level_complete_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, Direction, GameConfig, Position};

    #[test]
    fn step_follows_direction_delta() {
        let origin = Position::new(2, 2);
        assert_eq!(origin.step(Direction::Up), Position::new(2, 1));
        assert_eq!(origin.step(Direction::Down), Position::new(2, 3));
        assert_eq!(origin.step(Direction::Left), Position::new(1, 2));
        assert_eq!(origin.step(Direction::Right), Position::new(3, 2));
    }

    #[test]
    fn step_may_leave_the_grid() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Left), Position::new(-1, 0));
        assert_eq!(corner.step(Direction::Up), Position::new(0, -1));
    }

    #[test]
    fn default_config_uses_standard_delays() {
        let config = GameConfig::default();
        assert_eq!(config.screen_transition().as_millis(), 1000);
        assert_eq!(config.move_settle().as_millis(), 100);
        assert_eq!(config.level_complete_pause().as_millis(), 3000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_levels_is_rejected() {
        let config = GameConfig {
            level_count: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoLevels));
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: GameConfig = toml::from_str("level_count = 7\nseed = 9\n").expect("parse");
        assert_eq!(config.level_count, 7);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.move_settle_ms, GameConfig::default().move_settle_ms);
    }
}
