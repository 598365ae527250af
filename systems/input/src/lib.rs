#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure input system that maps player interaction onto game-flow commands.

use labyrinth_core::{Command, Direction, Event, GameState};

/// Input snapshot distilled from adapter-provided frame input data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerInput {
    /// Arrow key pressed on this frame, if any.
    pub direction: Option<Direction>,
    /// Whether Enter or Space was pressed on this frame.
    pub confirm: bool,
    /// Whether the start screen's button was clicked on this frame.
    pub start_clicked: bool,
    /// Whether the final screen's play-again button was clicked on this frame.
    pub play_again_clicked: bool,
}

/// Keyboard and button routing that mirrors the game state observed through
/// world events.
///
/// Arrow keys only become moves during gameplay. The confirm key is shared
/// between the start and final screens and resolves by state. Button clicks
/// are forwarded as-is and left to the world's guards.
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    state: GameState,
}

impl InputRouter {
    /// Creates a new input router instance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: GameState::NotStarted,
        }
    }

    /// Game state the router last observed.
    #[must_use]
    pub const fn observed_state(&self) -> GameState {
        self.state
    }

    /// Consumes world events and adapter-derived input to emit commands.
    pub fn handle(&mut self, events: &[Event], input: PlayerInput, out: &mut Vec<Command>) {
        for event in events {
            if let Event::StateChanged { to, .. } = event {
                self.state = *to;
            }
        }

        if input.start_clicked {
            out.push(Command::RequestStart);
        }

        if input.play_again_clicked {
            out.push(Command::RequestRestart);
        }

        if input.confirm {
            match self.state {
                GameState::StartScreen => out.push(Command::RequestStart),
                GameState::FinalLevelComplete => out.push(Command::RequestRestart),
                _ => {}
            }
        }

        if let Some(direction) = input.direction {
            if self.state == GameState::LevelGameplay {
                out.push(Command::Move { direction });
            }
        }
    }
}
