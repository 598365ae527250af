#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Game flow controller that wires the world, the pure systems and the view
//! contract together.
//!
//! Every public call feeds one upward interaction into the world and pumps
//! the resulting commands and events until nothing is left to do, so callers
//! only ever observe settled game state. View commands produced along the way
//! are buffered until [`Controller::drain_view_commands`] is called.

mod presenter;

use std::{collections::VecDeque, time::Duration};

use labyrinth_core::{Command, ConfigError, Direction, Event, GameConfig, GameState, Position};
use labyrinth_rendering::{FrameInput, Key, RenderingError, ViewCommand};
use labyrinth_system_input::{InputRouter, PlayerInput};
use labyrinth_system_scheduler::Scheduler;
use labyrinth_world::{self as world, query, Maze, MazeError, World};
use thiserror::Error;
use tracing::{debug, trace};

/// Failures that end a game session.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The configuration was rejected before the world was created.
    #[error("invalid game configuration")]
    Config(#[from] ConfigError),
    /// The world failed to generate a usable maze.
    #[error("maze generation failed")]
    Maze(#[from] MazeError),
    /// A generated maze could not be handed to the views.
    #[error("maze could not be presented")]
    Presentation(#[from] RenderingError),
}

/// Owns the game and translates interaction into state changes and view
/// commands.
#[derive(Debug)]
pub struct Controller {
    world: World,
    scheduler: Scheduler,
    input: InputRouter,
    view_commands: Vec<ViewCommand>,
}

impl Controller {
    /// Creates a controller whose game has not rendered anything yet.
    pub fn new(config: GameConfig) -> Result<Self, ControllerError> {
        config.validate()?;
        debug!(?config, "creating game controller");

        Ok(Self {
            world: World::new(config),
            scheduler: Scheduler::new(),
            input: InputRouter::new(),
            view_commands: Vec::new(),
        })
    }

    /// Shows the start screen. Only the first call has an effect.
    pub fn render(&mut self) -> Result<(), ControllerError> {
        self.pump(Command::Render)
    }

    /// Player pressed the start button or confirmed on the start screen.
    pub fn start_requested(&mut self) -> Result<(), ControllerError> {
        self.pump(Command::RequestStart)
    }

    /// Player pressed an arrow.
    pub fn directional_input(&mut self, direction: Direction) -> Result<(), ControllerError> {
        self.pump(Command::Move { direction })
    }

    /// Player asked to play again from the final screen.
    pub fn restart_requested(&mut self) -> Result<(), ControllerError> {
        self.pump(Command::RequestRestart)
    }

    /// Routes raw adapter input through the input system.
    ///
    /// Button clicks are handled first, then keys in the order they were
    /// pressed. Each interaction settles before the next one is routed, so a
    /// second arrow in the same frame meets the moving player.
    pub fn handle_input(&mut self, input: &FrameInput) -> Result<(), ControllerError> {
        if input.start_clicked || input.play_again_clicked {
            let clicks = PlayerInput {
                start_clicked: input.start_clicked,
                play_again_clicked: input.play_again_clicked,
                ..PlayerInput::default()
            };
            self.route(clicks)?;
        }

        for key in &input.keys {
            let routed = match key.direction() {
                Some(direction) => PlayerInput {
                    direction: Some(direction),
                    ..PlayerInput::default()
                },
                None => PlayerInput {
                    confirm: *key == Key::Confirm,
                    ..PlayerInput::default()
                },
            };
            self.route(routed)?;
        }
        Ok(())
    }

    /// Lets `dt` elapse, firing every transition that falls due.
    pub fn advance(&mut self, dt: Duration) -> Result<(), ControllerError> {
        self.pump(Command::Tick { dt })
    }

    /// View commands issued since the previous drain, in issue order.
    pub fn drain_view_commands(&mut self) -> Vec<ViewCommand> {
        std::mem::take(&mut self.view_commands)
    }

    /// Current state of the game flow.
    #[must_use]
    pub fn state(&self) -> GameState {
        query::state(&self.world)
    }

    /// Level the player is on.
    #[must_use]
    pub fn level(&self) -> u32 {
        query::level(&self.world)
    }

    /// Side length of the current or upcoming maze.
    #[must_use]
    pub fn maze_size(&self) -> u32 {
        query::maze_size(&self.world)
    }

    /// Cell the player occupies.
    #[must_use]
    pub fn player_position(&self) -> Position {
        query::player_position(&self.world)
    }

    /// Current maze layout.
    #[must_use]
    pub fn maze(&self) -> &Maze {
        query::maze(&self.world)
    }

    /// Banner adapters may show as the window title.
    #[must_use]
    pub fn welcome_banner(&self) -> &'static str {
        query::welcome_banner(&self.world)
    }

    /// Configuration the game runs with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        query::config(&self.world)
    }

    /// Number of scheduled transitions that have not fired yet.
    #[must_use]
    pub fn pending_transitions(&self) -> usize {
        self.scheduler.pending()
    }

    fn route(&mut self, input: PlayerInput) -> Result<(), ControllerError> {
        let mut commands = Vec::new();
        self.input.handle(&[], input, &mut commands);
        for command in commands {
            self.pump(command)?;
        }
        Ok(())
    }

    fn pump(&mut self, command: Command) -> Result<(), ControllerError> {
        let mut queue = VecDeque::from([command]);
        let mut events: Vec<Event> = Vec::new();
        let mut follow_up = Vec::new();

        while let Some(command) = queue.pop_front() {
            trace!(?command, "applying command");
            events.clear();
            world::apply(&mut self.world, command, &mut events)?;

            presenter::present(&self.world, &events, &mut self.view_commands)?;
            self.input
                .handle(&events, PlayerInput::default(), &mut follow_up);
            self.scheduler.handle(&events, &mut follow_up);
            queue.extend(follow_up.drain(..));
        }
        Ok(())
    }
}
