//! Transition table of the game flow.
//!
//! Every trigger the world receives is resolved here against the current
//! state. A `None` result means the pair is not part of the table and the
//! trigger must be absorbed without touching any state.

use labyrinth_core::{Direction, GameState, Timer, TransitionToken};

/// Stimulus delivered to the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Trigger {
    Render,
    StartRequested,
    Move(Direction),
    RestartRequested,
    Elapsed(TransitionToken),
}

/// Row of the transition table selected for a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Transition {
    ShowStartScreen,
    BeginGame,
    EnterGameplay,
    AttemptMove(Direction),
    SettleMove,
    HideLevelComplete,
    ClearFinalEffect,
    Restart,
}

/// Selects the transition for `trigger` while the world occupies `state`.
pub(crate) fn resolve(state: GameState, trigger: Trigger) -> Option<Transition> {
    match (state, trigger) {
        (GameState::NotStarted, Trigger::Render) => Some(Transition::ShowStartScreen),
        (GameState::StartScreen, Trigger::StartRequested) => Some(Transition::BeginGame),
        (GameState::LevelGameplay, Trigger::Move(direction)) => {
            Some(Transition::AttemptMove(direction))
        }
        (GameState::FinalLevelComplete, Trigger::RestartRequested) => Some(Transition::Restart),
        (state, Trigger::Elapsed(token)) if token.expected() == state => {
            resolve_elapsed(state, token.timer())
        }
        _ => None,
    }
}

fn resolve_elapsed(state: GameState, timer: Timer) -> Option<Transition> {
    match (state, timer) {
        (
            GameState::RemovingStartScreen
            | GameState::RemovingLevelCompleteScreen
            | GameState::RemovingFinalScreen,
            Timer::GameplayStart,
        ) => Some(Transition::EnterGameplay),
        (GameState::PlayerIsMoving, Timer::MoveSettle) => Some(Transition::SettleMove),
        (GameState::LevelComplete, Timer::LevelCompleteHide) => {
            Some(Transition::HideLevelComplete)
        }
        (GameState::FinalLevelComplete, Timer::FinalEffectClear) => {
            Some(Transition::ClearFinalEffect)
        }
        _ => None,
    }
}
