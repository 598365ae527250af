//! Translation of world events into view commands.

use labyrinth_core::{Event, GameState};
use labyrinth_rendering::{LabyrinthPresentation, RenderingError, Screen, ViewClass, ViewCommand};
use labyrinth_world::{query, Cell, Maze, World};

/// Appends the view commands implied by `events` to `out`, in event order.
pub(crate) fn present(
    world: &World,
    events: &[Event],
    out: &mut Vec<ViewCommand>,
) -> Result<(), RenderingError> {
    for event in events {
        match event {
            Event::StateChanged { from, to } => present_state_change(*from, *to, out),
            Event::MazeGenerated { .. } => {
                out.push(ViewCommand::RenderLabyrinth(labyrinth(query::maze(world))?));
            }
            Event::PlayerPlaced { position } => out.push(ViewCommand::RenderPlayer(*position)),
            Event::PlayerMoved { to, .. } => out.push(ViewCommand::RenderPlayer(*to)),
            Event::MoveAttempted { direction, .. } => out.push(ViewCommand::PressEffect {
                screen: Screen::Labyrinth,
                direction: Some(*direction),
            }),
            Event::LevelAdvanced { level } => {
                out.push(ViewCommand::RenderLevelComplete { level: *level });
                out.push(ViewCommand::AddClass(
                    Screen::LevelComplete,
                    ViewClass::ShowAnimated,
                ));
            }
            Event::FinalLevelReached { .. } => {
                out.push(ViewCommand::Render(Screen::Final));
                out.push(ViewCommand::AddClass(Screen::Final, ViewClass::ShowAnimated));
            }
            Event::FinalEffectCleared => {
                out.push(ViewCommand::RemoveClass(
                    Screen::Final,
                    ViewClass::ShowAnimated,
                ));
            }
            Event::TimeAdvanced { .. }
            | Event::GameRestarted
            | Event::TransitionScheduled { .. }
            | Event::TransitionIgnored { .. } => {}
        }
    }
    Ok(())
}

fn present_state_change(from: GameState, to: GameState, out: &mut Vec<ViewCommand>) {
    match (from, to) {
        (GameState::NotStarted, GameState::StartScreen) => {
            out.push(ViewCommand::Render(Screen::Start));
        }
        (GameState::StartScreen, GameState::RemovingStartScreen) => {
            out.push(ViewCommand::PressEffect {
                screen: Screen::Start,
                direction: None,
            });
            out.push(ViewCommand::Render(Screen::Labyrinth));
            out.push(ViewCommand::AddClass(Screen::Start, ViewClass::HideAnimated));
        }
        (GameState::LevelComplete, GameState::RemovingLevelCompleteScreen) => {
            out.push(ViewCommand::RemoveClass(
                Screen::LevelComplete,
                ViewClass::ShowAnimated,
            ));
            out.push(ViewCommand::AddClass(
                Screen::LevelComplete,
                ViewClass::HideAnimated,
            ));
        }
        (GameState::FinalLevelComplete, GameState::RemovingFinalScreen) => {
            out.push(ViewCommand::PressEffect {
                screen: Screen::Final,
                direction: None,
            });
            out.push(ViewCommand::AddClass(Screen::Final, ViewClass::HideAnimated));
        }
        (GameState::RemovingStartScreen, GameState::LevelGameplay) => {
            unmount(Screen::Start, out);
        }
        (GameState::RemovingLevelCompleteScreen, GameState::LevelGameplay) => {
            unmount(Screen::LevelComplete, out);
        }
        (GameState::RemovingFinalScreen, GameState::LevelGameplay) => {
            out.push(ViewCommand::RemoveClass(Screen::Final, ViewClass::ShowAnimated));
            unmount(Screen::Final, out);
        }
        _ => {}
    }
}

fn unmount(screen: Screen, out: &mut Vec<ViewCommand>) {
    out.push(ViewCommand::RemoveClass(screen, ViewClass::HideAnimated));
    out.push(ViewCommand::Remove(screen));
}

fn labyrinth(maze: &Maze) -> Result<LabyrinthPresentation, RenderingError> {
    let free = maze.cells().iter().map(|cell| *cell == Cell::Free).collect();
    LabyrinthPresentation::new(
        maze.width(),
        maze.height(),
        free,
        maze.start_point(),
        maze.end_point(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::{Direction, GameConfig, Position};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn world() -> World {
        World::new(GameConfig {
            seed: Some(11),
            ..GameConfig::default()
        })
    }

    fn present_all(events: &[Event]) -> Vec<ViewCommand> {
        let mut out = Vec::new();
        present(&world(), events, &mut out).expect("presentation succeeds");
        out
    }

    #[test]
    fn first_render_mounts_start_screen() {
        let commands = present_all(&[Event::StateChanged {
            from: GameState::NotStarted,
            to: GameState::StartScreen,
        }]);

        assert_eq!(commands, vec![ViewCommand::Render(Screen::Start)]);
    }

    #[test]
    fn leaving_an_overlay_clears_hide_class_before_unmounting() {
        let commands = present_all(&[Event::StateChanged {
            from: GameState::RemovingLevelCompleteScreen,
            to: GameState::LevelGameplay,
        }]);

        assert_eq!(
            commands,
            vec![
                ViewCommand::RemoveClass(Screen::LevelComplete, ViewClass::HideAnimated),
                ViewCommand::Remove(Screen::LevelComplete),
            ]
        );
    }

    #[test]
    fn leaving_the_final_screen_clears_both_animation_classes() {
        let commands = present_all(&[Event::StateChanged {
            from: GameState::RemovingFinalScreen,
            to: GameState::LevelGameplay,
        }]);

        assert_eq!(
            commands,
            vec![
                ViewCommand::RemoveClass(Screen::Final, ViewClass::ShowAnimated),
                ViewCommand::RemoveClass(Screen::Final, ViewClass::HideAnimated),
                ViewCommand::Remove(Screen::Final),
            ]
        );
    }

    #[test]
    fn rejected_moves_still_press_the_labyrinth() {
        let commands = present_all(&[Event::MoveAttempted {
            direction: Direction::Up,
            accepted: false,
        }]);

        assert_eq!(
            commands,
            vec![ViewCommand::PressEffect {
                screen: Screen::Labyrinth,
                direction: Some(Direction::Up),
            }]
        );
    }

    #[test]
    fn settling_a_move_presents_nothing() {
        let commands = present_all(&[Event::StateChanged {
            from: GameState::PlayerIsMoving,
            to: GameState::LevelGameplay,
        }]);

        assert!(commands.is_empty());
    }

    #[test]
    fn player_moves_render_the_destination() {
        let commands = present_all(&[Event::PlayerMoved {
            from: Position::new(0, 0),
            to: Position::new(1, 0),
        }]);

        assert_eq!(commands, vec![ViewCommand::RenderPlayer(Position::new(1, 0))]);
    }

    #[test]
    fn labyrinth_presentation_mirrors_maze_cells() {
        let mut maze = Maze::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        maze.generate(7, 7, &mut rng).expect("7x7 maze");

        let presentation = labyrinth(&maze).expect("dimensions match");

        assert_eq!(presentation.start(), maze.start_point());
        assert_eq!(presentation.end(), maze.end_point());
        for y in 0..7 {
            for x in 0..7 {
                let position = Position::new(x, y);
                assert_eq!(presentation.is_free(position), maze.is_free_space(position));
            }
        }
    }
}
