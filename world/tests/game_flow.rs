use std::time::Duration;

use labyrinth_core::{
    Command, Direction, Event, GameConfig, GameState, Position, Timer, TransitionToken,
};
use labyrinth_world::{self as world, query, World};

fn config(level_count: u32) -> GameConfig {
    GameConfig {
        level_count,
        seed: Some(0x5eed),
        ..GameConfig::default()
    }
}

fn apply(world: &mut World, command: Command) -> Vec<Event> {
    let mut events = Vec::new();
    world::apply(world, command, &mut events).expect("apply succeeds");
    events
}

fn scheduled(events: &[Event]) -> Vec<(TransitionToken, Duration)> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::TransitionScheduled { token, delay } => Some((*token, *delay)),
            _ => None,
        })
        .collect()
}

fn fire_only_scheduled(world: &mut World, events: &[Event]) -> Vec<Event> {
    let tokens = scheduled(events);
    assert_eq!(tokens.len(), 1, "expected exactly one scheduled transition");
    apply(world, Command::CompleteTransition { token: tokens[0].0 })
}

fn started(level_count: u32) -> World {
    let mut world = World::new(config(level_count));
    let _ = apply(&mut world, Command::Render);
    let events = apply(&mut world, Command::RequestStart);
    let _ = fire_only_scheduled(&mut world, &events);
    assert_eq!(query::state(&world), GameState::LevelGameplay);
    world
}

fn direction_between(from: Position, to: Position) -> Direction {
    Direction::ALL
        .into_iter()
        .find(|direction| from.step(*direction) == to)
        .expect("path cells are adjacent")
}

/// Walks the shortest path to the exit, settling every move, and returns the
/// events produced by the final settle.
fn walk_to_exit(world: &mut World) -> Vec<Event> {
    let maze = query::maze(world);
    let path = maze
        .shortest_path(maze.start_point(), maze.end_point())
        .expect("exit reachable");

    let mut last = Vec::new();
    for pair in path.windows(2) {
        let direction = direction_between(pair[0], pair[1]);
        let moved = apply(world, Command::Move { direction });
        assert_eq!(query::state(world), GameState::PlayerIsMoving);
        last = fire_only_scheduled(world, &moved);
    }
    last
}

#[test]
fn render_shows_start_screen_once() {
    let mut world = World::new(config(3));
    assert_eq!(query::state(&world), GameState::NotStarted);

    let events = apply(&mut world, Command::Render);
    assert_eq!(
        events,
        vec![Event::StateChanged {
            from: GameState::NotStarted,
            to: GameState::StartScreen,
        }]
    );

    assert!(apply(&mut world, Command::Render).is_empty());
}

#[test]
fn start_generates_initial_maze_and_schedules_gameplay() {
    let mut world = World::new(config(3));
    let _ = apply(&mut world, Command::Render);
    let events = apply(&mut world, Command::RequestStart);

    assert_eq!(query::state(&world), GameState::RemovingStartScreen);
    assert!(events.contains(&Event::MazeGenerated {
        width: 5,
        height: 5
    }));
    assert_eq!(
        query::player_position(&world),
        query::maze(&world).start_point()
    );
    assert_eq!(
        scheduled(&events),
        vec![(
            TransitionToken::new(GameState::RemovingStartScreen, Timer::GameplayStart),
            Duration::from_millis(1000),
        )]
    );

    let repeated = apply(&mut world, Command::RequestStart);
    assert!(repeated.is_empty(), "second start request must be absorbed");
}

#[test]
fn directional_input_outside_gameplay_changes_nothing() {
    let mut world = World::new(config(3));
    let _ = apply(&mut world, Command::Render);
    let _ = apply(&mut world, Command::RequestStart);
    let position = query::player_position(&world);

    for direction in Direction::ALL {
        let events = apply(&mut world, Command::Move { direction });
        assert!(events.is_empty());
        assert_eq!(query::player_position(&world), position);
        assert_eq!(query::state(&world), GameState::RemovingStartScreen);
    }
}

#[test]
fn move_into_wall_keeps_position_and_state() {
    let mut world = started(3);
    let start = query::player_position(&world);

    let blocked = Direction::ALL
        .into_iter()
        .find(|direction| !query::maze(&world).is_free_space(start.step(*direction)))
        .expect("the start corner always borders the outside of the grid");

    let events = apply(&mut world, Command::Move { direction: blocked });
    assert_eq!(
        events,
        vec![Event::MoveAttempted {
            direction: blocked,
            accepted: false,
        }]
    );
    assert_eq!(query::player_position(&world), start);
    assert_eq!(query::state(&world), GameState::LevelGameplay);
}

#[test]
fn input_while_player_is_moving_is_rejected() {
    let mut world = started(3);
    let start = query::player_position(&world);
    let open = Direction::ALL
        .into_iter()
        .find(|direction| query::maze(&world).is_free_space(start.step(*direction)))
        .expect("start has a free neighbour");

    let _ = apply(&mut world, Command::Move { direction: open });
    let moved_to = query::player_position(&world);
    assert_eq!(query::state(&world), GameState::PlayerIsMoving);

    for direction in Direction::ALL {
        assert!(apply(&mut world, Command::Move { direction }).is_empty());
    }
    assert_eq!(query::player_position(&world), moved_to);
    assert_eq!(query::state(&world), GameState::PlayerIsMoving);
}

#[test]
fn reaching_exit_before_last_level_completes_the_level() {
    let mut world = started(3);
    let events = walk_to_exit(&mut world);

    assert_eq!(query::state(&world), GameState::LevelComplete);
    assert_eq!(query::level(&world), 2);
    assert_eq!(query::maze_size(&world), 6);
    assert!(events.contains(&Event::LevelAdvanced { level: 2 }));
    assert_eq!(
        scheduled(&events),
        vec![(
            TransitionToken::new(GameState::LevelComplete, Timer::LevelCompleteHide),
            Duration::from_millis(3000),
        )]
    );

    let hidden = fire_only_scheduled(&mut world, &events);
    assert_eq!(query::state(&world), GameState::RemovingLevelCompleteScreen);
    assert!(hidden.contains(&Event::MazeGenerated {
        width: 6,
        height: 6
    }));
    let maze = query::maze(&world);
    assert!(maze
        .shortest_path(maze.start_point(), maze.end_point())
        .is_some());
    assert_eq!(query::player_position(&world), maze.start_point());

    let _ = fire_only_scheduled(&mut world, &hidden);
    assert_eq!(query::state(&world), GameState::LevelGameplay);
    assert_eq!(query::level(&world), 2);
}

#[test]
fn reaching_exit_on_last_level_shows_final_screen() {
    let mut world = started(1);
    let events = walk_to_exit(&mut world);

    assert_eq!(query::state(&world), GameState::FinalLevelComplete);
    assert_eq!(query::level(&world), 1);
    assert!(events.contains(&Event::FinalLevelReached { level: 1 }));

    let cleared = fire_only_scheduled(&mut world, &events);
    assert_eq!(cleared, vec![Event::FinalEffectCleared]);
    assert_eq!(query::state(&world), GameState::FinalLevelComplete);
    assert_eq!(query::level(&world), 1);
}

#[test]
fn restart_from_final_screen_resets_level_and_size() {
    let mut world = started(3);
    for _ in 0..2 {
        let completed = walk_to_exit(&mut world);
        let hidden = fire_only_scheduled(&mut world, &completed);
        let _ = fire_only_scheduled(&mut world, &hidden);
    }
    assert_eq!(query::level(&world), 3);
    assert_eq!(query::maze_size(&world), 7);

    let _ = walk_to_exit(&mut world);
    assert_eq!(query::state(&world), GameState::FinalLevelComplete);
    assert_eq!(query::level(&world), 3);

    let restarted = apply(&mut world, Command::RequestRestart);
    assert_eq!(query::state(&world), GameState::RemovingFinalScreen);
    assert_eq!(query::level(&world), 1);
    assert_eq!(query::maze_size(&world), 5);
    assert!(restarted.contains(&Event::GameRestarted));
    assert!(restarted.contains(&Event::MazeGenerated {
        width: 5,
        height: 5
    }));

    let _ = fire_only_scheduled(&mut world, &restarted);
    assert_eq!(query::state(&world), GameState::LevelGameplay);
    let maze = query::maze(&world);
    assert!(maze
        .shortest_path(maze.start_point(), maze.end_point())
        .is_some());
}

#[test]
fn stale_transition_is_reported_and_ignored() {
    let mut world = started(1);
    let _ = walk_to_exit(&mut world);
    let _ = apply(&mut world, Command::RequestRestart);

    let stale = TransitionToken::new(GameState::FinalLevelComplete, Timer::FinalEffectClear);
    let events = apply(&mut world, Command::CompleteTransition { token: stale });
    assert_eq!(
        events,
        vec![Event::TransitionIgnored {
            token: stale,
            actual: GameState::RemovingFinalScreen,
        }]
    );
    assert_eq!(query::state(&world), GameState::RemovingFinalScreen);
}

#[test]
fn tick_only_reports_elapsed_time() {
    let mut world = World::new(config(3));
    let dt = Duration::from_millis(16);
    assert_eq!(
        apply(&mut world, Command::Tick { dt }),
        vec![Event::TimeAdvanced { dt }]
    );
    assert_eq!(query::state(&world), GameState::NotStarted);
}
