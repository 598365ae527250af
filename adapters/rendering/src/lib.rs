#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Labyrinth adapters.

use anyhow::Result as AnyResult;
use glam::Vec2;
use labyrinth_core::{Direction, Position};
use std::{error::Error, fmt, time::Duration};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Returns a new color lightened towards white by the provided amount.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);

        Self {
            red: lighten_channel(self.red, amount),
            green: lighten_channel(self.green, amount),
            blue: lighten_channel(self.blue, amount),
            alpha: self.alpha,
        }
    }

    /// Returns the same color with its alpha multiplied by `opacity`.
    #[must_use]
    pub fn faded(self, opacity: f32) -> Self {
        Self {
            alpha: self.alpha * opacity.clamp(0.0, 1.0),
            ..self
        }
    }
}

fn lighten_channel(channel: f32, amount: f32) -> f32 {
    channel + (1.0 - channel) * amount
}

/// Keys the adapters translate into game input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Enter or Space.
    Confirm,
}

impl Key {
    /// Arrow key for `direction`.
    #[must_use]
    pub const fn arrow(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
        }
    }

    /// Direction associated with an arrow key.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Confirm => None,
        }
    }
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Keys pressed or on-screen arrows tapped on this frame.
    ///
    /// Adapters report keys in a fixed order, not in the order they were pressed.
    pub keys: Vec<Key>,
    /// Whether the start screen's button was clicked on this frame.
    pub start_clicked: bool,
    /// Whether the final screen's play-again button was clicked on this frame.
    pub play_again_clicked: bool,
}

/// Screens the game flow mounts and animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Welcome screen with the start button.
    Start,
    /// Playing field with the labyrinth and the player.
    Labyrinth,
    /// Overlay shown between levels.
    LevelComplete,
    /// Overlay shown after the last level.
    Final,
}

impl Screen {
    /// Every screen, bottom to top in drawing order.
    pub const ALL: [Screen; 4] = [
        Screen::Labyrinth,
        Screen::Start,
        Screen::LevelComplete,
        Screen::Final,
    ];

    const fn slot(self) -> usize {
        match self {
            Self::Start => 0,
            Self::Labyrinth => 1,
            Self::LevelComplete => 2,
            Self::Final => 3,
        }
    }
}

/// Animation classes that can be attached to a screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewClass {
    /// Fades the screen out.
    HideAnimated,
    /// Fades the screen in.
    ShowAnimated,
}

/// Renderable snapshot of a generated labyrinth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabyrinthPresentation {
    width: u32,
    height: u32,
    free: Vec<bool>,
    start: Position,
    end: Position,
}

impl LabyrinthPresentation {
    /// Creates a new labyrinth descriptor from row-major free-space flags.
    ///
    /// Returns an error when the flag count does not match the dimensions.
    pub fn new(
        width: u32,
        height: u32,
        free: Vec<bool>,
        start: Position,
        end: Position,
    ) -> Result<Self, RenderingError> {
        let expected = width as usize * height as usize;
        if free.len() != expected {
            return Err(RenderingError::CellCountMismatch {
                expected,
                actual: free.len(),
            });
        }

        Ok(Self {
            width,
            height,
            free,
            start,
            end,
        })
    }

    /// Number of columns in the labyrinth.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows in the labyrinth.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Entry cell.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Exit cell.
    #[must_use]
    pub const fn end(&self) -> Position {
        self.end
    }

    /// Whether the cell at `position` is walkable. Out-of-range cells are walls.
    #[must_use]
    pub fn is_free(&self, position: Position) -> bool {
        if position.x() < 0 || position.y() < 0 {
            return false;
        }
        let (x, y) = (position.x() as u32, position.y() as u32);
        if x >= self.width || y >= self.height {
            return false;
        }
        self.free
            .get((y * self.width + x) as usize)
            .copied()
            .unwrap_or(false)
    }
}

/// Instruction issued by the game flow to the view layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewCommand {
    /// Mounts a screen.
    Render(Screen),
    /// Unmounts a screen.
    Remove(Screen),
    /// Attaches an animation class to a screen and restarts its animation.
    AddClass(Screen, ViewClass),
    /// Detaches an animation class from a screen.
    RemoveClass(Screen, ViewClass),
    /// Plays a short press feedback on a screen, optionally tied to an arrow.
    PressEffect {
        /// Screen receiving the feedback.
        screen: Screen,
        /// Arrow that was pressed, if the effect targets a direction control.
        direction: Option<Direction>,
    },
    /// Replaces the labyrinth layout.
    RenderLabyrinth(LabyrinthPresentation),
    /// Moves the player marker.
    RenderPlayer(Position),
    /// Mounts the level-complete overlay announcing the upcoming level.
    RenderLevelComplete {
        /// Level the player is about to enter.
        level: u32,
    },
}

/// Retained view state of a single screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenState {
    mounted: bool,
    hide: bool,
    show: bool,
    class_age: Duration,
}

impl ScreenState {
    /// Whether the screen is mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the screen carries the given class.
    #[must_use]
    pub const fn has_class(&self, class: ViewClass) -> bool {
        match class {
            ViewClass::HideAnimated => self.hide,
            ViewClass::ShowAnimated => self.show,
        }
    }

    /// Time since the most recent class was attached.
    #[must_use]
    pub const fn class_age(&self) -> Duration {
        self.class_age
    }

    /// Opacity of the screen given the duration of its fade animation.
    ///
    /// Hiding takes precedence over showing when both classes are present.
    #[must_use]
    pub fn opacity(&self, animation: Duration) -> f32 {
        if !self.mounted {
            return 0.0;
        }
        let progress = if animation.is_zero() {
            1.0
        } else {
            (self.class_age.as_secs_f32() / animation.as_secs_f32()).clamp(0.0, 1.0)
        };
        if self.hide {
            1.0 - progress
        } else if self.show {
            progress
        } else {
            1.0
        }
    }
}

/// Press feedback currently playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PressEffect {
    /// Screen receiving the feedback.
    pub screen: Screen,
    /// Arrow that was pressed, if any.
    pub direction: Option<Direction>,
    /// Time since the press was issued.
    pub age: Duration,
}

/// Retained scene assembled from view commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    screens: [ScreenState; 4],
    labyrinth: Option<LabyrinthPresentation>,
    player: Option<Position>,
    level: u32,
    press: Option<PressEffect>,
}

impl Scene {
    /// Creates an empty scene with nothing mounted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a view command to the retained state.
    pub fn apply(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::Render(screen) => self.screens[screen.slot()].mounted = true,
            ViewCommand::Remove(screen) => self.screens[screen.slot()].mounted = false,
            ViewCommand::AddClass(screen, class) => {
                let state = &mut self.screens[screen.slot()];
                match class {
                    ViewClass::HideAnimated => state.hide = true,
                    ViewClass::ShowAnimated => state.show = true,
                }
                state.class_age = Duration::ZERO;
            }
            ViewCommand::RemoveClass(screen, class) => {
                let state = &mut self.screens[screen.slot()];
                match class {
                    ViewClass::HideAnimated => state.hide = false,
                    ViewClass::ShowAnimated => state.show = false,
                }
            }
            ViewCommand::PressEffect { screen, direction } => {
                self.press = Some(PressEffect {
                    screen,
                    direction,
                    age: Duration::ZERO,
                });
            }
            ViewCommand::RenderLabyrinth(labyrinth) => self.labyrinth = Some(labyrinth),
            ViewCommand::RenderPlayer(position) => self.player = Some(position),
            ViewCommand::RenderLevelComplete { level } => {
                self.level = level;
                self.screens[Screen::LevelComplete.slot()].mounted = true;
            }
        }
    }

    /// Ages running animations by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        for state in &mut self.screens {
            state.class_age = state.class_age.saturating_add(dt);
        }
        if let Some(press) = &mut self.press {
            press.age = press.age.saturating_add(dt);
        }
    }

    /// Retained state of `screen`.
    #[must_use]
    pub fn screen(&self, screen: Screen) -> &ScreenState {
        &self.screens[screen.slot()]
    }

    /// Labyrinth currently rendered, if any.
    #[must_use]
    pub fn labyrinth(&self) -> Option<&LabyrinthPresentation> {
        self.labyrinth.as_ref()
    }

    /// Player marker position, if rendered.
    #[must_use]
    pub const fn player(&self) -> Option<Position> {
        self.player
    }

    /// Level announced by the level-complete overlay.
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Press feedback still younger than `lifetime`.
    #[must_use]
    pub fn press_effect(&self, lifetime: Duration) -> Option<PressEffect> {
        self.press.filter(|press| press.age < lifetime)
    }
}

/// Screen-space layout of the playing field.
///
/// The field keeps a 2:3 aspect ratio whose base unit is a third of the
/// window height or half its width, whichever is smaller, but never below
/// [`FieldMetrics::MIN_BASE`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldMetrics {
    origin: Vec2,
    size: Vec2,
}

impl FieldMetrics {
    /// Smallest base unit in pixels.
    pub const MIN_BASE: f32 = 160.0;

    /// Share of the field width used by the labyrinth grid.
    const GRID_SHARE: f32 = 0.9;

    /// Share of the field width used by one arrow of the direction pad.
    const PAD_KEY_SHARE: f32 = 0.12;

    /// Computes the field centered inside a window of the given size.
    #[must_use]
    pub fn from_window(window: Vec2) -> Self {
        let base = (window.y / 3.0)
            .floor()
            .min((window.x / 2.0).floor())
            .max(Self::MIN_BASE);
        let size = Vec2::new(2.0 * base, 3.0 * base);
        let origin = ((window - size) * 0.5).max(Vec2::ZERO);
        Self { origin, size }
    }

    /// Top-left corner of the field.
    #[must_use]
    pub const fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Width and height of the field.
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        self.size
    }

    /// Side length of a labyrinth cell for the given grid dimensions.
    #[must_use]
    pub fn cell_length(&self, columns: u32, rows: u32) -> f32 {
        let cells = columns.max(rows).max(1) as f32;
        self.size.x * Self::GRID_SHARE / cells
    }

    /// Top-left corner of the labyrinth grid.
    #[must_use]
    pub fn grid_origin(&self, columns: u32, rows: u32) -> Vec2 {
        let cell = self.cell_length(columns, rows);
        let grid = Vec2::new(columns as f32, rows as f32) * cell;
        let margin = (self.size.x - grid.x) * 0.5;
        Vec2::new(self.origin.x + margin, self.origin.y + margin)
    }

    /// Top-left corner of the cell at `position`.
    #[must_use]
    pub fn cell_origin(&self, columns: u32, rows: u32, position: Position) -> Vec2 {
        let cell = self.cell_length(columns, rows);
        self.grid_origin(columns, rows)
            + Vec2::new(position.x() as f32, position.y() as f32) * cell
    }

    /// Rectangle of the overlay button as `(top_left, size)`.
    #[must_use]
    pub fn button_rect(&self) -> (Vec2, Vec2) {
        let size = Vec2::new(self.size.x * 0.6, self.size.y * 0.12);
        let top_left = Vec2::new(
            self.origin.x + (self.size.x - size.x) * 0.5,
            self.origin.y + self.size.y * 0.65,
        );
        (top_left, size)
    }

    /// Whether `point` lies inside the overlay button.
    #[must_use]
    pub fn button_contains(&self, point: Vec2) -> bool {
        rect_contains(self.button_rect(), point)
    }

    /// Rectangle of the on-screen arrow for `direction` as `(top_left, size)`.
    ///
    /// The four arrows form a cross centered below the labyrinth grid.
    #[must_use]
    pub fn arrow_rect(&self, direction: Direction) -> (Vec2, Vec2) {
        let key = self.size.x * Self::PAD_KEY_SHARE;
        let pad_center = Vec2::new(
            self.origin.x + self.size.x * 0.5,
            self.origin.y + self.size.y * 0.82,
        );
        let (dx, dy) = direction.delta();
        let center = pad_center + Vec2::new(dx as f32, dy as f32) * key * 1.1;
        (center - Vec2::splat(key * 0.5), Vec2::splat(key))
    }

    /// Arrow of the direction pad under `point`, if any.
    #[must_use]
    pub fn arrow_at(&self, point: Vec2) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| rect_contains(self.arrow_rect(*direction), point))
    }
}

fn rect_contains((top_left, size): (Vec2, Vec2), point: Vec2) -> bool {
    point.cmpge(top_left).all() && point.cmple(top_left + size).all()
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Duration of the screen fade animations.
    pub fade: Duration,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color, fade: Duration, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            fade,
            scene,
        }
    }
}

/// Rendering backend capable of presenting Labyrinth scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the frame delta, per-frame
    /// input captured by the adapter, and may mutate the scene before it is
    /// rendered. An error returned by the closure stops the backend and is
    /// reported to the caller.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) -> AnyResult<()> + 'static;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderingError {
    /// Free-space flags must cover every cell exactly once.
    CellCountMismatch {
        /// Number of cells implied by the dimensions.
        expected: usize,
        /// Number of flags provided.
        actual: usize,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "expected {expected} cell flags (received {actual})")
            }
        }
    }
}

impl Error for RenderingError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> LabyrinthPresentation {
        LabyrinthPresentation::new(
            3,
            1,
            vec![true, false, true],
            Position::new(0, 0),
            Position::new(2, 0),
        )
        .expect("dimensions match")
    }

    #[test]
    fn labyrinth_rejects_mismatched_cell_count() {
        let error = LabyrinthPresentation::new(
            2,
            2,
            vec![true],
            Position::new(0, 0),
            Position::new(1, 1),
        )
        .expect_err("one flag cannot describe four cells");

        assert_eq!(
            error,
            RenderingError::CellCountMismatch {
                expected: 4,
                actual: 1,
            }
        );
    }

    #[test]
    fn labyrinth_treats_out_of_range_cells_as_walls() {
        let labyrinth = corridor();

        assert!(labyrinth.is_free(Position::new(0, 0)));
        assert!(!labyrinth.is_free(Position::new(1, 0)));
        assert!(!labyrinth.is_free(Position::new(-1, 0)));
        assert!(!labyrinth.is_free(Position::new(3, 0)));
        assert!(!labyrinth.is_free(Position::new(0, 1)));
    }

    #[test]
    fn render_and_remove_toggle_mounting() {
        let mut scene = Scene::new();

        scene.apply(ViewCommand::Render(Screen::Start));
        assert!(scene.screen(Screen::Start).is_mounted());

        scene.apply(ViewCommand::Remove(Screen::Start));
        assert!(!scene.screen(Screen::Start).is_mounted());
    }

    #[test]
    fn hide_class_fades_screen_out() {
        let mut scene = Scene::new();
        let fade = Duration::from_millis(1000);

        scene.apply(ViewCommand::Render(Screen::Start));
        scene.apply(ViewCommand::AddClass(Screen::Start, ViewClass::HideAnimated));
        assert_eq!(scene.screen(Screen::Start).opacity(fade), 1.0);

        scene.advance(Duration::from_millis(500));
        assert!((scene.screen(Screen::Start).opacity(fade) - 0.5).abs() < 1e-5);

        scene.advance(Duration::from_millis(800));
        assert_eq!(scene.screen(Screen::Start).opacity(fade), 0.0);
    }

    #[test]
    fn show_class_fades_screen_in_and_removal_leaves_it_opaque() {
        let mut scene = Scene::new();
        let fade = Duration::from_millis(1000);

        scene.apply(ViewCommand::Render(Screen::Final));
        scene.apply(ViewCommand::AddClass(Screen::Final, ViewClass::ShowAnimated));
        assert_eq!(scene.screen(Screen::Final).opacity(fade), 0.0);

        scene.advance(Duration::from_millis(250));
        assert!((scene.screen(Screen::Final).opacity(fade) - 0.25).abs() < 1e-5);

        scene.apply(ViewCommand::RemoveClass(Screen::Final, ViewClass::ShowAnimated));
        assert!(!scene
            .screen(Screen::Final)
            .has_class(ViewClass::ShowAnimated));
        assert_eq!(scene.screen(Screen::Final).opacity(fade), 1.0);
    }

    #[test]
    fn unmounted_screens_are_transparent() {
        let scene = Scene::new();
        assert_eq!(
            scene
                .screen(Screen::LevelComplete)
                .opacity(Duration::from_millis(1)),
            0.0
        );
    }

    #[test]
    fn level_complete_render_mounts_overlay_with_level() {
        let mut scene = Scene::new();

        scene.apply(ViewCommand::RenderLevelComplete { level: 2 });

        assert_eq!(scene.level(), 2);
        assert!(scene.screen(Screen::LevelComplete).is_mounted());
    }

    #[test]
    fn press_effect_expires_after_lifetime() {
        let mut scene = Scene::new();
        let lifetime = Duration::from_millis(150);

        scene.apply(ViewCommand::PressEffect {
            screen: Screen::Labyrinth,
            direction: Some(Direction::Left),
        });
        let press = scene.press_effect(lifetime).expect("fresh press");
        assert_eq!(press.direction, Some(Direction::Left));

        scene.advance(lifetime);
        assert!(scene.press_effect(lifetime).is_none());
    }

    #[test]
    fn labyrinth_and_player_are_retained() {
        let mut scene = Scene::new();

        scene.apply(ViewCommand::RenderLabyrinth(corridor()));
        scene.apply(ViewCommand::RenderPlayer(Position::new(2, 0)));

        assert_eq!(scene.labyrinth().map(LabyrinthPresentation::width), Some(3));
        assert_eq!(scene.player(), Some(Position::new(2, 0)));
    }

    #[test]
    fn field_metrics_follow_the_smaller_window_axis() {
        let metrics = FieldMetrics::from_window(Vec2::new(1200.0, 900.0));

        assert_eq!(metrics.size(), Vec2::new(600.0, 900.0));
        assert_eq!(metrics.origin(), Vec2::new(300.0, 0.0));
    }

    #[test]
    fn field_metrics_clamp_to_minimum_base() {
        let metrics = FieldMetrics::from_window(Vec2::new(200.0, 300.0));

        assert_eq!(metrics.size(), Vec2::new(320.0, 480.0));
        assert_eq!(metrics.origin(), Vec2::ZERO);
    }

    #[test]
    fn cells_fit_inside_the_field_width() {
        let metrics = FieldMetrics::from_window(Vec2::new(800.0, 600.0));
        let cell = metrics.cell_length(5, 5);
        let last = metrics.cell_origin(5, 5, Position::new(4, 4));

        assert!(last.x + cell <= metrics.origin().x + metrics.size().x);
        assert!(metrics.grid_origin(5, 5).x > metrics.origin().x);
    }

    #[test]
    fn button_hit_testing_uses_its_rectangle() {
        let metrics = FieldMetrics::from_window(Vec2::new(800.0, 600.0));
        let (top_left, size) = metrics.button_rect();

        assert!(metrics.button_contains(top_left + size * 0.5));
        assert!(!metrics.button_contains(top_left - Vec2::ONE));
    }

    #[test]
    fn arrows_are_hit_tested_by_their_own_rectangles() {
        let metrics = FieldMetrics::from_window(Vec2::new(640.0, 960.0));

        for direction in Direction::ALL {
            let (top_left, size) = metrics.arrow_rect(direction);
            assert_eq!(metrics.arrow_at(top_left + size * 0.5), Some(direction));
        }
        let (up, _) = metrics.arrow_rect(Direction::Up);
        assert_eq!(metrics.arrow_at(up - Vec2::splat(1.0)), None);
        assert_eq!(metrics.arrow_at(metrics.origin()), None);
    }

    #[test]
    fn arrow_keys_round_trip_through_directions() {
        for direction in Direction::ALL {
            assert_eq!(Key::arrow(direction).direction(), Some(direction));
        }
        assert_eq!(Key::Confirm.direction(), None);
    }

    #[test]
    fn lighten_moves_channels_towards_white() {
        let color = Color::from_rgb_u8(0, 0, 0).lighten(0.5);
        assert!((color.red - 0.5).abs() < 1e-6);
        assert_eq!(color.alpha, 1.0);
        assert_eq!(color.faded(0.25).alpha, 0.25);
    }
}
