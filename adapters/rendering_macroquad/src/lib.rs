#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Labyrinth.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in the containerised CI environment.
//! To keep `cargo test` usable everywhere we depend on macroquad without its
//! default `audio` feature.
//!
//! The backend owns the frame loop: every frame it polls the keyboard and the
//! mouse into a [`FrameInput`], hands it to the caller together with the frame
//! delta, and draws whatever the caller left in the [`Scene`].

use anyhow::Result;
use glam::Vec2;
use labyrinth_core::{Direction, Position, WELCOME_BANNER};
use labyrinth_rendering::{
    Color, FieldMetrics, FrameInput, Key, LabyrinthPresentation, Presentation,
    RenderingBackend, Scene, Screen, ViewClass,
};
use macroquad::input::{
    is_key_pressed, is_mouse_button_pressed, mouse_position, KeyCode, MouseButton,
};
use std::{sync::mpsc, time::Duration};

/// How long press feedback stays visible.
const PRESS_EFFECT_LIFETIME: Duration = Duration::from_millis(150);

/// Snapshot of edge-triggered keys observed during a single frame.
#[derive(Clone, Copy, Debug, Default)]
struct KeyboardShortcuts {
    /// `Q` or `Escape` to quit the game loop.
    quit_requested: bool,
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    /// `Enter` or `Space`.
    confirm: bool,
}

impl KeyboardShortcuts {
    fn poll() -> Self {
        Self {
            quit_requested: is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q),
            up: is_key_pressed(KeyCode::Up),
            down: is_key_pressed(KeyCode::Down),
            left: is_key_pressed(KeyCode::Left),
            right: is_key_pressed(KeyCode::Right),
            confirm: is_key_pressed(KeyCode::Enter)
                || is_key_pressed(KeyCode::KpEnter)
                || is_key_pressed(KeyCode::Space),
        }
    }

    fn keys(self) -> Vec<Key> {
        [
            (self.up, Key::Up),
            (self.down, Key::Down),
            (self.left, Key::Left),
            (self.right, Key::Right),
            (self.confirm, Key::Confirm),
        ]
        .into_iter()
        .filter_map(|(pressed, key)| pressed.then_some(key))
        .collect()
    }
}

/// Rendering backend implemented on top of macroquad.
#[derive(Debug, Default)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
    show_fps: bool,
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }

    /// Configures whether the backend prints the frame rate once per second.
    #[must_use]
    pub fn with_show_fps(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }
}

/// Tracks the average frames-per-second produced by the render loop.
#[derive(Debug, Default)]
struct FpsCounter {
    elapsed: Duration,
    frames: u32,
}

impl FpsCounter {
    /// Records a rendered frame and returns the average rate once a second has elapsed.
    fn record_frame(&mut self, frame: Duration) -> Option<f32> {
        self.elapsed += frame;
        self.frames = self.frames.saturating_add(1);

        if self.elapsed < Duration::from_secs(1) {
            return None;
        }

        let per_second = self.frames as f32 / self.elapsed.as_secs_f32();
        self.elapsed = Duration::ZERO;
        self.frames = 0;
        Some(per_second)
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) -> Result<()> + 'static,
    {
        let Self {
            swap_interval,
            show_fps,
        } = self;

        let Presentation {
            window_title,
            clear_color,
            fade,
            scene,
        } = presentation;

        let mut config = macroquad::window::Conf {
            window_title,
            window_width: 640,
            window_height: 960,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        let (failure_sender, failure_receiver) = mpsc::channel::<anyhow::Error>();

        macroquad::Window::from_config(config, async move {
            let mut scene = scene;
            let background = to_macroquad_color(clear_color);
            let mut fps_counter = FpsCounter::default();

            loop {
                let keyboard = KeyboardShortcuts::poll();
                if keyboard.quit_requested {
                    break;
                }

                macroquad::window::clear_background(background);

                let window = Vec2::new(
                    macroquad::window::screen_width(),
                    macroquad::window::screen_height(),
                );
                let metrics = FieldMetrics::from_window(window);
                let (cursor_x, cursor_y) = mouse_position();
                let frame_input = gather_frame_input_from_observations(
                    &scene,
                    &metrics,
                    Vec2::new(cursor_x, cursor_y),
                    is_mouse_button_pressed(MouseButton::Left),
                    keyboard.keys(),
                );

                let dt_seconds = macroquad::time::get_frame_time();
                let frame_dt = Duration::from_secs_f32(dt_seconds.max(0.0));
                if let Err(error) = update_scene(frame_dt, frame_input, &mut scene) {
                    let _ = failure_sender.send(error);
                    break;
                }
                scene.advance(frame_dt);

                draw_field(&metrics);
                for screen in Screen::ALL {
                    match screen {
                        Screen::Labyrinth => draw_labyrinth_screen(&scene, &metrics, fade),
                        overlay => draw_overlay(&scene, overlay, &metrics, fade),
                    }
                }

                if show_fps {
                    if let Some(per_second) = fps_counter.record_frame(frame_dt) {
                        println!("FPS: {per_second:.2}");
                    }
                }

                macroquad::window::next_frame().await;
            }
        });

        match failure_receiver.try_recv() {
            Ok(error) => Err(error),
            Err(_) => Ok(()),
        }
    }
}

/// Clickable button hosted by an overlay screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OverlayButton {
    Start,
    PlayAgain,
}

impl OverlayButton {
    const fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::PlayAgain => "Play again",
        }
    }
}

/// Button the player may click this frame, if any.
///
/// Buttons stop accepting clicks as soon as their screen starts hiding.
fn active_button(scene: &Scene) -> Option<OverlayButton> {
    let accepts = |screen: Screen| {
        let state = scene.screen(screen);
        state.is_mounted() && !state.has_class(ViewClass::HideAnimated)
    };

    if accepts(Screen::Final) {
        Some(OverlayButton::PlayAgain)
    } else if accepts(Screen::Start) {
        Some(OverlayButton::Start)
    } else {
        None
    }
}

fn gather_frame_input_from_observations(
    scene: &Scene,
    metrics: &FieldMetrics,
    cursor_position: Vec2,
    left_click: bool,
    keys: Vec<Key>,
) -> FrameInput {
    let mut input = FrameInput {
        keys,
        ..FrameInput::default()
    };

    if !left_click {
        return input;
    }

    let button = active_button(scene).filter(|_| metrics.button_contains(cursor_position));
    match button {
        Some(OverlayButton::Start) => input.start_clicked = true,
        Some(OverlayButton::PlayAgain) => input.play_again_clicked = true,
        None => {
            let tapped = metrics
                .arrow_at(cursor_position)
                .filter(|_| scene.screen(Screen::Labyrinth).is_mounted());
            if let Some(direction) = tapped {
                input.keys.push(Key::arrow(direction));
            }
        }
    }
    input
}

struct Palette;

impl Palette {
    const FIELD: Color = Color::new(0.13, 0.14, 0.18, 1.0);
    const WALL: Color = Color::new(0.22, 0.24, 0.3, 1.0);
    const FREE: Color = Color::new(0.85, 0.86, 0.8, 1.0);
    const EXIT: Color = Color::new(0.35, 0.75, 0.45, 1.0);
    const PLAYER: Color = Color::new(0.9, 0.35, 0.25, 1.0);
    const OVERLAY: Color = Color::new(0.08, 0.09, 0.12, 0.92);
    const BUTTON: Color = Color::new(0.27, 0.27, 0.27, 1.0);
    const TEXT: Color = Color::new(1.0, 1.0, 1.0, 1.0);
}

fn draw_field(metrics: &FieldMetrics) {
    let origin = metrics.origin();
    let size = metrics.size();
    macroquad::shapes::draw_rectangle(
        origin.x,
        origin.y,
        size.x,
        size.y,
        to_macroquad_color(Palette::FIELD),
    );
}

fn draw_labyrinth_screen(scene: &Scene, metrics: &FieldMetrics, fade: Duration) {
    let state = scene.screen(Screen::Labyrinth);
    if !state.is_mounted() {
        return;
    }
    let opacity = state.opacity(fade);

    if let Some(labyrinth) = scene.labyrinth() {
        draw_cells(labyrinth, metrics, opacity);
        if let Some(player) = scene.player() {
            let cell = metrics.cell_length(labyrinth.width(), labyrinth.height());
            let center = metrics.cell_origin(labyrinth.width(), labyrinth.height(), player)
                + Vec2::splat(cell * 0.5);
            macroquad::shapes::draw_circle(
                center.x,
                center.y,
                cell * 0.35,
                to_macroquad_color(Palette::PLAYER.faded(opacity)),
            );
        }
    }

    let pressed = scene
        .press_effect(PRESS_EFFECT_LIFETIME)
        .filter(|press| press.screen == Screen::Labyrinth)
        .and_then(|press| press.direction);
    draw_direction_pad(metrics, pressed, opacity);
}

fn draw_cells(labyrinth: &LabyrinthPresentation, metrics: &FieldMetrics, opacity: f32) {
    let (columns, rows) = (labyrinth.width(), labyrinth.height());
    let cell = metrics.cell_length(columns, rows);

    for y in 0..rows as i32 {
        for x in 0..columns as i32 {
            let position = Position::new(x, y);
            let color = if position == labyrinth.end() {
                Palette::EXIT
            } else if labyrinth.is_free(position) {
                Palette::FREE
            } else {
                Palette::WALL
            };
            let origin = metrics.cell_origin(columns, rows, position);
            macroquad::shapes::draw_rectangle(
                origin.x,
                origin.y,
                cell,
                cell,
                to_macroquad_color(color.faded(opacity)),
            );
        }
    }
}

/// Draws the four on-screen arrows below the grid, highlighting `pressed`.
fn draw_direction_pad(metrics: &FieldMetrics, pressed: Option<Direction>, opacity: f32) {
    for direction in Direction::ALL {
        let (top_left, size) = metrics.arrow_rect(direction);
        let color = if pressed == Some(direction) {
            Palette::BUTTON.lighten(0.5)
        } else {
            Palette::BUTTON
        };
        macroquad::shapes::draw_rectangle(
            top_left.x,
            top_left.y,
            size.x,
            size.y,
            to_macroquad_color(color.faded(opacity)),
        );
    }
}

fn draw_overlay(scene: &Scene, screen: Screen, metrics: &FieldMetrics, fade: Duration) {
    let state = scene.screen(screen);
    if !state.is_mounted() {
        return;
    }
    let opacity = state.opacity(fade);
    let origin = metrics.origin();
    let size = metrics.size();

    macroquad::shapes::draw_rectangle(
        origin.x,
        origin.y,
        size.x,
        size.y,
        to_macroquad_color(Palette::OVERLAY.faded(opacity)),
    );

    let (title, button) = match screen {
        Screen::Start => (WELCOME_BANNER.to_string(), Some(OverlayButton::Start)),
        Screen::LevelComplete => (format!("Level {}", scene.level()), None),
        Screen::Final => ("Well done!".to_string(), Some(OverlayButton::PlayAgain)),
        Screen::Labyrinth => return,
    };
    let title_y = origin.y + size.y * 0.35;
    draw_centered_text(&title, origin.x + size.x * 0.5, title_y, size.x * 0.14, opacity);

    if let Some(button) = button {
        let pressed = scene
            .press_effect(PRESS_EFFECT_LIFETIME)
            .is_some_and(|press| press.screen == screen);
        let (top_left, button_size) = metrics.button_rect();
        let color = if pressed {
            Palette::BUTTON.lighten(0.4)
        } else {
            Palette::BUTTON
        };
        macroquad::shapes::draw_rectangle(
            top_left.x,
            top_left.y,
            button_size.x,
            button_size.y,
            to_macroquad_color(color.faded(opacity)),
        );
        draw_centered_text(
            button.label(),
            top_left.x + button_size.x * 0.5,
            top_left.y + button_size.y * 0.5,
            button_size.y * 0.45,
            opacity,
        );
    }
}

fn draw_centered_text(text: &str, center_x: f32, center_y: f32, font_size: f32, opacity: f32) {
    let dimensions = macroquad::text::measure_text(text, None, font_size as u16, 1.0);
    let _ = macroquad::text::draw_text(
        text,
        center_x - dimensions.width * 0.5,
        center_y + dimensions.offset_y * 0.5,
        font_size,
        to_macroquad_color(Palette::TEXT.faded(opacity)),
    );
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}
