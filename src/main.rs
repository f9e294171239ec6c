use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hexagod::config::{GameConfig, KeyBindings};
use hexagod::error::{GameError, Result as GameResult};
use hexagod::game::{GameScene, SceneTransition};
use hexagod::input_system::{Action, InputSystem};
use hexagod::render::{RenderSurface, Rgba};

const CAPTION: &str = "Hexagod";
/// Longest frame step fed to the game, so a stalled window doesn't fling the camera
const MAX_FRAME_TIME: f32 = 0.25;

/// SDL2 canvas as a render target for the game
struct SdlSurface {
    canvas: Canvas<Window>,
}

fn to_color(colour: Rgba) -> Color {
    Color::RGBA(colour.r, colour.g, colour.b, colour.a)
}

impl RenderSurface for SdlSurface {
    fn clear(&mut self, colour: Rgba) -> GameResult<()> {
        self.canvas.set_draw_color(to_color(colour));
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, colour: Rgba) -> GameResult<()> {
        self.canvas.set_draw_color(to_color(colour));
        self.canvas.fill_rect(Rect::new(x, y, w, h)).map_err(GameError::Render)
    }

    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), colour: Rgba) -> GameResult<()> {
        self.canvas.set_draw_color(to_color(colour));
        self.canvas
            .draw_line(Point::new(from.0, from.1), Point::new(to.0, to.1))
            .map_err(GameError::Render)
    }
}

/// Calculate the largest integer window scale that fits the monitor
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem, config: &GameConfig) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let max_scale_w = usable_w / config.window_width.max(1) as i32;
            let max_scale_h = usable_h / config.window_height.max(1) as i32;

            max_scale_w.min(max_scale_h).clamp(1, 6) as u32
        }
        Err(e) => {
            warn!(error = %e, "could not detect monitor size, using 2x scale");
            2
        }
    }
}

/// Resolves configured key names to scancodes, skipping names SDL doesn't know
fn scancode_bindings(bindings: &KeyBindings) -> Vec<(Action, Vec<Scancode>)> {
    bindings
        .iter()
        .map(|(action, names)| {
            let keys = names
                .iter()
                .filter_map(|name| {
                    let code = Scancode::from_name(name);
                    if code.is_none() {
                        warn!(key = %name, ?action, "unknown key name in bindings");
                    }
                    code
                })
                .collect();
            (action, keys)
        })
        .collect()
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GameConfig::load_or_default();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window_scale = calculate_window_scale(&video_subsystem, &config);
    let window_width = config.window_width.saturating_mul(window_scale);
    let window_height = config.window_height.saturating_mul(window_scale);
    info!(window_scale, window_width, window_height, "opening window");

    let window = video_subsystem
        .window(CAPTION, window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Set logical size for automatic pixel-perfect scaling
    canvas
        .set_logical_size(config.window_width, config.window_height)
        .map_err(|e| e.to_string())?;
    canvas.set_blend_mode(BlendMode::Blend);
    let mut surface = SdlSurface { canvas };

    let mut event_pump = sdl_context.event_pump()?;
    let mut input_system = InputSystem::new(scancode_bindings(&config.key_bindings));
    let mut scene = GameScene::new(&config)?;

    let mut mouse_position = (0, 0);
    let mut last_frame = Instant::now();
    let frame_sleep = Duration::new(0, 1_000_000_000u32 / config.fps.max(1));

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                // Motion events arrive in logical coordinates
                Event::MouseMotion { x, y, .. } => mouse_position = (x, y),
                _ => {}
            }
        }

        let keyboard_state = event_pump.keyboard_state();
        let mouse_state = event_pump.mouse_state();
        let input = input_system.sample(
            |scancode| keyboard_state.is_scancode_pressed(scancode),
            [mouse_state.left(), mouse_state.middle(), mouse_state.right()],
            mouse_position,
        );

        match scene.handle_input(&input) {
            SceneTransition::Quit => break 'running,
            SceneTransition::Restart => {
                scene = GameScene::new(&config)?;
                continue;
            }
            SceneTransition::None => {}
        }

        let now = Instant::now();
        let delta_time = now.duration_since(last_frame).as_secs_f32().min(MAX_FRAME_TIME);
        last_frame = now;

        scene.update(delta_time)?;
        scene.render(&mut surface)?;
        surface.canvas.present();

        std::thread::sleep(frame_sleep);
    }

    info!(score = scene.score(), "quit");
    Ok(())
}
