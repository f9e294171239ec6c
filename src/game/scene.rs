// GameScene struct: board, tile supply, camera and feedback effects
//
// One GameScene is one game. The frame loop calls handle_input, update and
// render in that order every frame; a restart builds a fresh scene.

use crate::camera::Camera;
use crate::config::GameConfig;
use crate::error::Result;
use crate::grid::HexGrid;
use crate::hex::{HexPosition, hex_to_world, round_to_nearest_hex, world_to_hex};
use crate::input_system::{Action, InputSnapshot, MouseButton};
use crate::scoring::{self, ScoreEvent};
use crate::tile_manager::TileManager;
use crate::render::Rgba;
use crate::ui::{PlaceEffect, PopupStyle, PopupText};
use tracing::{debug, info};

use super::{Layout, SceneTransition};

const POPUP_DURATION: f32 = 0.5;
const PERFECT_COLOUR: Rgba = Rgba::rgb(255, 224, 64);

/// Gold and slower to rise, so it stays readable above the "+10"s
fn perfect_style() -> PopupStyle {
    PopupStyle {
        colour: PERFECT_COLOUR,
        rise_speed: 8.0,
        ..PopupStyle::default()
    }
}

/// Input requests collected by handle_input, consumed by the next update
#[derive(Debug, Clone, Copy, Default)]
struct PendingInput {
    pan_x: f32,
    pan_y: f32,
    hold: bool,
    rotate: bool,
    try_place: bool,
    centre: bool,
}

pub struct GameScene {
    pub(super) grid: HexGrid,
    pub(super) tile_manager: TileManager,
    pub(super) camera: Camera,
    pub(super) layout: Layout,
    pub(super) hovered: HexPosition,
    pub(super) score: u32,
    pub(super) edge_popups: [PopupText; 6],
    pub(super) perfect_popups: [PopupText; 2],
    pub(super) place_effect: PlaceEffect,
    pending: PendingInput,
}

impl GameScene {
    /// Starts a board holding only the starting tile
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;

        let mut grid = HexGrid::new();
        grid.add_tile(TileManager::starting_tile())?;

        let tile_manager = match config.seed {
            Some(seed) => TileManager::with_seed(config.preview_depth, config.starting_tiles, seed),
            None => TileManager::new(config.preview_depth, config.starting_tiles),
        };

        let layout = Layout::from_config(config);
        let camera = Camera::new(0.0, 0.0, layout.centre_x, layout.centre_y, config.camera_speed);

        info!(
            starting_tiles = config.starting_tiles,
            seed = ?config.seed,
            "new game"
        );

        Ok(GameScene {
            grid,
            tile_manager,
            camera,
            layout,
            hovered: HexPosition::ORIGIN,
            score: 0,
            edge_popups: std::array::from_fn(|_| PopupText::new("+10", POPUP_DURATION)),
            perfect_popups: std::array::from_fn(|_| {
                PopupText::with_style("PERFECT", POPUP_DURATION, perfect_style())
            }),
            place_effect: PlaceEffect::new(),
            pending: PendingInput::default(),
        })
    }

    /// Reads this frame's input.
    ///
    /// A mouse in the border band pans the camera towards it; anywhere else
    /// it picks the hovered hex. The hovered hex is kept while panning.
    pub fn handle_input(&mut self, input: &InputSnapshot) -> SceneTransition {
        if input.action(Action::Back).pressed {
            info!("leaving game");
            return SceneTransition::Quit;
        }
        if input.action(Action::Restart).pressed {
            info!(score = self.score, "restarting");
            return SceneTransition::Restart;
        }

        let (mx, my) = (input.mouse_x as f32, input.mouse_y as f32);
        let mut pending = PendingInput::default();

        if self.layout.is_pan_zone(mx, my) {
            let dx = self.layout.centre_x - mx;
            let dy = self.layout.centre_y - my;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance > 0.0 {
                pending.pan_x = -dx / distance;
                pending.pan_y = -dy / distance;
            }
        } else {
            let (wx, wy) = self.camera.screen_to_world(mx, my);
            self.hovered = round_to_nearest_hex(world_to_hex(wx, wy));
        }

        pending.hold = input.action(Action::Hold).pressed;
        pending.centre = input.action(Action::Centre).pressed;
        pending.rotate = input.mouse(MouseButton::Right).pressed;
        pending.try_place = input.mouse(MouseButton::Left).pressed;
        self.pending = pending;

        SceneTransition::None
    }

    /// Applies the pending input and advances timers by `delta_time` seconds
    pub fn update(&mut self, delta_time: f32) -> Result<()> {
        let pending = std::mem::take(&mut self.pending);

        self.camera.move_by_input(delta_time, pending.pan_x, pending.pan_y);
        if pending.centre {
            self.camera.recentre();
        }

        if pending.hold {
            self.tile_manager.swap_held_tile();
        }
        if pending.rotate {
            self.tile_manager.rotate_active_tile();
        }
        if pending.try_place {
            self.try_place()?;
        }

        self.place_effect.update(delta_time);
        for popup in self.edge_popups.iter_mut().chain(self.perfect_popups.iter_mut()) {
            popup.update(delta_time);
        }

        Ok(())
    }

    fn try_place(&mut self) -> Result<()> {
        if !self.grid.is_open(self.hovered) {
            return Ok(());
        }
        let Some(tile) = self.tile_manager.create_active_tile(self.hovered) else {
            debug!("no tile to place");
            return Ok(());
        };

        let outcome = scoring::place_tile(&mut self.grid, tile)?;
        self.score += outcome.score;
        if outcome.bonus_tiles > 0 {
            self.tile_manager.add_to_remaining(outcome.bonus_tiles);
        }

        for event in &outcome.events {
            match *event {
                ScoreEvent::EdgeMatch { side, anchor: (x, y) } => self.edge_popups[side].move_to(x, y),
                ScoreEvent::Perfect { anchor: (x, y), placed_tile, .. } => {
                    let slot = if placed_tile { 0 } else { 1 };
                    self.perfect_popups[slot].move_to(x, y);
                }
            }
        }

        self.tile_manager.get_next_tile();

        let (x, y) = hex_to_world(self.hovered);
        self.place_effect.trigger(x, y);

        info!(
            position = %self.hovered,
            matches = outcome.matches,
            score = self.score,
            remaining = self.tile_manager.get_remaining(),
            "placed tile"
        );
        Ok(())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hovered(&self) -> HexPosition {
        self.hovered
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    pub fn tile_manager(&self) -> &TileManager {
        &self.tile_manager
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn edge_popups(&self) -> &[PopupText; 6] {
        &self.edge_popups
    }

    pub fn perfect_popups(&self) -> &[PopupText; 2] {
        &self.perfect_popups
    }

    pub fn place_effect(&self) -> &PlaceEffect {
        &self.place_effect
    }

    /// The supply ran out; only restart or quit remain
    pub fn is_game_over(&self) -> bool {
        self.tile_manager.is_exhausted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_system::ButtonState;
    use crate::render::{DrawCall, HeadlessSurface};

    const PRESS: ButtonState = ButtonState {
        pressed: true,
        held: true,
        released: false,
    };

    fn scene() -> GameScene {
        let config = GameConfig {
            seed: Some(3),
            ..GameConfig::default()
        };
        GameScene::new(&config).unwrap()
    }

    fn centre() -> InputSnapshot {
        InputSnapshot::default().at(240, 135)
    }

    #[test]
    fn test_new_scene() {
        let scene = scene();
        assert_eq!(scene.score(), 0);
        assert_eq!(scene.grid().placed_count(), 1);
        assert_eq!(scene.tile_manager().get_remaining(), 50);
        assert!(!scene.is_game_over());
    }

    #[test]
    fn test_unplayable_config_is_rejected() {
        let config = GameConfig {
            preview_depth: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            GameScene::new(&config),
            Err(crate::error::GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_perfect_popups_are_gold() {
        let mut scene = scene();
        let camera = Camera::new(0.0, 0.0, 240.0, 135.0, 0.0);
        let has_colour = |surface: &HeadlessSurface, colour: Rgba| {
            surface
                .calls()
                .iter()
                .any(|call| matches!(call, DrawCall::FillRect { colour: c, .. } if *c == colour))
        };

        scene.perfect_popups[0].move_to(0.0, 0.0);
        let mut surface = HeadlessSurface::new();
        scene.perfect_popups()[0].render(&mut surface, &camera).unwrap();
        assert!(has_colour(&surface, PERFECT_COLOUR));

        scene.edge_popups[0].move_to(0.0, 0.0);
        let mut surface = HeadlessSurface::new();
        scene.edge_popups()[0].render(&mut surface, &camera).unwrap();
        assert!(has_colour(&surface, Rgba::WHITE));
        assert!(!has_colour(&surface, PERFECT_COLOUR));
    }

    #[test]
    fn test_back_beats_restart() {
        let mut scene = scene();
        let input = centre()
            .with_action(Action::Back, PRESS)
            .with_action(Action::Restart, PRESS);
        assert_eq!(scene.handle_input(&input), SceneTransition::Quit);

        let input = centre().with_action(Action::Restart, PRESS);
        assert_eq!(scene.handle_input(&input), SceneTransition::Restart);
    }

    #[test]
    fn test_hover_follows_mouse() {
        let mut scene = scene();
        let (x, y) = hex_to_world(HexPosition::axial(1, 0));
        scene.handle_input(&InputSnapshot::default().at(240 + x as i32, 135 + y as i32));
        assert_eq!(scene.hovered(), HexPosition::axial(1, 0));
    }

    #[test]
    fn test_pan_keeps_hover_and_moves_camera() {
        let mut scene = scene();
        let (x, y) = hex_to_world(HexPosition::axial(0, 1));
        scene.handle_input(&InputSnapshot::default().at(240 + x as i32, 135 + y as i32));

        scene.handle_input(&InputSnapshot::default().at(479, 135));
        scene.update(0.5).unwrap();
        assert_eq!(scene.hovered(), HexPosition::axial(0, 1));
        assert!((scene.camera().x - 80.0).abs() < 1e-3);
        assert!(scene.camera().y.abs() < 1e-3);
    }

    #[test]
    fn test_centre_action_recentres() {
        let mut scene = scene();
        scene.handle_input(&InputSnapshot::default().at(0, 0));
        scene.update(1.0).unwrap();
        assert!(scene.camera().x < 0.0);

        scene.handle_input(&centre().with_action(Action::Centre, PRESS));
        scene.update(0.1).unwrap();
        assert_eq!((scene.camera().x, scene.camera().y), (0.0, 0.0));
    }

    #[test]
    fn test_input_is_consumed_once() {
        let mut scene = scene();
        scene.handle_input(&centre().with_mouse(MouseButton::Right, PRESS));
        scene.update(0.016).unwrap();
        scene.update(0.016).unwrap();
        assert_eq!(scene.tile_manager().rotation(), 1);
    }

    #[test]
    fn test_clicking_placed_tile_does_nothing() {
        let mut scene = scene();
        scene.handle_input(&centre().with_mouse(MouseButton::Left, PRESS));
        scene.update(0.016).unwrap();
        assert_eq!(scene.grid().placed_count(), 1);
        assert_eq!(scene.tile_manager().get_remaining(), 50);
    }
}
