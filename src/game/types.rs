// Shared enums and layout helpers used by the game scene

use crate::config::GameConfig;
use crate::hex::TILE_SIZE;

/// What the frame loop should do after a scene has handled its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneTransition {
    #[default]
    None,
    /// Throw the board away and start a new one
    Restart,
    Quit,
}

/// Screen-space positions of the HUD, derived from the logical window size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub centre_x: f32,
    pub centre_y: f32,
    /// Vertical spacing of the preview column
    pub preview_offset: f32,
    pub preview_x: f32,
    /// Baseline for the remaining counter and the score
    pub preview_y: f32,
    pub held_x: f32,
    pub held_y: f32,
    /// Half-extents of the inner rectangle; outside it the mouse pans
    pub move_x: f32,
    pub move_y: f32,
}

impl Layout {
    pub fn from_config(config: &GameConfig) -> Self {
        let width = config.window_width as f32;
        let height = config.window_height as f32;
        let (centre_x, centre_y) = config.window_centre();
        let [margin_x, margin_y] = config.edge_pan_margin;

        Layout {
            width,
            height,
            centre_x,
            centre_y,
            preview_offset: TILE_SIZE * 2.0,
            preview_x: width - TILE_SIZE,
            preview_y: TILE_SIZE / 2.0 + 2.0,
            held_x: TILE_SIZE,
            held_y: centre_y,
            move_x: (centre_x - margin_x as f32).max(0.0),
            move_y: (centre_y - margin_y as f32).max(0.0),
        }
    }

    /// True when `(x, y)` lies in the border band that pans the camera
    pub fn is_pan_zone(&self, x: f32, y: f32) -> bool {
        (self.centre_x - x).abs() > self.move_x || (self.centre_y - y).abs() > self.move_y
    }

    /// Four border rectangles `(x, y, w, h)` framing the play area
    pub fn border_rects(&self) -> [(f32, f32, f32, f32); 4] {
        let band_x = self.centre_x - self.move_x;
        let band_y = self.centre_y - self.move_y;
        [
            (0.0, 0.0, self.width, band_y),
            (0.0, 0.0, band_x, self.height),
            (self.centre_x + self.move_x, 0.0, band_x, self.height),
            (0.0, self.centre_y + self.move_y, self.width, band_y),
        ]
    }
}
