// Drawing the game scene
//
// Back to front: board, hover highlight, effects, border frame, HUD.

use crate::error::Result;
use crate::hex::TILE_SIZE;
use crate::render::{self, BACKGROUND_COLOUR, OPEN_COLOUR, RenderSurface, Rgba};
use crate::scoring;

use super::GameScene;

const GAME_OVER_COLOUR: Rgba = Rgba::rgb(255, 96, 64);

impl GameScene {
    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.clear(BACKGROUND_COLOUR)?;

        for position in self.grid.get_open_tiles() {
            render::render_open_hex(surface, &self.camera, position)?;
        }

        // Ghost of the active tile under the mouse; placed tiles draw over it
        if let Some(active) = self.tile_manager.create_active_tile(self.hovered) {
            render::render_hex(surface, &self.camera, &active)?;
        }

        for tile in self.grid.get_placed_tiles() {
            render::render_hex(surface, &self.camera, tile)?;
        }

        let matching_sides = match self.tile_manager.get_active() {
            Some(sides) if self.grid.is_open(self.hovered) => {
                scoring::preview_matches(&self.grid, self.hovered, &sides)
            }
            _ => [false; 6],
        };
        render::render_highlighted_hex(surface, &self.camera, self.hovered, matching_sides)?;

        self.place_effect.render(surface, &self.camera)?;
        for popup in self.edge_popups.iter().chain(self.perfect_popups.iter()) {
            popup.render(surface, &self.camera)?;
        }

        self.render_hud(surface)
    }

    fn render_hud<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        let layout = &self.layout;

        for (x, y, w, h) in layout.border_rects() {
            if w > 0.0 && h > 0.0 {
                surface.fill_rect(x as i32, y as i32, w as u32, h as u32, OPEN_COLOUR)?;
            }
        }

        for (i, slot) in self.tile_manager.get_preview().into_iter().enumerate() {
            let Some(tile) = slot else {
                break;
            };
            let y = (i + 1) as f32 * layout.preview_offset;
            render::render_preview_hex(surface, layout.preview_x, y, tile)?;
        }

        if let Some(held) = self.tile_manager.get_held() {
            render::render_preview_hex(surface, layout.held_x, layout.held_y, held)?;
        }
        let label_y = layout.held_y - TILE_SIZE - 16.0;
        surface.draw_text("HELD", layout.held_x as i32, label_y as i32, Rgba::WHITE, 1)?;

        surface.draw_text(
            &self.tile_manager.get_remaining().to_string(),
            layout.preview_x as i32,
            layout.preview_y as i32,
            Rgba::WHITE,
            2,
        )?;
        surface.draw_text(
            &self.score.to_string(),
            layout.centre_x as i32,
            layout.preview_y as i32,
            Rgba::WHITE,
            2,
        )?;
        surface.draw_text(
            &self.hovered.to_string(),
            layout.centre_x as i32,
            layout.height as i32 - 10,
            Rgba::WHITE,
            1,
        )?;

        if self.is_game_over() {
            let (x, y) = (layout.centre_x as i32, layout.centre_y as i32);
            surface.draw_text("GAME OVER", x + 1, y + 1, Rgba::BLACK, 3)?;
            surface.draw_text("GAME OVER", x, y, GAME_OVER_COLOUR, 3)?;
        }

        Ok(())
    }
}
