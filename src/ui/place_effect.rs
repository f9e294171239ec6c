//! Expanding double-hex ring shown where a tile was just placed

use crate::animation::AnimationPlayer;
use crate::camera::Camera;
use crate::error::Result;
use crate::hex::{TILE_SIZE, hex_corners};
use crate::render::{RenderSurface, Rgba};

const FRAME_COUNT: usize = 16;
const FRAME_DURATION: f32 = 0.05;
const MAX_ALPHA: f32 = 150.0;

pub struct PlaceEffect {
    animation: AnimationPlayer,
    x: f32,
    y: f32,
}

impl PlaceEffect {
    pub fn new() -> Self {
        PlaceEffect {
            animation: AnimationPlayer::new("place", FRAME_COUNT, FRAME_DURATION, false),
            x: 0.0,
            y: 0.0,
        }
    }

    /// Restarts the effect around the world-space point `(x, y)`
    pub fn trigger(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.animation.reset();
    }

    pub fn update(&mut self, delta_time: f32) {
        self.animation.update(delta_time);
    }

    pub fn is_finished(&self) -> bool {
        self.animation.is_finished()
    }

    /// Ring sizes and opacity for the current frame.
    ///
    /// Frames play from a small bright pair of rings out to a wide faded pair.
    pub fn frame_shape(&self) -> (f32, f32, u8) {
        let step = (FRAME_COUNT - 1 - self.animation.current_frame()) as f32;
        let n = FRAME_COUNT as f32;
        let outer = TILE_SIZE * (1.0 - step / (n * 4.0));
        let inner = TILE_SIZE * (1.5 - step / (n * 2.0));
        let alpha = (step * MAX_ALPHA / n) as u8;
        (outer, inner, alpha)
    }

    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S, camera: &Camera) -> Result<()> {
        let (outer, inner, alpha) = self.frame_shape();
        if alpha == 0 {
            return Ok(());
        }

        let (sx, sy) = camera.world_to_screen(self.x, self.y);
        let colour = Rgba::WHITE.with_alpha(alpha);
        surface.draw_polygon(&hex_corners(sx, sy, outer), colour)?;
        surface.draw_polygon(&hex_corners(sx, sy, inner), colour)
    }
}

impl Default for PlaceEffect {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::HeadlessSurface;

    #[test]
    fn test_idle_effect_draws_nothing() {
        let effect = PlaceEffect::new();
        let mut surface = HeadlessSurface::new();
        effect.render(&mut surface, &Camera::new(0.0, 0.0, 50.0, 50.0, 0.0)).unwrap();
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_rings_grow_and_fade() {
        let mut effect = PlaceEffect::new();
        effect.trigger(0.0, 0.0);
        let (outer_start, inner_start, alpha_start) = effect.frame_shape();

        effect.update(0.3);
        let (outer_mid, inner_mid, alpha_mid) = effect.frame_shape();
        assert!(outer_mid > outer_start);
        assert!(inner_mid > inner_start);
        assert!(alpha_mid < alpha_start);

        effect.update(1.0);
        assert!(effect.is_finished());
        let (outer_end, inner_end, alpha_end) = effect.frame_shape();
        assert_eq!(outer_end, TILE_SIZE);
        assert_eq!(inner_end, TILE_SIZE * 1.5);
        assert_eq!(alpha_end, 0);
    }

    #[test]
    fn test_triggered_effect_draws_two_rings() {
        let mut effect = PlaceEffect::new();
        effect.trigger(3.0, 4.0);
        let mut surface = HeadlessSurface::new();
        effect.render(&mut surface, &Camera::new(0.0, 0.0, 50.0, 50.0, 0.0)).unwrap();
        assert_eq!(surface.calls().len(), 12);
    }
}
