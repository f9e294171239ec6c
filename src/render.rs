/// Drawing surface abstraction and hex renderers
///
/// The game never talks to the window library directly. Everything is drawn
/// through [`RenderSurface`], which only has to provide rectangles and lines;
/// polygons and text are built on top of those.
///
/// # Architecture
///
/// - `RenderSurface` trait: primitive draw calls in screen-space pixels
/// - `HeadlessSurface`: records draw calls instead of drawing (tests, headless runs)
/// - `render_*` functions: world-space hexes converted through the [`Camera`]
///
/// The SDL2 canvas implementation lives in the binary.
use crate::camera::Camera;
use crate::error::Result;
use crate::hex::{HexPosition, TILE_SIZE, hex_corners, hex_to_world, sector_corners};
use crate::text;
use crate::tile::{Biome, HexTile};

/// 8-bit colour with alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Rgba { a, ..self }
    }
}

pub const BACKGROUND_COLOUR: Rgba = Rgba::rgb(83, 216, 251);
pub const OPEN_COLOUR: Rgba = Rgba::rgb(39, 39, 68);
pub const HIGHLIGHT_COLOUR: Rgba = Rgba::rgb(255, 255, 255);
pub const MATCH_COLOUR: Rgba = Rgba::rgb(255, 224, 64);

/// Fill colour for one biome sector
pub fn biome_colour(biome: Biome) -> Rgba {
    match biome {
        Biome::Swamp => Rgba::rgb(84, 110, 62),
        Biome::Grass => Rgba::rgb(106, 190, 48),
        Biome::Sand => Rgba::rgb(238, 212, 130),
        Biome::Forest => Rgba::rgb(36, 110, 52),
        Biome::Mountain => Rgba::rgb(132, 126, 135),
        Biome::Snow => Rgba::rgb(236, 244, 250),
    }
}

/// Primitive drawing operations in screen-space pixels.
///
/// Implementors provide rectangles and lines; polygons and text have default
/// implementations built from those.
pub trait RenderSurface {
    fn clear(&mut self, colour: Rgba) -> Result<()>;

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, colour: Rgba) -> Result<()>;

    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), colour: Rgba) -> Result<()>;

    /// Fills a convex or concave polygon with horizontal spans
    fn fill_polygon(&mut self, points: &[(f32, f32)], colour: Rgba) -> Result<()> {
        for (y, x0, x1) in scanline_spans(points) {
            self.fill_rect(x0, y, (x1 - x0) as u32, 1, colour)?;
        }
        Ok(())
    }

    /// Outlines a closed polygon
    fn draw_polygon(&mut self, points: &[(f32, f32)], colour: Rgba) -> Result<()> {
        for (i, from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.draw_line(round_point(*from), round_point(to), colour)?;
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, colour: Rgba, scale: u32) -> Result<()> {
        text::draw_centered_text(self, text, x, y, colour, scale)
    }
}

fn round_point((x, y): (f32, f32)) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

/// Horizontal spans `(y, x_start, x_end)` covering a polygon.
///
/// Each pixel row is sampled at its centre; spans are half-open.
pub fn scanline_spans(points: &[(f32, f32)]) -> Vec<(i32, i32, i32)> {
    let mut spans = Vec::new();
    if points.len() < 3 {
        return spans;
    }

    let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min).floor() as i32;
    let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max).ceil() as i32;

    let mut crossings = Vec::with_capacity(points.len());
    for y in min_y..max_y {
        let sample_y = y as f32 + 0.5;
        crossings.clear();

        for (i, &(x0, y0)) in points.iter().enumerate() {
            let (x1, y1) = points[(i + 1) % points.len()];
            if (y0 <= sample_y && sample_y < y1) || (y1 <= sample_y && sample_y < y0) {
                let t = (sample_y - y0) / (y1 - y0);
                crossings.push(x0 + t * (x1 - x0));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks_exact(2) {
            let start = pair[0].round() as i32;
            let end = pair[1].round() as i32;
            if end > start {
                spans.push((y, start, end));
            }
        }
    }

    spans
}

/// A placed (or about to be placed) tile: one coloured sector per side
pub fn render_hex<S: RenderSurface + ?Sized>(surface: &mut S, camera: &Camera, tile: &HexTile) -> Result<()> {
    let Some(position) = tile.position else {
        return Ok(());
    };
    let (wx, wy) = hex_to_world(position);
    let (sx, sy) = camera.world_to_screen(wx, wy);
    render_sectors(surface, sx, sy, TILE_SIZE, tile)
}

/// An empty cell that can be placed on
pub fn render_open_hex<S: RenderSurface + ?Sized>(
    surface: &mut S,
    camera: &Camera,
    position: HexPosition,
) -> Result<()> {
    let (wx, wy) = hex_to_world(position);
    let (sx, sy) = camera.world_to_screen(wx, wy);
    surface.fill_polygon(&hex_corners(sx, sy, TILE_SIZE - 1.0), OPEN_COLOUR)
}

/// Outline of the hovered cell, with edges that would match drawn brighter
pub fn render_highlighted_hex<S: RenderSurface + ?Sized>(
    surface: &mut S,
    camera: &Camera,
    position: HexPosition,
    matching_sides: [bool; 6],
) -> Result<()> {
    let (wx, wy) = hex_to_world(position);
    let (sx, sy) = camera.world_to_screen(wx, wy);
    let corners = hex_corners(sx, sy, TILE_SIZE);

    for side in 0..6 {
        let from = round_point(corners[side]);
        let to = round_point(corners[(side + 1) % 6]);
        let colour = if matching_sides[side] { MATCH_COLOUR } else { HIGHLIGHT_COLOUR };
        surface.draw_line(from, to, colour)?;
    }
    Ok(())
}

/// A tile drawn at a fixed screen position (preview column, held slot)
pub fn render_preview_hex<S: RenderSurface + ?Sized>(
    surface: &mut S,
    x: f32,
    y: f32,
    tile: &HexTile,
) -> Result<()> {
    render_sectors(surface, x, y, TILE_SIZE * 0.75, tile)
}

fn render_sectors<S: RenderSurface + ?Sized>(
    surface: &mut S,
    x: f32,
    y: f32,
    size: f32,
    tile: &HexTile,
) -> Result<()> {
    for (side, biome) in tile.sides.iter().enumerate() {
        surface.fill_polygon(&sector_corners(x, y, size, side), biome_colour(*biome))?;
    }
    surface.draw_polygon(&hex_corners(x, y, size), Rgba::BLACK.with_alpha(96))
}

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rgba),
    FillRect { x: i32, y: i32, w: u32, h: u32, colour: Rgba },
    Line { from: (i32, i32), to: (i32, i32), colour: Rgba },
}

/// Surface that records draw calls instead of drawing them
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    calls: Vec<DrawCall>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        HeadlessSurface::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of filled pixels of exactly `colour`
    pub fn filled_area(&self, colour: Rgba) -> u64 {
        self.calls
            .iter()
            .map(|call| match call {
                DrawCall::FillRect { w, h, colour: c, .. } if *c == colour => *w as u64 * *h as u64,
                _ => 0,
            })
            .sum()
    }
}

impl RenderSurface for HeadlessSurface {
    fn clear(&mut self, colour: Rgba) -> Result<()> {
        self.calls.push(DrawCall::Clear(colour));
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, colour: Rgba) -> Result<()> {
        self.calls.push(DrawCall::FillRect { x, y, w, h, colour });
        Ok(())
    }

    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), colour: Rgba) -> Result<()> {
        self.calls.push(DrawCall::Line { from, to, colour });
        Ok(())
    }
}
