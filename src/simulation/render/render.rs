#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::spatial::grid::Grid;

use super::palette::cell_color;
use super::SandEngine;

/// RGB(10,10,10) with alpha=255, ABGR
pub const BACKGROUND_COLOR: u32 = 0xFF0A0A0A;

/// Host-side drawing target. One call per non-empty cell per frame.
pub trait RenderSurface {
    /// Fill an axis-aligned square whose top-left corner is at (x, y) in
    /// world units. `color` is ABGR.
    fn fill_quad(&mut self, x: f32, y: f32, size: f32, color: u32);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: u32,
}

/// Collects quads in emission order
#[derive(Clone, Debug, Default)]
pub struct QuadBuffer {
    pub quads: Vec<Quad>,
}

impl QuadBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.quads.clear();
    }
}

impl RenderSurface for QuadBuffer {
    fn fill_quad(&mut self, x: f32, y: f32, size: f32, color: u32) {
        self.quads.push(Quad { x, y, size, color });
    }
}

pub(super) fn render<S: RenderSurface + ?Sized>(engine: &SandEngine, surface: &mut S) {
    let grid = &engine.grid;
    let size = engine.config.cell_scale as f32;
    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            if let Some(color) = cell_color(grid.cell(x, y), x, y, engine.frame) {
                surface.fill_quad(x as f32 * size, y as f32 * size, size, color);
            }
        }
    }
}

fn fill_row(grid: &Grid, frame: u64, y: u32, row: &mut [u32]) {
    for (x, pixel) in row.iter_mut().enumerate() {
        let x = x as u32;
        *pixel = cell_color(grid.cell(x, y), x, y, frame).unwrap_or(BACKGROUND_COLOR);
    }
}

pub(super) fn render_pixels(engine: &SandEngine, pixels: &mut [u32]) -> Result<(), String> {
    let grid = &engine.grid;
    if pixels.len() != grid.size() {
        return Err(format!(
            "pixel buffer holds {} values, grid needs {}",
            pixels.len(),
            grid.size()
        ));
    }
    let width = grid.width() as usize;
    let frame = engine.frame;

    #[cfg(feature = "parallel")]
    {
        pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| fill_row(grid, frame, y as u32, row));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in pixels.chunks_mut(width).enumerate() {
            fill_row(grid, frame, y as u32, row);
        }
    }
    Ok(())
}
