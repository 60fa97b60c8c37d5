//! Canvas model — the true-resolution cell grid behind the on-screen view
//!
//! The model stores one color per cell and knows nothing about display
//! sizes. Pointer mapping and rasterization translate between the fixed
//! cell grid and whatever surface the host UI happens to draw into.

use crate::color::Color;
use crate::error::Error;
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

/// A fixed-size grid of color cells, initialized to white.
pub struct CanvasModel {
    width_px: u32,
    height_px: u32,
    cells: RgbImage,
}

impl CanvasModel {
    /// Create a canvas of `width_px` × `height_px` cells, all white.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width_px: u32, height_px: u32) -> Self {
        assert!(width_px > 0 && height_px > 0, "canvas dimensions must be positive");
        let cells = ImageBuffer::from_pixel(width_px, height_px, Color::WHITE.into());
        Self { width_px, height_px, cells }
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    /// Set a cell to `color`. Out-of-range coordinates are a silent no-op:
    /// pointer mapping legitimately lands one past the edge at the display
    /// boundary.
    pub fn paint(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width_px && y < self.height_px {
            self.cells.put_pixel(x, y, color.into());
        }
    }

    /// Restore a cell to white.
    pub fn erase(&mut self, x: u32, y: u32) {
        self.paint(x, y, Color::WHITE);
    }

    /// Read a cell color. `None` out of range.
    pub fn cell(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width_px && y < self.height_px {
            Some((*self.cells.get_pixel(x, y)).into())
        } else {
            None
        }
    }

    /// Set every cell to `color`.
    pub fn fill(&mut self, color: Color) {
        let rgb: Rgb<u8> = color.into();
        for pixel in self.cells.pixels_mut() {
            *pixel = rgb;
        }
    }

    /// Map a pointer position on a `display_w` × `display_h` surface to a
    /// cell coordinate.
    ///
    /// Integer floor division, so adjacent display pixels partition the
    /// surface into contiguous cell rectangles with no gaps or overlaps;
    /// `px = display_w - 1` maps to the last cell column. A position at or
    /// past the display edge maps past the grid, which `paint`/`erase`
    /// then ignore.
    pub fn map_pointer_to_cell(&self, px: u32, py: u32, display_w: u32, display_h: u32) -> (u32, u32) {
        let x = (u64::from(px) * u64::from(self.width_px) / u64::from(display_w.max(1))) as u32;
        let y = (u64::from(py) * u64::from(self.height_px) / u64::from(display_h.max(1))) as u32;
        (x, y)
    }

    /// Produce a `target_size` × `target_size` bitmap by nearest-neighbor
    /// scaling: each output pixel samples the cell it falls inside, so for
    /// exact multiples every cell becomes a solid block. With
    /// `grid = Some(color)`, 1-px boundary lines are drawn on top of the
    /// scaled image so they stay crisp at any size.
    pub fn rasterize(&self, target_size: u32, grid: Option<Color>) -> RgbImage {
        let mut out = ImageBuffer::new(target_size, target_size);
        for (ox, oy, pixel) in out.enumerate_pixels_mut() {
            let sx = (u64::from(ox) * u64::from(self.width_px) / u64::from(target_size)) as u32;
            let sy = (u64::from(oy) * u64::from(self.height_px) / u64::from(target_size)) as u32;
            *pixel = *self.cells.get_pixel(sx, sy);
        }
        if let Some(color) = grid {
            self.overlay_grid(&mut out, color);
        }
        out
    }

    /// Draw cell-boundary lines over an already-scaled bitmap. The final
    /// line lands on the edge and is clamped to the last pixel column/row.
    fn overlay_grid(&self, out: &mut RgbImage, color: Color) {
        let target = u64::from(out.width());
        if target == 0 {
            return;
        }
        let rgb: Rgb<u8> = color.into();
        for i in 0..=u64::from(self.width_px) {
            let x = (i * target / u64::from(self.width_px)).min(target - 1) as u32;
            for y in 0..out.height() {
                out.put_pixel(x, y, rgb);
            }
        }
        for j in 0..=u64::from(self.height_px) {
            let y = (j * target / u64::from(self.height_px)).min(target - 1) as u32;
            for x in 0..out.width() {
                out.put_pixel(x, y, rgb);
            }
        }
    }

    /// Rasterize at `target_size` without the grid overlay and write a PNG
    /// at `path`. Does not mutate the model.
    pub fn export_png(&self, path: &Path, target_size: u32) -> Result<(), Error> {
        let bitmap = self.rasterize(target_size, None);
        bitmap.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(0xff, 0x00, 0x00);
    const PINK: Color = Color::new(0xff, 0x69, 0xb4);
    const GRID: Color = Color::new(0xd8, 0xb0, 0xff);

    #[test]
    fn starts_all_white() {
        let canvas = CanvasModel::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(canvas.cell(x, y), Some(Color::WHITE));
            }
        }
    }

    #[test]
    fn paint_then_read_returns_the_color() {
        let mut canvas = CanvasModel::new(4, 4);
        canvas.paint(2, 3, PINK);
        assert_eq!(canvas.cell(2, 3), Some(PINK));
        assert_eq!(canvas.cell(3, 2), Some(Color::WHITE));
    }

    #[test]
    fn out_of_range_paint_is_a_no_op() {
        let mut canvas = CanvasModel::new(4, 4);
        canvas.paint(5, 5, RED);
        canvas.paint(4, 0, RED);
        canvas.paint(0, 4, RED);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(canvas.cell(x, y), Some(Color::WHITE));
            }
        }
        assert_eq!(canvas.cell(5, 5), None);
    }

    #[test]
    fn erase_matches_painting_white() {
        let mut canvas = CanvasModel::new(4, 4);
        canvas.paint(1, 1, RED);
        canvas.erase(1, 1);
        assert_eq!(canvas.cell(1, 1), Some(Color::WHITE));
    }

    #[test]
    fn fill_sets_every_cell() {
        let mut canvas = CanvasModel::new(3, 3);
        canvas.fill(PINK);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(canvas.cell(x, y), Some(PINK));
            }
        }
    }

    #[test]
    fn pointer_mapping_partitions_the_display() {
        let canvas = CanvasModel::new(4, 4);
        // 400px surface: each cell column owns exactly 100 contiguous pixels
        let mut counts = [0u32; 4];
        let mut last = 0;
        for px in 0..400 {
            let (x, _) = canvas.map_pointer_to_cell(px, 0, 400, 400);
            assert!(x >= last, "mapping must be monotonic");
            assert!(x < 4);
            counts[x as usize] += 1;
            last = x;
        }
        assert_eq!(counts, [100, 100, 100, 100]);
    }

    #[test]
    fn pointer_mapping_boundary_pixel_hits_last_cell() {
        let canvas = CanvasModel::new(60, 60);
        assert_eq!(canvas.map_pointer_to_cell(599, 599, 600, 600), (59, 59));
        assert_eq!(canvas.map_pointer_to_cell(0, 0, 600, 600), (0, 0));
        // at the display edge the mapping walks off the grid; paint ignores it
        assert_eq!(canvas.map_pointer_to_cell(600, 0, 600, 600).0, 60);
    }

    #[test]
    fn pointer_mapping_handles_uneven_surfaces() {
        // 4 cells over 10 pixels: floor division, still monotonic and total
        let canvas = CanvasModel::new(4, 4);
        let cols: Vec<u32> = (0..10)
            .map(|px| canvas.map_pointer_to_cell(px, 0, 10, 10).0)
            .collect();
        assert_eq!(cols, vec![0, 0, 0, 1, 1, 2, 2, 2, 3, 3]);
    }

    #[test]
    fn rasterize_replicates_cells_into_blocks() {
        let mut canvas = CanvasModel::new(4, 4);
        canvas.paint(0, 0, RED);
        let out = canvas.rasterize(8, None);
        for y in 0..8 {
            for x in 0..8 {
                let expected = if x < 2 && y < 2 { RED } else { Color::WHITE };
                assert_eq!(Color::from(*out.get_pixel(x, y)), expected, "at ({x},{y})");
            }
        }
    }

    #[test]
    fn rasterize_round_trips_at_exact_multiples() {
        let mut canvas = CanvasModel::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                canvas.paint(x, y, Color::new((x * 80) as u8, (y * 80) as u8, 0));
            }
        }
        let out = canvas.rasterize(9, None);
        for y in 0..3 {
            for x in 0..3 {
                // sample the center of each 3×3 block
                let sampled = Color::from(*out.get_pixel(x * 3 + 1, y * 3 + 1));
                assert_eq!(Some(sampled), canvas.cell(x, y));
            }
        }
    }

    #[test]
    fn grid_overlay_lands_on_cell_boundaries() {
        let canvas = CanvasModel::new(4, 4);
        let out = canvas.rasterize(8, Some(GRID));
        // lines at 0, 2, 4, 6 and the final edge line clamped to 7
        for &x in &[0u32, 2, 4, 6, 7] {
            assert_eq!(Color::from(*out.get_pixel(x, 3)), GRID, "column {x}");
        }
        for &y in &[0u32, 2, 4, 6, 7] {
            assert_eq!(Color::from(*out.get_pixel(3, y)), GRID, "row {y}");
        }
        // block interiors keep the cell color
        assert_eq!(Color::from(*out.get_pixel(1, 1)), Color::WHITE);
        assert_eq!(Color::from(*out.get_pixel(5, 4)), GRID);
        assert_eq!(Color::from(*out.get_pixel(5, 5)), Color::WHITE);
    }

    #[test]
    fn rasterize_without_grid_has_no_overlay() {
        let canvas = CanvasModel::new(4, 4);
        let out = canvas.rasterize(8, None);
        assert!(out.pixels().all(|p| Color::from(*p) == Color::WHITE));
    }

    #[test]
    fn export_png_writes_the_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.png");
        let mut canvas = CanvasModel::new(4, 4);
        canvas.paint(0, 0, RED);
        canvas.export_png(&path, 32).unwrap();
        let reloaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(reloaded.dimensions(), (32, 32));
        // nearest-neighbor export keeps cell colors exact
        assert_eq!(Color::from(*reloaded.get_pixel(0, 0)), RED);
        assert_eq!(Color::from(*reloaded.get_pixel(8, 8)), Color::WHITE);
    }

    #[test]
    fn export_png_fails_on_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("art.png");
        let canvas = CanvasModel::new(4, 4);
        assert!(canvas.export_png(&path, 32).is_err());
    }
}
