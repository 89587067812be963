#![forbid(unsafe_code)]

//! Scrolling camera and the map → viewport copy.
//!
//! The camera offset is the map coordinate shown at viewport cell `(0, 0)`.
//! After every move it is clamped to `0 ..= size - viewport_extent` on each
//! axis, so the visible window never leaves the map. Maps smaller than the
//! viewport degenerate to an offset pinned at zero.

use crate::geometry::Point;
use crate::map::WorldMap;
use crate::tile::Tile;

/// Destination for the per-tick viewport copy.
///
/// Implemented by the renderer's cell grid; tests implement it with a plain
/// vector. `MapView` only ever writes coordinates inside
/// `[0, cols) × [0, rows)`.
pub trait TileSink {
    /// Viewport extent as `(cols, rows)`.
    fn extent(&self) -> (u32, u32);

    /// Show `tile` at viewport cell `(x, y)`.
    fn put(&mut self, x: u32, y: u32, tile: Tile);
}

/// Camera offset with clamped panning.
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    offset: Point,
}

impl Camera {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: Point::ZERO,
        }
    }

    /// Top-left map coordinate of the visible window.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> Point {
        self.offset
    }

    /// Pan by `(dx, dy)` and clamp to the valid range for a `map_size` map
    /// seen through a `cols × rows` viewport.
    ///
    /// Always succeeds; requests past an edge are absorbed by the clamp.
    /// `min` before `max` so a map smaller than the viewport pins to zero.
    pub fn move_by(&mut self, dx: i32, dy: i32, map_size: u32, cols: u32, rows: u32) {
        let max_x = map_size as i64 - cols as i64;
        let max_y = map_size as i64 - rows as i64;

        let x = (self.offset.x as i64 + dx as i64).min(max_x).max(0);
        let y = (self.offset.y as i64 + dy as i64).min(max_y).max(0);

        self.offset = Point::new(x as i32, y as i32);
    }
}

/// A fixed-size view of a [`WorldMap`] driven by a [`Camera`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MapView {
    camera: Camera,
}

impl MapView {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            camera: Camera::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Pan the camera, clamped against `map` and the sink's extent.
    pub fn move_camera(&mut self, dx: i32, dy: i32, map: &WorldMap, sink: &impl TileSink) {
        let (cols, rows) = sink.extent();
        self.camera.move_by(dx, dy, map.size(), cols, rows);
    }

    /// Copy the visible window of `map` into `sink`.
    ///
    /// Viewport cells whose source coordinate falls outside the map (only
    /// possible when the map is smaller than the viewport) are reset to the
    /// blank tile, so no stale contents survive a pan.
    pub fn render(&self, map: &WorldMap, sink: &mut impl TileSink) {
        let (cols, rows) = sink.extent();
        let offset = self.camera.offset();

        for y in 0..rows {
            for x in 0..cols {
                let map_x = x as i64 + offset.x as i64;
                let map_y = y as i64 + offset.y as i64;

                let tile = u32::try_from(map_x)
                    .ok()
                    .zip(u32::try_from(map_y).ok())
                    .and_then(|(mx, my)| map.tile(mx, my))
                    .copied()
                    .unwrap_or_default();

                sink.put(x, y, tile);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Rgb;

    struct VecSink {
        cols: u32,
        rows: u32,
        cells: Vec<Tile>,
    }

    impl VecSink {
        fn new(cols: u32, rows: u32) -> Self {
            Self {
                cols,
                rows,
                cells: vec![Tile::default(); (cols * rows) as usize],
            }
        }

        fn at(&self, x: u32, y: u32) -> Tile {
            self.cells[(y * self.cols + x) as usize]
        }
    }

    impl TileSink for VecSink {
        fn extent(&self) -> (u32, u32) {
            (self.cols, self.rows)
        }

        fn put(&mut self, x: u32, y: u32, tile: Tile) {
            let idx = (y * self.cols + x) as usize;
            self.cells[idx] = tile;
        }
    }

    fn numbered_map(size: u32) -> WorldMap {
        let mut map = WorldMap::new(size);
        for y in 0..size {
            for x in 0..size {
                let glyph = (y * size + x) as u8;
                map.set_tile(x, y, Tile::new(glyph, Rgb::WHITE, Rgb::BLACK));
            }
        }
        map
    }

    #[test]
    fn move_clamps_to_map_bounds() {
        let mut cam = Camera::new();
        cam.move_by(100, 100, 8, 2, 2);
        assert_eq!(cam.offset(), Point::new(6, 6));
        cam.move_by(-100, -100, 8, 2, 2);
        assert_eq!(cam.offset(), Point::ZERO);
    }

    #[test]
    fn move_past_origin_leaves_offset_unchanged() {
        let mut cam = Camera::new();
        cam.move_by(0, -1, 8, 2, 2);
        assert_eq!(cam.offset(), Point::ZERO);
        cam.move_by(-1, 0, 8, 2, 2);
        assert_eq!(cam.offset(), Point::ZERO);
    }

    #[test]
    fn degenerate_map_pins_offset_to_zero() {
        let mut cam = Camera::new();
        cam.move_by(5, 5, 1, 4, 4);
        assert_eq!(cam.offset(), Point::ZERO);
    }

    #[test]
    fn render_copies_camera_window() {
        // 4×4 map seen through a 2×2 viewport, camera at (1, 1):
        // expect the central-to-bottom-right 2×2 submatrix.
        let map = numbered_map(4);
        let mut sink = VecSink::new(2, 2);
        let mut view = MapView::new();

        view.move_camera(1, 1, &map, &sink);
        view.render(&map, &mut sink);

        assert_eq!(sink.at(0, 0).glyph, 5);
        assert_eq!(sink.at(1, 0).glyph, 6);
        assert_eq!(sink.at(0, 1).glyph, 9);
        assert_eq!(sink.at(1, 1).glyph, 10);
    }

    #[test]
    fn render_blanks_cells_outside_a_small_map() {
        let map = numbered_map(2);
        let mut sink = VecSink::new(4, 4);
        // Seed the sink with junk to prove the copy clears it.
        for y in 0..4 {
            for x in 0..4 {
                sink.put(x, y, Tile::new(0xFF, Rgb::BLACK, Rgb::WHITE));
            }
        }

        let view = MapView::new();
        view.render(&map, &mut sink);

        for y in 0..4u32 {
            for x in 0..4u32 {
                let expected = if x < 2 && y < 2 {
                    *map.tile(x, y).unwrap()
                } else {
                    Tile::default()
                };
                assert_eq!(sink.at(x, y), expected, "cell ({x},{y})");
            }
        }
    }

    #[test]
    fn render_is_deterministic_for_fixed_state() {
        let map = numbered_map(8);
        let mut view = MapView::new();
        let mut a = VecSink::new(3, 3);
        let mut b = VecSink::new(3, 3);

        view.move_camera(2, 4, &map, &a);
        view.render(&map, &mut a);
        view.render(&map, &mut b);

        assert_eq!(a.cells, b.cells);
    }
}
