#![forbid(unsafe_code)]

//! Viewport cell state and the per-frame vertex rebuild.
//!
//! [`CellGrid`] owns the `cols × rows` grid of currently displayed cells.
//! Each cell is a quad of two triangles (6 vertices); quad positions are
//! fixed in NDC at construction and only the UV and color attributes change
//! afterwards. Every frame the whole vertex array is regenerated from cell
//! state — no dirty tracking. The viewport is small and fixed-size, so a
//! full rebuild plus one buffer upload is cheaper than being clever.

use bytemuck::{Pod, Zeroable};
use orrery_world::{Tile, TileSink};

use crate::atlas::GRID;

/// Vertices per cell quad (two triangles).
pub const VERTICES_PER_CELL: usize = 6;

/// `f32` components per vertex: position 3 + uv 2 + fg 4 + bg 4.
pub const FLOATS_PER_VERTEX: usize = 13;

/// One vertex of a cell quad.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CellVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub fg: [f32; 4],
    pub bg: [f32; 4],
}

/// Quad corner per vertex, as (dx, dy) in cell-local space with the origin
/// at the quad's bottom-left.
///
/// Order: bottom-left, bottom-right, top-left / bottom-right, top-right,
/// top-left — both triangles wind counter-clockwise, covering the quad with
/// no gap or overlap. The same table drives UVs: `u = dx`, `v = 1 - dy`,
/// because atlas rows grow downward while NDC y grows upward.
const QUAD_CORNERS: [(u32, u32); VERTICES_PER_CELL] =
    [(0, 0), (1, 0), (0, 1), (1, 0), (1, 1), (0, 1)];

/// The fixed-size on-screen grid of glyph cells.
#[derive(Debug, Clone)]
pub struct CellGrid {
    cols: u32,
    rows: u32,
    cells: Vec<Tile>,
    vertices: Vec<CellVertex>,
}

impl CellGrid {
    /// Create a `cols × rows` grid of blank cells.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(cols: u32, rows: u32) -> Self {
        assert!(cols > 0 && rows > 0, "degenerate cell grid");

        let cell_count = (cols as usize) * (rows as usize);
        let mut grid = Self {
            cols,
            rows,
            cells: vec![Tile::default(); cell_count],
            vertices: vec![CellVertex::zeroed(); cell_count * VERTICES_PER_CELL],
        };
        grid.prepare_positions();
        grid.rebuild();
        grid
    }

    /// Quad positions never change after this: cell (0, 0) spans the
    /// bottom-left of the viewport, the full grid spans all of NDC.
    fn prepare_positions(&mut self) {
        let cell_w = 2.0 / self.cols as f32;
        let cell_h = 2.0 / self.rows as f32;

        for cell in 0..self.cells.len() {
            let x = (cell as u32) % self.cols;
            let y = (cell as u32) / self.cols;
            let x0 = -1.0 + x as f32 * cell_w;
            let y0 = -1.0 + y as f32 * cell_h;

            for (vertex, &(dx, dy)) in QUAD_CORNERS.iter().enumerate() {
                self.vertices[cell * VERTICES_PER_CELL + vertex].position = [
                    x0 + dx as f32 * cell_w,
                    y0 + dy as f32 * cell_h,
                    0.0,
                ];
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The cell at viewport coordinate `(x, y)`, or `None` out of range.
    #[inline]
    #[must_use]
    pub fn cell(&self, x: u32, y: u32) -> Option<&Tile> {
        if x < self.cols && y < self.rows {
            Some(&self.cells[(y * self.cols + x) as usize])
        } else {
            None
        }
    }

    /// Overwrite the cell at `(x, y)`.
    ///
    /// Out-of-range coordinates are a caller error: the write is rejected
    /// and `false` returned, never wrapped onto another cell.
    pub fn update_cell(&mut self, x: u32, y: u32, tile: Tile) -> bool {
        if x >= self.cols || y >= self.rows {
            tracing::debug!(x, y, cols = self.cols, rows = self.rows, "cell update out of range");
            return false;
        }
        self.cells[(y * self.cols + x) as usize] = tile;
        true
    }

    /// Regenerate the UV and color attributes of every vertex from cell
    /// state and return the full vertex array, ready for upload.
    pub fn rebuild(&mut self) -> &[CellVertex] {
        let tile_u = 1.0 / GRID as f32;
        let tile_v = 1.0 / GRID as f32;

        for (cell, tile) in self.cells.iter().enumerate() {
            let glyph = u32::from(tile.glyph);
            let u0 = (glyph % GRID) as f32 * tile_u;
            let v0 = (glyph / GRID) as f32 * tile_v;
            let u1 = u0 + tile_u;
            let v1 = v0 + tile_v;

            let fg = tile.fg.to_array4();
            let bg = tile.bg.to_array4();

            for (vertex, &(dx, dy)) in QUAD_CORNERS.iter().enumerate() {
                let out = &mut self.vertices[cell * VERTICES_PER_CELL + vertex];
                out.uv = [
                    if dx == 0 { u0 } else { u1 },
                    if dy == 0 { v1 } else { v0 },
                ];
                out.fg = fg;
                out.bg = bg;
            }
        }

        &self.vertices
    }

    /// The vertex array as last rebuilt.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[CellVertex] {
        &self.vertices
    }
}

impl TileSink for CellGrid {
    fn extent(&self) -> (u32, u32) {
        (self.cols, self.rows)
    }

    fn put(&mut self, x: u32, y: u32, tile: Tile) {
        self.update_cell(x, y, tile);
    }
}

/// Index buffer contents for a `cols × rows` grid: each cell's two
/// triangles reference its own six vertices in order. Built once; the
/// data never changes afterwards.
#[must_use]
pub fn quad_indices(cols: u32, rows: u32) -> Vec<u32> {
    let count = (cols as usize) * (rows as usize) * VERTICES_PER_CELL;
    (0..count as u32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_world::Rgb;

    #[test]
    fn vertex_layout_is_thirteen_floats() {
        assert_eq!(
            std::mem::size_of::<CellVertex>(),
            FLOATS_PER_VERTEX * std::mem::size_of::<f32>()
        );
    }

    #[test]
    fn corner_table_covers_the_quad_consistently() {
        // Each triangle must use three distinct corners, and together the
        // two triangles must touch all four corners of the quad.
        let t1 = &QUAD_CORNERS[0..3];
        let t2 = &QUAD_CORNERS[3..6];
        for tri in [t1, t2] {
            let unique: std::collections::HashSet<_> = tri.iter().collect();
            assert_eq!(unique.len(), 3, "degenerate triangle {tri:?}");
        }
        let all: std::collections::HashSet<_> = QUAD_CORNERS.iter().collect();
        assert_eq!(all.len(), 4);

        // Consistent winding: both triangles have the same signed area sign.
        let signed_area = |tri: &[(u32, u32)]| {
            let (x0, y0) = (tri[0].0 as i64, tri[0].1 as i64);
            let (x1, y1) = (tri[1].0 as i64, tri[1].1 as i64);
            let (x2, y2) = (tri[2].0 as i64, tri[2].1 as i64);
            (x1 - x0) * (y2 - y0) - (x2 - x0) * (y1 - y0)
        };
        assert_eq!(signed_area(t1).signum(), signed_area(t2).signum());
    }

    #[test]
    fn positions_span_ndc_and_never_change() {
        let mut grid = CellGrid::new(4, 2);
        let before: Vec<[f32; 3]> = grid.vertices().iter().map(|v| v.position).collect();

        // Extremes: cell (0,0) bottom-left corner at (-1,-1), cell (3,1)
        // top-right corner at (1,1).
        assert_eq!(grid.vertices()[0].position, [-1.0, -1.0, 0.0]);
        let last_cell = 4 * 2 - 1;
        let top_right = grid.vertices()[last_cell * VERTICES_PER_CELL + 4].position;
        assert_eq!(top_right, [1.0, 1.0, 0.0]);

        grid.update_cell(1, 1, Tile::new(0xDB, Rgb::WHITE, Rgb::BLACK));
        grid.rebuild();
        let after: Vec<[f32; 3]> = grid.vertices().iter().map(|v| v.position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn update_then_rebuild_writes_atlas_uvs_and_colors() {
        let mut grid = CellGrid::new(3, 3);
        let fg = Rgb::new(0.2, 0.4, 0.6);
        let bg = Rgb::new(0.1, 0.1, 0.1);
        let glyph = 0x41u8; // atlas cell (1, 4)
        assert!(grid.update_cell(2, 1, Tile::new(glyph, fg, bg)));
        grid.rebuild();

        let u0 = (0x41 % 16) as f32 / 16.0;
        let v0 = (0x41 / 16) as f32 / 16.0;
        let u1 = u0 + 1.0 / 16.0;
        let v1 = v0 + 1.0 / 16.0;

        let cell = (1 * 3 + 2) as usize;
        let verts = &grid.vertices()[cell * VERTICES_PER_CELL..(cell + 1) * VERTICES_PER_CELL];

        // Per the corner table: BL, BR, TL, BR, TR, TL with v flipped.
        let expected_uv = [
            [u0, v1],
            [u1, v1],
            [u0, v0],
            [u1, v1],
            [u1, v0],
            [u0, v0],
        ];
        for (vertex, expect) in expected_uv.iter().enumerate() {
            assert_eq!(verts[vertex].uv, *expect, "vertex {vertex}");
            assert_eq!(verts[vertex].fg, fg.to_array4());
            assert_eq!(verts[vertex].bg, bg.to_array4());
        }
    }

    #[test]
    fn rebuild_is_idempotent() {
        let mut grid = CellGrid::new(5, 4);
        grid.update_cell(0, 0, Tile::new(7, Rgb::new(1.0, 0.0, 0.0), Rgb::BLACK));
        grid.update_cell(4, 3, Tile::new(250, Rgb::WHITE, Rgb::new(0.0, 0.0, 0.5)));

        let first: Vec<u8> = bytemuck::cast_slice(grid.rebuild()).to_vec();
        let second: Vec<u8> = bytemuck::cast_slice(grid.rebuild()).to_vec();
        assert_eq!(first, second, "rebuild must be bit-identical");
    }

    #[test]
    fn out_of_range_update_is_rejected() {
        let mut grid = CellGrid::new(2, 2);
        let before = grid.cells.clone();
        assert!(!grid.update_cell(2, 0, Tile::new(1, Rgb::WHITE, Rgb::BLACK)));
        assert!(!grid.update_cell(0, 2, Tile::new(1, Rgb::WHITE, Rgb::BLACK)));
        assert_eq!(grid.cells, before, "rejected writes must not land anywhere");
    }

    #[test]
    fn glyph_255_maps_to_the_last_atlas_tile() {
        let mut grid = CellGrid::new(1, 1);
        grid.update_cell(0, 0, Tile::new(255, Rgb::WHITE, Rgb::BLACK));
        grid.rebuild();

        let v = grid.vertices();
        // Tile (15, 15): u0 = v0 = 15/16, u1 = v1 = 1.
        let u0 = 15.0 / 16.0;
        assert_eq!(v[2].uv, [u0, u0]); // top-left vertex samples (u0, v0)
        assert_eq!(v[4].uv, [1.0, u0]); // top-right samples (u1, v0)
        assert_eq!(v[0].uv, [u0, 1.0]); // bottom-left samples (u0, v1)
    }

    #[test]
    fn quad_indices_reference_each_cells_vertices_in_order() {
        let indices = quad_indices(3, 2);
        assert_eq!(indices.len(), 3 * 2 * VERTICES_PER_CELL);
        for (cell, chunk) in indices.chunks_exact(VERTICES_PER_CELL).enumerate() {
            let base = (cell * VERTICES_PER_CELL) as u32;
            assert_eq!(chunk, [base, base + 1, base + 2, base + 3, base + 4, base + 5]);
        }
    }

    #[test]
    fn new_grid_starts_blank() {
        let grid = CellGrid::new(2, 2);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(*grid.cell(x, y).unwrap(), Tile::default());
            }
        }
        assert!(grid.cell(2, 2).is_none());
    }
}
