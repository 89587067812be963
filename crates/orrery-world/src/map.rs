#![forbid(unsafe_code)]

//! The square backing store of tiles.

use crate::tile::Tile;

/// A `size × size` grid of [`Tile`]s, row-major, size fixed at construction.
///
/// Indices are validated on every access: out-of-range coordinates yield
/// `None` rather than wrapping or clamping. Callers that know better
/// (the camera clamps itself into range) can unwrap; everyone else gets an
/// explicit rejection.
#[derive(Debug, Clone)]
pub struct WorldMap {
    size: u32,
    tiles: Vec<Tile>,
}

impl WorldMap {
    /// Create a map of `size × size` default (blank) tiles.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self {
            size,
            tiles: vec![Tile::default(); (size as usize) * (size as usize)],
        }
    }

    /// Edge length in tiles.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.size && y < self.size {
            Some(y as usize * self.size as usize + x as usize)
        } else {
            None
        }
    }

    /// Tile at `(x, y)`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn tile(&self, x: u32, y: u32) -> Option<&Tile> {
        self.index(x, y).map(|i| &self.tiles[i])
    }

    /// Mutable tile at `(x, y)`, or `None` if out of range.
    #[inline]
    pub fn tile_mut(&mut self, x: u32, y: u32) -> Option<&mut Tile> {
        self.index(x, y).map(move |i| &mut self.tiles[i])
    }

    /// Overwrite the tile at `(x, y)`. Returns `false` if out of range.
    pub fn set_tile(&mut self, x: u32, y: u32, tile: Tile) -> bool {
        match self.tile_mut(x, y) {
            Some(slot) => {
                *slot = tile;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Rgb;

    #[test]
    fn new_map_is_all_blank() {
        let map = WorldMap::new(4);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(*map.tile(x, y).unwrap(), Tile::default());
            }
        }
    }

    #[test]
    fn out_of_range_reads_are_rejected() {
        let map = WorldMap::new(4);
        assert!(map.tile(4, 0).is_none());
        assert!(map.tile(0, 4).is_none());
        assert!(map.tile(u32::MAX, u32::MAX).is_none());
    }

    #[test]
    fn set_tile_round_trips() {
        let mut map = WorldMap::new(3);
        let t = Tile::new(42, Rgb::new(1.0, 0.0, 0.0), Rgb::BLACK);
        assert!(map.set_tile(2, 1, t));
        assert_eq!(*map.tile(2, 1).unwrap(), t);
    }

    #[test]
    fn set_tile_out_of_range_is_rejected() {
        let mut map = WorldMap::new(3);
        assert!(!map.set_tile(3, 0, Tile::default()));
        assert!(!map.set_tile(0, 3, Tile::default()));
    }

    #[test]
    fn zero_size_map_rejects_everything() {
        let map = WorldMap::new(0);
        assert!(map.tile(0, 0).is_none());
    }
}
