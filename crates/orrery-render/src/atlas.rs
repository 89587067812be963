#![forbid(unsafe_code)]

//! The packed glyph atlas.
//!
//! One RGBA image holds all 256 glyphs in a 16×16 grid, ordered by
//! code-page byte: glyph `i` occupies grid cell `(i % 16, i / 16)`. Font
//! pixels are upscaled by an integer factor and written as opaque white;
//! everything else stays fully transparent. Cell colors are applied later,
//! in the fragment shader, using the atlas alpha as the mix factor — the
//! atlas itself is built once and never touched again.

use crate::font::BitmapFont;

/// Glyph tiles per atlas row/column.
pub const GRID: u32 = 16;

/// CPU-side RGBA8 atlas image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atlas {
    width: u32,
    height: u32,
    tile_width: u32,
    tile_height: u32,
    pixels: Vec<u8>,
}

impl Atlas {
    /// Rasterize all 256 glyphs of `font`, upscaled by `scale`.
    ///
    /// # Panics
    ///
    /// Panics if `scale` is zero.
    #[must_use]
    pub fn build(font: &BitmapFont, scale: u32) -> Self {
        assert!(scale > 0, "atlas scale must be at least 1");

        let tile_width = font.cell_width() * scale;
        let tile_height = font.cell_height() * scale;
        let width = tile_width * GRID;
        let height = tile_height * GRID;

        let mut atlas = Self {
            width,
            height,
            tile_width,
            tile_height,
            pixels: vec![0u8; (width as usize) * (height as usize) * 4],
        };

        for code in 0u32..256 {
            let origin_x = (code % GRID) * tile_width;
            let origin_y = (code / GRID) * tile_height;
            atlas.blit_glyph(font, code as u8, origin_x, origin_y, scale);
        }

        tracing::debug!(width, height, tile_width, tile_height, "atlas built");
        atlas
    }

    fn blit_glyph(&mut self, font: &BitmapFont, code: u8, origin_x: u32, origin_y: u32, scale: u32) {
        let glyph = font.glyph(code);
        for row in 0..glyph.height() {
            for col in 0..glyph.width() {
                if !glyph.pixel(col, row) {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let x = origin_x + col * scale + dx;
                        let y = origin_y + row * scale + dy;
                        // A glyph larger than its tile can spill past the
                        // atlas edge; drop those pixels instead of wrapping.
                        if x >= self.width || y >= self.height {
                            continue;
                        }
                        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
                        self.pixels[idx..idx + 4].copy_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
                    }
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Size of one glyph tile as `(width, height)` in pixels.
    #[inline]
    #[must_use]
    pub const fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// Raw RGBA8 pixel data, row-major from the top-left.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Alpha of the pixel at `(x, y)`, or 0 out of range.
    #[must_use]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.pixels[((y as usize) * (self.width as usize) + (x as usize)) * 4 + 3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{BitmapFont, GlyphBitmap};

    /// Synthetic font where glyph `i` has exactly one pixel on, at a
    /// per-glyph-distinct position. Makes bleed between tiles detectable.
    fn pinpoint_font() -> BitmapFont {
        let glyphs = (0u32..256)
            .map(|code| {
                let x = code % 8;
                let y = (code / 8) % 8;
                let mut rows = vec![0u32; 8];
                rows[y as usize] = 0x80 >> x;
                GlyphBitmap::from_rows(8, 8, rows)
            })
            .collect();
        BitmapFont::from_glyphs(8, 8, glyphs)
    }

    #[test]
    fn dimensions_follow_font_and_scale() {
        let atlas = Atlas::build(&pinpoint_font(), 2);
        assert_eq!(atlas.width(), 8 * 2 * 16);
        assert_eq!(atlas.height(), 8 * 2 * 16);
        assert_eq!(atlas.tile_size(), (16, 16));
        assert_eq!(atlas.pixels().len(), 256 * 256 * 4);
    }

    #[test]
    fn every_tile_contains_only_its_own_glyph() {
        let font = pinpoint_font();
        let atlas = Atlas::build(&font, 2);
        let (tile_w, tile_h) = atlas.tile_size();

        for code in 0u32..256 {
            let origin_x = (code % GRID) * tile_w;
            let origin_y = (code / GRID) * tile_h;
            let glyph = font.glyph(code as u8);

            for py in 0..tile_h {
                for px in 0..tile_w {
                    let expected = glyph.pixel(px / 2, py / 2);
                    let actual = atlas.alpha_at(origin_x + px, origin_y + py) == 0xFF;
                    assert_eq!(
                        actual, expected,
                        "tile {code}: pixel ({px},{py}) mismatch"
                    );
                }
            }
        }
    }

    #[test]
    fn background_is_fully_transparent() {
        let atlas = Atlas::build(&BitmapFont::builtin(), 2);
        // Tile 0 (blank glyph) must be all alpha 0.
        let (tile_w, tile_h) = atlas.tile_size();
        for y in 0..tile_h {
            for x in 0..tile_w {
                assert_eq!(atlas.alpha_at(x, y), 0);
            }
        }
    }

    #[test]
    fn foreground_is_opaque_white() {
        let atlas = Atlas::build(&BitmapFont::builtin(), 1);
        let mut lit = 0usize;
        for (i, px) in atlas.pixels().chunks_exact(4).enumerate() {
            if px[3] != 0 {
                assert_eq!(px, &[0xFF, 0xFF, 0xFF, 0xFF], "pixel {i}");
                lit += 1;
            }
        }
        assert!(lit > 0, "builtin font should light some pixels");
    }

    #[test]
    fn scale_one_is_a_direct_copy() {
        let font = pinpoint_font();
        let atlas = Atlas::build(&font, 1);
        let (tile_w, tile_h) = atlas.tile_size();
        assert_eq!((tile_w, tile_h), (8, 8));

        for code in 0u32..256 {
            let origin_x = (code % GRID) * tile_w;
            let origin_y = (code / GRID) * tile_h;
            let glyph = font.glyph(code as u8);
            for y in 0..8 {
                for x in 0..8 {
                    assert_eq!(
                        atlas.alpha_at(origin_x + x, origin_y + y) == 0xFF,
                        glyph.pixel(x, y)
                    );
                }
            }
        }
    }

    #[test]
    fn oversized_glyphs_are_clamped_at_the_atlas_edge() {
        // A 16-wide glyph in an 8-wide cell: at scale 1, tile 0x0F (atlas
        // column 15) would spill past the right edge; those pixels must be
        // dropped, not wrapped onto the next row.
        let glyphs = (0u32..256)
            .map(|code| {
                if code == 0x0F {
                    GlyphBitmap::from_rows(16, 1, vec![0xFFFF])
                } else {
                    GlyphBitmap::blank(8, 8)
                }
            })
            .collect();
        let font = BitmapFont::from_glyphs(8, 8, glyphs);
        let atlas = Atlas::build(&font, 1);

        // In-range half of the row is lit...
        for x in 0..8 {
            assert_eq!(atlas.alpha_at(15 * 8 + x, 0), 0xFF);
        }
        // ...and nothing wrapped to row 1 or the next tile row.
        for x in 0..atlas.width() {
            assert_eq!(atlas.alpha_at(x, 1), 0, "wrapped pixel at x={x}");
        }
    }
}
