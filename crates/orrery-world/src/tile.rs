#![forbid(unsafe_code)]

//! Tile and color value types.
//!
//! A [`Tile`] is one cell of the backing map: a glyph index into the
//! 256-entry atlas plus a foreground and background color. The renderer's
//! viewport cells carry the same three fields, so a tile can be copied
//! straight onto the screen.

/// Linear RGB color with `f32` channels in `[0, 1]`.
///
/// Alpha is not stored; the vertex stream appends an opaque alpha when the
/// color is expanded to four components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Expand to `[r, g, b, 1.0]` for a vertex attribute.
    #[must_use]
    pub const fn to_array4(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

/// One cell of the backing map: glyph index + colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// Index into the 256-glyph atlas, in the font's native code-page order.
    pub glyph: u8,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Tile {
    #[must_use]
    pub const fn new(glyph: u8, fg: Rgb, bg: Rgb) -> Self {
        Self { glyph, fg, bg }
    }
}

impl Default for Tile {
    /// Blank glyph, white on black.
    fn default() -> Self {
        Self::new(0, Rgb::WHITE, Rgb::BLACK)
    }
}
