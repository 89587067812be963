#![forbid(unsafe_code)]

//! Embedded 8×8 fallback font.
//!
//! Printable ASCII comes from a fixed bitmap table; the high-page shade,
//! block, and box-drawing glyphs are drawn procedurally so adjacent cells
//! join without gaps. Code points with no obvious 8×8 rendering (accented
//! letters, Greek, math) stay blank — the fallback exists so the binary can
//! start without a font file, not to cover the whole code page.

use crate::font::{BitmapFont, GlyphBitmap};

const CELL: u32 = 8;

/// Build the fallback font.
#[must_use]
pub fn build() -> BitmapFont {
    let mut glyphs: Vec<GlyphBitmap> = (0..256)
        .map(|_| GlyphBitmap::blank(CELL, CELL))
        .collect();

    for (i, rows) in ASCII.iter().enumerate() {
        let code = 0x20 + i;
        glyphs[code] = from_bytes(rows);
    }

    for code in 0x80u16..=0xFF {
        if let Some(glyph) = draw_high_glyph(code as u8) {
            glyphs[code as usize] = glyph;
        }
    }

    BitmapFont::from_glyphs(CELL, CELL, glyphs)
}

fn from_bytes(rows: &[u8; 8]) -> GlyphBitmap {
    GlyphBitmap::from_rows(CELL, CELL, rows.iter().map(|&r| u32::from(r)).collect())
}

// ---------------------------------------------------------------------------
// Procedural high-page glyphs
// ---------------------------------------------------------------------------

/// Tiny 1-bit drawing surface for the procedural glyphs.
struct Sketch {
    rows: [u8; 8],
}

impl Sketch {
    fn new() -> Self {
        Self { rows: [0; 8] }
    }

    fn set(&mut self, x: u32, y: u32) {
        if x < CELL && y < CELL {
            self.rows[y as usize] |= 0x80 >> x;
        }
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32) {
        for yy in y..(y + h).min(CELL) {
            for xx in x..(x + w).min(CELL) {
                self.set(xx, yy);
            }
        }
    }

    /// Horizontal run at `y` spanning `x0..=x1`.
    fn h_span(&mut self, y: u32, x0: u32, x1: u32) {
        for x in x0..=x1.min(CELL - 1) {
            self.set(x, y);
        }
    }

    /// Vertical run at `x` spanning `y0..=y1`.
    fn v_span(&mut self, x: u32, y0: u32, y1: u32) {
        for y in y0..=y1.min(CELL - 1) {
            self.set(x, y);
        }
    }

    fn into_glyph(self) -> GlyphBitmap {
        GlyphBitmap::from_rows(CELL, CELL, self.rows.iter().map(|&r| u32::from(r)).collect())
    }
}

/// Line-arm weight for box-drawing glyphs.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Arm {
    None,
    Single,
    Double,
}

use Arm::{Double, None as NoArm, Single};

/// Arms (up, down, left, right) for codes `0xB3..=0xDA`.
#[rustfmt::skip]
const BOX_ARMS: [(Arm, Arm, Arm, Arm); 40] = [
    (Single, Single, NoArm,  NoArm ), // 0xB3 │
    (Single, Single, Single, NoArm ), // 0xB4 ┤
    (Single, Single, Double, NoArm ), // 0xB5 ╡
    (Double, Double, Single, NoArm ), // 0xB6 ╢
    (NoArm,  Double, Single, NoArm ), // 0xB7 ╖
    (NoArm,  Single, Double, NoArm ), // 0xB8 ╕
    (Double, Double, Double, NoArm ), // 0xB9 ╣
    (Double, Double, NoArm,  NoArm ), // 0xBA ║
    (NoArm,  Double, Double, NoArm ), // 0xBB ╗
    (Double, NoArm,  Double, NoArm ), // 0xBC ╝
    (Double, NoArm,  Single, NoArm ), // 0xBD ╜
    (Single, NoArm,  Double, NoArm ), // 0xBE ╛
    (NoArm,  Single, Single, NoArm ), // 0xBF ┐
    (Single, NoArm,  NoArm,  Single), // 0xC0 └
    (Single, NoArm,  Single, Single), // 0xC1 ┴
    (NoArm,  Single, Single, Single), // 0xC2 ┬
    (Single, Single, NoArm,  Single), // 0xC3 ├
    (NoArm,  NoArm,  Single, Single), // 0xC4 ─
    (Single, Single, Single, Single), // 0xC5 ┼
    (Single, Single, NoArm,  Double), // 0xC6 ╞
    (Double, Double, NoArm,  Single), // 0xC7 ╟
    (Double, NoArm,  NoArm,  Double), // 0xC8 ╚
    (NoArm,  Double, NoArm,  Double), // 0xC9 ╔
    (Double, NoArm,  Double, Double), // 0xCA ╩
    (NoArm,  Double, Double, Double), // 0xCB ╦
    (Double, Double, NoArm,  Double), // 0xCC ╠
    (NoArm,  NoArm,  Double, Double), // 0xCD ═
    (Double, Double, Double, Double), // 0xCE ╬
    (Single, NoArm,  Double, Double), // 0xCF ╧
    (Double, NoArm,  Single, Single), // 0xD0 ╨
    (NoArm,  Single, Double, Double), // 0xD1 ╤
    (NoArm,  Double, Single, Single), // 0xD2 ╥
    (Double, NoArm,  NoArm,  Single), // 0xD3 ╙
    (Single, NoArm,  NoArm,  Double), // 0xD4 ╘
    (NoArm,  Single, NoArm,  Double), // 0xD5 ╒
    (NoArm,  Double, NoArm,  Single), // 0xD6 ╓
    (Double, Double, Single, Single), // 0xD7 ╫
    (Single, Single, Double, Double), // 0xD8 ╪
    (Single, NoArm,  Single, NoArm ), // 0xD9 ┘
    (NoArm,  Single, NoArm,  Single), // 0xDA ┌
];

// Stroke placement: singles run through column/row 3, doubles through 2 and 5.
const MID: u32 = 3;
const DBL_A: u32 = 2;
const DBL_B: u32 = 5;

fn draw_box(arms: (Arm, Arm, Arm, Arm)) -> GlyphBitmap {
    let (up, down, left, right) = arms;
    let mut sketch = Sketch::new();

    match up {
        Single => sketch.v_span(MID, 0, MID),
        Double => {
            sketch.v_span(DBL_A, 0, MID);
            sketch.v_span(DBL_B, 0, MID);
        }
        NoArm => {}
    }
    match down {
        Single => sketch.v_span(MID, MID, CELL - 1),
        Double => {
            sketch.v_span(DBL_A, MID, CELL - 1);
            sketch.v_span(DBL_B, MID, CELL - 1);
        }
        NoArm => {}
    }
    match left {
        Single => sketch.h_span(MID, 0, MID),
        Double => {
            sketch.h_span(DBL_A, 0, MID);
            sketch.h_span(DBL_B, 0, MID);
        }
        NoArm => {}
    }
    match right {
        Single => sketch.h_span(MID, MID, CELL - 1),
        Double => {
            sketch.h_span(DBL_A, MID, CELL - 1);
            sketch.h_span(DBL_B, MID, CELL - 1);
        }
        NoArm => {}
    }

    sketch.into_glyph()
}

fn draw_shade(keep: impl Fn(u32, u32) -> bool) -> GlyphBitmap {
    let mut sketch = Sketch::new();
    for y in 0..CELL {
        for x in 0..CELL {
            if keep(x, y) {
                sketch.set(x, y);
            }
        }
    }
    sketch.into_glyph()
}

fn draw_high_glyph(code: u8) -> Option<GlyphBitmap> {
    let glyph = match code {
        // Shade blocks: 25% / 50% / 75% dithers.
        0xB0 => draw_shade(|x, y| (x + 2 * y) % 4 == 0),
        0xB1 => draw_shade(|x, y| (x + y) % 2 == 0),
        0xB2 => draw_shade(|x, y| (x + 2 * y) % 4 != 0),
        0xB3..=0xDA => draw_box(BOX_ARMS[(code - 0xB3) as usize]),
        // Block elements.
        0xDB => draw_shade(|_, _| true),
        0xDC => draw_shade(|_, y| y >= CELL / 2),
        0xDD => draw_shade(|x, _| x < CELL / 2),
        0xDE => draw_shade(|x, _| x >= CELL / 2),
        0xDF => draw_shade(|_, y| y < CELL / 2),
        // Degree sign: small ring in the upper half.
        0xF8 => {
            let mut sketch = Sketch::new();
            sketch.h_span(0, 3, 4);
            sketch.set(2, 1);
            sketch.set(5, 1);
            sketch.h_span(2, 3, 4);
            sketch.into_glyph()
        }
        // Bullet and middle dot.
        0xF9 => {
            let mut sketch = Sketch::new();
            sketch.fill_rect(3, 3, 2, 2);
            sketch.into_glyph()
        }
        0xFA => {
            let mut sketch = Sketch::new();
            sketch.set(3, 3);
            sketch.into_glyph()
        }
        // Black square.
        0xFE => {
            let mut sketch = Sketch::new();
            sketch.fill_rect(2, 2, 4, 4);
            sketch.into_glyph()
        }
        _ => return None,
    };
    Some(glyph)
}

/// Printable ASCII `0x20..=0x7E`, one row per byte, MSB on the left.
#[rustfmt::skip]
const ASCII: [[u8; 8]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // space
    [0x30, 0x78, 0x78, 0x30, 0x30, 0x00, 0x30, 0x00], // !
    [0x6C, 0x6C, 0x6C, 0x00, 0x00, 0x00, 0x00, 0x00], // "
    [0x6C, 0x6C, 0xFE, 0x6C, 0xFE, 0x6C, 0x6C, 0x00], // #
    [0x30, 0x7C, 0xC0, 0x78, 0x0C, 0xF8, 0x30, 0x00], // $
    [0x00, 0xC6, 0xCC, 0x18, 0x30, 0x66, 0xC6, 0x00], // %
    [0x38, 0x6C, 0x38, 0x76, 0xDC, 0xCC, 0x76, 0x00], // &
    [0x60, 0x60, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00], // '
    [0x18, 0x30, 0x60, 0x60, 0x60, 0x30, 0x18, 0x00], // (
    [0x60, 0x30, 0x18, 0x18, 0x18, 0x30, 0x60, 0x00], // )
    [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00], // *
    [0x00, 0x30, 0x30, 0xFC, 0x30, 0x30, 0x00, 0x00], // +
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x60], // ,
    [0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x00], // .
    [0x06, 0x0C, 0x18, 0x30, 0x60, 0xC0, 0x80, 0x00], // /
    [0x7C, 0xC6, 0xCE, 0xDE, 0xF6, 0xE6, 0x7C, 0x00], // 0
    [0x30, 0x70, 0x30, 0x30, 0x30, 0x30, 0xFC, 0x00], // 1
    [0x78, 0xCC, 0x0C, 0x38, 0x60, 0xCC, 0xFC, 0x00], // 2
    [0x78, 0xCC, 0x0C, 0x38, 0x0C, 0xCC, 0x78, 0x00], // 3
    [0x1C, 0x3C, 0x6C, 0xCC, 0xFE, 0x0C, 0x1E, 0x00], // 4
    [0xFC, 0xC0, 0xF8, 0x0C, 0x0C, 0xCC, 0x78, 0x00], // 5
    [0x38, 0x60, 0xC0, 0xF8, 0xCC, 0xCC, 0x78, 0x00], // 6
    [0xFC, 0xCC, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00], // 7
    [0x78, 0xCC, 0xCC, 0x78, 0xCC, 0xCC, 0x78, 0x00], // 8
    [0x78, 0xCC, 0xCC, 0x7C, 0x0C, 0x18, 0x70, 0x00], // 9
    [0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x00], // :
    [0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x60], // ;
    [0x18, 0x30, 0x60, 0xC0, 0x60, 0x30, 0x18, 0x00], // <
    [0x00, 0x00, 0xFC, 0x00, 0x00, 0xFC, 0x00, 0x00], // =
    [0x60, 0x30, 0x18, 0x0C, 0x18, 0x30, 0x60, 0x00], // >
    [0x78, 0xCC, 0x0C, 0x18, 0x30, 0x00, 0x30, 0x00], // ?
    [0x7C, 0xC6, 0xDE, 0xDE, 0xDE, 0xC0, 0x78, 0x00], // @
    [0x30, 0x78, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0x00], // A
    [0xFC, 0x66, 0x66, 0x7C, 0x66, 0x66, 0xFC, 0x00], // B
    [0x3C, 0x66, 0xC0, 0xC0, 0xC0, 0x66, 0x3C, 0x00], // C
    [0xF8, 0x6C, 0x66, 0x66, 0x66, 0x6C, 0xF8, 0x00], // D
    [0xFE, 0x62, 0x68, 0x78, 0x68, 0x62, 0xFE, 0x00], // E
    [0xFE, 0x62, 0x68, 0x78, 0x68, 0x60, 0xF0, 0x00], // F
    [0x3C, 0x66, 0xC0, 0xC0, 0xCE, 0x66, 0x3E, 0x00], // G
    [0xCC, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0xCC, 0x00], // H
    [0x78, 0x30, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00], // I
    [0x1E, 0x0C, 0x0C, 0x0C, 0xCC, 0xCC, 0x78, 0x00], // J
    [0xE6, 0x66, 0x6C, 0x78, 0x6C, 0x66, 0xE6, 0x00], // K
    [0xF0, 0x60, 0x60, 0x60, 0x62, 0x66, 0xFE, 0x00], // L
    [0xC6, 0xEE, 0xFE, 0xFE, 0xD6, 0xC6, 0xC6, 0x00], // M
    [0xC6, 0xE6, 0xF6, 0xDE, 0xCE, 0xC6, 0xC6, 0x00], // N
    [0x38, 0x6C, 0xC6, 0xC6, 0xC6, 0x6C, 0x38, 0x00], // O
    [0xFC, 0x66, 0x66, 0x7C, 0x60, 0x60, 0xF0, 0x00], // P
    [0x78, 0xCC, 0xCC, 0xCC, 0xDC, 0x78, 0x1C, 0x00], // Q
    [0xFC, 0x66, 0x66, 0x7C, 0x6C, 0x66, 0xE6, 0x00], // R
    [0x78, 0xCC, 0xE0, 0x70, 0x1C, 0xCC, 0x78, 0x00], // S
    [0xFC, 0xB4, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00], // T
    [0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xFC, 0x00], // U
    [0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x00], // V
    [0xC6, 0xC6, 0xC6, 0xD6, 0xFE, 0xEE, 0xC6, 0x00], // W
    [0xC6, 0xC6, 0x6C, 0x38, 0x38, 0x6C, 0xC6, 0x00], // X
    [0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x30, 0x78, 0x00], // Y
    [0xFE, 0xC6, 0x8C, 0x18, 0x32, 0x66, 0xFE, 0x00], // Z
    [0x78, 0x60, 0x60, 0x60, 0x60, 0x60, 0x78, 0x00], // [
    [0xC0, 0x60, 0x30, 0x18, 0x0C, 0x06, 0x02, 0x00], // backslash
    [0x78, 0x18, 0x18, 0x18, 0x18, 0x18, 0x78, 0x00], // ]
    [0x10, 0x38, 0x6C, 0xC6, 0x00, 0x00, 0x00, 0x00], // ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // _
    [0x30, 0x30, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // `
    [0x00, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x76, 0x00], // a
    [0xE0, 0x60, 0x60, 0x7C, 0x66, 0x66, 0xDC, 0x00], // b
    [0x00, 0x00, 0x78, 0xCC, 0xC0, 0xCC, 0x78, 0x00], // c
    [0x1C, 0x0C, 0x0C, 0x7C, 0xCC, 0xCC, 0x76, 0x00], // d
    [0x00, 0x00, 0x78, 0xCC, 0xFC, 0xC0, 0x78, 0x00], // e
    [0x38, 0x6C, 0x60, 0xF0, 0x60, 0x60, 0xF0, 0x00], // f
    [0x00, 0x00, 0x76, 0xCC, 0xCC, 0x7C, 0x0C, 0xF8], // g
    [0xE0, 0x60, 0x6C, 0x76, 0x66, 0x66, 0xE6, 0x00], // h
    [0x30, 0x00, 0x70, 0x30, 0x30, 0x30, 0x78, 0x00], // i
    [0x0C, 0x00, 0x0C, 0x0C, 0x0C, 0xCC, 0xCC, 0x78], // j
    [0xE0, 0x60, 0x66, 0x6C, 0x78, 0x6C, 0xE6, 0x00], // k
    [0x70, 0x30, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00], // l
    [0x00, 0x00, 0xCC, 0xFE, 0xFE, 0xD6, 0xC6, 0x00], // m
    [0x00, 0x00, 0xF8, 0xCC, 0xCC, 0xCC, 0xCC, 0x00], // n
    [0x00, 0x00, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00], // o
    [0x00, 0x00, 0xDC, 0x66, 0x66, 0x7C, 0x60, 0xF0], // p
    [0x00, 0x00, 0x76, 0xCC, 0xCC, 0x7C, 0x0C, 0x1E], // q
    [0x00, 0x00, 0xDC, 0x76, 0x66, 0x60, 0xF0, 0x00], // r
    [0x00, 0x00, 0x7C, 0xC0, 0x78, 0x0C, 0xF8, 0x00], // s
    [0x10, 0x30, 0x7C, 0x30, 0x30, 0x34, 0x18, 0x00], // t
    [0x00, 0x00, 0xCC, 0xCC, 0xCC, 0xCC, 0x76, 0x00], // u
    [0x00, 0x00, 0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x00], // v
    [0x00, 0x00, 0xC6, 0xD6, 0xFE, 0xFE, 0x6C, 0x00], // w
    [0x00, 0x00, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0x00], // x
    [0x00, 0x00, 0xCC, 0xCC, 0xCC, 0x7C, 0x0C, 0xF8], // y
    [0x00, 0x00, 0xFC, 0x98, 0x30, 0x64, 0xFC, 0x00], // z
    [0x1C, 0x30, 0x30, 0xE0, 0x30, 0x30, 0x1C, 0x00], // {
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // |
    [0xE0, 0x30, 0x30, 0x1C, 0x30, 0x30, 0xE0, 0x00], // }
    [0x76, 0xDC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ~
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_table_covers_printables() {
        let font = build();
        for code in 0x21u8..=0x7E {
            assert!(
                !font.glyph(code).is_blank(),
                "printable {code:#04x} should have a glyph"
            );
        }
        assert!(font.glyph(b' ').is_blank());
    }

    #[test]
    fn shades_are_ordered_by_density() {
        let font = build();
        let density = |code: u8| {
            let g = font.glyph(code);
            (0..8)
                .flat_map(|y| (0..8).map(move |x| (x, y)))
                .filter(|&(x, y)| g.pixel(x, y))
                .count()
        };
        let light = density(0xB0);
        let medium = density(0xB1);
        let dark = density(0xB2);
        let full = density(0xDB);
        assert!(light < medium && medium < dark && dark < full);
        assert_eq!(full, 64);
    }

    #[test]
    fn half_blocks_partition_the_cell() {
        let font = build();
        let lower = font.glyph(0xDC);
        let upper = font.glyph(0xDF);
        for y in 0..8 {
            for x in 0..8 {
                assert_ne!(lower.pixel(x, y), upper.pixel(x, y));
            }
        }
    }

    #[test]
    fn box_lines_span_the_full_cell() {
        let font = build();
        // │ touches the top and bottom edge so stacked cells join.
        let vert = font.glyph(0xB3);
        assert!(vert.pixel(MID, 0));
        assert!(vert.pixel(MID, 7));
        // ─ touches the left and right edge.
        let horiz = font.glyph(0xC4);
        assert!(horiz.pixel(0, MID));
        assert!(horiz.pixel(7, MID));
        // ┼ has all four arms.
        let cross = font.glyph(0xC5);
        assert!(cross.pixel(MID, 0) && cross.pixel(MID, 7));
        assert!(cross.pixel(0, MID) && cross.pixel(7, MID));
    }

    #[test]
    fn double_lines_are_two_strokes() {
        let font = build();
        let vert = font.glyph(0xBA);
        for y in 0..8 {
            assert!(vert.pixel(DBL_A, y));
            assert!(vert.pixel(DBL_B, y));
            assert!(!vert.pixel(0, y));
            assert!(!vert.pixel(7, y));
        }
    }

    #[test]
    fn unmapped_high_codes_stay_blank() {
        let font = build();
        // ß has no procedural rendering in the fallback.
        assert!(font.glyph(0xE1).is_blank());
    }
}
