#![forbid(unsafe_code)]

//! Minimal BDF (Glyph Bitmap Distribution Format) parser.
//!
//! Covers the subset a fixed-cell terminal font needs: `FONTBOUNDINGBOX`
//! for the cell size, and per character `ENCODING`, `BBX`, and `BITMAP`
//! hex rows. Properties, metrics offsets, and writing-direction keywords
//! are skipped. Glyphs are keyed by their `ENCODING` value (a Unicode
//! scalar in the fonts we load).

use std::collections::HashMap;

use crate::font::{FontError, GlyphBitmap};

/// Parse result: cell size plus glyphs keyed by encoding.
#[derive(Debug)]
pub struct ParsedBdf {
    pub cell_width: u32,
    pub cell_height: u32,
    pub glyphs: HashMap<u32, GlyphBitmap>,
}

fn malformed(line: usize, reason: impl Into<String>) -> FontError {
    FontError::Malformed {
        line,
        reason: reason.into(),
    }
}

fn parse_fields(line_no: usize, rest: &str, n: usize) -> Result<Vec<i64>, FontError> {
    let fields: Vec<i64> = rest
        .split_whitespace()
        .take(n)
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|e| malformed(line_no, format!("bad integer field: {e}")))?;
    if fields.len() < n {
        return Err(malformed(line_no, format!("expected {n} fields")));
    }
    Ok(fields)
}

/// Parse BDF source text into glyph bitmaps.
pub fn parse(source: &str) -> Result<ParsedBdf, FontError> {
    let mut lines = source.lines().enumerate();

    match lines.next() {
        Some((_, first)) if first.trim_start().starts_with("STARTFONT") => {}
        Some((n, _)) => return Err(malformed(n + 1, "missing STARTFONT header")),
        None => return Err(malformed(1, "empty font source")),
    }

    let mut cell_width = 0u32;
    let mut cell_height = 0u32;
    let mut glyphs = HashMap::new();

    while let Some((idx, raw)) = lines.next() {
        let line_no = idx + 1;
        let line = raw.trim();

        if let Some(rest) = line.strip_prefix("FONTBOUNDINGBOX") {
            let fields = parse_fields(line_no, rest, 2)?;
            if fields[0] <= 0 || fields[1] <= 0 {
                return Err(malformed(line_no, "non-positive bounding box"));
            }
            cell_width = fields[0] as u32;
            cell_height = fields[1] as u32;
        } else if line.starts_with("STARTCHAR") {
            let (encoding, glyph) = parse_char(&mut lines)?;
            // A font may carry glyphs we never reference (encoding -1 or
            // scalars outside the code page); keep them all, the caller
            // picks what it needs.
            if let Some(encoding) = encoding {
                glyphs.insert(encoding, glyph);
            }
        } else if line == "ENDFONT" {
            break;
        }
    }

    if cell_width == 0 || cell_height == 0 {
        return Err(malformed(1, "missing FONTBOUNDINGBOX"));
    }
    if cell_width > 32 {
        return Err(malformed(1, "glyph cells wider than 32 pixels"));
    }

    Ok(ParsedBdf {
        cell_width,
        cell_height,
        glyphs,
    })
}

/// Parse one STARTCHAR..ENDCHAR block. Returns `None` for unencoded glyphs.
fn parse_char<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
) -> Result<(Option<u32>, GlyphBitmap), FontError> {
    let mut encoding: Option<i64> = None;
    let mut width = 0u32;
    let mut height = 0u32;
    let mut last_line = 0usize;

    while let Some((idx, raw)) = lines.next() {
        let line_no = idx + 1;
        last_line = line_no;
        let line = raw.trim();

        if let Some(rest) = line.strip_prefix("ENCODING") {
            encoding = Some(parse_fields(line_no, rest, 1)?[0]);
        } else if let Some(rest) = line.strip_prefix("BBX") {
            let fields = parse_fields(line_no, rest, 2)?;
            if fields[0] < 0 || fields[1] < 0 || fields[0] > 32 {
                return Err(malformed(line_no, "unsupported BBX size"));
            }
            width = fields[0] as u32;
            height = fields[1] as u32;
        } else if line == "BITMAP" {
            let rows = parse_bitmap_rows(lines, width, height)?;
            let glyph = GlyphBitmap::from_rows(width, height, rows);
            let key = encoding.filter(|&e| e >= 0).map(|e| e as u32);
            return Ok((key, glyph));
        } else if line == "ENDCHAR" {
            // Char without a bitmap: treat as blank.
            let key = encoding.filter(|&e| e >= 0).map(|e| e as u32);
            return Ok((key, GlyphBitmap::blank(width.max(1), height.max(1))));
        }
    }

    Err(malformed(last_line, "unterminated STARTCHAR block"))
}

fn parse_bitmap_rows<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    width: u32,
    height: u32,
) -> Result<Vec<u32>, FontError> {
    let mut rows = Vec::with_capacity(height as usize);
    let mut last_line = 0usize;

    while let Some((idx, raw)) = lines.next() {
        let line_no = idx + 1;
        last_line = line_no;
        let line = raw.trim();

        if line == "ENDCHAR" {
            if rows.len() != height as usize {
                return Err(malformed(
                    line_no,
                    format!("expected {height} bitmap rows, found {}", rows.len()),
                ));
            }
            return Ok(rows);
        }

        let value = u32::from_str_radix(line, 16)
            .map_err(|e| malformed(line_no, format!("bad bitmap row: {e}")))?;
        // Hex rows are padded to whole bytes on the right; align the
        // leftmost pixel with the MSB of the low `width` bits.
        let padded_bits = (line.len() as u32) * 4;
        if padded_bits < width {
            return Err(malformed(line_no, "bitmap row narrower than BBX width"));
        }
        rows.push(value >> (padded_bits - width));
    }

    Err(malformed(last_line, "unterminated BITMAP block"))
}
