#![forbid(unsafe_code)]

//! Runtime configuration.
//!
//! Everything has a sane default; overrides come from `ORRERY_*`
//! environment variables. Unparsable values fall back to the default with
//! a warning rather than aborting — the only hard startup requirement is
//! the font file, and only when one is named.

use std::path::PathBuf;
use std::str::FromStr;

/// Fixed simulation update rate in ticks per second. Rendering runs at the
/// display rate; camera movement runs at this one.
pub const UPDATES_PER_SECOND: u32 = 20;

#[derive(Debug, Clone)]
pub struct Config {
    /// Initial window width in physical pixels.
    pub window_width: u32,
    /// Initial window height in physical pixels.
    pub window_height: u32,
    /// On-screen cell edge in pixels; the viewport is `window / cell_px`.
    pub cell_px: u32,
    /// Integer upscale factor applied to font pixels in the atlas.
    pub atlas_scale: u32,
    /// Edge length of the generated map, in tiles.
    pub map_size: u32,
    /// World generation seed.
    pub seed: u64,
    /// BDF font to load; the embedded fallback is used when unset.
    pub font_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1440,
            window_height: 960,
            cell_px: 16,
            atlas_scale: 2,
            map_size: 512,
            seed: 1977,
            font_path: None,
        }
    }
}

impl Config {
    /// Defaults overridden by `ORRERY_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            window_width: env_parse("ORRERY_WINDOW_WIDTH", defaults.window_width),
            window_height: env_parse("ORRERY_WINDOW_HEIGHT", defaults.window_height),
            cell_px: env_parse("ORRERY_CELL_PX", defaults.cell_px).max(1),
            atlas_scale: env_parse("ORRERY_ATLAS_SCALE", defaults.atlas_scale).max(1),
            map_size: env_parse("ORRERY_MAP_SIZE", defaults.map_size),
            seed: env_parse("ORRERY_SEED", defaults.seed),
            font_path: std::env::var_os("ORRERY_FONT").map(PathBuf::from),
        }
    }

    /// Viewport width in cells.
    #[must_use]
    pub fn cols(&self) -> u32 {
        (self.window_width / self.cell_px).max(1)
    }

    /// Viewport height in cells.
    #[must_use]
    pub fn rows(&self) -> u32 {
        (self.window_height / self.cell_px).max(1)
    }
}

fn env_parse<T: FromStr + Copy>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => parse_or(name, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T: FromStr + Copy>(name: &str, raw: &str, default: T) -> T {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(name, raw, "ignoring unparsable override");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_dimensions_follow_cell_size() {
        let config = Config::default();
        assert_eq!(config.cols(), 90);
        assert_eq!(config.rows(), 60);
    }

    #[test]
    fn tiny_windows_still_have_one_cell() {
        let config = Config {
            window_width: 7,
            window_height: 3,
            ..Config::default()
        };
        assert_eq!(config.cols(), 1);
        assert_eq!(config.rows(), 1);
    }

    #[test]
    fn parse_or_keeps_valid_values() {
        assert_eq!(parse_or("X", "640", 0u32), 640);
        assert_eq!(parse_or("X", " 42 ", 0u64), 42);
    }

    #[test]
    fn parse_or_falls_back_on_junk() {
        assert_eq!(parse_or("X", "not-a-number", 99u32), 99);
        assert_eq!(parse_or("X", "", 7u64), 7);
    }
}
