#![forbid(unsafe_code)]

//! World model for Orrery.
//!
//! # Role in Orrery
//! `orrery-world` owns everything that exists independently of the screen:
//! the backing tile map, the camera that pans a fixed-size viewport across
//! it, and the procedural generator that populates it.
//!
//! # Primary responsibilities
//! - **Tile/WorldMap**: the square backing store of glyph + color cells.
//! - **Camera/MapView**: offset clamping and the per-tick viewport copy.
//! - **Genesis**: seeded star/planet/map generation.
//!
//! # How it fits in the system
//! The renderer never reads `WorldMap` directly. Each tick, `MapView`
//! copies the visible window of the map into any [`TileSink`] — in
//! production that sink is the renderer's cell grid; in tests it is a
//! plain in-memory grid.

pub mod camera;
pub mod genesis;
pub mod geometry;
pub mod map;
pub mod planet;
pub mod star;
pub mod tile;

pub use camera::{Camera, MapView, TileSink};
pub use genesis::Genesis;
pub use geometry::Point;
pub use map::WorldMap;
pub use planet::{Planet, PlanetClass};
pub use star::{Star, StarClass};
pub use tile::{Rgb, Tile};
