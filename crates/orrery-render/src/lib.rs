#![forbid(unsafe_code)]

//! Renderer core for Orrery.
//!
//! # Role in Orrery
//! `orrery-render` turns the world model's visible window into pixels:
//! a 256-glyph atlas texture built once at startup, a fixed-size grid of
//! colored cells regenerated into a vertex buffer every frame, and a single
//! indexed draw call that covers the whole viewport.
//!
//! # Primary responsibilities
//! - **BitmapFont**: BDF loading plus an embedded fallback font.
//! - **Atlas**: the 16×16-tile RGBA glyph sheet in native code-page order.
//! - **CellGrid**: viewport cell state and the per-frame vertex rebuild.
//! - **GpuRenderer**: wgpu surface/pipeline ownership and frame submission.
//!
//! # How it fits in the system
//! `MapView` (in `orrery-world`) feeds visible tiles into [`CellGrid`]
//! through the `TileSink` seam; the app then hands the grid to
//! [`GpuRenderer::render`] once per frame. Everything except `GpuRenderer`
//! is pure CPU state and fully testable without a device.

pub mod atlas;
pub mod bdf;
pub mod builtin;
pub mod cells;
pub mod cp437;
pub mod font;
pub mod gpu;

pub use atlas::Atlas;
pub use cells::{CellGrid, CellVertex, quad_indices};
pub use font::{BitmapFont, FontError, GlyphBitmap};
pub use gpu::{GpuRenderer, RenderError};
