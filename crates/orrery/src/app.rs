#![forbid(unsafe_code)]

//! Window lifecycle and the frame loop.
//!
//! Single-threaded and frame-driven: input events update held-key state as
//! they arrive, a fixed 20 Hz tick applies them to the camera, and every
//! redraw copies the visible map window into the cell grid and submits one
//! GPU frame. GPU initialization happens on `resumed` (the surface needs a
//! live window); failures there are fatal and stop the event loop.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use orrery_render::{Atlas, CellGrid, GpuRenderer, RenderError};
use orrery_world::{MapView, WorldMap};

use crate::config::{Config, UPDATES_PER_SECOND};
use crate::input::HeldKeys;

const TICK: Duration = Duration::from_nanos(1_000_000_000 / UPDATES_PER_SECOND as u64);

struct Active {
    window: Arc<Window>,
    gpu: GpuRenderer,
    grid: CellGrid,
}

pub struct App {
    config: Config,
    atlas: Atlas,
    map: WorldMap,
    view: MapView,
    keys: HeldKeys,
    active: Option<Active>,
    init_error: Option<RenderError>,
    last_tick: Instant,
}

impl App {
    #[must_use]
    pub fn new(config: Config, atlas: Atlas, map: WorldMap) -> Self {
        Self {
            config,
            atlas,
            map,
            view: MapView::new(),
            keys: HeldKeys::default(),
            active: None,
            init_error: None,
            last_tick: Instant::now(),
        }
    }

    /// The GPU initialization error that stopped the loop, if any.
    pub fn take_init_error(&mut self) -> Option<RenderError> {
        self.init_error.take()
    }

    /// Apply pending fixed-rate ticks: one camera step per tick per held
    /// direction. Catches up after long frames instead of drifting.
    fn run_ticks(&mut self) {
        let Some(active) = self.active.as_ref() else {
            return;
        };
        let now = Instant::now();
        while now.duration_since(self.last_tick) >= TICK {
            let (dx, dy) = self.keys.camera_step();
            if (dx, dy) != (0, 0) {
                self.view.move_camera(dx, dy, &self.map, &active.grid);
            }
            self.last_tick += TICK;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.active.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Orrery")
            .with_inner_size(PhysicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!(error = %e, "window creation failed");
                self.init_error = Some(RenderError::Surface(e.to_string()));
                event_loop.exit();
                return;
            }
        };

        let grid = CellGrid::new(self.config.cols(), self.config.rows());
        let size = window.inner_size();

        match GpuRenderer::new(window.clone(), size.width, size.height, &grid, &self.atlas) {
            Ok(gpu) => {
                info!(
                    cols = grid.cols(),
                    rows = grid.rows(),
                    map_size = self.map.size(),
                    "window ready"
                );
                self.last_tick = Instant::now();
                self.active = Some(Active { window, gpu, grid });
            }
            Err(e) => {
                error!(error = %e, "GPU initialization failed");
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(active) = self.active.as_mut() {
                    active.gpu.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.keys.apply(event.physical_key, event.state);
            }
            WindowEvent::RedrawRequested => {
                self.run_ticks();
                let Some(active) = self.active.as_mut() else {
                    return;
                };
                self.view.render(&self.map, &mut active.grid);
                if let Err(e) = active.gpu.render(&mut active.grid) {
                    error!(error = %e, "frame submission failed");
                    self.init_error = Some(e);
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(active) = self.active.as_ref() {
            active.window.request_redraw();
        }
    }
}
