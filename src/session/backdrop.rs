use std::time::Duration;

use crate::config::BackdropConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameRange, Rect, SurfaceDesc};
use crate::foundation::error::NetglowResult;
use crate::input::InputEvent;
use crate::input::pointer::PointerTracker;
use crate::input::resize::{ResizeWatcher, SurfaceSize};
use crate::network::engine::NetworkEngine;
use crate::perimeter::marker::BorderMarker;
use crate::render::backend::{BackendKind, FrameRGBA, RenderBackend, create_backend};
use crate::render::display::DisplayList;
use crate::schedule::clock::FrameClock;
use crate::schedule::scheduler::{FrameScheduler, StopHandle, Tick};
use crate::scene::pointer::PointerState;

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed to the sink.
    pub frames_pushed: u64,
    /// Ticks whose render step failed; the previous frame was pushed instead.
    pub render_failures: u64,
}

/// Everything the per-tick callbacks work on.
struct Layer {
    config: BackdropConfig,
    engine: NetworkEngine,
    markers: Vec<BorderMarker>,
    pointer: PointerTracker,
    resize: ResizeWatcher,
    panel: Option<Rect>,
    backend: Box<dyn RenderBackend>,
    display: DisplayList,
    render_failures: u64,
}

impl Layer {
    fn step_network(&mut self, tick: &Tick) {
        self.engine.update(tick.elapsed, &self.pointer.state());
    }

    fn step_markers(&mut self, tick: &Tick) {
        for m in &mut self.markers {
            m.advance(tick.elapsed);
        }
    }

    fn draw(&mut self, tick: &Tick) {
        self.display.clear();
        crate::render::network::build(
            &self.engine,
            &self.pointer.state(),
            &self.config.theme,
            tick.timestamp.as_secs_f64(),
            &mut self.display,
        );
        if let Some(panel) = self.panel {
            for m in &self.markers {
                m.draw(panel, self.config.theme.marker_glow, &mut self.display);
            }
        }
        if let Err(err) = self.backend.render(&self.display) {
            self.render_failures += 1;
            tracing::warn!(tick = tick.index, %err, "frame render failed; keeping previous frame");
        }
    }

    fn apply_resize(&mut self, width: f64, height: f64) -> NetglowResult<SurfaceSize> {
        let size = self.resize.resize(width, height)?;
        self.backend
            .resize(size.physical, self.resize.device_pixel_ratio())?;
        self.engine.resize(size.logical);
        Ok(size)
    }
}

/// A mounted backdrop: the network, the border markers and the renderer, driven by host ticks.
///
/// The host forwards input with [`Backdrop::handle`] and calls [`Backdrop::tick`] once per
/// display frame. Dropping the backdrop stops it.
pub struct Backdrop {
    scheduler: FrameScheduler<Layer>,
    layer: Layer,
    stop: StopHandle,
}

impl Backdrop {
    /// Validate `config`, size the surface and start the tick loop.
    ///
    /// A zero-sized surface is accepted; the network is generated on the first non-empty resize.
    #[tracing::instrument(skip(config), fields(width = surface.width, height = surface.height))]
    pub fn mount(config: BackdropConfig, surface: SurfaceDesc) -> NetglowResult<Self> {
        config.validate()?;
        let resize = ResizeWatcher::new(surface.device_pixel_ratio)?;
        let engine = NetworkEngine::new(&config);
        let markers = config.markers.iter().map(BorderMarker::from_config).collect();

        let mut layer = Layer {
            config,
            engine,
            markers,
            pointer: PointerTracker::new(),
            resize,
            panel: None,
            backend: create_backend(BackendKind::Cpu),
            display: DisplayList::new(),
            render_failures: 0,
        };
        let size = layer.apply_resize(surface.width, surface.height)?;

        let mut scheduler = FrameScheduler::new();
        scheduler.on_tick(Layer::step_network);
        scheduler.on_tick(Layer::step_markers);
        scheduler.on_tick(Layer::draw);
        let stop = scheduler.start();

        tracing::info!(
            physical_width = size.physical.width,
            physical_height = size.physical.height,
            nodes = layer.engine.nodes().len(),
            markers = layer.markers.len(),
            "backdrop mounted"
        );
        Ok(Self {
            scheduler,
            layer,
            stop,
        })
    }

    /// Forward one host event. Invalid resizes are logged and ignored.
    pub fn handle(&mut self, event: &InputEvent) {
        if self.layer.pointer.handle(event) {
            return;
        }
        match event {
            InputEvent::Resize { width, height } => {
                if let Err(err) = self.layer.apply_resize(*width, *height) {
                    tracing::warn!(width, height, %err, "resize rejected");
                }
            }
            InputEvent::PanelMoved(rect) => self.set_panel(*rect),
            _ => {}
        }
    }

    /// Bounds of the panel the markers travel around, in surface coordinates.
    pub fn set_panel(&mut self, rect: Rect) {
        self.layer.panel = Some(rect.abs());
    }

    pub fn panel(&self) -> Option<Rect> {
        self.layer.panel
    }

    /// Run one frame at host `timestamp`. Returns `None` once stopped.
    pub fn tick(&mut self, timestamp: Duration) -> Option<&FrameRGBA> {
        self.scheduler.tick(&mut self.layer, timestamp)?;
        Some(self.layer.backend.frame())
    }

    /// Tick every frame of `range` at `clock` timestamps and push the results to `sink`.
    pub fn render_range(
        &mut self,
        clock: FrameClock,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> NetglowResult<RenderStats> {
        let physical = self.layer.resize.current().physical;
        sink.begin(SinkConfig {
            width: physical.width,
            height: physical.height,
            fps: clock.fps,
        })?;

        let failures_before = self.layer.render_failures;
        let mut stats = RenderStats::default();
        for idx in range.iter() {
            let Some(frame) = self.tick(clock.timestamp(idx)) else {
                tracing::debug!(frame = idx.0, "backdrop stopped during range render");
                break;
            };
            sink.push_frame(idx, frame)?;
            stats.frames_pushed += 1;
        }
        sink.end()?;
        stats.render_failures = self.layer.render_failures - failures_before;
        Ok(stats)
    }

    /// Token the host can keep to stop the backdrop from elsewhere.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Restart after a stop. The first tick afterwards reports zero elapsed time.
    pub fn resume(&mut self) -> StopHandle {
        self.stop = self.scheduler.start();
        self.stop.clone()
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.layer.config
    }

    pub fn engine(&self) -> &NetworkEngine {
        &self.layer.engine
    }

    pub fn markers(&self) -> &[BorderMarker] {
        &self.layer.markers
    }

    pub fn pointer(&self) -> PointerState {
        self.layer.pointer.state()
    }

    pub fn surface(&self) -> SurfaceSize {
        self.layer.resize.current()
    }

    /// Last rendered frame (empty before the first tick).
    pub fn frame(&self) -> &FrameRGBA {
        self.layer.backend.frame()
    }

    /// Stop and release everything.
    pub fn unmount(mut self) {
        self.scheduler.stop();
        tracing::info!("backdrop unmounted");
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.scheduler.stop();
    }
}

impl std::fmt::Debug for Backdrop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backdrop")
            .field("surface", &self.layer.resize.current())
            .field("nodes", &self.layer.engine.nodes().len())
            .field("markers", &self.layer.markers.len())
            .field("panel", &self.layer.panel)
            .field("scheduler", &self.scheduler)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/backdrop.rs"]
mod tests;
