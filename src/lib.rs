//! netglow is an animated backdrop layer for login-style pages.
//!
//! A drifting network of glowing nodes, with light particles running along its edges, reacts to
//! the pointer while small markers glide around the border of a panel. Everything is simulated
//! and rasterized on the CPU:
//!
//! - Mount a [`Backdrop`] onto a surface described by [`SurfaceDesc`]
//! - Forward host [`InputEvent`]s and call [`Backdrop::tick`] once per display frame
//! - Read back each [`FrameRGBA`] or stream a range into a [`FrameSink`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
/// JSON configuration.
pub mod config;
/// Frame sinks.
pub mod encode;
/// Host input handling.
pub mod input;
/// Node network simulation.
pub mod network;
pub(crate) mod paint;
/// Border markers.
pub mod perimeter;
/// Display lists and rasterization.
pub mod render;
/// Tick scheduling.
pub mod schedule;
/// Simulation state types.
pub mod scene;
/// The mounted backdrop.
pub mod session;

pub use crate::animation::ease::Ease;
pub use crate::config::{BackdropConfig, MarkerConfig, NetworkConfig, Theme};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use crate::foundation::core::{
    Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Size, SurfaceDesc, Vec2,
};
pub use crate::foundation::error::{NetglowError, NetglowResult};
pub use crate::foundation::rng::Rng64;
pub use crate::input::InputEvent;
pub use crate::input::pointer::PointerTracker;
pub use crate::input::resize::{ResizeWatcher, SurfaceSize};
pub use crate::network::engine::NetworkEngine;
pub use crate::network::generate::DensityTier;
pub use crate::paint::color::ColorDef;
pub use crate::perimeter::marker::{BorderMarker, Pulse};
pub use crate::perimeter::tracker::{Direction, PerimeterTracker, position_for};
pub use crate::render::backend::{BackendKind, FrameRGBA, RenderBackend, create_backend};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::display::{DisplayList, DrawOp, GradientStop};
pub use crate::schedule::clock::FrameClock;
pub use crate::schedule::scheduler::{CallbackId, FrameScheduler, StopHandle, Tick};
pub use crate::scene::node::Node;
pub use crate::scene::particle::Particle;
pub use crate::scene::pointer::PointerState;
pub use crate::session::backdrop::{Backdrop, RenderStats};
