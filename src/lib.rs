//! # ViewKit
//!
//! A minimal pannable, zoomable 2D scene canvas with a dynamically
//! regenerated background grid.
//!
//! ## Architecture
//!
//! ViewKit is organized as a workspace with multiple crates:
//!
//! 1. **viewkit-core** - Geometry value types, constants, error taxonomy
//! 2. **viewkit-canvas** - Viewport controller, grid cache, scene, renderer
//! 3. **viewkit** - Main binary: headless gesture replay demo
//!
//! The canvas core is host-agnostic: a window system feeds it
//! [`viewkit_canvas::CanvasEvent`] values and paints whatever the renderer
//! produces. The demo binary stands in for such a host by replaying a
//! scripted gesture sequence and writing the rendered frame to a PNG.

pub use viewkit_canvas as canvas;

pub use viewkit_canvas::{render_canvas, CanvasEvent, SceneCanvas};
pub use viewkit_core::{Point, Result, ViewRect};

/// Initializes tracing with an env-filter (default INFO; override with
/// `RUST_LOG`).
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    Ok(())
}
