//! # ViewKit Canvas
//!
//! This crate provides the interactive core of ViewKit: a pannable, zoomable
//! 2D scene with a dynamically regenerated background grid.
//!
//! ## Core Components
//!
//! - **Viewport**: owns the visible scene rectangle and the scene-to-screen
//!   transform; turns pointer/wheel/key gestures into pan and
//!   zoom-about-pivot operations
//! - **Grid**: caches the background grid lines and regenerates them only
//!   when the viewport has traveled far enough (hysteresis)
//! - **Scene**: a handful of static rectangular items
//! - **Render**: draws grid, debug overlay, and items into an image buffer
//!
//! ## Architecture
//!
//! ```text
//! SceneCanvas (facade)
//!   ├── ViewportController (rectangle + transform + gesture state)
//!   ├── GridCache (padded coverage + line list)
//!   └── Scene (items)
//! ```
//!
//! Every input event flows through [`SceneCanvas::handle_event`]: the
//! viewport controller interprets it, and when the visible rectangle changes
//! the new rectangle is fed to the grid cache. Everything runs synchronously
//! on the caller's thread.
//!
//! ## Usage
//!
//! ```rust
//! use viewkit_canvas::{CanvasEvent, Modifiers, SceneCanvas};
//! use viewkit_core::Point;
//!
//! let mut canvas = SceneCanvas::new(800.0, 600.0).unwrap();
//! canvas
//!     .handle_event(&CanvasEvent::Wheel {
//!         delta: -1.0,
//!         position: Point::new(400.0, 300.0),
//!         modifiers: Modifiers { alt: true },
//!     })
//!     .unwrap();
//! ```

pub mod canvas;
pub mod events;
pub mod grid;
pub mod render;
pub mod scene;
pub mod viewport;

pub use canvas::SceneCanvas;
pub use events::{CanvasEvent, Key, Modifiers, PointerButtons};
pub use grid::{GridCache, GridLine};
pub use render::{render_canvas, Painter, PixmapPainter};
pub use scene::{Scene, SceneItem};
pub use viewport::{Transform, ViewportController};
