//! Viewport and coordinate transformation for the canvas.
//!
//! Handles conversion between pixel coordinates (screen space) and scene
//! coordinates, and turns raw input events into pan and zoom-about-pivot
//! operations on the visible rectangle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use viewkit_core::constants::{DRAG_ZOOM_STEP, WHEEL_ZOOM_STEP};
use viewkit_core::error::GeometryError;
use viewkit_core::{Point, Result, Size, ViewRect};

use crate::events::{CanvasEvent, Key, PointerButtons};

/// Affine scene-to-screen mapping.
///
/// Derived deterministically from the viewport rectangle and the window
/// pixel size; it carries no state of its own. The scale factors may differ
/// per axis when the window aspect ratio does not match the rectangle's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    sx: f64,
    sy: f64,
    tx: f64,
    ty: f64,
}

impl Transform {
    /// Computes the transform mapping `rect` onto a window of `window` pixels.
    ///
    /// Fails when either extent is not strictly positive, since the scale
    /// factors would be infinite or undefined.
    pub fn from_rect(rect: &ViewRect, window: Size) -> Result<Self> {
        if window.width <= 0.0 || window.height <= 0.0 {
            return Err(GeometryError::DegenerateWindow {
                width: window.width,
                height: window.height,
            }
            .into());
        }
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return Err(GeometryError::DegenerateViewport {
                width: rect.width(),
                height: rect.height(),
            }
            .into());
        }

        let sx = window.width / rect.width();
        let sy = window.height / rect.height();
        Ok(Self {
            sx,
            sy,
            tx: -rect.left * sx,
            ty: -rect.top * sy,
        })
    }

    /// Maps a scene point to screen coordinates.
    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(p.x * self.sx + self.tx, p.y * self.sy + self.ty)
    }

    /// Maps a screen point to scene coordinates.
    pub fn to_scene(&self, p: Point) -> Point {
        Point::new((p.x - self.tx) / self.sx, (p.y - self.ty) / self.sy)
    }

    /// The per-axis scale factors (screen pixels per scene unit).
    pub fn scale(&self) -> (f64, f64) {
        (self.sx, self.sy)
    }
}

/// Transient pointer state, scoped to a single press-move-release gesture.
#[derive(Debug, Clone, Copy, Default)]
struct InputState {
    last_pointer: Option<Point>,
    press_origin: Option<Point>,
}

/// Owns the visible scene rectangle and its screen transform, and interprets
/// input gestures:
///
/// - Alt+wheel zooms about the pointer position
/// - Alt+middle-drag pans
/// - Alt+right-drag zooms about the gesture's press point
/// - Home recenters the viewport on the scene origin
#[derive(Debug, Clone)]
pub struct ViewportController {
    rect: ViewRect,
    transform: Transform,
    window: Size,
    input: InputState,
}

impl ViewportController {
    /// Creates a controller for a window of the given pixel size, showing the
    /// scene 1:1 with the origin at the top-left corner.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let window = Size::new(width, height);
        let rect = ViewRect::from_origin_size(0.0, 0.0, window);
        let transform = Transform::from_rect(&rect, window)?;
        Ok(Self {
            rect,
            transform,
            window,
            input: InputState::default(),
        })
    }

    /// Creates a controller showing an arbitrary scene rectangle in a window
    /// of the given pixel size.
    pub fn with_rect(rect: ViewRect, window: Size) -> Result<Self> {
        let transform = Transform::from_rect(&rect, window)?;
        Ok(Self {
            rect,
            transform,
            window,
            input: InputState::default(),
        })
    }

    /// The current viewport rectangle.
    pub fn rect(&self) -> ViewRect {
        self.rect
    }

    /// The current scene-to-screen transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// The current window pixel size.
    pub fn window_size(&self) -> Size {
        self.window
    }

    /// Processes one input event.
    ///
    /// Returns the updated viewport rectangle when the event changed the
    /// visible area, `None` when it was a no-op (e.g. wheel without Alt).
    /// The caller forwards a returned rectangle to the grid cache.
    pub fn handle(&mut self, event: &CanvasEvent) -> Result<Option<ViewRect>> {
        match *event {
            CanvasEvent::Resized { width, height } => self.on_resize(width, height).map(Some),
            CanvasEvent::Wheel {
                delta,
                position,
                modifiers,
            } => {
                if !modifiers.alt {
                    return Ok(None);
                }
                let factor = if delta < 0.0 {
                    1.0 + WHEEL_ZOOM_STEP
                } else {
                    1.0 - WHEEL_ZOOM_STEP
                };
                let pivot = self.transform.to_scene(position);
                self.zoom_about(factor, pivot).map(Some)
            }
            CanvasEvent::PointerPressed { position } => {
                self.input.last_pointer = Some(position);
                self.input.press_origin = Some(position);
                Ok(None)
            }
            CanvasEvent::PointerMoved {
                position,
                buttons,
                modifiers,
            } => {
                let changed = if modifiers.alt {
                    self.on_drag(position, buttons)?
                } else {
                    None
                };
                self.input.last_pointer = Some(position);
                Ok(changed)
            }
            CanvasEvent::PointerReleased => {
                self.input = InputState::default();
                Ok(None)
            }
            CanvasEvent::KeyPressed { key: Key::Home } => {
                let delta = Point::new(
                    -self.rect.left - self.rect.width() / 2.0,
                    -self.rect.top - self.rect.height() / 2.0,
                );
                self.pan(delta).map(Some)
            }
            CanvasEvent::KeyPressed { .. } => Ok(None),
        }
    }

    /// Resizes the window: the rectangle keeps its top-left corner and takes
    /// the new pixel size as its scene extent, so the view is 1:1 again.
    pub fn on_resize(&mut self, width: f64, height: f64) -> Result<ViewRect> {
        if width <= 0.0 || height <= 0.0 {
            return Err(GeometryError::DegenerateWindow { width, height }.into());
        }
        self.window = Size::new(width, height);
        self.rect = ViewRect::from_origin_size(self.rect.left, self.rect.top, self.window);
        self.transform = Transform::from_rect(&self.rect, self.window)?;
        debug!(rect = %self.rect, "viewport resized");
        Ok(self.rect)
    }

    /// Translates the viewport rectangle by `delta` scene units.
    pub fn pan(&mut self, delta: Point) -> Result<ViewRect> {
        self.rect = self.rect.translated(delta);
        self.transform = Transform::from_rect(&self.rect, self.window)?;
        debug!(rect = %self.rect, "viewport panned");
        Ok(self.rect)
    }

    /// Scales the viewport rectangle by `factor` about `pivot`, keeping the
    /// pivot's screen position fixed.
    ///
    /// The rectangle is moved so the pivot sits at the origin, scaled, and
    /// moved back; the transform is then recomputed from the new rectangle
    /// alone. `factor` must be strictly positive and finite.
    pub fn zoom_about(&mut self, factor: f64, pivot: Point) -> Result<ViewRect> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(GeometryError::InvalidScaleFactor { factor }.into());
        }
        self.rect = self
            .rect
            .translated(-pivot)
            .scaled(factor)
            .translated(pivot);
        self.transform = Transform::from_rect(&self.rect, self.window)?;
        debug!(rect = %self.rect, factor, "viewport zoomed");
        Ok(self.rect)
    }

    fn on_drag(&mut self, position: Point, buttons: PointerButtons) -> Result<Option<ViewRect>> {
        let Some(last) = self.input.last_pointer else {
            return Ok(None);
        };

        if buttons.middle {
            // Screen-space delta rescaled to scene units.
            let screen_delta = last - position;
            let scene_extent = self.rect.size();
            let delta = Point::new(
                screen_delta.x * scene_extent.width / self.window.width,
                screen_delta.y * scene_extent.height / self.window.height,
            );
            return self.pan(delta).map(Some);
        }

        if buttons.right {
            let Some(origin) = self.input.press_origin else {
                return Ok(None);
            };
            let factor = if last.x - position.x > 0.0 {
                1.0 + DRAG_ZOOM_STEP
            } else {
                1.0 - DRAG_ZOOM_STEP
            };
            // The pivot is the press point, not the live pointer: mapping the
            // same screen point through the updated transform keeps repeated
            // zoom steps anchored to where the gesture started.
            let pivot = self.transform.to_scene(origin);
            return self.zoom_about(factor, pivot).map(Some);
        }

        Ok(None)
    }
}
