//! Input event definitions for the canvas.
//!
//! The host window system is expected to translate its native events into
//! [`CanvasEvent`] values and feed them to the canvas one at a time. Events
//! are cloneable and serializable for logging/replay.

use serde::{Deserialize, Serialize};
use viewkit_core::Point;

/// Keyboard modifiers relevant to canvas gestures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Alt is the gesture gate: wheel zoom and drag pan/zoom require it.
    pub alt: bool,
}

/// Mouse buttons held during a pointer-move event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerButtons {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

/// Keys the canvas reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Recenter the viewport on the scene origin.
    Home,
    /// Any key the canvas ignores.
    Other,
}

/// Root event enum for all canvas input.
///
/// Positions are in screen (pixel) coordinates; mapping to scene coordinates
/// happens inside the viewport controller using its current transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CanvasEvent {
    /// Window was resized to a new pixel size.
    Resized { width: f64, height: f64 },
    /// Wheel rotation; only the sign of `delta` matters.
    Wheel {
        delta: f64,
        position: Point,
        modifiers: Modifiers,
    },
    /// A mouse button was pressed.
    PointerPressed { position: Point },
    /// The pointer moved with the given buttons and modifiers active.
    PointerMoved {
        position: Point,
        buttons: PointerButtons,
        modifiers: Modifiers,
    },
    /// All mouse buttons were released; ends the current gesture.
    PointerReleased,
    /// A key was pressed.
    KeyPressed { key: Key },
}

impl CanvasEvent {
    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            CanvasEvent::Resized { width, height } => {
                format!("resized to {width}x{height}")
            }
            CanvasEvent::Wheel { delta, .. } => format!("wheel delta {delta}"),
            CanvasEvent::PointerPressed { position } => {
                format!("pointer pressed at ({}, {})", position.x, position.y)
            }
            CanvasEvent::PointerMoved { position, .. } => {
                format!("pointer moved to ({}, {})", position.x, position.y)
            }
            CanvasEvent::PointerReleased => "pointer released".to_string(),
            CanvasEvent::KeyPressed { key } => format!("key pressed: {key:?}"),
        }
    }
}
