//! Canvas-wide constants.

/// Hysteresis threshold for grid regeneration, in scene units. The grid is
/// rebuilt only once the padded coverage moves by at least this much on any
/// edge.
pub const GRID_UPDATE_UNIT: f64 = 500.0;

/// Spacing between adjacent grid lines, in scene units.
pub const GRID_CELL_SIZE: f64 = 100.0;

/// Per-notch zoom step for Alt+wheel (factor becomes `1 ± step`).
pub const WHEEL_ZOOM_STEP: f64 = 0.05;

/// Per-move zoom step for Alt+right-drag.
pub const DRAG_ZOOM_STEP: f64 = 0.01;

/// Radius of the origin marker circle in the debug overlay, in scene units.
pub const ORIGIN_MARKER_RADIUS: f64 = 5.0;

/// Number of items seeded onto a new scene.
pub const SEED_ITEM_COUNT: usize = 10;

/// Edge length of seeded (and appended) scene items, in scene units.
pub const SEED_ITEM_SIZE: f64 = 50.0;

/// Stroke color for grid lines.
pub const GRID_COLOR: [u8; 3] = [200, 200, 200];

/// Stroke color for the debug overlay (viewport bounds and origin marker).
pub const OVERLAY_COLOR: [u8; 3] = [255, 0, 0];

/// Stroke color for scene items.
pub const ITEM_COLOR: [u8; 3] = [0, 0, 255];

/// Canvas background color.
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];
