//! Background grid cache.
//!
//! Grid lines are cheap to draw but wasteful to recompute on every pointer
//! move. The cache covers a padded superset of the viewport, aligned to a
//! coarse update unit, and regenerates only once the viewport has traveled
//! at least one update unit on some edge.

use tracing::debug;

use viewkit_core::constants::{GRID_CELL_SIZE, GRID_COLOR, GRID_UPDATE_UNIT};
use viewkit_core::{Point, ViewRect};

use crate::render::Painter;

/// One axis-aligned grid line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub start: Point,
    pub end: Point,
}

/// Caches the generated grid for the last padded coverage rectangle.
#[derive(Debug, Clone)]
pub struct GridCache {
    update_unit: f64,
    cell_size: f64,
    coverage: ViewRect,
    lines: Vec<GridLine>,
}

impl GridCache {
    /// Creates an empty cache with the default spacing.
    pub fn new() -> Self {
        Self::with_spacing(GRID_UPDATE_UNIT, GRID_CELL_SIZE)
    }

    /// Creates an empty cache with custom update-unit and cell spacing.
    pub fn with_spacing(update_unit: f64, cell_size: f64) -> Self {
        Self {
            update_unit,
            cell_size,
            coverage: ViewRect::default(),
            lines: Vec::new(),
        }
    }

    /// The padded rectangle the current lines were generated for. Every edge
    /// is a multiple of the update unit.
    pub fn coverage(&self) -> ViewRect {
        self.coverage
    }

    /// The cached grid lines, horizontals first.
    pub fn lines(&self) -> &[GridLine] {
        &self.lines
    }

    /// Brings the cache up to date for a new viewport rectangle.
    ///
    /// The rectangle is padded outward to update-unit multiples; when all
    /// four padded edges are within one update unit of the cached coverage
    /// the cache is kept as-is. Otherwise the full line list is regenerated
    /// and replaces the old one.
    pub fn update(&mut self, rect: ViewRect) {
        let padded = ViewRect::new(
            self.fit_edge(rect.left, true),
            self.fit_edge(rect.top, true),
            self.fit_edge(rect.right, false),
            self.fit_edge(rect.bottom, false),
        );

        let unit = self.update_unit;
        if (padded.left - self.coverage.left).abs() < unit
            && (padded.top - self.coverage.top).abs() < unit
            && (padded.right - self.coverage.right).abs() < unit
            && (padded.bottom - self.coverage.bottom).abs() < unit
        {
            return;
        }

        // Step by index rather than accumulating floats so line coordinates
        // stay exact multiples of the cell size.
        let rows = ((padded.bottom - padded.top) / self.cell_size).round() as usize;
        let cols = ((padded.right - padded.left) / self.cell_size).round() as usize;
        let mut lines = Vec::with_capacity(rows + cols + 2);

        for i in 0..=rows {
            let y = padded.top + i as f64 * self.cell_size;
            lines.push(GridLine {
                start: Point::new(padded.left, y),
                end: Point::new(padded.right, y),
            });
        }
        for i in 0..=cols {
            let x = padded.left + i as f64 * self.cell_size;
            lines.push(GridLine {
                start: Point::new(x, padded.top),
                end: Point::new(x, padded.bottom),
            });
        }

        debug!(coverage = %padded, count = lines.len(), "regenerated grid");
        self.coverage = padded;
        self.lines = lines;
    }

    /// Strokes every cached line in the fixed grid color.
    pub fn draw(&self, painter: &mut dyn Painter) {
        for line in &self.lines {
            painter.stroke_line(line.start, line.end, GRID_COLOR);
        }
    }

    /// Rounds an edge outward to the next update-unit multiple strictly
    /// beyond it. An edge already on a multiple is still pushed a full unit,
    /// guaranteeing a minimum margin around the viewport. Working in whole
    /// update-unit steps keeps the result an exact multiple.
    fn fit_edge(&self, v: f64, start: bool) -> f64 {
        let unit = self.update_unit;
        let mut steps = if start {
            (v / unit).floor()
        } else {
            (v / unit).ceil()
        };
        if steps * unit == v {
            steps += if start { -1.0 } else { 1.0 };
        }
        steps * unit
    }
}

impl Default for GridCache {
    fn default() -> Self {
        Self::new()
    }
}
