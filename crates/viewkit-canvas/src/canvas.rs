//! Canvas facade tying the viewport controller, grid cache, and scene
//! together behind a single event entry point.

use tracing::debug;

use viewkit_core::Result;

use crate::events::CanvasEvent;
use crate::grid::GridCache;
use crate::scene::Scene;
use crate::viewport::ViewportController;

/// Canvas state: seeded scene, viewport controller, and grid cache.
#[derive(Debug, Clone)]
pub struct SceneCanvas {
    scene: Scene,
    controller: ViewportController,
    grid: GridCache,
}

impl SceneCanvas {
    /// Creates a canvas for a window of the given pixel size. The grid is
    /// primed from the initial viewport rectangle so there is never a frame
    /// without lines.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let controller = ViewportController::new(width, height)?;
        let mut grid = GridCache::new();
        grid.update(controller.rect());
        Ok(Self {
            scene: Scene::new(),
            controller,
            grid,
        })
    }

    /// Routes one input event through the viewport controller and, when the
    /// visible rectangle changed, brings the grid cache up to date.
    pub fn handle_event(&mut self, event: &CanvasEvent) -> Result<()> {
        debug!("{}", event.description());
        if let Some(rect) = self.controller.handle(event)? {
            self.grid.update(rect);
        }
        Ok(())
    }

    /// Appends an item at the bottom-right of the current content bounds.
    pub fn add_item(&mut self) -> u64 {
        self.scene.add_item()
    }

    /// The viewport controller.
    pub fn viewport(&self) -> &ViewportController {
        &self.controller
    }

    /// The grid cache.
    pub fn grid(&self) -> &GridCache {
        &self.grid
    }

    /// The scene items.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}
