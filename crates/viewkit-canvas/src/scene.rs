//! Scene items.
//!
//! The scene holds a flat list of static rectangular items. A new scene is
//! seeded with a diagonal run of squares so there is something to pan and
//! zoom against; further items are appended at the bottom-right of the
//! current content bounds.

use serde::{Deserialize, Serialize};

use viewkit_core::constants::{SEED_ITEM_COUNT, SEED_ITEM_SIZE};
use viewkit_core::{Size, ViewRect};

/// A static rectangular item on the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneItem {
    pub id: u64,
    pub rect: ViewRect,
}

/// Flat item store for the canvas.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    items: Vec<SceneItem>,
    next_id: u64,
}

impl Scene {
    /// Creates an empty scene.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a scene seeded with squares along the main diagonal, centered
    /// around the origin.
    pub fn new() -> Self {
        let mut scene = Self::empty();
        let half = (SEED_ITEM_COUNT / 2) as f64;
        for i in 0..SEED_ITEM_COUNT {
            let offset = (i as f64 - half) * SEED_ITEM_SIZE;
            scene.insert(ViewRect::from_origin_size(
                offset,
                offset,
                Size::new(SEED_ITEM_SIZE, SEED_ITEM_SIZE),
            ));
        }
        scene
    }

    /// Appends a square item at the bottom-right corner of the current
    /// content bounds and returns its id.
    pub fn add_item(&mut self) -> u64 {
        let corner = self.items_bounding_rect().bottom_right();
        self.insert(ViewRect::from_origin_size(
            corner.x,
            corner.y,
            Size::new(SEED_ITEM_SIZE, SEED_ITEM_SIZE),
        ))
    }

    /// The bounding rectangle of all items; the zero rectangle for an empty
    /// scene.
    pub fn items_bounding_rect(&self) -> ViewRect {
        if self.items.is_empty() {
            return ViewRect::default();
        }

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for item in &self.items {
            min_x = min_x.min(item.rect.left);
            min_y = min_y.min(item.rect.top);
            max_x = max_x.max(item.rect.right);
            max_y = max_y.max(item.rect.bottom);
        }

        ViewRect::new(min_x, min_y, max_x, max_y)
    }

    /// Number of items on the scene.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the scene holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneItem> {
        self.items.iter()
    }

    /// Gets an item by id.
    pub fn get(&self, id: u64) -> Option<&SceneItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn insert(&mut self, rect: ViewRect) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(SceneItem { id, rect });
        id
    }
}
