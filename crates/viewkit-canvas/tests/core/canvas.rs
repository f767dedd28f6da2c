use viewkit_canvas::events::{CanvasEvent, Key, Modifiers};
use viewkit_canvas::render::render_canvas;
use viewkit_canvas::scene::Scene;
use viewkit_canvas::SceneCanvas;
use viewkit_core::constants::{BACKGROUND_COLOR, SEED_ITEM_COUNT, SEED_ITEM_SIZE};
use viewkit_core::{Point, ViewRect};

#[test]
fn test_scene_seeding() {
    let scene = Scene::new();
    assert_eq!(scene.len(), SEED_ITEM_COUNT);

    // Squares sit on the main diagonal, from (-250, -250) to (200, 200).
    let first = scene.iter().next().unwrap();
    assert_eq!(first.rect, ViewRect::new(-250.0, -250.0, -200.0, -200.0));
    let bounds = scene.items_bounding_rect();
    assert_eq!(bounds, ViewRect::new(-250.0, -250.0, 250.0, 250.0));
}

#[test]
fn test_add_item_at_content_bottom_right() {
    let mut scene = Scene::new();
    let id = scene.add_item();
    let item = scene.get(id).unwrap();
    assert_eq!(
        item.rect,
        ViewRect::new(250.0, 250.0, 250.0 + SEED_ITEM_SIZE, 250.0 + SEED_ITEM_SIZE)
    );
    assert_eq!(scene.len(), SEED_ITEM_COUNT + 1);
}

#[test]
fn test_add_item_to_empty_scene_starts_at_origin() {
    let mut scene = Scene::empty();
    let id = scene.add_item();
    let item = scene.get(id).unwrap();
    assert_eq!(item.rect, ViewRect::new(0.0, 0.0, 50.0, 50.0));
}

#[test]
fn test_canvas_primes_grid_on_creation() {
    let canvas = SceneCanvas::new(800.0, 600.0).unwrap();
    assert!(!canvas.grid().lines().is_empty());
    assert!(canvas
        .grid()
        .coverage()
        .contains_rect(&canvas.viewport().rect()));
}

#[test]
fn test_events_flow_through_to_the_grid() {
    let mut canvas = SceneCanvas::new(800.0, 600.0).unwrap();
    let before = canvas.grid().coverage();

    // Recentering moves the viewport far enough to force a regeneration.
    canvas
        .handle_event(&CanvasEvent::KeyPressed { key: Key::Home })
        .unwrap();
    assert_ne!(canvas.grid().coverage(), before);
    assert!(canvas
        .grid()
        .coverage()
        .contains_rect(&canvas.viewport().rect()));
}

#[test]
fn test_noop_event_leaves_grid_untouched() {
    let mut canvas = SceneCanvas::new(800.0, 600.0).unwrap();
    let before = canvas.grid().coverage();
    canvas
        .handle_event(&CanvasEvent::Wheel {
            delta: 1.0,
            position: Point::new(10.0, 10.0),
            modifiers: Modifiers::default(),
        })
        .unwrap();
    assert_eq!(canvas.grid().coverage(), before);
}

#[test]
fn test_render_produces_non_blank_frame() {
    let mut canvas = SceneCanvas::new(200.0, 150.0).unwrap();
    canvas
        .handle_event(&CanvasEvent::KeyPressed { key: Key::Home })
        .unwrap();

    let image = render_canvas(&canvas, 200, 150);
    assert_eq!(image.dimensions(), (200, 150));

    let background = image::Rgb(BACKGROUND_COLOR);
    assert!(image.pixels().any(|p| *p != background));
}
