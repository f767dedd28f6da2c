//! Headless demo driver: replays a scripted gesture sequence against the
//! canvas and writes the rendered frame to a PNG.

use tracing::info;

use viewkit::{init_logging, render_canvas, CanvasEvent, SceneCanvas};
use viewkit_canvas::{Key, Modifiers, PointerButtons};
use viewkit_core::Point;

const WINDOW_WIDTH: f64 = 800.0;
const WINDOW_HEIGHT: f64 = 600.0;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut canvas = SceneCanvas::new(WINDOW_WIDTH, WINDOW_HEIGHT)?;

    let alt = Modifiers { alt: true };
    let middle = PointerButtons {
        middle: true,
        ..Default::default()
    };
    let right = PointerButtons {
        right: true,
        ..Default::default()
    };

    let script = vec![
        // Recenter on the origin so the seeded items are in view.
        CanvasEvent::KeyPressed { key: Key::Home },
        // A few zoom-out notches about the window center.
        CanvasEvent::Wheel {
            delta: -1.0,
            position: Point::new(400.0, 300.0),
            modifiers: alt,
        },
        CanvasEvent::Wheel {
            delta: -1.0,
            position: Point::new(400.0, 300.0),
            modifiers: alt,
        },
        // Middle-drag pan down-right.
        CanvasEvent::PointerPressed {
            position: Point::new(400.0, 300.0),
        },
        CanvasEvent::PointerMoved {
            position: Point::new(340.0, 260.0),
            buttons: middle,
            modifiers: alt,
        },
        CanvasEvent::PointerReleased,
        // Right-drag zoom anchored at the press point.
        CanvasEvent::PointerPressed {
            position: Point::new(200.0, 150.0),
        },
        CanvasEvent::PointerMoved {
            position: Point::new(220.0, 150.0),
            buttons: right,
            modifiers: alt,
        },
        CanvasEvent::PointerMoved {
            position: Point::new(240.0, 150.0),
            buttons: right,
            modifiers: alt,
        },
        CanvasEvent::PointerReleased,
    ];

    for event in &script {
        tracing::debug!(event = %serde_json::to_string(event)?, "replaying");
        canvas.handle_event(event)?;
    }

    info!(
        rect = %canvas.viewport().rect(),
        grid_lines = canvas.grid().lines().len(),
        items = canvas.scene().len(),
        "replay finished"
    );

    let image = render_canvas(&canvas, WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32);
    let path = "viewkit-demo.png";
    image.save(path)?;
    info!(path, "frame written");

    Ok(())
}
