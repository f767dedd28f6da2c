//! Canvas renderer.
//!
//! Renders the grid, the debug overlay, and the scene items to an image
//! buffer using tiny-skia. Drawing goes through the [`Painter`] trait so the
//! core components stay independent of the actual rendering backend; the
//! provided [`PixmapPainter`] maps scene coordinates to screen space through
//! the viewport transform and strokes into a pixmap.

use image::{Rgb, RgbImage};
use tiny_skia::{Paint, PathBuilder, Pixmap, Rect, Stroke, Transform as SkiaTransform};

use viewkit_core::constants::{BACKGROUND_COLOR, ITEM_COLOR, ORIGIN_MARKER_RADIUS, OVERLAY_COLOR};
use viewkit_core::{Point, ViewRect};

use crate::canvas::SceneCanvas;
use crate::viewport::Transform;

/// Stroke color as RGB bytes.
pub type Color = [u8; 3];

/// Rendering collaborator: strokes primitives given in scene coordinates.
pub trait Painter {
    fn stroke_line(&mut self, start: Point, end: Point, color: Color);
    fn stroke_rect(&mut self, rect: ViewRect, color: Color);
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color);
}

/// [`Painter`] backed by a tiny-skia pixmap.
///
/// Scene coordinates are mapped to screen space through the viewport
/// transform before stroking, so the pixmap itself stays in pixel space.
pub struct PixmapPainter<'a> {
    pixmap: &'a mut Pixmap,
    transform: Transform,
}

impl<'a> PixmapPainter<'a> {
    /// Wraps a pixmap with the scene-to-screen transform to apply.
    pub fn new(pixmap: &'a mut Pixmap, transform: Transform) -> Self {
        Self { pixmap, transform }
    }

    fn stroke(&mut self, path: tiny_skia::Path, color: Color) {
        let mut paint = Paint::default();
        paint.set_color(tiny_skia::Color::from_rgba8(
            color[0], color[1], color[2], 255,
        ));
        // Sharp single-pixel strokes, as for axis lines.
        paint.anti_alias = false;
        let stroke = Stroke {
            width: 1.0,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, SkiaTransform::identity(), None);
    }
}

impl Painter for PixmapPainter<'_> {
    fn stroke_line(&mut self, start: Point, end: Point, color: Color) {
        let a = self.transform.to_screen(start);
        let b = self.transform.to_screen(end);
        let mut pb = PathBuilder::new();
        pb.move_to(a.x as f32, a.y as f32);
        pb.line_to(b.x as f32, b.y as f32);
        if let Some(path) = pb.finish() {
            self.stroke(path, color);
        }
    }

    fn stroke_rect(&mut self, rect: ViewRect, color: Color) {
        let tl = self.transform.to_screen(rect.top_left());
        let br = self.transform.to_screen(rect.bottom_right());
        if let Some(r) = Rect::from_ltrb(tl.x as f32, tl.y as f32, br.x as f32, br.y as f32) {
            self.stroke(PathBuilder::from_rect(r), color);
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color) {
        let c = self.transform.to_screen(center);
        let (sx, sy) = self.transform.scale();
        // Non-uniform viewport scale turns the circle into an ellipse.
        let rx = (radius * sx) as f32;
        let ry = (radius * sy) as f32;
        let oval = Rect::from_ltrb(
            c.x as f32 - rx,
            c.y as f32 - ry,
            c.x as f32 + rx,
            c.y as f32 + ry,
        );
        if let Some(r) = oval {
            if let Some(path) = PathBuilder::from_oval(r) {
                self.stroke(path, color);
            }
        }
    }
}

/// Renders the canvas to an image buffer.
///
/// Draws, in order: the background fill, the cached grid lines, the constant
/// debug overlay (viewport bounds rectangle and origin marker, always on),
/// and the scene item rectangles.
pub fn render_canvas(canvas: &SceneCanvas, width: u32, height: u32) -> RgbImage {
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbImage::new(width, height);
    };
    pixmap.fill(tiny_skia::Color::from_rgba8(
        BACKGROUND_COLOR[0],
        BACKGROUND_COLOR[1],
        BACKGROUND_COLOR[2],
        255,
    ));

    let transform = *canvas.viewport().transform();
    let view_rect = canvas.viewport().rect();
    {
        let mut painter = PixmapPainter::new(&mut pixmap, transform);

        canvas.grid().draw(&mut painter);

        painter.stroke_rect(view_rect, OVERLAY_COLOR);
        painter.stroke_circle(Point::origin(), ORIGIN_MARKER_RADIUS, OVERLAY_COLOR);

        for item in canvas.scene().iter() {
            painter.stroke_rect(item.rect, ITEM_COLOR);
        }
    }

    // Convert Pixmap to RgbImage
    let data = pixmap.data();
    RgbImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    })
}
