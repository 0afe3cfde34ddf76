//! Viewport: camera focus, zoom, and the world↔screen mapping.
//!
//! `screen = (world − camera) × zoom + center`, where `center` is the middle
//! of the canvas area. Every camera-affecting call ends with [`Viewport::clamp`]
//! so the visible area never drifts entirely off the background image.

use super::Point;
use crate::config::EditorConfig;

// ─── Rect ─────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

// ─── Viewport ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// World point shown at the centre of the canvas.
    camera: Point,
    zoom: f64,
    /// Canvas size in screen pixels.
    width: f64,
    height: f64,
    /// Background image bounds in world units.
    image: Rect,
    padding: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Viewport {
    /// Camera centred on the image at the configured initial zoom.
    pub fn new(config: &EditorConfig) -> Self {
        let image = Rect::new(0.0, 0.0, config.image_width, config.image_height);
        let mut viewport = Self {
            camera: image.center(),
            zoom: config.initial_zoom,
            width: config.viewport_width,
            height: config.viewport_height,
            image,
            padding: config.clamp_padding,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
        };
        viewport.zoom = viewport.clamp_zoom(viewport.zoom);
        viewport.clamp();
        viewport
    }

    pub fn camera(&self) -> Point {
        self.camera
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn image(&self) -> Rect {
        self.image
    }

    /// Screen position of the canvas centre.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether `screen` lies on the canvas area.
    pub fn contains_screen(&self, screen: Point) -> bool {
        screen.x >= 0.0 && screen.y >= 0.0 && screen.x < self.width && screen.y < self.height
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        let c = self.center();
        Point::new(
            (world.x - self.camera.x) * self.zoom + c.x,
            (world.y - self.camera.y) * self.zoom + c.y,
        )
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        let c = self.center();
        Point::new(
            (screen.x - c.x) / self.zoom + self.camera.x,
            (screen.y - c.y) / self.zoom + self.camera.y,
        )
    }

    /// The world rectangle currently visible on the canvas.
    pub fn visible_world(&self) -> Rect {
        let half_w = self.width / 2.0 / self.zoom;
        let half_h = self.height / 2.0 / self.zoom;
        Rect::new(
            self.camera.x - half_w,
            self.camera.y - half_h,
            half_w * 2.0,
            half_h * 2.0,
        )
    }

    /// Move the camera focus directly, then clamp.
    pub fn set_camera(&mut self, camera: Point) {
        self.camera = camera;
        self.clamp();
    }

    /// Change zoom by `delta`, keeping the world point under `anchor` fixed on screen.
    pub fn zoom_at(&mut self, anchor: Point, delta: f64) {
        let world = self.screen_to_world(anchor);
        self.zoom = self.clamp_zoom(self.zoom + delta);
        let c = self.center();
        self.camera = Point::new(
            world.x - (anchor.x - c.x) / self.zoom,
            world.y - (anchor.y - c.y) / self.zoom,
        );
        self.clamp();
    }

    /// Translate the camera by a screen-space delta.
    ///
    /// Positive `dx` moves the camera right, so content slides left.
    pub fn pan_screen(&mut self, dx: f64, dy: f64) {
        self.camera = Point::new(
            self.camera.x + dx / self.zoom,
            self.camera.y + dy / self.zoom,
        );
        self.clamp();
    }

    /// Nudge the camera minimally so the visible area overlaps the image by
    /// at least `padding` world units on each axis. Zoom is never touched.
    pub fn clamp(&mut self) {
        let half_w = self.width / 2.0 / self.zoom;
        let half_h = self.height / 2.0 / self.zoom;
        let min_x = self.image.x + self.padding - half_w;
        let max_x = self.image.right() - self.padding + half_w;
        let min_y = self.image.y + self.padding - half_h;
        let max_y = self.image.bottom() - self.padding + half_h;
        self.camera.x = clamp_axis(self.camera.x, min_x, max_x);
        self.camera.y = clamp_axis(self.camera.y, min_y, max_y);
    }

    fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

/// Clamp without panicking when the band is inverted (image narrower than
/// twice the padding): the value settles on the band's midpoint.
fn clamp_axis(value: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi {
        (lo + hi) / 2.0
    } else {
        value.clamp(lo, hi)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
