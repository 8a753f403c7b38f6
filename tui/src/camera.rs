//! A camera that can pan, zoom and rotate over the world.

use lifepad_lib::ScreenToWorld;
use std::f64::consts::PI;

/// Each zoom step scales the view by this factor.
const ZOOM_BASE: f64 = 1.01;
const MAX_ZOOM_FACTOR: i32 = 2400;

/// The camera.
///
/// The world is first translated by `-position`, then scaled and rotated
/// around the center of the viewport.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Camera {
    /// Size of the screen, in screen units.
    pub(crate) viewport: (f64, f64),
    /// World position shown at the top left corner when
    /// there is no zoom or rotation.
    pub(crate) position: (f64, f64),
    /// The scale is `ZOOM_BASE ^ zoom_factor`.
    zoom_factor: i32,
    /// Clockwise rotation, in degrees.
    rotation: i32,
}

impl Camera {
    pub(crate) fn new(viewport: (f64, f64)) -> Self {
        Camera {
            viewport,
            ..Camera::default()
        }
    }

    pub(crate) fn pan(&mut self, dx: f64, dy: f64) {
        self.position.0 += dx;
        self.position.1 += dy;
    }

    /// Changes the zoom factor, within `±MAX_ZOOM_FACTOR`.
    pub(crate) fn zoom(&mut self, steps: i32) {
        self.zoom_factor = (self.zoom_factor + steps).clamp(-MAX_ZOOM_FACTOR, MAX_ZOOM_FACTOR);
    }

    pub(crate) fn rotate(&mut self, degrees: i32) {
        self.rotation = (self.rotation + degrees).rem_euclid(360);
    }

    /// Goes back to no pan, no zoom and no rotation.
    pub(crate) fn reset(&mut self) {
        self.position = (0.0, 0.0);
        self.zoom_factor = 0;
        self.rotation = 0;
    }

    pub(crate) fn scale(&self) -> f64 {
        ZOOM_BASE.powi(self.zoom_factor)
    }

    pub(crate) fn rotation(&self) -> i32 {
        self.rotation
    }
}

impl ScreenToWorld for Camera {
    fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
        let (cx, cy) = (self.viewport.0 * 0.5, self.viewport.1 * 0.5);
        let (dx, dy) = (sx - cx, sy - cy);
        // Undo the rotation.
        let theta = -(self.rotation as f64) * PI / 180.0;
        let (sin, cos) = theta.sin_cos();
        let (rx, ry) = (dx * cos - dy * sin, dx * sin + dy * cos);
        let scale = self.scale();
        (
            rx / scale + cx + self.position.0,
            ry / scale + cy + self.position.1,
        )
    }
}
