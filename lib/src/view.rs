//! Mapping screen positions to cells.
//!
//! The crate does not know how the world is drawn. A frontend provides
//! a [`ScreenToWorld`] implementation (usually its camera), and
//! [`resolve_cursor`] turns a pointer position into a cell.

use crate::{cells::Coord, world::World};

/// Converts screen coordinates to world coordinates.
///
/// In world coordinates, the cell `(x, y)` covers the unit square
/// `[x, x + 1) × [y, y + 1)`.
pub trait ScreenToWorld {
    fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64);
}

impl<T: ScreenToWorld + ?Sized> ScreenToWorld for &T {
    #[inline]
    fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
        (**self).screen_to_world(sx, sy)
    }
}

/// Screen coordinates are world coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl ScreenToWorld for Identity {
    #[inline]
    fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
        (sx, sy)
    }
}

/// Finds the cell under a screen position.
///
/// Returns `None` if the position is outside the world.
pub fn resolve_cursor<C: ScreenToWorld>(camera: &C, world: &World, sx: f64, sy: f64) -> Option<Coord> {
    let (wx, wy) = camera.screen_to_world(sx, sy);
    if !wx.is_finite() || !wy.is_finite() {
        return None;
    }
    let (x, y) = (wx.floor(), wy.floor());
    if x < 0.0 || y < 0.0 || x >= world.width() as f64 || y >= world.height() as f64 {
        return None;
    }
    Some((x as i32, y as i32))
}
