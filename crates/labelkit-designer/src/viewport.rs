//! Viewport and coordinate transformation for the editor canvas.
//!
//! Handles conversion between screen pixels and template-space units. Zoom is
//! a display-only scale factor; it never alters stored field coordinates.

use std::fmt;

use crate::canvas::ScreenPoint;
use crate::model::Point;
use labelkit_core::constants::{DEFAULT_ZOOM_INDEX, ZOOM_LEVELS};

/// Discrete zoom state of the editor canvas.
///
/// Zoom is stored as an index into [`ZOOM_LEVELS`], so the factor is always
/// one of its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    zoom_index: usize,
}

impl Viewport {
    /// Creates a viewport at 100%.
    pub fn new() -> Self {
        Self {
            zoom_index: DEFAULT_ZOOM_INDEX,
        }
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        ZOOM_LEVELS[self.zoom_index]
    }

    /// Sets the zoom to the nearest available level.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        let mut best = 0;
        for (i, level) in ZOOM_LEVELS.iter().enumerate() {
            if (level - zoom).abs() < (ZOOM_LEVELS[best] - zoom).abs() {
                best = i;
            }
        }
        self.zoom_index = best;
    }

    /// Steps up one level (+0.25), stopping at the largest.
    pub fn zoom_in(&mut self) {
        self.zoom_index = (self.zoom_index + 1).min(ZOOM_LEVELS.len() - 1);
    }

    /// Steps down one level (-0.25), stopping at the smallest.
    pub fn zoom_out(&mut self) {
        self.zoom_index = self.zoom_index.saturating_sub(1);
    }

    /// Resets zoom to 1.0 (100%).
    pub fn reset_zoom(&mut self) {
        self.zoom_index = DEFAULT_ZOOM_INDEX;
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom_index + 1 < ZOOM_LEVELS.len()
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom_index > 0
    }

    /// On-screen size of a template of the given dimensions.
    pub fn display_size(&self, width: f64, height: f64) -> (f64, f64) {
        (width * self.zoom(), height * self.zoom())
    }

    /// Converts a screen position to template space.
    ///
    /// ```text
    /// template = (screen - container_origin) / zoom
    /// ```
    pub fn screen_to_template(&self, screen: ScreenPoint, container_origin: ScreenPoint) -> Point {
        Point::new(
            (screen.x - container_origin.x) / self.zoom(),
            (screen.y - container_origin.y) / self.zoom(),
        )
    }

    /// Converts a template-space position to the screen.
    ///
    /// ```text
    /// screen = template * zoom + container_origin
    /// ```
    pub fn template_to_screen(&self, point: Point, container_origin: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(
            point.x * self.zoom() + container_origin.x,
            point.y * self.zoom() + container_origin.y,
        )
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zoom: {:.0}%", self.zoom() * 100.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_steps_and_clamps() {
        let mut vp = Viewport::new();
        assert_eq!(vp.zoom(), 1.0);
        for _ in 0..10 {
            vp.zoom_in();
        }
        assert_eq!(vp.zoom(), 2.0);
        assert!(!vp.can_zoom_in());
        for _ in 0..10 {
            vp.zoom_out();
        }
        assert_eq!(vp.zoom(), 0.5);
        assert!(!vp.can_zoom_out());
        vp.reset_zoom();
        assert_eq!(vp.zoom(), 1.0);
    }

    #[test]
    fn test_set_zoom_snaps() {
        let mut vp = Viewport::new();
        vp.set_zoom(1.4);
        assert_eq!(vp.zoom(), 1.5);
        vp.set_zoom(10.0);
        assert_eq!(vp.zoom(), 2.0);
        vp.set_zoom(f64::NAN);
        assert_eq!(vp.zoom(), 2.0);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let mut vp = Viewport::new();
        vp.set_zoom(1.75);
        let origin = ScreenPoint::new(40.0, 25.0);
        let original = Point::new(12.5, 80.0);
        let back = vp.screen_to_template(vp.template_to_screen(original, origin), origin);
        assert!((back.x - original.x).abs() < 1e-9);
        assert!((back.y - original.y).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        let mut vp = Viewport::new();
        vp.zoom_out();
        assert_eq!(vp.to_string(), "Zoom: 75%");
    }
}
