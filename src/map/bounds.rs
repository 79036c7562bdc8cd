//! Viewport bounds and the derived clipping polygon.

use geo_types::{polygon, Coord, Point, Polygon, Rect};

/// Current visible bounds of the map, as south-west / north-east corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub sw: Coord<f64>,
    pub ne: Coord<f64>,
}

impl MapBounds {
    pub fn new(sw: Coord<f64>, ne: Coord<f64>) -> Self {
        Self { sw, ne }
    }

    /// Viewport polygon: closed ring SW → NW → NE → SE → SW.
    pub fn to_polygon(&self) -> Polygon<f64> {
        polygon![
            (x: self.sw.x, y: self.sw.y),
            (x: self.sw.x, y: self.ne.y),
            (x: self.ne.x, y: self.ne.y),
            (x: self.ne.x, y: self.sw.y),
            (x: self.sw.x, y: self.sw.y),
        ]
    }

    /// Axis-aligned rectangle covering the bounds.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(self.sw, self.ne)
    }

    /// Strict containment: a point on any edge counts as outside.
    pub fn contains_strict(&self, p: Point<f64>) -> bool {
        p.x() > self.sw.x && p.x() < self.ne.x && p.y() > self.sw.y && p.y() < self.ne.y
    }
}
