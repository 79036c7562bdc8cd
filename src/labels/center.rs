//! Visual-center computation and coordinate averaging.
//!
//! A feature's visual center is the pole of inaccessibility of its
//! intersection with the viewport polygon, so the label sits inside the
//! on-screen part of the shape rather than at a possibly off-shape (or
//! off-screen) centroid.

use std::convert::TryFrom;

use geo::{BooleanOps, Centroid, CoordsIter};
use geo_types::{Point, Polygon};
use geojson::Feature;
use polylabel::polylabel;
use serde_json::Value;

use crate::labels::group::property_value;

/// Per-feature label anchor candidate: the visual center position plus
/// the feature's grouping-field value.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualCenter {
    pub position: Point<f64>,
    pub value: Option<Value>,
}

/// Visual center of `feature` clipped to the viewport.
///
/// Returns `None` for non-polygon geometry, for polygons with non-finite
/// coordinates, when the intersection with the viewport is empty, or when
/// the pole-of-inaccessibility computation fails. Callers skip `None`
/// contributions; one bad feature never aborts a placement pass.
pub fn visual_center(
    feature: &Feature,
    viewport: &Polygon<f64>,
    field: &str,
    tolerance: f64,
) -> Option<VisualCenter> {
    let geom = feature.geometry.as_ref()?;
    if !matches!(geom.value, geojson::Value::Polygon(_)) {
        return None;
    }
    let polygon = Polygon::<f64>::try_from(geom.value.clone()).ok()?;
    if polygon
        .coords_iter()
        .any(|c| !c.x.is_finite() || !c.y.is_finite())
    {
        return None;
    }

    let clipped = viewport.intersection(&polygon);
    let parts = &clipped.0;
    let position = match parts.len() {
        0 => return None,
        1 => polylabel(&parts[0], &tolerance).ok()?,
        // Disjoint on-screen pieces: pole of inaccessibility per piece,
        // averaged.
        _ => {
            let poles = parts
                .iter()
                .map(|p| polylabel(p, &tolerance))
                .collect::<Result<Vec<_>, _>>()
                .ok()?;
            average_position(&poles)?
        }
    };

    Some(VisualCenter {
        position,
        value: property_value(feature, field),
    })
}

/// Unclipped centroid of a feature's geometry, used for the off-screen
/// visibility test.
pub fn raw_centroid(feature: &Feature) -> Option<Point<f64>> {
    let geom = feature.geometry.as_ref()?;
    let geo_geom = geo_types::Geometry::<f64>::try_from(geom).ok()?;
    geo_geom.centroid()
}

/// Arithmetic mean of the points' longitudes and latitudes. Longitudes
/// are averaged linearly; no antimeridian handling.
pub fn average_position(points: &[Point<f64>]) -> Option<Point<f64>> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x(), sy + p.y()));
    Some(Point::new(sx / n, sy / n))
}
