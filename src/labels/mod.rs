//! Label placement for clustered polygon features.
//!
//! Provides:
//! - `LabelPlacer` for (re)building the label layer on each viewport change
//! - `LabelStyle` for styling configuration
//! - Property-value grouping of rendered features
//! - Per-feature visual centers clipped to the viewport
//! - Coordinate averaging for group label anchors
//!
//! One placement pass is fully synchronous: the previous label layer and
//! source are torn down, rendered features are grouped by the field value,
//! each group gets one label point at the mean of its members' visual
//! centers, and groups whose centroid left the viewport are hidden with a
//! `["!in", field, …]` filter. Callers re-invoke on pan/zoom.

mod center;
mod group;

pub use center::{average_position, raw_centroid, visual_center, VisualCenter};
pub use group::{group_by_property, property_value, FeatureGroup};

use geojson::{Feature, FeatureCollection, Geometry};
use log::{debug, trace};
use serde_json::Value;

use crate::error::{LabelError, LabelResult};
use crate::map::{Layer, MapSurface};
use crate::style::{FilterExpr, LayerKind, LayoutProps, PaintProps, TextTransform};

/// Fixed id of the generated label layer and its backing source.
pub const LABEL_LAYER_ID: &str = "label-layer";

/// Styling configuration for the generated label layer.
///
/// Defaults match the conventional cluster-label look: small uppercase
/// text offset below the anchor, dark text with a white halo.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    /// Text font stack.
    pub text_font: Vec<String>,
    /// Text size in pixels.
    pub text_size: f32,
    /// Text case transform.
    pub text_transform: TextTransform,
    /// Letter spacing in ems.
    pub text_letter_spacing: f32,
    /// Offset from the anchor point in ems.
    pub text_offset: [f32; 2],
    /// Text color (CSS color string).
    pub text_color: String,
    /// Halo color (CSS color string).
    pub text_halo_color: String,
    /// Halo width in pixels.
    pub text_halo_width: f32,
    /// Precision of the pole-of-inaccessibility search, in map units.
    pub tolerance: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            text_font: vec!["Arial Unicode MS Regular".to_string()],
            text_size: 11.0,
            text_transform: TextTransform::Uppercase,
            text_letter_spacing: 0.05,
            text_offset: [0.0, 1.5],
            text_color: "#202".to_string(),
            text_halo_color: "#fff".to_string(),
            text_halo_width: 2.0,
            tolerance: 1.0,
        }
    }
}

impl LabelStyle {
    /// Layout properties for the label layer, with the text template
    /// `{field}`.
    pub fn to_layout(&self, field: &str) -> LayoutProps {
        LayoutProps {
            visibility: None,
            text_field: Some(format!("{{{}}}", field)),
            text_font: Some(self.text_font.clone()),
            text_size: Some(self.text_size),
            text_transform: Some(self.text_transform),
            text_letter_spacing: Some(self.text_letter_spacing),
            text_offset: Some(self.text_offset),
        }
    }

    /// Paint properties for the label layer.
    pub fn to_paint(&self) -> PaintProps {
        PaintProps {
            text_color: Some(self.text_color.clone()),
            text_halo_color: Some(self.text_halo_color.clone()),
            text_halo_width: Some(self.text_halo_width),
            fill_color: None,
        }
    }
}

/// Places one label per group of same-valued polygon features.
#[derive(Debug, Clone, Default)]
pub struct LabelPlacer {
    style: LabelStyle,
}

impl LabelPlacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: LabelStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// Rebuild the label layer for `layer_id`, grouping by `field`.
    ///
    /// Tears down any previous label layer and source, then recreates
    /// them from the currently rendered features. Features that cannot
    /// contribute a visual center are skipped; a group with no surviving
    /// centers produces no label. Groups whose first member's unclipped
    /// centroid lies outside the viewport are listed in the layer's
    /// `["!in", field, …]` filter and therefore hidden.
    ///
    /// Errors only surface for map-registry misuse; on a consistent map
    /// the pass degrades to fewer or no labels rather than failing.
    pub fn place<M>(&self, map: &mut M, layer_id: &str, field: &str) -> LabelResult<()>
    where
        M: MapSurface + ?Sized,
    {
        if map.get_layer(LABEL_LAYER_ID).is_some() {
            map.remove_layer(LABEL_LAYER_ID)?;
            map.remove_source(LABEL_LAYER_ID)?;
        }

        map.add_layer(
            Layer::new(LABEL_LAYER_ID, LayerKind::Symbol)
                .with_inline_source(empty_collection())
                .with_layout(self.style.to_layout(field))
                .with_paint(self.style.to_paint()),
        )?;

        let rendered = map.query_rendered_features(None, &[layer_id]);
        debug!(
            "label placement: {} rendered features on layer {}",
            rendered.len(),
            layer_id
        );
        if rendered.is_empty() {
            return Ok(());
        }

        let bounds = map.get_bounds();
        let viewport = bounds.to_polygon();
        let groups = group_by_property(rendered, field);

        let mut excluded: Vec<Value> = Vec::new();
        let mut label_points: Vec<Feature> = Vec::new();

        for group in &groups {
            // Visibility test uses the unclipped centroid of the group's
            // first member only; an unreadable centroid counts as
            // off-screen.
            let visible = group
                .features
                .first()
                .and_then(raw_centroid)
                .map(|c| bounds.contains_strict(c))
                .unwrap_or(false);
            if !visible {
                trace!("group {:?} off-screen, excluded", group.key);
                excluded.push(group.key_value());
            }

            let centers: Vec<VisualCenter> = group
                .features
                .iter()
                .filter_map(|f| visual_center(f, &viewport, field, self.style.tolerance))
                .collect();
            let positions: Vec<_> = centers.iter().map(|c| c.position).collect();
            let Some(anchor) = average_position(&positions) else {
                continue;
            };

            let mut properties = serde_json::Map::new();
            if let Some(value) = centers[0].value.clone() {
                properties.insert(field.to_string(), value);
            }
            label_points.push(Feature {
                bbox: None,
                geometry: Some(Geometry::new(geojson::Value::Point(vec![
                    anchor.x(),
                    anchor.y(),
                ]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            });
        }

        debug!(
            "label placement: {} label points, {} excluded groups",
            label_points.len(),
            excluded.len()
        );

        map.get_source_mut(LABEL_LAYER_ID)
            .ok_or_else(|| LabelError::UnknownSource(LABEL_LAYER_ID.to_string()))?
            .set_data(FeatureCollection {
                bbox: None,
                features: label_points,
                foreign_members: None,
            });
        map.set_filter(LABEL_LAYER_ID, Some(FilterExpr::not_in(field, excluded)))?;
        Ok(())
    }
}

/// Rebuild the label layer with the default style.
pub fn place<M>(map: &mut M, layer_id: &str, field: &str) -> LabelResult<()>
where
    M: MapSurface + ?Sized,
{
    LabelPlacer::new().place(map, layer_id, field)
}

fn empty_collection() -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: Vec::new(),
        foreign_members: None,
    }
}
