//! Style layer definitions.

use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};

use crate::style::{FilterExpr, LayerKind, LayoutProps, PaintProps};

/// Where a layer reads its features from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayerSource {
    /// Reference to a source registered on the map.
    Named(String),
    /// Inline GeoJSON data; registered under the layer's own id when the
    /// layer is added, as Mapbox does.
    Inline(FeatureCollection),
}

/// A single style layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Unique layer id.
    pub id: String,
    /// Layer kind (fill, line, symbol, circle).
    #[serde(rename = "type")]
    pub kind: LayerKind,
    /// Data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<LayerSource>,
    /// Layout properties (visibility, text settings).
    #[serde(default)]
    pub layout: LayoutProps,
    /// Paint properties (colors, widths).
    #[serde(default)]
    pub paint: PaintProps,
    /// Display filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterExpr>,
}

impl Layer {
    pub fn new(id: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            id: id.into(),
            kind,
            source: None,
            layout: LayoutProps::default(),
            paint: PaintProps::default(),
            filter: None,
        }
    }

    pub fn with_source(mut self, source_id: impl Into<String>) -> Self {
        self.source = Some(LayerSource::Named(source_id.into()));
        self
    }

    pub fn with_inline_source(mut self, data: FeatureCollection) -> Self {
        self.source = Some(LayerSource::Inline(data));
        self
    }

    pub fn with_layout(mut self, layout: LayoutProps) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_paint(mut self, paint: PaintProps) -> Self {
        self.paint = paint;
        self
    }

    pub fn with_filter(mut self, filter: FilterExpr) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Id of the source this layer reads from, once registered on a map.
    /// Inline sources register under the layer id.
    pub fn source_id(&self) -> Option<&str> {
        match &self.source {
            Some(LayerSource::Named(id)) => Some(id),
            Some(LayerSource::Inline(_)) => Some(&self.id),
            None => None,
        }
    }
}
