//! In-memory map surface.

use std::collections::HashMap;
use std::convert::TryFrom;

use geo::{BoundingRect, Intersects};
use geojson::Feature;

use crate::error::{LabelError, LabelResult};
use crate::map::{GeoJsonSource, Layer, LayerSource, MapBounds, MapSurface};
use crate::style::FilterExpr;

/// Map surface with no rendering backend.
///
/// Layers are kept in insertion order (draw order). "Rendered" means the
/// layer is present and visible, the feature's bounding rectangle
/// intersects the current bounds, and the feature passes the layer's own
/// filter. Pan/zoom between placement passes is simulated with
/// [`HeadlessMap::set_bounds`].
#[derive(Debug, Clone)]
pub struct HeadlessMap {
    layers: Vec<Layer>,
    sources: HashMap<String, GeoJsonSource>,
    bounds: MapBounds,
}

impl HeadlessMap {
    pub fn new(bounds: MapBounds) -> Self {
        Self {
            layers: Vec::new(),
            sources: HashMap::new(),
            bounds,
        }
    }

    /// Register a named source.
    pub fn add_source(&mut self, id: impl Into<String>, source: GeoJsonSource) {
        self.sources.insert(id.into(), source);
    }

    /// Move the viewport.
    pub fn set_bounds(&mut self, bounds: MapBounds) {
        self.bounds = bounds;
    }

    fn source_for(&self, layer: &Layer) -> Option<&GeoJsonSource> {
        self.sources.get(layer.source_id()?)
    }
}

impl MapSurface for HeadlessMap {
    fn get_layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    fn add_layer(&mut self, layer: Layer) -> LabelResult<()> {
        if self.get_layer(&layer.id).is_some() {
            return Err(LabelError::DuplicateLayer(layer.id));
        }
        let mut layer = layer;
        match layer.source.take() {
            Some(LayerSource::Inline(data)) => {
                self.sources
                    .insert(layer.id.clone(), GeoJsonSource::new(data));
                layer.source = Some(LayerSource::Named(layer.id.clone()));
            }
            other => layer.source = other,
        }
        self.layers.push(layer);
        Ok(())
    }

    fn remove_layer(&mut self, id: &str) -> LabelResult<()> {
        let idx = self
            .layers
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| LabelError::UnknownLayer(id.to_string()))?;
        self.layers.remove(idx);
        Ok(())
    }

    fn remove_source(&mut self, id: &str) -> LabelResult<()> {
        self.sources
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| LabelError::UnknownSource(id.to_string()))
    }

    fn query_rendered_features(
        &self,
        filter: Option<&FilterExpr>,
        layer_ids: &[&str],
    ) -> Vec<Feature> {
        let view = self.bounds.to_rect();
        let empty = serde_json::Map::new();
        let mut out = Vec::new();

        for layer in self.layers.iter().filter(|l| layer_ids.contains(&l.id.as_str())) {
            if !layer.layout.is_visible() {
                continue;
            }
            let Some(source) = self.source_for(layer) else {
                continue;
            };
            for feature in &source.data().features {
                let Some(geom) = feature.geometry.as_ref() else {
                    continue;
                };
                let Ok(geo_geom) = geo_types::Geometry::<f64>::try_from(geom) else {
                    continue;
                };
                let on_screen = geo_geom
                    .bounding_rect()
                    .map(|r| r.intersects(&view))
                    .unwrap_or(false);
                if !on_screen {
                    continue;
                }
                let props = feature.properties.as_ref().unwrap_or(&empty);
                if let Some(f) = &layer.filter {
                    if !f.evaluate(props) {
                        continue;
                    }
                }
                if let Some(f) = filter {
                    if !f.evaluate(props) {
                        continue;
                    }
                }
                out.push(feature.clone());
            }
        }
        out
    }

    fn get_bounds(&self) -> MapBounds {
        self.bounds
    }

    fn get_source(&self, id: &str) -> Option<&GeoJsonSource> {
        self.sources.get(id)
    }

    fn get_source_mut(&mut self, id: &str) -> Option<&mut GeoJsonSource> {
        self.sources.get_mut(id)
    }

    fn set_filter(&mut self, layer_id: &str, filter: Option<FilterExpr>) -> LabelResult<()> {
        let layer = self
            .layers
            .iter_mut()
            .find(|l| l.id == layer_id)
            .ok_or_else(|| LabelError::UnknownLayer(layer_id.to_string()))?;
        layer.filter = filter;
        Ok(())
    }
}
