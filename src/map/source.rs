//! GeoJSON data sources.

use geojson::FeatureCollection;

/// A GeoJSON-backed data source. The label layer's source is replaced
/// wholesale on every placement pass via [`GeoJsonSource::set_data`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonSource {
    data: FeatureCollection,
}

impl GeoJsonSource {
    pub fn new(data: FeatureCollection) -> Self {
        Self { data }
    }

    /// Source with an empty feature collection.
    pub fn empty() -> Self {
        Self {
            data: FeatureCollection {
                bbox: None,
                features: Vec::new(),
                foreign_members: None,
            },
        }
    }

    pub fn data(&self) -> &FeatureCollection {
        &self.data
    }

    /// Replace the source data entirely (no merge with prior contents).
    pub fn set_data(&mut self, data: FeatureCollection) {
        self.data = data;
    }
}

impl Default for GeoJsonSource {
    fn default() -> Self {
        Self::empty()
    }
}
