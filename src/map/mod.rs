//! Map surface abstraction.
//!
//! Provides:
//! - `MapSurface`, the capability trait the label placer operates through
//! - `MapBounds` and the derived viewport polygon
//! - `Layer` / `GeoJsonSource` registry types
//! - `HeadlessMap`, an in-memory implementation for tests and embedding
//!
//! The rendering engine proper (tiles, GPU, input) lives outside this
//! crate; anything that can answer these calls can host labels.

mod bounds;
mod headless;
mod layer;
mod source;

pub use bounds::MapBounds;
pub use headless::HeadlessMap;
pub use layer::{Layer, LayerSource};
pub use source::GeoJsonSource;

use geojson::Feature;

use crate::error::LabelResult;
use crate::style::FilterExpr;

/// Capability set the label placer needs from a map engine.
///
/// Mirrors the relevant slice of the Mapbox GL map API: layer/source
/// registry mutation, rendered-feature queries, bounds, and per-layer
/// display filters.
pub trait MapSurface {
    /// Look up a layer by id.
    fn get_layer(&self, id: &str) -> Option<&Layer>;

    /// Add a layer. An inline source registers under the layer id.
    /// Fails on duplicate layer ids.
    fn add_layer(&mut self, layer: Layer) -> LabelResult<()>;

    /// Remove a layer by id. Fails if the layer does not exist.
    fn remove_layer(&mut self, id: &str) -> LabelResult<()>;

    /// Remove a source by id. Fails if the source does not exist.
    fn remove_source(&mut self, id: &str) -> LabelResult<()>;

    /// Features currently rendered for the given layers, optionally
    /// narrowed by an extra filter.
    fn query_rendered_features(
        &self,
        filter: Option<&FilterExpr>,
        layer_ids: &[&str],
    ) -> Vec<Feature>;

    /// Current visible bounds.
    fn get_bounds(&self) -> MapBounds;

    /// Look up a source by id.
    fn get_source(&self, id: &str) -> Option<&GeoJsonSource>;

    /// Mutable source lookup, for data replacement.
    fn get_source_mut(&mut self, id: &str) -> Option<&mut GeoJsonSource>;

    /// Set or clear a layer's display filter. Fails if the layer does
    /// not exist.
    fn set_filter(&mut self, layer_id: &str, filter: Option<FilterExpr>) -> LabelResult<()>;
}
