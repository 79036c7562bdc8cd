//! Dynamic label placement for clustered polygon features on interactive
//! maps.
//!
//! Given a rendered polygon layer and a grouping field, a placement pass
//! groups the currently visible features by field value, computes each
//! polygon's visual center (pole of inaccessibility) clipped to the
//! viewport, averages the centers per group, and writes one label point
//! per group into a dedicated symbol layer. Groups whose centroid drifted
//! off-screen are hidden through a legacy `["!in", field, …]` filter.
//!
//! The map engine is abstracted behind the [`map::MapSurface`] trait;
//! [`map::HeadlessMap`] is an in-memory implementation for tests and
//! embedding. The non-trivial geometry is delegated to the `geo` and
//! `polylabel` crates.
//!
//! ```
//! use cluster_labels::{place, GeoJsonSource, HeadlessMap, Layer, LayerKind, MapBounds, MapSurface};
//! use geo_types::coord;
//!
//! let bounds = MapBounds::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 10.0 });
//! let mut map = HeadlessMap::new(bounds);
//! map.add_source("parcels", GeoJsonSource::empty());
//! map.add_layer(Layer::new("parcel-fill", LayerKind::Fill).with_source("parcels")).unwrap();
//!
//! place(&mut map, "parcel-fill", "district").unwrap();
//! ```

pub mod error;
pub mod labels;
pub mod map;
pub mod style;

pub use error::{LabelError, LabelResult};
pub use labels::{place, LabelPlacer, LabelStyle, LABEL_LAYER_ID};
pub use map::{GeoJsonSource, HeadlessMap, Layer, LayerSource, MapBounds, MapSurface};
pub use style::{parse_color, FilterExpr, LayerKind, LayoutProps, PaintProps, TextTransform};
