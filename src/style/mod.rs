//! Style types shared with the map surface.
//!
//! A small subset of the Mapbox GL style spec: layer kinds, symbol/fill
//! layout and paint property maps, CSS color parsing, and the legacy
//! array-form filter expression used to hide off-screen labels.

mod color;
mod filter;
mod types;

pub use color::parse_color;
pub use filter::FilterExpr;
pub use types::{LayerKind, LayoutProps, PaintProps, TextTransform};
