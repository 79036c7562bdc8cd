//! Layer kind and property maps, serialized with Mapbox property names.

use serde::{Deserialize, Serialize};

use crate::style::color::parse_color;

/// Layer kinds this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Fill,
    Line,
    Symbol,
    Circle,
    #[serde(other)]
    Unknown,
}

/// Text case transform for symbol layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    None,
    Uppercase,
    Lowercase,
}

/// Layout properties for text and visibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutProps {
    /// Visibility ("visible" or "none").
    pub visibility: Option<String>,
    /// Text field template (e.g., "{district}").
    #[serde(rename = "text-field")]
    pub text_field: Option<String>,
    /// Text font stack.
    #[serde(rename = "text-font")]
    pub text_font: Option<Vec<String>>,
    /// Text size in pixels.
    #[serde(rename = "text-size")]
    pub text_size: Option<f32>,
    /// Text case transform.
    #[serde(rename = "text-transform")]
    pub text_transform: Option<TextTransform>,
    /// Letter spacing in ems.
    #[serde(rename = "text-letter-spacing")]
    pub text_letter_spacing: Option<f32>,
    /// Text offset from anchor in ems.
    #[serde(rename = "text-offset")]
    pub text_offset: Option<[f32; 2]>,
}

impl LayoutProps {
    /// Whether a layer with this layout is drawn at all.
    pub fn is_visible(&self) -> bool {
        self.visibility.as_deref() != Some("none")
    }

    /// Extract the property name from a "{property}" text field template.
    pub fn text_field_property(&self) -> Option<&str> {
        let field = self.text_field.as_deref()?;
        if field.starts_with('{') && field.ends_with('}') {
            Some(&field[1..field.len() - 1])
        } else {
            None
        }
    }
}

/// Paint properties for styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintProps {
    /// Text color (CSS color string).
    #[serde(rename = "text-color")]
    pub text_color: Option<String>,
    /// Text halo color (CSS color string).
    #[serde(rename = "text-halo-color")]
    pub text_halo_color: Option<String>,
    /// Text halo width in pixels.
    #[serde(rename = "text-halo-width")]
    pub text_halo_width: Option<f32>,
    /// Fill color for polygon layers (CSS color string).
    #[serde(rename = "fill-color")]
    pub fill_color: Option<String>,
}

impl PaintProps {
    /// Text color parsed to RGBA [0..1].
    pub fn text_color_rgba(&self) -> Option<[f32; 4]> {
        parse_color(self.text_color.as_deref()?)
    }

    /// Halo color parsed to RGBA [0..1].
    pub fn text_halo_color_rgba(&self) -> Option<[f32; 4]> {
        parse_color(self.text_halo_color.as_deref()?)
    }

    /// Fill color parsed to RGBA [0..1].
    pub fn fill_color_rgba(&self) -> Option<[f32; 4]> {
        parse_color(self.fill_color.as_deref()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_serde_renames() {
        let layout = LayoutProps {
            text_field: Some("{district}".to_string()),
            text_font: Some(vec!["Arial Unicode MS Regular".to_string()]),
            text_size: Some(11.0),
            text_transform: Some(TextTransform::Uppercase),
            text_letter_spacing: Some(0.05),
            text_offset: Some([0.0, 1.5]),
            ..Default::default()
        };
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["text-field"], "{district}");
        assert_eq!(json["text-transform"], "uppercase");
        assert_eq!(json["text-offset"][1], 1.5);

        let back: LayoutProps = serde_json::from_value(json).unwrap();
        assert_eq!(back, layout);
    }

    #[test]
    fn test_layer_kind_lowercase() {
        assert_eq!(
            serde_json::to_value(LayerKind::Symbol).unwrap(),
            serde_json::json!("symbol")
        );
        let kind: LayerKind = serde_json::from_value(serde_json::json!("heatmap")).unwrap();
        assert_eq!(kind, LayerKind::Unknown);
    }

    #[test]
    fn test_visibility() {
        assert!(LayoutProps::default().is_visible());
        let hidden = LayoutProps {
            visibility: Some("none".to_string()),
            ..Default::default()
        };
        assert!(!hidden.is_visible());
    }

    #[test]
    fn test_text_field_property() {
        let layout = LayoutProps {
            text_field: Some("{name}".to_string()),
            ..Default::default()
        };
        assert_eq!(layout.text_field_property(), Some("name"));

        let plain = LayoutProps {
            text_field: Some("name".to_string()),
            ..Default::default()
        };
        assert_eq!(plain.text_field_property(), None);
    }

    #[test]
    fn test_paint_colors() {
        let paint = PaintProps {
            text_color: Some("#202".to_string()),
            text_halo_color: Some("#fff".to_string()),
            text_halo_width: Some(2.0),
            ..Default::default()
        };
        let halo = paint.text_halo_color_rgba().unwrap();
        assert_eq!(halo, [1.0, 1.0, 1.0, 1.0]);
        assert!(paint.text_color_rgba().is_some());
    }
}
