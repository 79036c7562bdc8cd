//! Grouping of rendered features by property value.

use geojson::Feature;
use serde_json::Value;

/// Features sharing one value of the grouping field. A `None` key stands
/// for features missing the field entirely.
#[derive(Debug, Clone)]
pub struct FeatureGroup {
    pub key: Option<Value>,
    pub features: Vec<Feature>,
}

impl FeatureGroup {
    /// Group key as a JSON value, for use in filter expressions.
    pub fn key_value(&self) -> Value {
        self.key.clone().unwrap_or(Value::Null)
    }
}

/// Value of `field` on a feature, `None` when absent.
pub fn property_value(feature: &Feature, field: &str) -> Option<Value> {
    feature.properties.as_ref()?.get(field).cloned()
}

/// Group features by the value of `field`, preserving first-seen order of
/// keys and the input order within each group. Built fresh per placement
/// pass; no persistent index.
pub fn group_by_property(features: Vec<Feature>, field: &str) -> Vec<FeatureGroup> {
    let mut groups: Vec<FeatureGroup> = Vec::new();
    for feature in features {
        let key = property_value(&feature, field);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.features.push(feature),
            None => groups.push(FeatureGroup {
                key,
                features: vec![feature],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(props: Value) -> Feature {
        Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: props.as_object().cloned(),
            foreign_members: None,
        }
    }

    #[test]
    fn test_grouping_preserves_order() {
        let groups = group_by_property(
            vec![
                feature(json!({ "district": "b" })),
                feature(json!({ "district": "a" })),
                feature(json!({ "district": "b" })),
            ],
            "district",
        );
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, Some(json!("b")));
        assert_eq!(groups[0].features.len(), 2);
        assert_eq!(groups[1].key, Some(json!("a")));
    }

    #[test]
    fn test_missing_field_is_one_group() {
        let groups = group_by_property(
            vec![
                feature(json!({})),
                feature(json!({ "other": 1 })),
                feature(json!({ "district": "a" })),
            ],
            "district",
        );
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, None);
        assert_eq!(groups[0].features.len(), 2);
        assert_eq!(groups[0].key_value(), Value::Null);
    }

    #[test]
    fn test_null_value_differs_from_missing() {
        let groups = group_by_property(
            vec![
                feature(json!({ "district": null })),
                feature(json!({})),
            ],
            "district",
        );
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, Some(Value::Null));
        assert_eq!(groups[1].key, None);
    }

    #[test]
    fn test_numeric_keys() {
        let groups = group_by_property(
            vec![
                feature(json!({ "zone": 3 })),
                feature(json!({ "zone": 3 })),
                feature(json!({ "zone": 4 })),
            ],
            "zone",
        );
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].features.len(), 2);
    }
}
