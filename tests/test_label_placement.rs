use cluster_labels::{
    place, FilterExpr, GeoJsonSource, HeadlessMap, LabelPlacer, LabelStyle, Layer, LayerKind,
    MapBounds, MapSurface, LABEL_LAYER_ID,
};
use geo_types::coord;
use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::json;

fn bounds() -> MapBounds {
    MapBounds::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 10.0 })
}

fn polygon_feature(ring: Vec<Vec<f64>>, props: serde_json::Value) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
        id: None,
        properties: props.as_object().cloned(),
        foreign_members: None,
    }
}

fn square(cx: f64, cy: f64, half: f64, props: serde_json::Value) -> Feature {
    polygon_feature(
        vec![
            vec![cx - half, cy - half],
            vec![cx - half, cy + half],
            vec![cx + half, cy + half],
            vec![cx + half, cy - half],
            vec![cx - half, cy - half],
        ],
        props,
    )
}

/// Triangle whose bounding box reaches into the viewport but whose area
/// lies entirely outside it (past the NE corner), so it is rendered while
/// contributing no viewport intersection.
fn off_screen_triangle(props: serde_json::Value) -> Feature {
    polygon_feature(
        vec![
            vec![9.9, 11.0],
            vec![11.0, 9.9],
            vec![50.0, 50.0],
            vec![9.9, 11.0],
        ],
        props,
    )
}

fn map_with_features(features: Vec<Feature>) -> HeadlessMap {
    let mut map = HeadlessMap::new(bounds());
    map.add_source(
        "parcels",
        GeoJsonSource::new(FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }),
    );
    map.add_layer(Layer::new("parcel-fill", LayerKind::Fill).with_source("parcels"))
        .unwrap();
    map
}

fn label_features(map: &HeadlessMap) -> &Vec<Feature> {
    &map.get_source(LABEL_LAYER_ID).unwrap().data().features
}

fn label_filter(map: &HeadlessMap) -> Option<FilterExpr> {
    map.get_layer(LABEL_LAYER_ID).unwrap().filter.clone()
}

fn point_coords(feature: &Feature) -> (f64, f64) {
    match &feature.geometry.as_ref().unwrap().value {
        Value::Point(c) => (c[0], c[1]),
        other => panic!("expected point geometry, got {:?}", other),
    }
}

#[test]
fn test_two_squares_one_label_at_mean() {
    let mut map = map_with_features(vec![
        square(2.0, 2.0, 1.0, json!({ "district": "centro" })),
        square(8.0, 8.0, 1.0, json!({ "district": "centro" })),
    ]);
    place(&mut map, "parcel-fill", "district").unwrap();

    let labels = label_features(&map);
    assert_eq!(labels.len(), 1);
    let (x, y) = point_coords(&labels[0]);
    assert!((x - 5.0).abs() < 0.5, "label x {} not near 5", x);
    assert!((y - 5.0).abs() < 0.5, "label y {} not near 5", y);
    assert!(bounds().contains_strict(geo_types::Point::new(x, y)));
    assert_eq!(
        labels[0].properties.as_ref().unwrap().get("district"),
        Some(&json!("centro"))
    );

    // nothing excluded
    assert_eq!(label_filter(&map), Some(FilterExpr::not_in("district", vec![])));
}

#[test]
fn test_off_screen_group_excluded_without_label() {
    let mut map = map_with_features(vec![off_screen_triangle(json!({ "district": "fora" }))]);
    place(&mut map, "parcel-fill", "district").unwrap();

    // no viewport intersection, so no label point at all
    assert!(label_features(&map).is_empty());
    assert_eq!(
        label_filter(&map),
        Some(FilterExpr::not_in("district", vec![json!("fora")]))
    );
}

#[test]
fn test_exclusion_follows_first_member_only() {
    // first member's centroid is off-screen, second is fully visible;
    // the group still gets a label point but the filter hides it
    let mut map = map_with_features(vec![
        off_screen_triangle(json!({ "district": "mista" })),
        square(5.0, 5.0, 1.0, json!({ "district": "mista" })),
    ]);
    place(&mut map, "parcel-fill", "district").unwrap();

    let labels = label_features(&map);
    assert_eq!(labels.len(), 1);
    let filter = label_filter(&map).unwrap();
    assert_eq!(
        filter,
        FilterExpr::not_in("district", vec![json!("mista")])
    );
    let props = labels[0].properties.clone().unwrap();
    assert!(!filter.evaluate(&props), "label should be hidden by filter");
}

#[test]
fn test_at_most_one_label_per_value() {
    let mut map = map_with_features(vec![
        square(2.0, 2.0, 0.5, json!({ "district": "a" })),
        square(4.0, 4.0, 0.5, json!({ "district": "a" })),
        square(6.0, 6.0, 0.5, json!({ "district": "a" })),
        square(8.0, 8.0, 0.5, json!({ "district": "b" })),
    ]);
    place(&mut map, "parcel-fill", "district").unwrap();

    let labels = label_features(&map);
    assert_eq!(labels.len(), 2);
    let values: Vec<_> = labels
        .iter()
        .map(|f| f.properties.as_ref().unwrap()["district"].clone())
        .collect();
    assert_eq!(values, vec![json!("a"), json!("b")]);
}

#[test]
fn test_missing_field_groups_without_crash() {
    let mut map = map_with_features(vec![
        square(3.0, 3.0, 1.0, json!({})),
        square(5.0, 5.0, 1.0, json!({ "other": 1 })),
    ]);
    place(&mut map, "parcel-fill", "district").unwrap();

    let labels = label_features(&map);
    assert_eq!(labels.len(), 1);
    // missing field serializes to no property at all
    assert!(labels[0].properties.as_ref().unwrap().is_empty());
}

#[test]
fn test_non_polygon_features_skipped() {
    let point = Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![5.0, 5.0]))),
        id: None,
        properties: json!({ "district": "pontos" }).as_object().cloned(),
        foreign_members: None,
    };
    let mut map = map_with_features(vec![
        point,
        square(2.0, 2.0, 1.0, json!({ "district": "centro" })),
    ]);
    place(&mut map, "parcel-fill", "district").unwrap();

    // the point group yields no label; the square group does
    let labels = label_features(&map);
    assert_eq!(labels.len(), 1);
    assert_eq!(
        labels[0].properties.as_ref().unwrap()["district"],
        json!("centro")
    );
}

#[test]
fn test_empty_render_set_leaves_empty_layer() {
    let mut map = map_with_features(vec![]);
    place(&mut map, "parcel-fill", "district").unwrap();

    assert!(map.get_layer(LABEL_LAYER_ID).is_some());
    assert!(label_features(&map).is_empty());
    assert_eq!(label_filter(&map), None);
}

#[test]
fn test_idempotent_on_unchanged_map() {
    let mut map = map_with_features(vec![
        square(2.0, 2.0, 1.0, json!({ "district": "centro" })),
        off_screen_triangle(json!({ "district": "fora" })),
    ]);
    place(&mut map, "parcel-fill", "district").unwrap();
    let first_labels = label_features(&map).clone();
    let first_filter = label_filter(&map);

    place(&mut map, "parcel-fill", "district").unwrap();
    assert_eq!(label_features(&map), &first_labels);
    assert_eq!(label_filter(&map), first_filter);
}

#[test]
fn test_replacement_after_pan() {
    let mut map = map_with_features(vec![square(2.0, 2.0, 1.0, json!({ "district": "centro" }))]);
    place(&mut map, "parcel-fill", "district").unwrap();
    assert_eq!(label_features(&map).len(), 1);

    // pan so the square's centroid leaves the viewport but its area
    // still touches it
    map.set_bounds(MapBounds::new(
        coord! { x: 2.5, y: 2.5 },
        coord! { x: 12.5, y: 12.5 },
    ));
    place(&mut map, "parcel-fill", "district").unwrap();

    assert_eq!(
        label_filter(&map),
        Some(FilterExpr::not_in("district", vec![json!("centro")]))
    );
    // a sliver is still on screen, so the (hidden) label point survives
    assert_eq!(label_features(&map).len(), 1);

    // pan fully away: nothing rendered, layer rebuilt empty
    map.set_bounds(MapBounds::new(
        coord! { x: 100.0, y: 100.0 },
        coord! { x: 110.0, y: 110.0 },
    ));
    place(&mut map, "parcel-fill", "district").unwrap();
    assert!(label_features(&map).is_empty());
}

#[test]
fn test_custom_style_applied_to_layer() {
    let mut map = map_with_features(vec![square(5.0, 5.0, 1.0, json!({ "district": "centro" }))]);
    let placer = LabelPlacer::with_style(LabelStyle {
        text_size: 14.0,
        ..Default::default()
    });
    placer.place(&mut map, "parcel-fill", "district").unwrap();

    let layer = map.get_layer(LABEL_LAYER_ID).unwrap();
    assert_eq!(layer.kind, LayerKind::Symbol);
    assert_eq!(layer.layout.text_field.as_deref(), Some("{district}"));
    assert_eq!(layer.layout.text_size, Some(14.0));
    assert_eq!(layer.paint.text_halo_width, Some(2.0));
}
