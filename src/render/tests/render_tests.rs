//! Tests for layer/view assembly and the HTML renderer

use serde_json::Value;

use crate::config::MapConfig;
use crate::errors::GeoDeckError;
use crate::geometry::Centroid;
use crate::input::FeatureReader;
use crate::render::{write_artifact, DeckHtmlRenderer, LayerConfig, LayerType, MapOptions, MapRenderer, Rgb, ViewState};

fn collection() -> FeatureReader {
    let content = r#"{"type": "FeatureCollection", "features": [
        {"geometry": {"type": "Point", "coordinates": [13.4, 52.5]},
         "properties": {"height": 30, "label": "</script><script>alert(1)</script>"}}
    ]}"#;
    FeatureReader::from_str(content, "fixture").expect("fixture parses")
}

/// Extract the JSON literal assigned to `const NAME = ...;` in the page
fn embedded_json(page: &str, name: &str) -> Value {
    let marker = format!("const {} = ", name);
    let start = page.find(&marker).expect("marker present") + marker.len();
    let end = start + page[start..].find(";\n").expect("statement end");
    serde_json::from_str(&page[start..end]).expect("embedded json parses")
}

#[test]
fn test_default_options_match_tool_defaults() {
    let options = MapOptions::default();
    assert_eq!(options.layer_type, LayerType::GeoJsonLayer);
    assert_eq!(options.elevation_property, "elevation");
    assert_eq!(options.fill_color, Rgb::new(255, 0, 0));
    assert_eq!(options.line_color, Rgb::new(0, 0, 255));
    assert!(options.auto_highlight && options.pickable && options.filled);
    assert!(options.wireframe && options.extruded && !options.stroked);
    assert_eq!((options.coverage, options.pitch, options.bearing), (1.0, 45.0, 0.0));
    assert!(options.validate().is_ok());
}

#[test]
fn test_option_ranges() {
    let bad = [
        MapOptions { coverage: 1.5, ..MapOptions::default() },
        MapOptions { coverage: -0.1, ..MapOptions::default() },
        MapOptions { pitch: 90.5, ..MapOptions::default() },
        MapOptions { bearing: 360.0, ..MapOptions::default() },
        MapOptions { bearing: -1.0, ..MapOptions::default() },
        MapOptions { elevation_scale: f64::NAN, ..MapOptions::default() },
    ];
    for options in &bad {
        assert!(matches!(options.validate(), Err(GeoDeckError::ConfigurationError(_))), "{:?}", options);
    }

    let edges = MapOptions { coverage: 0.0, pitch: 90.0, bearing: 359.9, ..MapOptions::default() };
    assert!(edges.validate().is_ok());
}

#[test]
fn test_layer_type_parsing() {
    assert_eq!("GeoJsonLayer".parse::<LayerType>().unwrap(), LayerType::GeoJsonLayer);
    assert!("HexagonLayer".parse::<LayerType>().is_err());
    assert!(Rgb::from_slice(&[1, 2]).is_err());
    assert_eq!(Rgb::from_slice(&[1, 2, 3]).unwrap(), Rgb::new(1, 2, 3));
}

#[test]
fn test_layer_serializes_deck_prop_names() {
    let data = collection();
    let layer = LayerConfig::new(data.collection(), &MapOptions::default(), [0.0, 3000.0]);
    let json = serde_json::to_value(&layer).unwrap();

    assert_eq!(json["type"], "GeoJsonLayer");
    assert_eq!(json["elevationProperty"], "elevation");
    assert_eq!(json["getFillColor"], serde_json::json!([255, 0, 0]));
    assert_eq!(json["getLineColor"], serde_json::json!([0, 0, 255]));
    assert_eq!(json["elevationRange"], serde_json::json!([0.0, 3000.0]));
    assert_eq!(json["autoHighlight"], true);
    assert_eq!(json["data"]["type"], "FeatureCollection");
    assert_eq!(json["data"]["features"][0]["type"], "Feature");
}

#[test]
fn test_view_state_passes_zoom_through() {
    let config = MapConfig::defaults().unwrap();
    let view = ViewState::new(Centroid::new(13.4, 52.5), -1.65, &config.view, &MapOptions::default());
    let json = serde_json::to_value(view).unwrap();

    assert_eq!(json["longitude"], 13.4);
    assert_eq!(json["latitude"], 52.5);
    assert_eq!(json["zoom"], -1.65);
    assert_eq!(json["minZoom"], 13.0);
    assert_eq!(json["maxZoom"], 20.0);
    assert_eq!(json["pitch"], 45.0);
    assert_eq!(json["bearing"], 0.0);
}

#[test]
fn test_html_page_embeds_layer_and_view() {
    let config = MapConfig::defaults().unwrap();
    let data = collection();
    let options = MapOptions { elevation_property: "height".to_string(), ..MapOptions::default() };
    let layer = LayerConfig::new(data.collection(), &options, config.layer.elevation_range);
    let view = ViewState::new(Centroid::new(13.4, 52.5), -2.0, &config.view, &options);

    let page = DeckHtmlRenderer::new(&config.page).render(&layer, &view).unwrap();

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains(&format!("<script src=\"{}\"></script>", config.page.deck_url)));
    assert!(!page.contains("{{"));
    // Feature data must not be able to close the script element
    assert_eq!(page.matches("</script>").count(), 2);

    let layer_json = embedded_json(&page, "LAYER");
    assert_eq!(layer_json["elevationProperty"], "height");
    assert_eq!(
        layer_json["data"]["features"][0]["properties"]["label"],
        "</script><script>alert(1)</script>"
    );

    let view_json = embedded_json(&page, "VIEW_STATE");
    assert_eq!(view_json["zoom"], -2.0);
    assert_eq!(view_json["minZoom"], 13.0);
}

#[test]
fn test_write_artifact_replaces_target() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.html");
    let path_str = path.to_str().unwrap();

    std::fs::write(&path, "old").unwrap();
    write_artifact(path_str, "new").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    assert!(!dir.path().join("map.html.partial").exists());
}

#[test]
fn test_write_artifact_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("map.html");

    let result = write_artifact(path.to_str().unwrap(), "content");
    assert!(matches!(result, Err(GeoDeckError::OutputError { .. })));
    assert!(!path.exists());
}
