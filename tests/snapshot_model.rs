mod common;

use std::fs;

use common::{cta_button, headline, viewport};
use hotspot_core::snapshot::{PageSnapshot, SnapshotError};
use hotspot_core::types::{ElementDescriptor, Viewport};
use hotspot_core::HotspotPredictor;
use tempfile::tempdir;

const SNAPSHOT_JSON: &str = r#"{
    "viewport": { "width": 1200, "height": 800 },
    "elements": [
        { "tag": "h1", "text": "Welcome", "x": 100, "y": 50, "width": 600, "height": 80,
          "fontSize": 40, "fontWeight": "bold" },
        { "tag": "button", "text": "Buy", "x": 450, "y": 700, "width": 150, "height": 50,
          "className": "cta-button" }
    ]
}"#;

#[test]
fn load_snapshot_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(&path, SNAPSHOT_JSON).unwrap();

    let snapshot = PageSnapshot::load(&path).unwrap();

    assert_eq!(snapshot.viewport, Viewport::new(1200.0, 800.0));
    assert_eq!(snapshot.elements.len(), 2);
    assert_eq!(snapshot.elements[1].class_name, "cta-button");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = PageSnapshot::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SnapshotError::Io(_)));
}

#[test]
fn malformed_file_is_json_error() {
    let err = PageSnapshot::from_json(r#"{"elements": []}"#).unwrap_err();
    assert!(matches!(err, SnapshotError::Json(_)));
}

#[test]
fn negative_or_non_finite_geometry_is_rejected() {
    let bad_width = ElementDescriptor::new("div", 0.0, 0.0, -5.0, 10.0);
    let err = PageSnapshot::ingest(viewport(), vec![headline(), bad_width]).unwrap_err();
    match err {
        SnapshotError::InvalidGeometry { index, field } => {
            assert_eq!(index, 1);
            assert_eq!(field, "width");
        }
        other => panic!("expected InvalidGeometry, got: {other:?}"),
    }

    let nan_y = ElementDescriptor::new("div", 0.0, f64::NAN, 5.0, 10.0);
    assert!(matches!(
        PageSnapshot::ingest(viewport(), vec![nan_y]),
        Err(SnapshotError::InvalidGeometry { field: "y", .. })
    ));
}

#[test]
fn degenerate_elements_are_valid_input() {
    let ghost = ElementDescriptor::new("span", 10.0, 10.0, 0.0, 0.0);
    assert!(PageSnapshot::ingest(viewport(), vec![ghost]).is_ok());
}

#[test]
fn empty_viewport_is_rejected() {
    let err = PageSnapshot::ingest(Viewport::new(0.0, 800.0), vec![]).unwrap_err();
    assert!(matches!(err, SnapshotError::InvalidViewport));
}

#[test]
fn version_tracks_content() {
    let a = PageSnapshot::ingest(viewport(), vec![headline(), cta_button()]).unwrap();
    let b = PageSnapshot::ingest(viewport(), vec![headline(), cta_button()]).unwrap();
    let c = PageSnapshot::ingest(viewport(), vec![cta_button(), headline()]).unwrap();

    assert_eq!(a.version(), b.version());
    assert_ne!(a.version(), c.version());

    let v = a.version();
    assert!(v.as_str().starts_with("sha256:"));
    assert_eq!(v.as_str().len(), "sha256:".len() + 64);
}

#[tokio::test]
async fn predict_from_loaded_snapshot() {
    let snapshot = PageSnapshot::from_json(SNAPSHOT_JSON).unwrap();
    let report = HotspotPredictor::heuristic().predict_snapshot(&snapshot).await;

    assert_eq!(report.hotspots.len(), 2);
    assert_eq!(report.prediction.snapshot_version, snapshot.version());
    assert_eq!(report.hotspots[0].x, 400.0);
    assert_eq!(report.hotspots[0].y, 90.0);
}
