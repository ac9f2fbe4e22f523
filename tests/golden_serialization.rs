use chrono::{TimeZone, Utc};
use hotspot_core::types::{
    ElementDescriptor, FontWeight, Hotspot, PredictionMetadata, PredictionReport,
    SnapshotVersion, StrategyKind,
};

#[test]
fn golden_prediction_report_serialization() {
    let report = PredictionReport {
        hotspots: vec![Hotspot {
            x: 400.0,
            y: 90.0,
            width: 600.0,
            height: 80.0,
            confidence: 1.0,
        }],
        prediction: PredictionMetadata {
            strategy: StrategyKind::Heuristic,
            fallback_reason: None,
            elements_considered: 2,
            hotspots_returned: 1,
            snapshot_version: SnapshotVersion::from_content(b"mock"),
            generated_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        },
    };

    let json_str = serde_json::to_string_pretty(&report).unwrap();

    let hotspots_pos = json_str.find("\"hotspots\":").expect("Missing hotspots key");
    let prediction_pos = json_str.find("\"prediction\":").expect("Missing prediction key");
    assert!(hotspots_pos < prediction_pos, "hotspots should appear before metadata");

    let version = SnapshotVersion::from_content(b"mock");
    let expected = format!(
        r#"{{
      "hotspots": [
        {{ "x": 400.0, "y": 90.0, "width": 600.0, "height": 80.0, "confidence": 1.0 }}
      ],
      "prediction": {{
        "strategy": "heuristic",
        "fallback_reason": null,
        "elements_considered": 2,
        "hotspots_returned": 1,
        "snapshot_version": "{}",
        "generated_at": "2026-01-01T00:00:00Z"
      }}
    }}"#,
        version.as_str()
    );

    let normalized_actual: String = json_str.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized_expected: String = expected.chars().filter(|c| !c.is_whitespace()).collect();

    assert_eq!(normalized_actual, normalized_expected, "JSON structure mismatch against golden snapshot");

    let roundtrip: PredictionReport = serde_json::from_str(&json_str).expect("Deserialization failed");
    assert_eq!(roundtrip.hotspots, report.hotspots);
    assert_eq!(roundtrip.prediction.strategy, StrategyKind::Heuristic);
    assert_eq!(roundtrip.prediction.snapshot_version, version);
}

#[test]
fn element_reads_capture_layer_camel_case() {
    let json = r#"{
        "tag": "H1",
        "text": "Big sale",
        "x": 10, "y": 20, "width": 300, "height": 60,
        "className": "hero-title",
        "id": "main-title",
        "zIndex": 3,
        "fontSize": 42.5,
        "fontWeight": "700"
    }"#;

    let el: ElementDescriptor = serde_json::from_str(json).unwrap();

    assert_eq!(el.tag, "H1");
    assert_eq!(el.tag_lower(), "h1");
    assert_eq!(el.class_name, "hero-title");
    assert_eq!(el.id, "main-title");
    assert_eq!(el.z_index, 3);
    assert_eq!(el.font_size, 42.5);
    assert_eq!(el.font_weight, FontWeight::Numeric(700.0));
    assert!(el.font_weight.is_bold());
}

#[test]
fn element_optional_fields_default() {
    let el: ElementDescriptor =
        serde_json::from_str(r#"{"tag":"div","x":0,"y":0,"width":10,"height":10}"#).unwrap();

    assert_eq!(el.text, "");
    assert_eq!(el.class_name, "");
    assert_eq!(el.z_index, 0);
    assert_eq!(el.font_size, 16.0);
    assert_eq!(el.font_weight, FontWeight::Normal);
}

#[test]
fn font_weight_forms() {
    let parse = |s: &str| serde_json::from_str::<FontWeight>(s).unwrap();

    assert_eq!(parse("\"bold\""), FontWeight::Bold);
    assert_eq!(parse("\"BOLD\""), FontWeight::Bold);
    assert_eq!(parse("\"normal\""), FontWeight::Normal);
    assert_eq!(parse("800"), FontWeight::Numeric(800.0));
    assert_eq!(parse("\"400\""), FontWeight::Numeric(400.0));
    assert_eq!(parse("\"bolder\""), FontWeight::Other("bolder".to_string()));
    assert!(!FontWeight::Other("bolder".to_string()).is_bold());

    assert_eq!(serde_json::to_string(&FontWeight::Bold).unwrap(), "\"bold\"");
    assert_eq!(serde_json::to_string(&FontWeight::Numeric(700.0)).unwrap(), "700.0");
}
