use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::element::ElementDescriptor;
use super::geometry::BoundingBox;
use super::identifiers::SnapshotVersion;

/// A scored region where viewer attention is predicted to land.
///
/// `x`/`y` are the CENTER of the source element's box, unlike the top-left
/// coordinates of the input descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub confidence: f64,
}

impl Hotspot {
    /// Center a hotspot on `element`. Confidence is clamped to [0, 1].
    pub fn centered_on(element: &ElementDescriptor, confidence: f64) -> Self {
        let (x, y) = element.bounds().center();
        Self {
            x,
            y,
            width: element.width,
            height: element.height,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_center(self.x, self.y, self.width, self.height)
    }
}

/// What the heuristic scorer thinks an element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotspotKind {
    Headline,
    Cta,
    Logo,
    Hero,
    #[default]
    Other,
}

/// Per-element outcome of the heuristic rules, before thresholding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementScore {
    pub confidence: f64,
    pub kind: HotspotKind,
}

/// Which scoring strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Inference,
    Heuristic,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Inference => "inference",
            StrategyKind::Heuristic => "heuristic",
        }
    }
}

/// Metadata describing how a prediction was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionMetadata {
    pub strategy: StrategyKind,
    /// Set when the inference scorer was attempted and failed.
    pub fallback_reason: Option<String>,
    pub elements_considered: usize,
    pub hotspots_returned: usize,
    pub snapshot_version: SnapshotVersion,
    pub generated_at: DateTime<Utc>, // informational only
}

/// The full result of one prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub hotspots: Vec<Hotspot>,
    pub prediction: PredictionMetadata,
}
