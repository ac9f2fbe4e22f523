use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{ElementDescriptor, SnapshotVersion, Viewport};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Element {index} has invalid {field}: must be finite and non-negative")]
    InvalidGeometry { index: usize, field: &'static str },
    #[error("Viewport must have finite, positive dimensions")]
    InvalidViewport,
}

/// The capture layer's view of a page: viewport plus visible elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub viewport: Viewport,
    pub elements: Vec<ElementDescriptor>,
}

#[derive(Deserialize)]
struct RawSnapshot {
    viewport: Viewport,
    #[serde(default)]
    elements: Vec<ElementDescriptor>,
}

impl PageSnapshot {
    /// Build a snapshot, enforcing the geometry invariant on every element.
    pub fn ingest(
        viewport: Viewport,
        elements: Vec<ElementDescriptor>,
    ) -> Result<Self, SnapshotError> {
        if !(viewport.width.is_finite() && viewport.width > 0.0)
            || !(viewport.height.is_finite() && viewport.height > 0.0)
        {
            return Err(SnapshotError::InvalidViewport);
        }

        for (index, el) in elements.iter().enumerate() {
            for (field, value) in [
                ("x", el.x),
                ("y", el.y),
                ("width", el.width),
                ("height", el.height),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(SnapshotError::InvalidGeometry { index, field });
                }
            }
        }

        Ok(Self { viewport, elements })
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(json)?;
        Self::ingest(raw.viewport, raw.elements)
    }

    /// Load a snapshot file written by the capture layer.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let f = File::open(path)?;
        let raw: RawSnapshot = serde_json::from_reader(BufReader::new(f))?;
        Self::ingest(raw.viewport, raw.elements)
    }

    pub fn version(&self) -> SnapshotVersion {
        SnapshotVersion::compute(&self.viewport, &self.elements)
    }
}
