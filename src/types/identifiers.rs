use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::element::ElementDescriptor;
use super::geometry::Viewport;

/// Content hash of a (viewport, elements) input.
///
/// Two calls with identical input carry identical versions, so callers can
/// key an external cache on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotVersion(String);

#[derive(Serialize)]
struct CanonicalInput<'a> {
    viewport: &'a Viewport,
    elements: &'a [ElementDescriptor],
}

impl SnapshotVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        SnapshotVersion(format!("sha256:{hex}"))
    }

    /// Hash the canonical JSON encoding of the input.
    pub fn compute(viewport: &Viewport, elements: &[ElementDescriptor]) -> Self {
        let canonical = CanonicalInput { viewport, elements };
        // Serializing plain structs of strings and numbers cannot fail.
        let bytes = serde_json::to_vec(&canonical).unwrap_or_default();
        Self::from_content(&bytes)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
