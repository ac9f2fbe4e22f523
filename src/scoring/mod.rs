pub mod heuristic;
pub mod inference;
pub mod prompt;
pub mod response;
pub mod suppression;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::types::{ElementDescriptor, Hotspot, Viewport};

pub use heuristic::HeuristicScorer;
pub use inference::InferenceScorer;
pub use suppression::{suppress, SuppressionResult};

/// Upper bound on hotspots returned by any strategy.
pub const MAX_HOTSPOTS: usize = 8;

/// A hotspot scoring strategy.
#[async_trait]
pub trait Scorer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Produce ranked hotspots for one page. Every returned confidence is
    /// in [0, 1] and at most `MAX_HOTSPOTS` are returned.
    async fn score(
        &self,
        elements: &[ElementDescriptor],
        viewport: &Viewport,
    ) -> Result<Vec<Hotspot>, ScoringError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
