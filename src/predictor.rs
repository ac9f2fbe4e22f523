//! Strategy selection and fallback.

use chrono::Utc;

use crate::config::PredictorConfig;
use crate::scoring::{HeuristicScorer, InferenceScorer, Scorer, MAX_HOTSPOTS};
use crate::snapshot::PageSnapshot;
use crate::types::{
    ElementDescriptor, Hotspot, PredictionMetadata, PredictionReport, SnapshotVersion,
    StrategyKind, Viewport,
};

/// Picks a scoring strategy per call and never surfaces a scoring failure.
///
/// With a primary scorer configured it is tried first; any error it returns
/// is logged and the heuristic scorer runs instead. Without one, the
/// heuristic scorer is the normal path.
pub struct HotspotPredictor<S = InferenceScorer> {
    primary: Option<S>,
    fallback: HeuristicScorer,
}

impl HotspotPredictor<InferenceScorer> {
    /// Heuristic-only predictor.
    pub fn heuristic() -> Self {
        Self {
            primary: None,
            fallback: HeuristicScorer,
        }
    }

    /// Build from configuration. A client that cannot be constructed is
    /// treated like a missing credential.
    pub fn from_config(config: &PredictorConfig) -> Self {
        let primary = match &config.inference {
            Some(inference) if config.inference_enabled() => {
                match InferenceScorer::new(inference.clone()) {
                    Ok(scorer) => Some(scorer),
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to build inference client");
                        None
                    }
                }
            }
            _ => None,
        };
        Self {
            primary,
            fallback: HeuristicScorer,
        }
    }
}

impl<S: Scorer> HotspotPredictor<S> {
    pub fn with_primary(primary: S) -> Self {
        Self {
            primary: Some(primary),
            fallback: HeuristicScorer,
        }
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    /// Predict hotspots for one page.
    pub async fn predict(&self, elements: &[ElementDescriptor], viewport: Viewport) -> Vec<Hotspot> {
        self.predict_with_report(elements, viewport).await.hotspots
    }

    pub async fn predict_snapshot(&self, snapshot: &PageSnapshot) -> PredictionReport {
        self.predict_with_report(&snapshot.elements, snapshot.viewport)
            .await
    }

    /// Predict hotspots and describe which strategy produced them.
    pub async fn predict_with_report(
        &self,
        elements: &[ElementDescriptor],
        viewport: Viewport,
    ) -> PredictionReport {
        let snapshot_version = SnapshotVersion::compute(&viewport, elements);
        let mut fallback_reason = None;

        let (strategy, mut hotspots) = match &self.primary {
            None => {
                tracing::info!("no inference credential configured, using heuristic scorer");
                (StrategyKind::Heuristic, self.fallback.rank(elements, &viewport))
            }
            Some(primary) => match primary.score(elements, &viewport).await {
                Ok(hotspots) => {
                    tracing::info!(scorer = primary.name(), "hotspots ranked by inference scorer");
                    (StrategyKind::Inference, hotspots)
                }
                Err(e) => {
                    tracing::warn!(
                        scorer = primary.name(),
                        error = %e,
                        "inference scorer failed, falling back to heuristic scorer"
                    );
                    fallback_reason = Some(e.to_string());
                    (StrategyKind::Heuristic, self.fallback.rank(elements, &viewport))
                }
            },
        };

        // Primary scorers other than the built-in ones are held to the same bound.
        hotspots.truncate(MAX_HOTSPOTS);

        let prediction = PredictionMetadata {
            strategy,
            fallback_reason,
            elements_considered: elements.len(),
            hotspots_returned: hotspots.len(),
            snapshot_version,
            generated_at: Utc::now(),
        };

        tracing::debug!(
            strategy = strategy.as_str(),
            hotspots = prediction.hotspots_returned,
            version = prediction.snapshot_version.as_str(),
            "prediction complete"
        );

        PredictionReport {
            hotspots,
            prediction,
        }
    }
}
