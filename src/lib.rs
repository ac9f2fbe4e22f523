//! Attention hotspot prediction for rendered page snapshots.
//!
//! `hotspot-core` takes the visible elements of a rendered page plus the
//! viewport and predicts where a viewer's attention lands. Two strategies
//! produce candidates: an inference-service ranking (when a credential is
//! configured) and a deterministic heuristic that is always available and
//! used as the fallback. Inference candidates pass through greedy
//! IoU suppression before being returned.

pub mod config;
pub mod logging;
pub mod predictor;
pub mod scoring;
pub mod snapshot;
pub mod types;

pub use config::{InferenceConfig, PredictorConfig};
pub use predictor::HotspotPredictor;
pub use types::{ElementDescriptor, FontWeight, Hotspot, Viewport};
