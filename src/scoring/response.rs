//! Validation of the inference service's reply.
//!
//! Everything the service returns is untrusted. The reply is handled as an
//! untyped `serde_json::Value` and only turned into domain data after
//! structural checks.

use serde_json::Value;

use super::ScoringError;

/// A `{index, confidence}` pair that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedIndex {
    pub index: usize,
    pub confidence: f64,
}

/// Pull the assistant message text out of a chat-completions envelope.
pub fn message_content(envelope: &Value) -> Result<&str, ScoringError> {
    envelope
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ScoringError::MalformedResponse("missing choices[0].message.content".to_string())
        })
}

/// Parse the model's JSON answer and return its entries in service order.
///
/// A body that is not JSON, or lacks a `hotspots` array, fails the whole
/// response. Entries with an index outside `0..candidate_count`, a
/// non-integer index, or a non-numeric confidence are dropped one by one.
pub fn parse_ranking(body: &str, candidate_count: usize) -> Result<Vec<RankedIndex>, ScoringError> {
    let payload: Value = serde_json::from_str(body)?;

    let entries = payload
        .get("hotspots")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ScoringError::MalformedResponse("`hotspots` is missing or not an array".to_string())
        })?;

    let ranked = entries
        .iter()
        .filter_map(|entry| {
            let index = entry.get("index").and_then(Value::as_u64)?;
            let index = usize::try_from(index).ok().filter(|i| *i < candidate_count)?;
            let confidence = entry
                .get("confidence")
                .and_then(Value::as_f64)
                .filter(|c| c.is_finite())?;
            Some(RankedIndex {
                index,
                confidence: confidence.clamp(0.0, 1.0),
            })
        })
        .collect::<Vec<_>>();

    if ranked.len() < entries.len() {
        tracing::debug!(
            dropped = entries.len() - ranked.len(),
            "dropped invalid entries from inference response"
        );
    }

    Ok(ranked)
}
