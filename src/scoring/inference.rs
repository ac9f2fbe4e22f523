use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::InferenceConfig;
use crate::types::{ElementDescriptor, Hotspot, Viewport};

use super::prompt::{element_table, filter_candidates, user_prompt, SYSTEM_PROMPT};
use super::response::{message_content, parse_ranking};
use super::suppression::suppress;
use super::{Scorer, ScoringError, MAX_HOTSPOTS};

const TEMPERATURE: f64 = 0.2;
const MAX_OUTPUT_TOKENS: u32 = 500;

/// Scorer that asks a chat-completions inference service to rank elements.
///
/// One request per call, no retries. Any transport, status, or shape problem
/// is returned as a `ScoringError` for the predictor to recover from.
#[derive(Clone)]
pub struct InferenceScorer {
    client: Client,
    config: InferenceConfig,
}

impl InferenceScorer {
    pub fn new(config: InferenceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn request_body(&self, viewport: &Viewport, table: &str) -> Value {
        json!({
            "model": self.config.model,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_OUTPUT_TOKENS,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": user_prompt(viewport, table) },
            ],
        })
    }

    /// Send the prompt and return the raw model answer text.
    async fn complete(&self, body: &Value) -> Result<String, ScoringError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScoringError::Http { status, body });
        }

        let envelope: Value = serde_json::from_str(&response.text().await?)?;
        message_content(&envelope).map(str::to_owned)
    }
}

#[async_trait]
impl Scorer for InferenceScorer {
    fn name(&self) -> &'static str {
        "inference"
    }

    async fn score(
        &self,
        elements: &[ElementDescriptor],
        viewport: &Viewport,
    ) -> Result<Vec<Hotspot>, ScoringError> {
        let candidates = filter_candidates(elements, viewport);
        if candidates.is_empty() {
            tracing::debug!("no elements near the fold, skipping inference request");
            return Ok(Vec::new());
        }

        let table = element_table(&candidates);
        let body = self.request_body(viewport, &table);

        tracing::debug!(
            candidates = candidates.len(),
            model = %self.config.model,
            "requesting hotspot ranking"
        );
        let answer = self.complete(&body).await?;
        let ranking = parse_ranking(&answer, candidates.len())?;

        let scored: Vec<Hotspot> = ranking
            .iter()
            .map(|r| Hotspot::centered_on(candidates[r.index], r.confidence))
            .collect();

        let mut result = suppress(scored);
        result.accepted.truncate(MAX_HOTSPOTS);

        tracing::debug!(
            ranked = ranking.len(),
            suppressed = result.suppressed,
            hotspots = result.accepted.len(),
            "inference scoring complete"
        );
        Ok(result.accepted)
    }
}
