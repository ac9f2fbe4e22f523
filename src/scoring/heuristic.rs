use std::cmp::Ordering;

use async_trait::async_trait;

use crate::types::{ElementDescriptor, ElementScore, Hotspot, HotspotKind, Viewport};

use super::{Scorer, ScoringError, MAX_HOTSPOTS};

/// Hotspots at or below this confidence are dropped.
pub const MIN_CONFIDENCE: f64 = 0.3;

const CENTER_BIAS_RADIUS: f64 = 250.0;
const LARGE_AREA: f64 = 50_000.0;
const LARGE_FONT: f64 = 32.0;

const CTA_MARKERS: &[&str] = &["btn", "button", "cta"];
const LOGO_MARKERS: &[&str] = &["logo"];

/// Deterministic, offline scorer built from position, size, typography and
/// tag rules. Always available.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    /// Score one element in isolation. Rules are additive and the total is
    /// clamped to [0, 1]; a later tag rule overwrites an earlier one's kind.
    pub fn score_element(&self, el: &ElementDescriptor, viewport: &Viewport) -> ElementScore {
        // Invisible boxes draw no attention.
        if el.area() <= 0.0 {
            return ElementScore {
                confidence: 0.0,
                kind: HotspotKind::Other,
            };
        }

        let tag = el.tag_lower();
        let class = el.class_name.to_ascii_lowercase();
        let mut score = 0.0;
        let mut kind = HotspotKind::Other;

        if el.y < viewport.height / 3.0 {
            score += 0.5;
        } else if el.y < viewport.height {
            score += 0.2;
        }

        let (center_x, _) = el.bounds().center();
        if (center_x - viewport.center_x()).abs() < CENTER_BIAS_RADIUS {
            score += 0.2;
        }

        if el.area() > LARGE_AREA {
            score += 0.4;
        }

        if tag == "h1" {
            score += 0.6;
            kind = HotspotKind::Headline;
        }
        if tag == "button" || contains_any(&class, CTA_MARKERS) {
            score += 0.5;
            kind = HotspotKind::Cta;
        }
        if matches!(tag.as_str(), "img" | "svg") && contains_any(&class, LOGO_MARKERS) {
            score += 0.4;
            kind = HotspotKind::Logo;
        }
        if matches!(tag.as_str(), "img" | "video")
            && el.width > 300.0
            && el.height > 200.0
            && el.y < viewport.height * 0.75
        {
            score += 0.45;
            kind = HotspotKind::Hero;
        }

        if el.font_weight.is_bold() {
            score += 0.15;
        }
        if el.font_size > LARGE_FONT {
            score += 0.25;
        }

        ElementScore {
            confidence: clamp_unit(score),
            kind,
        }
    }

    /// Score, threshold, rank and cap. Pure: the same input always yields the
    /// same ordered output. No suppression pass runs here.
    pub fn rank(&self, elements: &[ElementDescriptor], viewport: &Viewport) -> Vec<Hotspot> {
        let mut hotspots: Vec<Hotspot> = elements
            .iter()
            .filter(|el| el.y < viewport.height)
            .filter_map(|el| {
                let scored = self.score_element(el, viewport);
                (scored.confidence > MIN_CONFIDENCE)
                    .then(|| Hotspot::centered_on(el, scored.confidence))
            })
            .collect();

        // Stable sort: ties keep input order.
        hotspots.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        });
        hotspots.truncate(MAX_HOTSPOTS);

        debug_assert!(hotspots
            .windows(2)
            .all(|w| w[0].confidence >= w[1].confidence));

        tracing::debug!(
            elements = elements.len(),
            hotspots = hotspots.len(),
            "heuristic scoring complete"
        );
        hotspots
    }
}

#[async_trait]
impl Scorer for HeuristicScorer {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn score(
        &self,
        elements: &[ElementDescriptor],
        viewport: &Viewport,
    ) -> Result<Vec<Hotspot>, ScoringError> {
        Ok(self.rank(elements, viewport))
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn clamp_unit(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}
