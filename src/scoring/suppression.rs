use crate::types::Hotspot;

/// Candidates overlapping an accepted one by more than this IoU are dropped.
pub const IOU_THRESHOLD: f64 = 0.6;

pub struct SuppressionResult {
    pub accepted: Vec<Hotspot>,
    pub suppressed: usize,
}

/// Greedy non-max suppression in upstream order.
///
/// Candidates are NOT re-sorted by confidence first: the earliest candidate
/// of an overlapping cluster survives, and output keeps acceptance order.
pub fn suppress(candidates: Vec<Hotspot>) -> SuppressionResult {
    let mut accepted: Vec<Hotspot> = Vec::with_capacity(candidates.len());
    let mut suppressed = 0;

    for candidate in candidates {
        let bounds = candidate.bounds();
        let overlaps = accepted
            .iter()
            .any(|kept| bounds.iou(&kept.bounds()) > IOU_THRESHOLD);

        if overlaps {
            suppressed += 1;
        } else {
            accepted.push(candidate);
        }
    }

    SuppressionResult {
        accepted,
        suppressed,
    }
}
