use std::fmt::Write;

use crate::types::{ElementDescriptor, Viewport};

/// Text excerpts in the element table are cut to this many characters.
pub const MAX_TEXT_CHARS: usize = 80;

/// Elements starting at or below `viewport.height * FOLD_WINDOW` are never
/// shown to the inference service.
pub const FOLD_WINDOW: f64 = 1.5;

pub const SYSTEM_PROMPT: &str = "You are a visual attention model for web pages. \
You predict where a first-time visitor looks during the first seconds on a page. \
Respond with a single JSON object and nothing else.";

/// Keep elements whose top edge lies within the first screen and a half.
/// The returned slice order defines the indices the service refers to.
pub fn filter_candidates<'a>(
    elements: &'a [ElementDescriptor],
    viewport: &Viewport,
) -> Vec<&'a ElementDescriptor> {
    let limit = viewport.height * FOLD_WINDOW;
    elements.iter().filter(|el| el.y < limit).collect()
}

/// Collapse whitespace runs to single spaces and cut to `MAX_TEXT_CHARS`.
pub fn excerpt(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(MAX_TEXT_CHARS).collect()
}

/// One row per candidate: `index|x|y|w|h|tag|text`.
pub fn element_table(candidates: &[&ElementDescriptor]) -> String {
    let mut table = String::from("i|x|y|w|h|tag|text\n");
    for (i, el) in candidates.iter().enumerate() {
        // Writing into a String is infallible.
        let _ = writeln!(
            table,
            "{}|{}|{}|{}|{}|{}|{}",
            i,
            el.x.round(),
            el.y.round(),
            el.width.round(),
            el.height.round(),
            el.tag_lower(),
            excerpt(&el.text).replace('|', "/"),
        );
    }
    table
}

pub fn user_prompt(viewport: &Viewport, table: &str) -> String {
    format!(
        "Viewport: {w}x{h} px.\n\
         Visible page elements (i = row index, geometry in px, top-left origin):\n\
         {table}\n\
         Pick the elements most likely to attract attention. Favor the main \
         headline, primary call-to-action buttons, prices, and the main product \
         or hero image.\n\
         Return JSON of the form {{\"hotspots\":[{{\"index\":<row i>,\"confidence\":<0..1>}}]}} \
         with at most 8 entries, most important first.",
        w = viewport.width.round(),
        h = viewport.height.round(),
    )
}
