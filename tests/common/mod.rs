#![allow(dead_code)]

use hotspot_core::types::{ElementDescriptor, FontWeight, Viewport};

pub fn viewport() -> Viewport {
    Viewport::new(1200.0, 800.0)
}

/// Bold 40px headline near the top, centered at (400, 90).
pub fn headline() -> ElementDescriptor {
    ElementDescriptor::new("h1", 100.0, 50.0, 600.0, 80.0)
        .with_text("Ship faster with fewer bugs")
        .with_font(40.0, FontWeight::Bold)
}

/// Button just above the fold, centered at (525, 725).
pub fn cta_button() -> ElementDescriptor {
    ElementDescriptor::new("button", 450.0, 700.0, 150.0, 50.0)
        .with_text("Start free trial")
        .with_class("cta-button")
}

/// A div almost exactly on top of the headline, centered at (410, 95).
pub fn headline_shadow() -> ElementDescriptor {
    ElementDescriptor::new("div", 110.0, 55.0, 600.0, 80.0).with_text("Ship faster")
}

/// Far below the first screen and a half.
pub fn footer() -> ElementDescriptor {
    ElementDescriptor::new("footer", 0.0, 1300.0, 1200.0, 200.0).with_text("Copyright footer")
}

pub fn landing_page() -> Vec<ElementDescriptor> {
    vec![headline(), cta_button(), headline_shadow(), footer()]
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
