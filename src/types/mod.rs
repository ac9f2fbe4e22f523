pub mod element;
pub mod geometry;
pub mod hotspot;
pub mod identifiers;

pub use element::{ElementDescriptor, FontWeight};
pub use geometry::{BoundingBox, Viewport};
pub use hotspot::{
    ElementScore, Hotspot, HotspotKind, PredictionMetadata, PredictionReport, StrategyKind,
};
pub use identifiers::SnapshotVersion;
