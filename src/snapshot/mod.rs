pub mod snapshot;

pub use snapshot::{PageSnapshot, SnapshotError};
