//! Services for converting raw board payloads into canonical snapshots.

mod normalizer;

pub use normalizer::{NormalizedCard, normalize};
