//! Dataset providers.
//!
//! Production datasets arrive as CSV via `io::ingest`; this module generates
//! seeded synthetic datasets with the same shape for demos and testing.

pub mod sample;

pub use sample::*;
