// Ecosystem Directory - Core
//
// Listing pipeline behind the ecosystem directory: projects, job board and
// academy, each computed as dataset -> filter -> sort -> reveal slice over
// immutable records.
//
// Network metrics live in the metrics-client package; this crate only wires
// them into the CLI.

pub mod common;
pub mod config;
pub mod dataset;
pub mod domains;

pub use config::*;
pub use dataset::Dataset;
