pub mod project;

pub use project::{LiveStatus, Project};
