pub mod bundle;
pub mod resource;

pub use bundle::{AcademyBundle, LearningResources};
pub use resource::{AcademyCategory, Resource, HIGHLIGHT_LIMIT};
