pub mod models;
pub mod page;
pub mod view;

pub use models::{AcademyBundle, AcademyCategory, LearningResources, Resource};
pub use page::{AcademyPage, AcademyView, ResourceCard};
pub use view::{compute_visible, resolve_category, AcademySection, AcademyViewState};
