pub mod detail;
pub mod models;
pub mod page;
pub mod view;

pub use detail::{find_project_by_id, Headline, ProjectDetail};
pub use models::{LiveStatus, Project};
pub use page::EcosystemPage;
pub use view::{compute_visible, EcosystemViewState};
