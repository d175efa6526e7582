pub mod board;
pub mod key;
pub mod models;
pub mod view;

pub use board::JobBoard;
pub use key::JobKey;
pub use models::{Compensation, Job};
pub use view::{compute_visible, JobEntry, JobFilter};
