// Listing pipeline pieces shared by every domain

pub mod debounce;
pub mod error;
pub mod filter;
pub mod listing;
pub mod network;
pub mod reveal;
pub mod sort;
pub mod view_phase;
pub mod visibility;

pub use debounce::{debounce_channel, Debouncer, DEFAULT_DEBOUNCE};
pub use error::{DirectoryError, Result};
pub use filter::{keyword_match, tag_match, Keyword, Searchable, Tagged};
pub use listing::{select, Listing};
pub use network::NetworkProfile;
pub use reveal::{
    RevealController, RevealInfo, ACADEMY_REVEAL_STEP, JOB_REVEAL_STEP, PROJECT_REVEAL_STEP,
};
pub use sort::{Ranked, SortKey};
pub use view_phase::{count_badge, Loadable, PageView, ViewPhase, SKELETON_COUNT};
pub use visibility::VisibilitySignal;
