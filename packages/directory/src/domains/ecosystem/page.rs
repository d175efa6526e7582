use tracing::debug;

use crate::common::{
    count_badge, Loadable, PageView, Result, RevealController, PROJECT_REVEAL_STEP,
};
use crate::domains::tag::Taxonomy;

use super::models::Project;
use super::view::{compute_visible, EcosystemViewState};

/// Page-level controller of the ecosystem listing.
///
/// Owns the view state exclusively; the pipeline only ever sees it borrowed.
pub struct EcosystemPage {
    projects: Loadable<Vec<Project>>,
    taxonomy: Taxonomy,
    state: EcosystemViewState,
    reveal: RevealController,
}

impl EcosystemPage {
    /// A page waiting for its projects.
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            projects: Loadable::loading(),
            taxonomy,
            state: EcosystemViewState::default(),
            reveal: RevealController::new(PROJECT_REVEAL_STEP),
        }
    }

    /// Hand over the fetched projects. Only the first call has an effect.
    pub fn resolve(&mut self, projects: Vec<Project>) -> bool {
        let count = projects.len();
        let resolved = self.projects.resolve(projects);
        if resolved {
            debug!(count, "Ecosystem projects resolved");
        }
        resolved
    }

    pub fn state(&self) -> &EcosystemViewState {
        &self.state
    }

    /// Replace the view state. The reveal count follows the new state.
    pub fn set_state(&mut self, state: EcosystemViewState) {
        self.reveal.set_loaded(state.loaded);
        self.state = state;
    }

    /// Apply one transition to the current state.
    pub fn update(&mut self, transition: impl FnOnce(EcosystemViewState) -> EcosystemViewState) {
        let next = transition(self.state.clone());
        self.set_state(next);
    }

    /// Compute what to render and observe the last visible card.
    pub fn render(&mut self) -> Result<PageView<&Project>> {
        let Some(projects) = self.projects.get() else {
            self.reveal.arm_last(0);
            return Ok(PageView::loading());
        };

        let listing = compute_visible(projects, &self.taxonomy, &self.state)?;
        self.reveal.arm_last(listing.len());
        Ok(PageView::from_listing(listing))
    }

    /// The rendering layer saw card `index`. Returns `true` if more cards were revealed.
    pub fn on_visible(&mut self, index: usize) -> bool {
        if !self.reveal.on_visible(index) {
            return false;
        }
        self.state = self.state.clone().with_loaded(self.reveal.loaded());
        true
    }

    /// Matching project count for the category badge; unknown while loading.
    pub fn filtered_count(&self) -> Result<Option<usize>> {
        match self.projects.get() {
            Some(projects) => {
                let listing = compute_visible(projects, &self.taxonomy, &self.state)?;
                Ok(Some(listing.total))
            }
            None => Ok(None),
        }
    }

    /// Badge text next to the selected category.
    pub fn category_badge(&self) -> Result<Option<String>> {
        Ok(count_badge(self.filtered_count()?))
    }
}
