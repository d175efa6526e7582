use serde::Serialize;
use tracing::debug;

use crate::common::{
    count_badge, Loadable, PageView, Result, RevealController, ACADEMY_REVEAL_STEP,
};
use crate::domains::tag::Taxonomy;

use super::models::{AcademyBundle, AcademyCategory, Resource};
use super::view::{compute_visible, resolve_category, AcademyViewState};

/// A resource as rendered: the record plus the URL its card opens.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceCard<'a> {
    #[serde(flatten)]
    pub resource: &'a Resource,
    pub href: Option<&'a str>,
}

impl<'a> ResourceCard<'a> {
    pub fn new(resource: &'a Resource) -> Self {
        Self {
            resource,
            href: resource.primary_link(),
        }
    }
}

/// What the academy page renders for the selected section.
#[derive(Debug, Clone, Serialize)]
pub struct AcademyView<'a> {
    pub category: AcademyCategory,
    pub highlighted: Vec<ResourceCard<'a>>,
    pub view: PageView<ResourceCard<'a>>,
}

pub struct AcademyPage {
    bundle: Loadable<AcademyBundle>,
    taxonomy: Taxonomy,
    state: AcademyViewState,
    reveal: RevealController,
}

impl AcademyPage {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            bundle: Loadable::loading(),
            taxonomy,
            state: AcademyViewState::default(),
            reveal: RevealController::new(ACADEMY_REVEAL_STEP),
        }
    }

    pub fn resolve(&mut self, bundle: AcademyBundle) -> bool {
        let count = bundle.len();
        let resolved = self.bundle.resolve(bundle);
        if resolved {
            debug!(count, "Academy resources resolved");
        }
        resolved
    }

    pub fn state(&self) -> &AcademyViewState {
        &self.state
    }

    pub fn set_state(&mut self, state: AcademyViewState) {
        self.reveal.set_loaded(state.loaded);
        self.state = state;
    }

    pub fn update(&mut self, transition: impl FnOnce(AcademyViewState) -> AcademyViewState) {
        let next = transition(self.state.clone());
        self.set_state(next);
    }

    pub fn render(&mut self) -> Result<AcademyView<'_>> {
        let Some(bundle) = self.bundle.get() else {
            self.reveal.arm_last(0);
            return Ok(AcademyView {
                category: resolve_category(&self.taxonomy, self.state.category.as_deref())?,
                highlighted: Vec::new(),
                view: PageView::loading(),
            });
        };

        let section = compute_visible(bundle, &self.taxonomy, &self.state)?;
        self.reveal.arm_last(section.listing.len());
        Ok(AcademyView {
            category: section.category,
            highlighted: section.highlighted.into_iter().map(ResourceCard::new).collect(),
            view: PageView::from_listing(section.listing).map(ResourceCard::new),
        })
    }

    pub fn on_visible(&mut self, index: usize) -> bool {
        if !self.reveal.on_visible(index) {
            return false;
        }
        self.state = self.state.clone().with_loaded(self.reveal.loaded());
        true
    }

    /// Badge next to the selected section; hidden while loading.
    pub fn category_badge(&self) -> Result<Option<String>> {
        let count = match self.bundle.get() {
            Some(bundle) => {
                let section = compute_visible(bundle, &self.taxonomy, &self.state)?;
                Some(section.listing.total)
            }
            None => None,
        };
        Ok(count_badge(count))
    }
}
