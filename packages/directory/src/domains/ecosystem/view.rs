use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::common::{
    keyword_match, select, tag_match, Keyword, Listing, Result, SortKey, PROJECT_REVEAL_STEP,
};
use crate::domains::tag::Taxonomy;

use super::models::Project;

/// Filter, sort and reveal state of the ecosystem page.
///
/// Immutable: every interaction builds a new state through the `with_*`
/// transitions and the listing is recomputed from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct EcosystemViewState {
    #[builder(default, setter(into))]
    pub keyword: Keyword,
    /// Selected tag value; `None` selects the taxonomy sentinel.
    #[builder(default, setter(into, strip_option))]
    pub tag: Option<String>,
    #[builder(default)]
    pub sort: SortKey,
    /// Only projects live on mainnet.
    #[builder(default = true)]
    pub mainnet_only: bool,
    #[builder(default = PROJECT_REVEAL_STEP)]
    pub loaded: usize,
}

impl Default for EcosystemViewState {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl EcosystemViewState {
    pub fn with_keyword(self, keyword: impl Into<Keyword>) -> Self {
        Self {
            keyword: keyword.into(),
            ..self
        }
    }

    pub fn with_tag(self, tag: Option<String>) -> Self {
        Self { tag, ..self }
    }

    pub fn with_sort(self, sort: SortKey) -> Self {
        Self { sort, ..self }
    }

    pub fn with_mainnet_only(self, mainnet_only: bool) -> Self {
        Self {
            mainnet_only,
            ..self
        }
    }

    pub fn with_loaded(self, loaded: usize) -> Self {
        Self { loaded, ..self }
    }
}

/// Run the ecosystem pipeline: mainnet flag, tag, keyword, sort, reveal.
pub fn compute_visible<'a>(
    projects: &'a [Project],
    taxonomy: &Taxonomy,
    state: &EcosystemViewState,
) -> Result<Listing<&'a Project>> {
    let tag = taxonomy.select(state.tag.as_deref())?;
    Ok(select(
        projects,
        |project| {
            (!state.mainnet_only || project.is_live)
                && tag_match(project, tag, taxonomy)
                && keyword_match(project, &state.keyword, Some(taxonomy))
        },
        |a, b| state.sort.compare(a, b),
        state.loaded,
    ))
}
