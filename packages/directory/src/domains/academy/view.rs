use serde::{Deserialize, Serialize};
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::common::{keyword_match, select, Keyword, Listing, Result, ACADEMY_REVEAL_STEP};
use crate::domains::tag::Taxonomy;

use super::models::{AcademyBundle, AcademyCategory, Resource, HIGHLIGHT_LIMIT};

/// Category, keyword and reveal state of the academy page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct AcademyViewState {
    #[builder(default, setter(into))]
    pub keyword: Keyword,
    /// Selected academy tag value; `None` selects the taxonomy sentinel.
    #[builder(default, setter(into, strip_option))]
    pub category: Option<String>,
    #[builder(default = ACADEMY_REVEAL_STEP)]
    pub loaded: usize,
}

impl Default for AcademyViewState {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AcademyViewState {
    pub fn with_keyword(self, keyword: impl Into<Keyword>) -> Self {
        Self {
            keyword: keyword.into(),
            ..self
        }
    }

    pub fn with_category(self, category: Option<String>) -> Self {
        Self { category, ..self }
    }

    pub fn with_loaded(self, loaded: usize) -> Self {
        Self { loaded, ..self }
    }
}

/// One academy section ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct AcademySection<'a> {
    pub category: AcademyCategory,
    /// Featured cards, learning section only. Not affected by the keyword.
    pub highlighted: Vec<&'a Resource>,
    pub listing: Listing<&'a Resource>,
}

/// Map the selected tag to a section. The sentinel, and any tag that is not
/// a section, shows learning.
pub fn resolve_category(taxonomy: &Taxonomy, selected: Option<&str>) -> Result<AcademyCategory> {
    let tag = taxonomy.select(selected)?;
    if taxonomy.is_all(tag) {
        return Ok(AcademyCategory::Learning);
    }
    Ok(tag.value.parse().unwrap_or_else(|_| {
        debug!(value = %tag.value, "Academy tag is not a section, showing learning");
        AcademyCategory::Learning
    }))
}

/// Run the academy pipeline: section, keyword over name and description, reveal.
pub fn compute_visible<'a>(
    bundle: &'a AcademyBundle,
    taxonomy: &Taxonomy,
    state: &AcademyViewState,
) -> Result<AcademySection<'a>> {
    let category = resolve_category(taxonomy, state.category.as_deref())?;

    let highlighted = match category {
        AcademyCategory::Learning => bundle
            .learning
            .highlighted
            .iter()
            .take(HIGHLIGHT_LIMIT)
            .collect(),
        _ => Vec::new(),
    };

    let listing = select(
        bundle.resources(category),
        |resource| keyword_match(resource, &state.keyword, None),
        |_, _| std::cmp::Ordering::Equal,
        state.loaded,
    );

    Ok(AcademySection {
        category,
        highlighted,
        listing,
    })
}
