//! Loading / empty / populated view phases.

use serde::Serialize;
use tracing::debug;

use super::listing::Listing;

/// Placeholder cards rendered while a dataset is loading.
pub const SKELETON_COUNT: usize = 12;

/// Counts above this are shown as "100+" on the category badge.
pub const BADGE_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPhase {
    Loading,
    Empty,
    Populated,
}

/// A dataset that resolves exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct Loadable<T> {
    value: Option<T>,
}

impl<T> Loadable<T> {
    pub fn loading() -> Self {
        Self { value: None }
    }

    pub fn ready(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Store the fetched value. Later calls are ignored and return `false`.
    pub fn resolve(&mut self, value: T) -> bool {
        if self.value.is_some() {
            debug!("Dataset already resolved, ignoring");
            return false;
        }
        self.value = Some(value);
        true
    }

    pub fn is_loading(&self) -> bool {
        self.value.is_none()
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::loading()
    }
}

/// What a listing page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PageView<T> {
    /// Dataset not resolved yet: render `skeletons` placeholders.
    Loading { skeletons: usize },
    /// Resolved, nothing matches the filters.
    Empty,
    /// Resolved with at least one match. `sentinel` is the index of the last
    /// visible item, observed to trigger the next reveal step.
    Populated { listing: Listing<T>, sentinel: usize },
}

impl<T> PageView<T> {
    pub fn loading() -> Self {
        PageView::Loading {
            skeletons: SKELETON_COUNT,
        }
    }

    pub fn from_listing(listing: Listing<T>) -> Self {
        match listing.last_index() {
            Some(sentinel) => PageView::Populated { listing, sentinel },
            None => PageView::Empty,
        }
    }

    pub fn phase(&self) -> ViewPhase {
        match self {
            PageView::Loading { .. } => ViewPhase::Loading,
            PageView::Empty => ViewPhase::Empty,
            PageView::Populated { .. } => ViewPhase::Populated,
        }
    }

    pub fn listing(&self) -> Option<&Listing<T>> {
        match self {
            PageView::Populated { listing, .. } => Some(listing),
            _ => None,
        }
    }

    pub fn sentinel(&self) -> Option<usize> {
        match self {
            PageView::Populated { sentinel, .. } => Some(*sentinel),
            _ => None,
        }
    }

    /// Convert the listed items, keeping phase and sentinel.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageView<U> {
        match self {
            PageView::Loading { skeletons } => PageView::Loading { skeletons },
            PageView::Empty => PageView::Empty,
            PageView::Populated { listing, sentinel } => PageView::Populated {
                listing: listing.map(f),
                sentinel,
            },
        }
    }
}

/// Text of the category filter badge. Hidden while the count is unknown.
pub fn count_badge(count: Option<usize>) -> Option<String> {
    count.map(|count| {
        if count > BADGE_LIMIT {
            format!("{}+", BADGE_LIMIT)
        } else {
            count.to_string()
        }
    })
}
