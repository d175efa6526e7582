use std::cmp::Ordering;

use serde::Serialize;

use super::reveal::RevealInfo;

/// A filtered, ordered and revealed slice of a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing<T> {
    /// Visible items, at most `reveal.loaded` of them.
    pub items: Vec<T>,
    /// Number of items matching the filters before the reveal cut.
    pub total: usize,
    pub reveal: RevealInfo,
}

impl<T> Listing<T> {
    /// Cut an already filtered and ordered list at `loaded`.
    pub fn reveal(mut matched: Vec<T>, loaded: usize) -> Self {
        let total = matched.len();
        matched.truncate(loaded);
        Self {
            items: matched,
            total,
            reveal: RevealInfo::new(loaded, total),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the last visible item, the reveal sentinel.
    pub fn last_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listing<U> {
        Listing {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            reveal: self.reveal,
        }
    }
}

/// Run dataset → filter → sort → reveal over a borrowed collection.
///
/// The sort is stable, so items comparing equal keep collection order.
pub fn select<'a, T, P, C>(
    collection: &'a [T],
    predicate: P,
    mut compare: C,
    loaded: usize,
) -> Listing<&'a T>
where
    P: Fn(&T) -> bool,
    C: FnMut(&T, &T) -> Ordering,
{
    let mut matched: Vec<&T> = collection.iter().filter(|item| predicate(*item)).collect();
    matched.sort_by(|a, b| compare(*a, *b));
    Listing::reveal(matched, loaded)
}
