use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::error::DirectoryError;

/// An entity that can be ordered in a listing.
pub trait Ranked {
    fn display_name(&self) -> &str;

    /// Popularity metric (follower count, stars). Missing counts as zero.
    fn popularity(&self) -> Option<u64> {
        None
    }
}

/// Order of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Display name, case-sensitive lexical order.
    #[default]
    Alphabetical,
    /// Popularity metric, highest first.
    Popularity,
}

impl SortKey {
    /// Three-way comparison of two entities under this key.
    pub fn compare<E: Ranked + ?Sized>(&self, a: &E, b: &E) -> Ordering {
        match self {
            SortKey::Alphabetical => a.display_name().cmp(b.display_name()),
            SortKey::Popularity => b
                .popularity()
                .unwrap_or(0)
                .cmp(&a.popularity().unwrap_or(0)),
        }
    }

    /// Stable sort; entities comparing equal keep their relative order.
    pub fn sort<E: Ranked + ?Sized>(&self, items: &mut [&E]) {
        items.sort_by(|a, b| self.compare(*a, *b));
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Alphabetical => write!(f, "alphabetical"),
            SortKey::Popularity => write!(f, "popularity"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alphabetical" | "a-z" | "a_z" | "az" => Ok(SortKey::Alphabetical),
            "popularity" | "followers" | "twitter" => Ok(SortKey::Popularity),
            _ => Err(DirectoryError::UnknownSortKey(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        name: &'static str,
        followers: Option<u64>,
        position: usize,
    }

    impl Ranked for Item {
        fn display_name(&self) -> &str {
            self.name
        }

        fn popularity(&self) -> Option<u64> {
            self.followers
        }
    }

    fn item(name: &'static str, followers: Option<u64>, position: usize) -> Item {
        Item {
            name,
            followers,
            position,
        }
    }

    #[test]
    fn test_alphabetical_is_case_sensitive() {
        let items = [item("beta", None, 0), item("Zeta", None, 1), item("Alpha", None, 2)];
        let mut refs: Vec<&Item> = items.iter().collect();
        SortKey::Alphabetical.sort(&mut refs);
        let names: Vec<&str> = refs.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Alpha", "Zeta", "beta"]);
    }

    #[test]
    fn test_alphabetical_is_stable() {
        let items = [
            item("Same", None, 0),
            item("Other", None, 1),
            item("Same", None, 2),
            item("Same", None, 3),
        ];
        let mut refs: Vec<&Item> = items.iter().collect();
        SortKey::Alphabetical.sort(&mut refs);
        let positions: Vec<usize> = refs.iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_popularity_descending_missing_is_zero() {
        let items = [
            item("Five", Some(5), 0),
            item("Missing", None, 1),
            item("Ten", Some(10), 2),
            item("Zero", Some(0), 3),
        ];
        let mut refs: Vec<&Item> = items.iter().collect();
        SortKey::Popularity.sort(&mut refs);
        let names: Vec<&str> = refs.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Ten", "Five", "Missing", "Zero"]);
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!("A-Z".parse::<SortKey>().unwrap(), SortKey::Alphabetical);
        assert_eq!("followers".parse::<SortKey>().unwrap(), SortKey::Popularity);
        assert_eq!(
            "random".parse::<SortKey>(),
            Err(DirectoryError::UnknownSortKey("random".into()))
        );
    }
}
