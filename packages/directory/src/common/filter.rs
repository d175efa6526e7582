//! Filter predicates shared by every listing.
//!
//! All predicates are pure functions of an entity and the current filter
//! values. A listing combines them with a logical AND.

use serde::{Deserialize, Serialize};

use crate::domains::tag::{Tag, Taxonomy};

/// An entity that can be searched by keyword.
pub trait Searchable {
    /// The text fields a keyword is matched against.
    ///
    /// A taxonomy, when the listing has one, lets entities contribute the
    /// labels of their tags.
    fn search_fields<'a>(&'a self, taxonomy: Option<&'a Taxonomy>) -> Vec<&'a str>;
}

/// An entity carrying tag values.
pub trait Tagged {
    fn has_tag(&self, value: &str) -> bool;
}

/// A search keyword, trimmed and lowercased once at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Keyword {
    raw: String,
    needle: String,
}

impl Keyword {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.trim().to_lowercase();
        Self { raw, needle }
    }

    /// The keyword as typed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Empty or whitespace-only keywords match everything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Case-insensitive substring test against one field.
    pub fn matches(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.needle)
    }
}

impl From<String> for Keyword {
    fn from(raw: String) -> Self {
        Keyword::new(raw)
    }
}

impl From<&str> for Keyword {
    fn from(raw: &str) -> Self {
        Keyword::new(raw)
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> Self {
        keyword.raw
    }
}

/// True when the keyword is empty or a substring of any searchable field.
pub fn keyword_match<E: Searchable + ?Sized>(
    entity: &E,
    keyword: &Keyword,
    taxonomy: Option<&Taxonomy>,
) -> bool {
    keyword.is_empty()
        || entity
            .search_fields(taxonomy)
            .into_iter()
            .any(|field| keyword.matches(field))
}

/// True when `tag` is the taxonomy's sentinel or the entity carries its value.
pub fn tag_match<E: Tagged + ?Sized>(entity: &E, tag: &Tag, taxonomy: &Taxonomy) -> bool {
    taxonomy.is_all(tag) || entity.has_tag(&tag.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Card {
        name: &'static str,
        tags: Vec<String>,
    }

    impl Searchable for Card {
        fn search_fields<'a>(&'a self, _taxonomy: Option<&'a Taxonomy>) -> Vec<&'a str> {
            vec![self.name]
        }
    }

    impl Tagged for Card {
        fn has_tag(&self, value: &str) -> bool {
            self.tags.iter().any(|t| t == value)
        }
    }

    fn taxonomy() -> Taxonomy {
        Taxonomy::new(
            "test",
            vec![
                Tag::new("all", "all", "All"),
                Tag::new("wallet", "wallet", "Wallet"),
                Tag::new("tool", "tool", "Tool"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_keyword_is_trimmed_and_lowercased() {
        let keyword = Keyword::new("  ArGeNt ");
        assert_eq!(keyword.as_str(), "  ArGeNt ");
        assert!(keyword.matches("Argent X"));
        assert!(!keyword.matches("Braavos"));
    }

    #[test]
    fn test_blank_keyword_always_matches() {
        let taxonomy = taxonomy();
        let card = Card {
            name: "Alpha",
            tags: vec![],
        };
        for blank in ["", "   ", "\t\n"] {
            assert!(keyword_match(&card, &Keyword::new(blank), Some(&taxonomy)));
        }
    }

    #[test]
    fn test_sentinel_tag_matches_untagged_entity() {
        let taxonomy = taxonomy();
        let card = Card {
            name: "Alpha",
            tags: vec![],
        };
        assert!(tag_match(&card, taxonomy.all(), &taxonomy));
    }

    #[test]
    fn test_tag_match_is_membership() {
        let taxonomy = taxonomy();
        let card = Card {
            name: "Alpha",
            tags: vec!["wallet".into()],
        };
        let wallet = taxonomy.find("wallet").unwrap();
        let tool = taxonomy.find("tool").unwrap();
        assert!(tag_match(&card, wallet, &taxonomy));
        assert!(!tag_match(&card, tool, &taxonomy));
    }

    #[test]
    fn test_keyword_serde_keeps_raw_text() {
        let keyword: Keyword = serde_json::from_str("\" Dex \"").unwrap();
        assert!(keyword.matches("JediSwap DEX"));
        assert_eq!(serde_json::to_string(&keyword).unwrap(), "\" Dex \"");
    }
}
