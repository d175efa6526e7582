use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{DirectoryError, NetworkProfile, Searchable, Tagged};
use crate::domains::tag::Taxonomy;

/// Highlighted learning resources shown above the regular list.
pub const HIGHLIGHT_LIMIT: usize = 4;

/// The academy section a resource belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AcademyCategory {
    Learning,
    Tools,
    Wallets,
    Contribute,
    NewsFeed,
}

impl AcademyCategory {
    pub const ALL: [AcademyCategory; 5] = [
        AcademyCategory::Learning,
        AcademyCategory::Tools,
        AcademyCategory::Wallets,
        AcademyCategory::Contribute,
        AcademyCategory::NewsFeed,
    ];

    /// Tag value of the category in the academy taxonomy.
    pub fn as_str(&self) -> &'static str {
        match self {
            AcademyCategory::Learning => "learning",
            AcademyCategory::Tools => "tools",
            AcademyCategory::Wallets => "wallets",
            AcademyCategory::Contribute => "contribute",
            AcademyCategory::NewsFeed => "news-feed",
        }
    }
}

impl std::fmt::Display for AcademyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcademyCategory {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AcademyCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| DirectoryError::UnknownCategory(s.to_string()))
    }
}

/// An academy entry: a tutorial, tool, wallet, contribution guide or feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub network: NetworkProfile,
    pub category: AcademyCategory,
    /// Featured on top of the learning section.
    #[serde(default)]
    pub highlighted: bool,
}

impl Resource {
    /// Where the card points: the explicit link, else website, github, twitter.
    pub fn primary_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .or(self.network.website.as_deref())
            .or(self.network.github.as_deref())
            .or(self.network.twitter.as_deref())
    }
}

impl Searchable for Resource {
    fn search_fields<'a>(&'a self, _taxonomy: Option<&'a Taxonomy>) -> Vec<&'a str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

impl Tagged for Resource {
    fn has_tag(&self, value: &str) -> bool {
        self.category.as_str() == value
    }
}
