use serde::{Deserialize, Serialize};

use crate::common::{NetworkProfile, Ranked, Searchable, Tagged};
use crate::domains::tag::Taxonomy;

/// An ecosystem project listed in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>, // tag values from the ecosystem taxonomy
    #[serde(default)]
    pub network: NetworkProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
    #[serde(default)]
    pub is_live: bool,
    #[serde(default)]
    pub is_testnet_live: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_followers: Option<u64>,
}

/// Deployment badge shown on a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveStatus {
    Live,
    Testnet,
}

impl Project {
    /// `Live` wins over `Testnet`; neither flag means no badge.
    pub fn live_status(&self) -> Option<LiveStatus> {
        if self.is_live {
            Some(LiveStatus::Live)
        } else if self.is_testnet_live {
            Some(LiveStatus::Testnet)
        } else {
            None
        }
    }
}

impl Searchable for Project {
    fn search_fields<'a>(&'a self, taxonomy: Option<&'a Taxonomy>) -> Vec<&'a str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        if let Some(taxonomy) = taxonomy {
            fields.extend(self.tags.iter().filter_map(|value| taxonomy.label_of(value)));
        }
        fields
    }
}

impl Tagged for Project {
    fn has_tag(&self, value: &str) -> bool {
        self.tags.iter().any(|tag| tag == value)
    }
}

impl Ranked for Project {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn popularity(&self) -> Option<u64> {
        self.twitter_followers
    }
}
