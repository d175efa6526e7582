use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Searchable, Tagged};
use crate::domains::tag::Taxonomy;

/// A job offer posted by an ecosystem project.
///
/// Jobs carry no stored id; their identity is the key derived from the job
/// and its project (see [`JobKey`](crate::domains::jobs::JobKey)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub title: String,
    pub project_id: String, // must reference an existing Project to be listed
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compensation: Option<Compensation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub created_on: DateTime<Utc>,
    pub apply_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Job {
    pub fn is_remote(&self) -> bool {
        self.remote.unwrap_or(false)
    }
}

/// Salary range in thousands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compensation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub from: u32,
    pub to: u32,
}

impl std::fmt::Display for Compensation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let currency = self.currency.as_deref().unwrap_or("$");
        write!(f, "{}{}k - {}{}k", currency, self.from, currency, self.to)
    }
}

impl Searchable for Job {
    fn search_fields<'a>(&'a self, _taxonomy: Option<&'a Taxonomy>) -> Vec<&'a str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.description.as_deref());
        fields.extend(self.location.as_deref());
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Tagged for Job {
    fn has_tag(&self, value: &str) -> bool {
        self.tags.iter().any(|tag| tag.eq_ignore_ascii_case(value))
    }
}
