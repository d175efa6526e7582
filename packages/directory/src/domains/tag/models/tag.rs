use serde::{Deserialize, Serialize};

use crate::common::{DirectoryError, Result};

/// A filter category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,   // 'defi', 'wallet', ...
    pub value: String, // canonical string matched against entity tags
    pub label: String, // 'DeFi', 'Wallet', ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>, // icon identifier for the rendering layer
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            label: label.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Ordered tag list of one domain. The first tag is the "all" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Taxonomy {
    name: String,
    tags: Vec<Tag>,
}

impl Taxonomy {
    /// Build a taxonomy; it must contain at least the sentinel.
    pub fn new(name: impl Into<String>, tags: Vec<Tag>) -> Result<Self> {
        let name = name.into();
        if tags.is_empty() {
            return Err(DirectoryError::EmptyTaxonomy(name));
        }
        Ok(Self { name, tags })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// The reserved "no filter" tag.
    pub fn all(&self) -> &Tag {
        &self.tags[0]
    }

    pub fn is_all(&self, tag: &Tag) -> bool {
        tag.value == self.all().value
    }

    pub fn find(&self, value: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.value == value)
    }

    /// Resolve a selected tag value. `None` selects the sentinel.
    pub fn select(&self, value: Option<&str>) -> Result<&Tag> {
        match value {
            None => Ok(self.all()),
            Some(value) => self.find(value).ok_or_else(|| DirectoryError::UnknownTag {
                taxonomy: self.name.clone(),
                value: value.to_string(),
            }),
        }
    }

    /// Taxonomy tags whose value appears in `values`, in taxonomy order.
    pub fn resolve<'a>(&'a self, values: &[String]) -> Vec<&'a Tag> {
        self.tags
            .iter()
            .filter(|tag| values.iter().any(|value| *value == tag.value))
            .collect()
    }

    /// Display label of a tag value, if the taxonomy knows it.
    pub fn label_of(&self, value: &str) -> Option<&str> {
        self.find(value).map(|tag| tag.label.as_str())
    }
}
