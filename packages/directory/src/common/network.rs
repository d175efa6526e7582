use serde::{Deserialize, Serialize};

/// External links of a project or resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
}

impl NetworkProfile {
    /// Present links in display order, paired with their kind.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("website", &self.website),
            ("twitter", &self.twitter),
            ("telegram", &self.telegram),
            ("medium", &self.medium),
            ("github", &self.github),
            ("discord", &self.discord),
        ]
        .into_iter()
        .filter_map(|(kind, link)| link.as_deref().map(|url| (kind, url)))
        .collect()
    }
}
