//! Deep-link keys for job panels.
//!
//! A key is `<project id>~<title>~<created unix seconds>`, each component
//! percent-encoded with the same policy: everything outside `A-Z a-z 0-9 - _ .`
//! is escaped, `~` included, so the separator never appears inside a
//! component. The same key is used as URL fragment, DOM anchor and `key`
//! query value.
//!
//! Jobs of one project can share title and creation second (one role posted
//! in several cities). The second and later of those, in dataset order, get
//! an occurrence suffix on the last component: `...~1717243200-2`. A bare
//! timestamp is an integer, so a suffixed key can never equal a plain one.
//!
//! Query values reach us either still encoded or already decoded by the
//! router. [`JobKey::matches`] canonicalises them component by component
//! (decode, then re-encode) before comparing, so both forms open the panel.
//! Project ids are slugs and never contain `~`.

use std::borrow::Cow;

use serde::Serialize;

use crate::domains::ecosystem::Project;

use super::models::Job;

const SEPARATOR: char = '~';

/// Stable identity of a job within the listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobKey(String);

impl JobKey {
    pub fn new(job: &Job, project: &Project) -> Self {
        Self(format!(
            "{}{sep}{}{sep}{}",
            encode_component(&project.id),
            encode_component(&job.title),
            job.created_on.timestamp(),
            sep = SEPARATOR
        ))
    }

    /// Disambiguate the `n`-th repeat (0-based) of this base key.
    pub fn with_occurrence(self, n: usize) -> Self {
        if n == 0 {
            return self;
        }
        Self(format!("{}-{}", self.0, n + 1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Does a `key` query value designate this job?
    pub fn matches(&self, query: &str) -> bool {
        canonicalize(query).as_deref() == Some(self.0.as_str())
    }

    /// Relative URL opening this job's panel and scrolling to it.
    pub fn deep_link(&self, locale: &str) -> String {
        format!("/{}/jobs/?key={}#{}", locale, self.0, self.0)
    }
}

impl std::fmt::Display for JobKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).replace(SEPARATOR, "%7E")
}

/// Decode once (if the text is valid percent-encoding) and re-encode.
fn canonical_component(text: &str) -> String {
    let decoded = urlencoding::decode(text).unwrap_or(Cow::Borrowed(text));
    encode_component(&decoded)
}

/// Bring a query value into key form. `None` if it cannot be a job key.
pub fn canonicalize(query: &str) -> Option<String> {
    let query = query.trim();
    let (project, rest) = query.split_once(SEPARATOR)?;
    let (title, created) = rest.rsplit_once(SEPARATOR)?;
    Some(format!(
        "{}{sep}{}{sep}{}",
        canonical_component(project),
        canonical_component(title),
        canonical_component(created),
        sep = SEPARATOR
    ))
}
