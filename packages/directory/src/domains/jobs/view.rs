use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::common::{keyword_match, select, Keyword, Listing, Tagged, JOB_REVEAL_STEP};
use crate::domains::ecosystem::Project;

use super::key::JobKey;
use super::models::Job;

/// Filter and reveal state of the job board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct JobFilter {
    #[builder(default, setter(into))]
    pub keyword: Keyword,
    #[builder(default)]
    pub remote_only: bool,
    /// Every listed tag must be carried by the job.
    #[builder(default)]
    pub tags: Vec<String>,
    #[builder(default = JOB_REVEAL_STEP)]
    pub loaded: usize,
}

impl Default for JobFilter {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl JobFilter {
    pub fn with_keyword(self, keyword: impl Into<Keyword>) -> Self {
        Self {
            keyword: keyword.into(),
            ..self
        }
    }

    pub fn with_remote_only(self, remote_only: bool) -> Self {
        Self {
            remote_only,
            ..self
        }
    }

    pub fn with_tags(self, tags: Vec<String>) -> Self {
        Self { tags, ..self }
    }

    pub fn with_loaded(self, loaded: usize) -> Self {
        Self { loaded, ..self }
    }

    fn accepts(&self, job: &Job) -> bool {
        (!self.remote_only || job.is_remote())
            && self.tags.iter().all(|tag| job.has_tag(tag))
            && keyword_match(job, &self.keyword, None)
    }
}

/// One row of the job board.
#[derive(Debug, Clone, Serialize)]
pub struct JobEntry<'a> {
    pub job: &'a Job,
    pub project: &'a Project,
    pub key: JobKey,
    /// Panel expanded.
    pub open: bool,
}

/// Run the job pipeline: orphan drop, filters, newest first, reveal.
///
/// Jobs whose project is unknown are dropped before counting, so they never
/// take a slot in the revealed slice and can never be deep-link targets.
/// Keys are assigned over the whole resolved collection before filtering, so
/// occurrence suffixes do not move when filters change. The entry whose key
/// matches `open_key` is expanded.
pub fn compute_visible<'a>(
    jobs: &'a [Job],
    projects: &'a [Project],
    filter: &JobFilter,
    open_key: Option<&str>,
) -> Listing<JobEntry<'a>> {
    let by_id: HashMap<&str, &'a Project> = projects
        .iter()
        .map(|project| (project.id.as_str(), project))
        .collect();
    let mut seen: HashMap<JobKey, usize> = HashMap::new();
    let resolved: Vec<(&'a Job, &'a Project, JobKey)> = jobs
        .iter()
        .filter_map(|job| Some((job, *by_id.get(job.project_id.as_str())?)))
        .map(|(job, project)| {
            let base = JobKey::new(job, project);
            let repeats = seen.entry(base.clone()).or_insert(0);
            let key = base.with_occurrence(*repeats);
            *repeats += 1;
            (job, project, key)
        })
        .collect();

    let listing = select(
        &resolved[..],
        |(job, _, _)| filter.accepts(job),
        |(a, _, _), (b, _, _)| b.created_on.cmp(&a.created_on),
        filter.loaded,
    );

    listing.map(|&(job, project, ref key)| {
        let open = open_key.is_some_and(|query| key.matches(query));
        JobEntry {
            job,
            project,
            key: key.clone(),
            open,
        }
    })
}
