use serde::Serialize;

use crate::common::{DirectoryError, Result};
use crate::domains::jobs::Job;
use crate::domains::tag::{Tag, Taxonomy};

use super::models::{LiveStatus, Project};

/// Look up a project by id.
pub fn find_project_by_id<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|project| project.id == id)
}

/// Project title split for display: first word highlighted, the rest plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headline {
    pub highlighted: String,
    pub rest: String,
}

impl Headline {
    pub fn from_name(name: &str) -> Self {
        let mut words = name.split(' ');
        let highlighted = words.next().unwrap_or_default().to_string();
        let rest = words.collect::<Vec<_>>().join(" ");
        Self { highlighted, rest }
    }
}

/// Everything the project page shows besides the raw record.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail<'a> {
    pub project: &'a Project,
    pub headline: Headline,
    pub tags: Vec<&'a Tag>,
    pub status: Option<LiveStatus>,
    pub job_count: usize,
    /// External links in display order, as `(kind, url)`.
    pub links: Vec<(&'static str, &'a str)>,
}

impl<'a> ProjectDetail<'a> {
    /// Build the detail view of project `id`.
    ///
    /// An unknown id is a not-found error, distinct from an empty listing.
    pub fn build(
        id: &str,
        projects: &'a [Project],
        jobs: &[Job],
        taxonomy: &'a Taxonomy,
    ) -> Result<Self> {
        let project = find_project_by_id(projects, id)
            .ok_or_else(|| DirectoryError::ProjectNotFound(id.to_string()))?;

        Ok(Self {
            project,
            headline: Headline::from_name(&project.name),
            tags: taxonomy.resolve(&project.tags),
            status: project.live_status(),
            job_count: jobs.iter().filter(|job| job.project_id == project.id).count(),
            links: project.network.links(),
        })
    }
}
