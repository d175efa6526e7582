//! Static dataset of the directory.
//!
//! Every record lives in a camelCase JSON file under one data directory. The
//! files are read once; every listing works on borrowed views of them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::domains::academy::{AcademyBundle, Resource};
use crate::domains::ecosystem::Project;
use crate::domains::jobs::Job;
use crate::domains::tag::{Tag, Taxonomy};

pub const PROJECTS_FILE: &str = "projects.json";
pub const JOBS_FILE: &str = "jobs.json";
pub const ACADEMY_FILE: &str = "academy.json";
pub const ECOSYSTEM_TAGS_FILE: &str = "ecosystem_tags.json";
pub const ACADEMY_TAGS_FILE: &str = "academy_tags.json";

#[derive(Debug, Clone)]
pub struct Dataset {
    pub projects: Vec<Project>,
    pub jobs: Vec<Job>,
    pub academy: AcademyBundle,
    pub ecosystem_tags: Taxonomy,
    pub academy_tags: Taxonomy,
}

impl Dataset {
    /// Load every dataset file from `dir`.
    ///
    /// Project ids must be unique. Jobs pointing at unknown projects are kept
    /// here and dropped by the job listing.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        let projects: Vec<Project> = read_json(&dir.join(PROJECTS_FILE))?;
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id.as_str()) {
                bail!("Duplicate project id '{}' in {}", project.id, PROJECTS_FILE);
            }
        }

        let jobs: Vec<Job> = read_json(&dir.join(JOBS_FILE))?;
        let orphans = jobs
            .iter()
            .filter(|job| !seen.contains(job.project_id.as_str()))
            .count();
        if orphans > 0 {
            warn!(orphans, "Jobs reference unknown projects and will not be listed");
        }

        let resources: Vec<Resource> = read_json(&dir.join(ACADEMY_FILE))?;
        let ecosystem_tags = read_taxonomy(dir, ECOSYSTEM_TAGS_FILE, "ecosystem")?;
        let academy_tags = read_taxonomy(dir, ACADEMY_TAGS_FILE, "academy")?;

        info!(
            dir = %dir.display(),
            projects = projects.len(),
            jobs = jobs.len(),
            resources = resources.len(),
            "Dataset loaded"
        );

        Ok(Self {
            projects,
            jobs,
            academy: AcademyBundle::from_resources(resources),
            ecosystem_tags,
            academy_tags,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn read_taxonomy(dir: &Path, file: &str, name: &str) -> Result<Taxonomy> {
    let tags: Vec<Tag> = read_json(&dir.join(file))?;
    Taxonomy::new(name, tags).with_context(|| format!("Invalid taxonomy in {}", file))
}
