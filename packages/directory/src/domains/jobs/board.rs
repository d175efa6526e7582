use std::collections::HashSet;

use tracing::debug;

use crate::common::{Loadable, PageView, RevealController, JOB_REVEAL_STEP};
use crate::domains::ecosystem::Project;

use super::key::JobKey;
use super::models::Job;
use super::view::{compute_visible, JobEntry, JobFilter};

struct BoardData {
    jobs: Vec<Job>,
    projects: Vec<Project>,
}

/// Page-level controller of the job board.
///
/// `open_key` is the `key` query value the page was opened with. Panels the
/// user toggles afterwards are tracked separately and flip the initial state.
pub struct JobBoard {
    data: Loadable<BoardData>,
    filter: JobFilter,
    reveal: RevealController,
    open_key: Option<String>,
    toggled: HashSet<JobKey>,
}

impl JobBoard {
    pub fn new(open_key: Option<String>) -> Self {
        Self {
            data: Loadable::loading(),
            filter: JobFilter::default(),
            reveal: RevealController::new(JOB_REVEAL_STEP),
            open_key,
            toggled: HashSet::new(),
        }
    }

    /// Hand over the fetched jobs and the projects they refer to.
    pub fn resolve(&mut self, jobs: Vec<Job>, projects: Vec<Project>) -> bool {
        let count = jobs.len();
        let resolved = self.data.resolve(BoardData { jobs, projects });
        if resolved {
            debug!(count, "Jobs resolved");
        }
        resolved
    }

    pub fn filter(&self) -> &JobFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: JobFilter) {
        self.reveal.set_loaded(filter.loaded);
        self.filter = filter;
    }

    pub fn update(&mut self, transition: impl FnOnce(JobFilter) -> JobFilter) {
        let next = transition(self.filter.clone());
        self.set_filter(next);
    }

    pub fn render(&mut self) -> PageView<JobEntry<'_>> {
        let Some(data) = self.data.get() else {
            self.reveal.arm_last(0);
            return PageView::loading();
        };

        let mut listing = compute_visible(
            &data.jobs,
            &data.projects,
            &self.filter,
            self.open_key.as_deref(),
        );
        for entry in &mut listing.items {
            entry.open ^= self.toggled.contains(&entry.key);
        }
        self.reveal.arm_last(listing.len());
        PageView::from_listing(listing)
    }

    /// The rendering layer saw row `index`.
    pub fn on_visible(&mut self, index: usize) -> bool {
        if !self.reveal.on_visible(index) {
            return false;
        }
        self.filter = self.filter.clone().with_loaded(self.reveal.loaded());
        true
    }

    /// Flip a panel. Returns whether it is now open.
    pub fn toggle(&mut self, key: &JobKey) -> bool {
        if !self.toggled.remove(key) {
            self.toggled.insert(key.clone());
        }
        self.is_open(key)
    }

    pub fn is_open(&self, key: &JobKey) -> bool {
        let initially_open = self
            .open_key
            .as_deref()
            .is_some_and(|query| key.matches(query));
        initially_open ^ self.toggled.contains(key)
    }
}
