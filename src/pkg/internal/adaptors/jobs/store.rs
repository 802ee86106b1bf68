use std::collections::HashMap;

use super::spec::{JobPosting, RawJobPosting};

#[derive(Debug, Clone, Default)]
pub struct JobStore {
    jobs: Vec<JobPosting>,
    index: HashMap<String, usize>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_postings(postings: impl IntoIterator<Item = JobPosting>) -> Self {
        let mut store = JobStore::new();
        for job in postings {
            if store.index.contains_key(&job.id) {
                tracing::warn!("dropping duplicate job {}", &job.id);
                continue;
            }
            store.push(job);
        }
        store
    }

    pub fn from_raw(records: impl IntoIterator<Item = RawJobPosting>) -> Self {
        let postings = records.into_iter().filter_map(|raw| match JobPosting::try_from(raw) {
            Ok(job) => Some(job),
            Err(e) => {
                tracing::warn!("skipping stored job: {}", e);
                None
            }
        });
        Self::from_postings(postings)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub(super) fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub(super) fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(super) fn job_mut(&mut self, id: &str) -> Option<&mut JobPosting> {
        let pos = self.position(id)?;
        self.jobs.get_mut(pos)
    }

    pub(super) fn push(&mut self, job: JobPosting) {
        self.index.insert(job.id.clone(), self.jobs.len());
        self.jobs.push(job);
    }
}
