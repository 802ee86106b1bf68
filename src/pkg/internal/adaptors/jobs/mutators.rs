use chrono::{DateTime, Utc};

use super::{spec::JobPosting, store::JobStore};
use crate::prelude::{Error, Result};

pub struct JobMutator<'a> {
    store: &'a mut JobStore,
}

impl<'a> JobMutator<'a> {
    pub fn new(store: &'a mut JobStore) -> Self {
        JobMutator { store }
    }

    pub fn create(&mut self, job: JobPosting) -> Result<&JobPosting> {
        if self.store.position(&job.id).is_some() {
            return Err(Error::DuplicateJob(job.id));
        }
        let id = job.id.clone();
        self.store.push(job);
        self.store
            .job_mut(&id)
            .map(|job| &*job)
            .ok_or(Error::JobNotFound(id))
    }

    /// Sets `approved` and `approved_at` together. Approving twice keeps the
    /// first approval time.
    pub fn approve(&mut self, id: &str, at: DateTime<Utc>) -> Result<&JobPosting> {
        let job = self
            .store
            .job_mut(id)
            .ok_or_else(|| Error::JobNotFound(id.to_string()))?;
        if !job.approved {
            job.approved = true;
            job.approved_at = Some(at);
        }
        Ok(job)
    }

    pub fn archive(&mut self, id: &str) -> Result<&JobPosting> {
        let job = self
            .store
            .job_mut(id)
            .ok_or_else(|| Error::JobNotFound(id.to_string()))?;
        job.archived = true;
        Ok(job)
    }
}
