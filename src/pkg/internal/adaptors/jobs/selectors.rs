use super::{spec::JobPosting, store::JobStore};

pub struct JobSelector<'a> {
    store: &'a JobStore,
}

impl<'a> JobSelector<'a> {
    pub fn new(store: &'a JobStore) -> Self {
        JobSelector { store }
    }

    pub fn get_by_id(&self, id: &str) -> Option<&'a JobPosting> {
        let store: &'a JobStore = self.store;
        store.position(id).map(|pos| &store.jobs()[pos])
    }

    pub fn get_all(&self) -> &'a [JobPosting] {
        self.store.jobs()
    }

    pub fn get_by_creator(&self, created_by: &str) -> Vec<&'a JobPosting> {
        self.get_all()
            .iter()
            .filter(|job| job.created_by == created_by)
            .collect()
    }

    pub fn get_pending(&self) -> Vec<&'a JobPosting> {
        self.get_all()
            .iter()
            .filter(|job| !job.approved && !job.archived)
            .collect()
    }
}
