use chrono::{DateTime, Duration, Utc};

use super::adaptors::jobs::spec::JobPosting;

pub const CLOSING_SOON_DAYS: i64 = 30;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buckets<'a> {
    pub open: Vec<&'a JobPosting>,
    pub closing_soon: Vec<&'a JobPosting>,
    pub archived: Vec<&'a JobPosting>,
}

impl<'a> Buckets<'a> {
    pub fn has_open(&self) -> bool {
        !self.open.is_empty()
    }
}

pub fn is_closing_soon(job: &JobPosting, now: DateTime<Utc>) -> bool {
    job.is_listed() && job.deadline_at() <= now + Duration::days(CLOSING_SOON_DAYS)
}

/// Unapproved postings belong to no bucket, archived or not.
pub fn is_archived(job: &JobPosting, now: DateTime<Utc>) -> bool {
    job.approved && (job.archived || job.deadline_at() < now)
}

pub fn categorize<'a>(jobs: &[&'a JobPosting], now: DateTime<Utc>) -> Buckets<'a> {
    let mut open: Vec<&JobPosting> = jobs.iter().copied().filter(|j| j.is_listed()).collect();
    open.sort_by(|a, b| b.approved_at.cmp(&a.approved_at));

    let mut closing_soon: Vec<&JobPosting> = jobs
        .iter()
        .copied()
        .filter(|j| is_closing_soon(j, now))
        .collect();
    closing_soon.sort_by_key(|j| j.deadline);

    let mut archived: Vec<&JobPosting> = jobs
        .iter()
        .copied()
        .filter(|j| is_archived(j, now))
        .collect();
    archived.sort_by(|a, b| b.recency().cmp(&a.recency()));

    tracing::debug!(
        "categorized {} jobs: {} open, {} closing soon, {} archived",
        jobs.len(),
        open.len(),
        closing_soon.len(),
        archived.len()
    );
    Buckets {
        open,
        closing_soon,
        archived,
    }
}
