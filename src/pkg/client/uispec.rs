use chrono::NaiveDate;

use super::state::{AppState, View};
use crate::pkg::internal::{
    adaptors::{
        jobs::{selectors::JobSelector, spec::JobPosting},
        users::spec::Role,
    },
    categorize::categorize,
    filter::{filter_jobs, Facet, DEPARTMENTS, LEVELS},
    gate::Capabilities,
};

pub const DESCRIPTION_PREVIEW_CHARS: usize = 140;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub label: &'static str,
    pub facet: Facet,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCard {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub approved: bool,
    pub departments: Vec<String>,
    pub levels: Vec<String>,
    pub description: String,
    pub deadline: String,
    pub apply_url: String,
    pub saved: bool,
}

impl JobCard {
    pub fn save_label(&self) -> &'static str {
        if self.saved {
            "Saved"
        } else {
            "Save"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenSection {
    Loading,
    Empty { message: &'static str },
    Listed(Vec<JobCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub title: &'static str,
    pub search: String,
    pub department_chips: Vec<FilterChip>,
    pub level_chips: Vec<FilterChip>,
    pub open: OpenSection,
    pub closing_soon: Vec<JobCard>,
    pub archived: Vec<JobCard>,
    pub capabilities: Capabilities,
    pub signed_in_as: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetails {
    pub id: String,
    pub title: String,
    pub institution: String,
    pub location: String,
    pub departments: Vec<String>,
    pub levels: Vec<String>,
    pub description: String,
    pub deadline: String,
    pub apply_url: String,
    pub share_url: String,
    pub saved: bool,
}

pub fn page_title(view: View) -> &'static str {
    match view {
        View::Homepage => "Faculty Jobs • Neo",
        View::Auth => "Login - Faculty Jobs • Neo",
        View::PostJob => "Post a Job - Faculty Jobs • Neo",
        View::Admin => "Admin Dashboard - Faculty Jobs • Neo",
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}

pub fn share_url(base_url: &str, job_id: &str) -> String {
    format!("{}#job={}", base_url, job_id)
}

impl AppState {
    fn card(&self, job: &JobPosting) -> JobCard {
        JobCard {
            id: job.id.clone(),
            title: job.title.clone(),
            subtitle: format!("{} • {}", job.institution, job.location),
            approved: job.approved,
            departments: job.departments.clone(),
            levels: job.levels.clone(),
            description: truncate_description(&job.description),
            deadline: format_date(job.deadline),
            apply_url: job.application_link.clone(),
            saved: self.is_saved(&job.id),
        }
    }

    fn empty_message(&self) -> &'static str {
        match self.session.identity().map(|identity| identity.role) {
            Some(Role::Employer) => "Be the first to post a job.",
            _ => "No matches—try clearing filters.",
        }
    }

    fn chips(&self, facet: Facet, labels: &[&'static str]) -> Vec<FilterChip> {
        labels
            .iter()
            .map(|&label| FilterChip {
                label,
                facet,
                active: self.filters.is_selected(facet, label),
            })
            .collect()
    }

    pub fn render(&self) -> HomeView {
        let mut view = HomeView {
            title: page_title(self.view),
            search: self.filters.search().to_string(),
            department_chips: self.chips(Facet::Department, &DEPARTMENTS),
            level_chips: self.chips(Facet::Level, &LEVELS),
            open: OpenSection::Loading,
            closing_soon: vec![],
            archived: vec![],
            capabilities: self.capabilities(),
            signed_in_as: self.session.identity().map(|i| i.display_name.clone()),
        };
        if !self.is_loaded() {
            return view;
        }

        let filtered = filter_jobs(JobSelector::new(&self.jobs).get_all(), &self.filters);
        let buckets = categorize(&filtered, self.now());
        view.open = if buckets.has_open() {
            OpenSection::Listed(buckets.open.iter().map(|job| self.card(job)).collect())
        } else {
            OpenSection::Empty {
                message: self.empty_message(),
            }
        };
        view.closing_soon = buckets.closing_soon.iter().map(|job| self.card(job)).collect();
        view.archived = buckets.archived.iter().map(|job| self.card(job)).collect();
        view
    }

    pub fn render_details(&self) -> Option<JobDetails> {
        let id = self.selected_job.as_deref()?;
        let job = JobSelector::new(&self.jobs).get_by_id(id)?;
        Some(JobDetails {
            id: job.id.clone(),
            title: job.title.clone(),
            institution: job.institution.clone(),
            location: job.location.clone(),
            departments: job.departments.clone(),
            levels: job.levels.clone(),
            description: job.description.clone(),
            deadline: format_date(job.deadline),
            apply_url: job.application_link.clone(),
            share_url: share_url(&self.base_url, &job.id),
            saved: self.is_saved(&job.id),
        })
    }
}
