use uuid::Uuid;

use crate::{
    pkg::{
        client::{
            router::{Outcome, Toast},
            state::{AppState, View},
            uispec::share_url,
        },
        internal::adaptors::jobs::{mutators::JobMutator, selectors::JobSelector, spec::JobDraft},
    },
    prelude::{Error, Result},
};

fn require_job(state: &AppState, id: &str) -> Result<()> {
    JobSelector::new(&state.jobs)
        .get_by_id(id)
        .map(|_| ())
        .ok_or_else(|| Error::JobNotFound(id.to_string()))
}

pub fn show_details(state: &mut AppState, id: &str) -> Result<Outcome> {
    require_job(state, id)?;
    state.selected_job = Some(id.to_string());
    Ok(Outcome::none())
}

pub fn close_details(state: &mut AppState) -> Result<Outcome> {
    state.selected_job = None;
    Ok(Outcome::none())
}

pub fn job_from_fragment(fragment: &str) -> Option<&str> {
    fragment
        .trim_start_matches('#')
        .split('&')
        .find_map(|pair| pair.strip_prefix("job="))
        .filter(|id| !id.is_empty())
}

/// Deep link entry. Malformed fragments and unknown ids are ignored.
pub fn open_link(state: &mut AppState, fragment: &str) -> Result<Outcome> {
    match job_from_fragment(fragment) {
        Some(id) => show_details(state, id),
        None => {
            tracing::debug!("ignoring fragment {:?}", fragment);
            Ok(Outcome::none())
        }
    }
}

pub fn share(state: &mut AppState, id: &str) -> Result<Outcome> {
    require_job(state, id)?;
    let url = share_url(&state.base_url, id);
    Ok(Outcome::toast(Toast::info(format!("Job link: {}", url))))
}

pub fn apply(state: &mut AppState, id: &str) -> Result<Outcome> {
    let job = JobSelector::new(&state.jobs)
        .get_by_id(id)
        .ok_or_else(|| Error::JobNotFound(id.to_string()))?;
    Ok(Outcome {
        toasts: vec![],
        open_url: Some(job.application_link.clone()),
    })
}

pub fn submit(state: &mut AppState, draft: JobDraft) -> Result<Outcome> {
    let employer = state.session.identity().cloned().ok_or(Error::Forbidden)?;
    if let Some(field) = state.config.missing_fields(&draft).first() {
        return Err(Error::MissingField(field.to_string()));
    }
    if draft.title.trim().is_empty() {
        return Err(Error::MissingField("title".into()));
    }
    let deadline = draft
        .deadline
        .ok_or_else(|| Error::MissingField("deadline".into()))?;

    let approved = state.config.auto_approves(&draft, &employer);
    let now = state.now();
    let id = format!("job_{}", Uuid::new_v4().simple());
    let job = draft.into_posting(id.clone(), &employer.uid, deadline, now, approved);
    JobMutator::new(&mut state.jobs).create(job)?;
    tracing::info!("{} posted {} (approved: {})", &employer.uid, &id, approved);

    state.view = View::Homepage;
    state.persist()?;
    Ok(Outcome::toast(Toast::success(if approved {
        "Job posted and live!"
    } else {
        "Job submitted for admin approval"
    })))
}
