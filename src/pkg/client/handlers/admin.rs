use crate::{
    pkg::{
        client::{
            router::{Outcome, Toast},
            state::AppState,
        },
        internal::{adaptors::jobs::mutators::JobMutator, policy::AppConfig},
    },
    prelude::Result,
};

pub fn approve(state: &mut AppState, id: &str) -> Result<Outcome> {
    let now = state.now();
    JobMutator::new(&mut state.jobs).approve(id, now)?;
    tracing::info!("approved {}", id);
    state.persist()?;
    Ok(Outcome::toast(Toast::success("Job approved")))
}

pub fn archive(state: &mut AppState, id: &str) -> Result<Outcome> {
    JobMutator::new(&mut state.jobs).archive(id)?;
    tracing::info!("archived {}", id);
    state.persist()?;
    Ok(Outcome::toast(Toast::success("Job archived")))
}

pub fn save_config(state: &mut AppState, config: AppConfig) -> Result<Outcome> {
    state.config = config;
    state.persist()?;
    Ok(Outcome::toast(Toast::success("Configuration saved!")))
}

#[cfg(test)]
mod tests {
    use crate::pkg::{
        client::{
            router::{Command, ToastKind},
            state::testing,
            uispec::OpenSection,
        },
        internal::{
            adaptors::jobs::selectors::JobSelector,
            auth::Session,
            policy::{AppConfig, ValidJobPolicy},
            seed,
        },
    };

    fn listed(open: &OpenSection) -> Vec<String> {
        match open {
            OpenSection::Listed(cards) => cards.iter().map(|c| c.id.clone()).collect(),
            _ => vec![],
        }
    }

    #[tokio::test]
    async fn test_approval_makes_pending_job_visible() {
        let mut state = testing::seeded();
        state.session = Session::from_identity(seed::users().remove(0));
        assert_eq!(listed(&state.render().open), vec!["job1"]);

        let outcome = state.dispatch(Command::ApproveJob("job2".into())).await;
        assert_eq!(outcome.toasts[0].message, "Job approved");
        let job2 = JobSelector::new(&state.jobs).get_by_id("job2").unwrap();
        assert_eq!(job2.approved_at, Some(testing::now()));
        assert_eq!(listed(&state.render().open), vec!["job2", "job1"]);

        state.dispatch(Command::ArchiveJob("job2".into())).await;
        assert_eq!(listed(&state.render().open), vec!["job1"]);
        assert!(state.render().archived.iter().any(|card| card.id == "job2"));
    }

    #[tokio::test]
    async fn test_employer_cannot_approve() {
        let mut state = testing::seeded();
        state.session = Session::from_identity(seed::users().remove(1));
        let outcome = state.dispatch(Command::ApproveJob("job2".into())).await;
        assert_eq!(outcome.toasts[0].kind, ToastKind::Error);
        assert!(JobSelector::new(&state.jobs).get_pending().iter().any(|job| job.id == "job2"));
    }

    #[tokio::test]
    async fn test_config_is_saved() {
        let mut state = testing::seeded();
        state.session = Session::from_identity(seed::users().remove(0));
        let config = AppConfig {
            valid_job_policy: ValidJobPolicy::AutoValidation,
            ..AppConfig::default()
        };
        let outcome = state.dispatch(Command::SaveConfig(config.clone())).await;
        assert_eq!(outcome.toasts[0].message, "Configuration saved!");
        assert_eq!(state.config, config);
    }
}
