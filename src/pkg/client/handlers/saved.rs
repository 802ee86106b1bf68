use crate::{
    pkg::{
        client::{
            router::{Outcome, Toast},
            state::AppState,
        },
        internal::saved::Toggle,
    },
    prelude::Result,
};

pub fn toggle(state: &mut AppState, job_id: &str) -> Result<Outcome> {
    let scope = state.saved_scope();
    let message = match state.saved.toggle(scope, job_id) {
        Toggle::Added => "Job saved!",
        Toggle::Removed => "Job removed from saved",
    };
    state.persist()?;
    Ok(Outcome::toast(Toast::success(message)))
}

#[cfg(test)]
mod tests {
    use crate::{
        pkg::{
            client::{router::Command, state::testing, uispec::OpenSection},
            internal::{auth::RegisterInput, adaptors::users::spec::Role},
        },
        prelude::Result,
    };

    fn card_saved(state: &crate::pkg::client::state::AppState) -> bool {
        match state.render().open {
            OpenSection::Listed(cards) => cards[0].saved,
            other => panic!("unexpected open section {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_toggle_updates_labels_immediately() -> Result<()> {
        let mut state = testing::seeded();
        let outcome = state.dispatch(Command::ToggleSave("job1".into())).await;
        assert_eq!(outcome.toasts[0].message, "Job saved!");
        assert!(card_saved(&state));
        let outcome = state.dispatch(Command::ToggleSave("job1".into())).await;
        assert_eq!(outcome.toasts[0].message, "Job removed from saved");
        assert!(!card_saved(&state));
        Ok(())
    }

    #[tokio::test]
    async fn test_saved_jobs_follow_the_identity() -> Result<()> {
        let mut state = testing::seeded();
        state.dispatch(Command::ToggleSave("job1".into())).await;
        state
            .dispatch(Command::Register(RegisterInput {
                email: "reader@uni.edu".into(),
                password: "secret1".into(),
                display_name: "Reader".into(),
                role: Role::Candidate,
                org_name: None,
            }))
            .await;
        assert!(state.session.is_signed_in());
        assert!(!card_saved(&state));
        state.dispatch(Command::ToggleSave("job1".into())).await;
        assert!(card_saved(&state));
        state.dispatch(Command::Logout).await;
        assert!(card_saved(&state));
        state.dispatch(Command::ToggleSave("job1".into())).await;
        assert!(!card_saved(&state));
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_id_is_recorded_without_error() {
        let mut state = testing::seeded();
        let outcome = state.dispatch(Command::ToggleSave("removed-job".into())).await;
        assert_eq!(outcome.toasts[0].message, "Job saved!");
        assert!(state.is_saved("removed-job"));
    }
}
