use crate::{
    pkg::{
        client::{
            router::Command,
            state::{AppState, View},
        },
        internal::gate::Capability,
    },
    prelude::{Error, Result},
};

pub fn required_capability(command: &Command) -> Option<Capability> {
    match command {
        Command::ShowView(View::PostJob) | Command::SubmitJob(_) => Some(Capability::PostJob),
        Command::ShowView(View::Admin)
        | Command::ApproveJob(_)
        | Command::ArchiveJob(_)
        | Command::SaveConfig(_) => Some(Capability::AdminAccess),
        Command::Login { .. } | Command::ForgotPassword { .. } => Some(Capability::Login),
        Command::Register(_) => Some(Capability::Register),
        Command::Logout => Some(Capability::Logout),
        _ => None,
    }
}

pub fn authorize(state: &AppState, command: &Command) -> Result<()> {
    match required_capability(command) {
        Some(capability) if !state.capabilities().allows(capability) => {
            tracing::warn!("{} denied: missing {}", command.name(), capability);
            Err(Error::Forbidden)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::{
        client::state::testing,
        internal::{auth::Session, seed},
    };

    #[test]
    fn test_anonymous_denied_admin_and_post() {
        let state = testing::seeded();
        assert!(authorize(&state, &Command::ShowView(View::Admin)).is_err());
        assert!(authorize(&state, &Command::ShowView(View::PostJob)).is_err());
        assert!(authorize(&state, &Command::ApproveJob("job2".into())).is_err());
        assert!(authorize(&state, &Command::ShowView(View::Homepage)).is_ok());
        assert!(authorize(&state, &Command::Logout).is_err());
    }

    #[test]
    fn test_signed_in_cannot_sign_in_again() {
        let mut state = testing::seeded();
        state.session = Session::from_identity(seed::users().remove(0));
        assert!(authorize(
            &state,
            &Command::Login {
                email: "admin@facultyjobs.com".into(),
                password: "x".into()
            }
        )
        .is_err());
        assert!(authorize(&state, &Command::ShowView(View::Admin)).is_ok());
        assert!(authorize(&state, &Command::ShowView(View::PostJob)).is_err());
    }
}
