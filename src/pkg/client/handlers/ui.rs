use crate::{
    pkg::client::{
        router::Outcome,
        state::{AppState, AuthForm, View},
    },
    prelude::Result,
};

pub fn show_view(state: &mut AppState, view: View) -> Result<Outcome> {
    tracing::debug!("showing view {:?}", view);
    state.view = view;
    Ok(Outcome::none())
}

pub fn show_auth_form(state: &mut AppState, form: AuthForm) -> Result<Outcome> {
    state.view = View::Auth;
    state.auth_form = form;
    Ok(Outcome::none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::client::{router::Command, state::testing, uispec::page_title};

    #[tokio::test]
    async fn test_navigation_updates_title() {
        let mut state = testing::seeded();
        state.dispatch(Command::ShowAuthForm(AuthForm::Register)).await;
        assert_eq!(state.view, View::Auth);
        assert_eq!(state.auth_form, AuthForm::Register);
        assert_eq!(state.render().title, page_title(View::Auth));
        state.dispatch(Command::ShowView(View::Homepage)).await;
        assert_eq!(state.render().title, "Faculty Jobs • Neo");
    }

    #[tokio::test]
    async fn test_gated_view_is_refused() {
        let mut state = testing::seeded();
        let outcome = state.dispatch(Command::ShowView(View::Admin)).await;
        assert_eq!(state.view, View::Homepage);
        assert_eq!(outcome.toasts[0].message, "You are not allowed to do that");
    }
}
