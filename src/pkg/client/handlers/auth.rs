use crate::{
    pkg::{
        client::{
            router::{Outcome, Toast},
            state::{AppState, AuthForm, View},
        },
        internal::auth::{RegisterInput, Session},
    },
    prelude::{Error, Result},
};

pub async fn login(state: &mut AppState, email: &str, password: &str) -> Result<Outcome> {
    let identity = state.identity_provider().authenticate(email, password).await?;
    tracing::info!("{} signed in as {}", &identity.uid, identity.role);
    state.session = Session::Verified(identity);
    state.view = View::Homepage;
    state.persist()?;
    Ok(Outcome::toast(Toast::success("Login successful!")))
}

pub async fn register(state: &mut AppState, input: RegisterInput) -> Result<Outcome> {
    let identity = state.identity_provider_mut().register(input).await?;
    let message = if identity.verified_email {
        "Registration successful! Email verified."
    } else {
        "Registration successful! Please verify your email before signing in."
    };
    tracing::info!("{} registered", &identity.uid);
    state.session = Session::from_identity(identity);
    state.view = View::Homepage;
    state.persist()?;
    Ok(Outcome::toast(Toast::success(message)))
}

pub async fn forgot_password(state: &mut AppState, email: &str) -> Result<Outcome> {
    state.identity_provider().request_password_reset(email).await?;
    state.auth_form = AuthForm::Login;
    Ok(Outcome::toast(Toast::success("Password reset link sent to your email")))
}

pub async fn verify_email(state: &mut AppState, email: &str) -> Result<Outcome> {
    let owns_email = state
        .session
        .identity()
        .is_some_and(|current| current.email.eq_ignore_ascii_case(email.trim()));
    if !owns_email {
        tracing::warn!("refusing to confirm an email the session does not own");
        return Err(Error::Forbidden);
    }
    let identity = state.identity_provider_mut().confirm_email(email).await?;
    tracing::info!("session for {} upgraded", &identity.uid);
    state.session = Session::from_identity(identity);
    state.persist()?;
    Ok(Outcome::toast(Toast::success("Email verified. You can now sign in.")))
}

pub async fn logout(state: &mut AppState) -> Result<Outcome> {
    state.identity_provider_mut().sign_out().await?;
    state.session = Session::Anonymous;
    state.view = View::Homepage;
    state.persist()?;
    tracing::info!("signed out");
    Ok(Outcome::toast(Toast::success("Logged out successfully")))
}
