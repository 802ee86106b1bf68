use super::{
    handlers,
    middlewares::authz,
    state::{AppState, AuthForm, View},
};
use crate::{
    pkg::internal::{adaptors::jobs::spec::JobDraft, auth::RegisterInput, filter::Facet, policy::AppConfig},
    prelude::ErrorKind,
};

#[derive(Debug, Clone)]
pub enum Command {
    ShowView(View),
    ShowAuthForm(AuthForm),
    Login { email: String, password: String },
    Register(RegisterInput),
    ForgotPassword { email: String },
    VerifyEmail { email: String },
    Logout,
    Search(String),
    ToggleFacet(Facet, String),
    ClearFilters,
    ShowJobDetails(String),
    CloseDetails,
    OpenLink(String),
    ShareJob(String),
    ApplyToJob(String),
    ToggleSave(String),
    SubmitJob(JobDraft),
    ApproveJob(String),
    ArchiveJob(String),
    SaveConfig(AppConfig),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::ShowView(_) => "show-view",
            Command::ShowAuthForm(_) => "show-auth-form",
            Command::Login { .. } => "login",
            Command::Register(_) => "register",
            Command::ForgotPassword { .. } => "forgot-password",
            Command::VerifyEmail { .. } => "verify-email",
            Command::Logout => "logout",
            Command::Search(_) => "search",
            Command::ToggleFacet(..) => "toggle-facet",
            Command::ClearFilters => "clear-filters",
            Command::ShowJobDetails(_) => "show-job-details",
            Command::CloseDetails => "close-details",
            Command::OpenLink(_) => "open-link",
            Command::ShareJob(_) => "share-job",
            Command::ApplyToJob(_) => "apply-to-job",
            Command::ToggleSave(_) => "toggle-save",
            Command::SubmitJob(_) => "submit-job",
            Command::ApproveJob(_) => "approve-job",
            Command::ArchiveJob(_) => "archive-job",
            Command::SaveConfig(_) => "save-config",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub toasts: Vec<Toast>,
    pub open_url: Option<String>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn toast(toast: Toast) -> Self {
        Outcome {
            toasts: vec![toast],
            open_url: None,
        }
    }
}

impl AppState {
    /// Mutates and persists before returning. Failures become toasts, except lookup misses.
    pub async fn dispatch(&mut self, command: Command) -> Outcome {
        tracing::debug!("dispatching {}", command.name());
        if let Err(e) = authz::authorize(self, &command) {
            return Outcome::toast(Toast::error(e.to_string()));
        }
        let result = match command {
            Command::ShowView(view) => handlers::ui::show_view(self, view),
            Command::ShowAuthForm(form) => handlers::ui::show_auth_form(self, form),
            Command::Login { email, password } => handlers::auth::login(self, &email, &password).await,
            Command::Register(input) => handlers::auth::register(self, input).await,
            Command::ForgotPassword { email } => handlers::auth::forgot_password(self, &email).await,
            Command::VerifyEmail { email } => handlers::auth::verify_email(self, &email).await,
            Command::Logout => handlers::auth::logout(self).await,
            Command::Search(term) => handlers::filters::search(self, &term),
            Command::ToggleFacet(facet, value) => handlers::filters::toggle(self, facet, &value),
            Command::ClearFilters => handlers::filters::clear(self),
            Command::ShowJobDetails(id) => handlers::jobs::show_details(self, &id),
            Command::CloseDetails => handlers::jobs::close_details(self),
            Command::OpenLink(fragment) => handlers::jobs::open_link(self, &fragment),
            Command::ShareJob(id) => handlers::jobs::share(self, &id),
            Command::ApplyToJob(id) => handlers::jobs::apply(self, &id),
            Command::ToggleSave(id) => handlers::saved::toggle(self, &id),
            Command::SubmitJob(draft) => handlers::jobs::submit(self, draft),
            Command::ApproveJob(id) => handlers::admin::approve(self, &id),
            Command::ArchiveJob(id) => handlers::admin::archive(self, &id),
            Command::SaveConfig(config) => handlers::admin::save_config(self, config),
        };
        match result {
            Ok(outcome) => outcome,
            Err(e) if e.kind() == ErrorKind::LookupMiss => {
                tracing::debug!("ignoring lookup miss: {}", e);
                Outcome::none()
            }
            Err(e) => {
                tracing::warn!("{} {}", e.code(), e);
                Outcome::toast(Toast::error(e.to_string()))
            }
        }
    }
}
