use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use facultyjobs::{
    conf::settings,
    pkg::{
        client::{
            self,
            router::{Command, Outcome},
            state::AppState,
        },
        internal::{
            adaptors::{jobs::spec::JobDraft, users::spec::Role},
            auth::RegisterInput,
            filter::Facet,
            policy::{AppConfig, ValidJobPolicy},
        },
    },
    prelude::Result,
};

mod render;

#[derive(Parser)]
#[command(about = "browse and manage faculty job postings")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// List postings by bucket
    Jobs {
        #[arg(long)]
        search: Option<String>,
        #[arg(long = "department")]
        departments: Vec<String>,
        #[arg(long = "level")]
        levels: Vec<String>,
    },
    /// Show one posting, by id or `#job=<id>` link
    Show { id: String },
    Save { id: String },
    Share { id: String },
    Apply { id: String },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Register(RegisterArgs),
    VerifyEmail {
        #[arg(long)]
        email: String,
    },
    Logout,
    ResetPassword {
        #[arg(long)]
        email: String,
    },
    Whoami,
    Submit(SubmitArgs),
    Approve { id: String },
    Archive { id: String },
    /// Change the job validation policy (admin)
    Policy {
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
        #[arg(long)]
        min_trust_level: Option<u32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    AdminApproval,
    AutoValidation,
}

impl From<PolicyArg> for ValidJobPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::AdminApproval => ValidJobPolicy::AdminApproval,
            PolicyArg::AutoValidation => ValidJobPolicy::AutoValidation,
        }
    }
}

/// Options left out keep their current value.
fn updated_policy(
    mut config: AppConfig,
    policy: Option<PolicyArg>,
    min_trust_level: Option<u32>,
) -> AppConfig {
    if let Some(policy) = policy {
        config.valid_job_policy = policy.into();
    }
    if let Some(level) = min_trust_level {
        config.trusted_employer_min_level = level;
    }
    config
}

#[derive(Args)]
struct RegisterArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "candidate")]
    role: Role,
    #[arg(long)]
    org: Option<String>,
}

#[derive(Args)]
struct SubmitArgs {
    #[arg(long, default_value = "")]
    title: String,
    #[arg(long, default_value = "")]
    institution: String,
    #[arg(long, default_value = "")]
    location: String,
    #[arg(long = "department")]
    departments: Vec<String>,
    #[arg(long = "level")]
    levels: Vec<String>,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    link: String,
    /// YYYY-MM-DD
    #[arg(long)]
    deadline: Option<NaiveDate>,
}

impl From<SubmitArgs> for JobDraft {
    fn from(args: SubmitArgs) -> Self {
        JobDraft {
            title: args.title,
            institution: args.institution,
            location: args.location,
            departments: args.departments,
            levels: args.levels,
            description: args.description,
            application_link: args.link,
            deadline: args.deadline,
        }
    }
}

async fn run_all(state: &mut AppState, commands: Vec<Command>) -> Outcome {
    let mut outcome = Outcome::none();
    for command in commands {
        let next = state.dispatch(command).await;
        outcome.toasts.extend(next.toasts);
        outcome.open_url = next.open_url.or(outcome.open_url);
    }
    outcome
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    let Some(command) = args.command else {
        tracing::error!("no subcommand passed");
        return Ok(());
    };
    let mut state = client::open(&settings)?;

    let outcome = match command {
        SubCommandType::Jobs {
            search,
            departments,
            levels,
        } => {
            let mut commands: Vec<Command> = search.into_iter().map(Command::Search).collect();
            commands.extend(departments.into_iter().map(|d| Command::ToggleFacet(Facet::Department, d)));
            commands.extend(levels.into_iter().map(|l| Command::ToggleFacet(Facet::Level, l)));
            let outcome = run_all(&mut state, commands).await;
            render::home(&settings.service_name, &state.render());
            outcome
        }
        SubCommandType::Show { id } => {
            let command = if id.contains("job=") {
                Command::OpenLink(id)
            } else {
                Command::ShowJobDetails(id)
            };
            let outcome = state.dispatch(command).await;
            match state.render_details() {
                Some(details) => render::details(&details),
                None => println!("No such job."),
            }
            outcome
        }
        SubCommandType::Save { id } => state.dispatch(Command::ToggleSave(id)).await,
        SubCommandType::Share { id } => state.dispatch(Command::ShareJob(id)).await,
        SubCommandType::Apply { id } => state.dispatch(Command::ApplyToJob(id)).await,
        SubCommandType::Login { email, password } => {
            state.dispatch(Command::Login { email, password }).await
        }
        SubCommandType::Register(args) => {
            state
                .dispatch(Command::Register(RegisterInput {
                    email: args.email,
                    password: args.password,
                    display_name: args.name,
                    role: args.role,
                    org_name: args.org,
                }))
                .await
        }
        SubCommandType::VerifyEmail { email } => state.dispatch(Command::VerifyEmail { email }).await,
        SubCommandType::Logout => state.dispatch(Command::Logout).await,
        SubCommandType::ResetPassword { email } => {
            state.dispatch(Command::ForgotPassword { email }).await
        }
        SubCommandType::Whoami => {
            render::whoami(&state);
            Outcome::none()
        }
        SubCommandType::Submit(args) => state.dispatch(Command::SubmitJob(args.into())).await,
        SubCommandType::Approve { id } => state.dispatch(Command::ApproveJob(id)).await,
        SubCommandType::Archive { id } => state.dispatch(Command::ArchiveJob(id)).await,
        SubCommandType::Policy {
            policy,
            min_trust_level,
        } => {
            let config = updated_policy(state.config.clone(), policy, min_trust_level);
            state.dispatch(Command::SaveConfig(config)).await
        }
    };
    render::outcome(&outcome);
    Ok(())
}
