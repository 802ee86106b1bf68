use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Collaborator,
    Validation,
    /// A referenced record does not exist. Handled as a silent no-op.
    LookupMiss,
    Internal,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("User already exists")]
    DuplicateUser,
    #[error("User not found. Try admin@facultyjobs.com")]
    UserNotFound,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Please verify your email before signing in")]
    EmailNotVerified,
    #[error("{0}")]
    Validation(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("You are not allowed to do that")]
    Forbidden,
    #[error("Job {0} not found")]
    JobNotFound(String),
    #[error("Job {0} already exists")]
    DuplicateJob(String),
    #[error("Rejected record: {0}")]
    InvalidRecord(String),
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error("storage failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt stored value: {0}")]
    Json(#[from] serde_json::Error),
    #[error("improperly configured: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::DuplicateUser => "ERR-AUTH-001",
            Error::UserNotFound => "ERR-AUTH-002",
            Error::InvalidCredentials => "ERR-AUTH-003",
            Error::EmailNotVerified => "ERR-AUTH-004",
            Error::Forbidden => "ERR-AUTH-005",
            Error::Hashing(_) => "ERR-AUTH-006",
            Error::Validation(_) => "ERR-INPUT-001",
            Error::MissingField(_) => "ERR-INPUT-002",
            Error::JobNotFound(_) => "ERR-JOB-001",
            Error::DuplicateJob(_) => "ERR-JOB-002",
            Error::InvalidRecord(_) => "ERR-JOB-003",
            Error::Io(_) => "ERR-STORE-001",
            Error::Json(_) => "ERR-STORE-002",
            Error::Config(_) => "ERR-CONF-001",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UserNotFound
            | Error::InvalidCredentials
            | Error::EmailNotVerified
            | Error::Forbidden
            | Error::Io(_) => ErrorKind::Collaborator,
            Error::DuplicateUser
            | Error::Validation(_)
            | Error::MissingField(_)
            | Error::DuplicateJob(_)
            | Error::InvalidRecord(_) => ErrorKind::Validation,
            Error::JobNotFound(_) => ErrorKind::LookupMiss,
            Error::Hashing(_) | Error::Json(_) | Error::Config(_) => ErrorKind::Internal,
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(e: validator::ValidationErrors) -> Self {
        Error::Validation(e.to_string())
    }
}
