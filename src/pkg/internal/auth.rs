use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::adaptors::users::spec::{Identity, Role};
use crate::prelude::{Error, Result};

/// The signed-in actor, or its absence. An identity whose email is not yet
/// verified gets its own variant so it never passes for a verified one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Unverified(Identity),
    Verified(Identity),
}

impl Session {
    pub fn from_identity(identity: Identity) -> Self {
        if identity.verified_email {
            Session::Verified(identity)
        } else {
            Session::Unverified(identity)
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Session::Anonymous => None,
            Session::Unverified(identity) | Session::Verified(identity) => Some(identity),
        }
    }

    pub fn verified_role(&self) -> Option<Role> {
        match self {
            Session::Verified(identity) => Some(identity.role),
            _ => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        !matches!(self, Session::Anonymous)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_registration"))]
pub struct RegisterInput {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, max = 72, message = "Password must be 6 to 72 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Please enter your name"))]
    pub display_name: String,
    pub role: Role,
    pub org_name: Option<String>,
}

fn validate_registration(input: &RegisterInput) -> std::result::Result<(), ValidationError> {
    match input.role {
        Role::Admin => Err(ValidationError::new("role")
            .with_message("Admin accounts cannot be self-registered".into())),
        Role::Employer
            if input
                .org_name
                .as_deref()
                .map_or(true, |org| org.trim().is_empty()) =>
        {
            Err(ValidationError::new("org_name")
                .with_message("Employers must provide an organization name".into()))
        }
        _ => Ok(()),
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn register(&mut self, input: RegisterInput) -> Result<Identity>;

    /// Fails with [`Error::EmailNotVerified`] for known but unverified users.
    async fn authenticate(&self, email: &str, password: &str) -> Result<Identity>;

    async fn request_password_reset(&self, email: &str) -> Result<()>;

    async fn sign_out(&mut self) -> Result<()>;

    async fn confirm_email(&mut self, _email: &str) -> Result<Identity> {
        Err(Error::Validation(
            "Email verification is completed through the link sent by email".into(),
        ))
    }

    fn export_users(&self) -> Option<Vec<UserRecord>> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

impl From<Identity> for UserRecord {
    fn from(identity: Identity) -> Self {
        UserRecord {
            identity,
            password_hash: None,
        }
    }
}

pub const PASSWORD_COST: u32 = bcrypt::DEFAULT_COST;

pub async fn hash_password(password: &str, cost: u32) -> Result<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| Error::Hashing(e.to_string()))?
        .map_err(|e| Error::Hashing(e.to_string()))
}

pub async fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let password = password.to_string();
    let hash = hash.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| Error::Hashing(e.to_string()))?
        .map_err(|e| Error::Hashing(e.to_string()))
}

#[derive(Debug, Clone)]
pub struct LocalIdentityProvider {
    users: Vec<UserRecord>,
    auto_verify: bool,
    cost: u32,
}

impl Default for LocalIdentityProvider {
    fn default() -> Self {
        LocalIdentityProvider::new(vec![], true)
    }
}

impl LocalIdentityProvider {
    pub fn new(users: Vec<UserRecord>, auto_verify: bool) -> Self {
        LocalIdentityProvider {
            users,
            auto_verify,
            cost: PASSWORD_COST,
        }
    }

    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    fn find(&self, email: &str) -> Option<&UserRecord> {
        self.users
            .iter()
            .find(|u| u.identity.email.eq_ignore_ascii_case(email.trim()))
    }

    fn new_identity(&self, input: &RegisterInput, now: DateTime<Utc>) -> Identity {
        Identity {
            uid: format!("user_{}", Uuid::new_v4().simple()),
            email: input.email.trim().to_string(),
            display_name: input.display_name.trim().to_string(),
            role: input.role,
            org_name: input.org_name.as_ref().map(|org| org.trim().to_string()),
            verified_email: self.auto_verify,
            trust_level: if input.role == Role::Employer { 1 } else { 0 },
            created_at: now,
        }
        .normalized()
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn register(&mut self, input: RegisterInput) -> Result<Identity> {
        input.validate()?;
        if self.find(&input.email).is_some() {
            return Err(Error::DuplicateUser);
        }
        let identity = self.new_identity(&input, Utc::now());
        let password_hash = hash_password(&input.password, self.cost).await?;
        self.users.push(UserRecord {
            identity: identity.clone(),
            password_hash: Some(password_hash),
        });
        tracing::info!("registered {} as {}", &identity.email, identity.role);
        Ok(identity)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<Identity> {
        let record = self.find(email).ok_or(Error::UserNotFound)?;
        if let Some(hash) = &record.password_hash {
            if !verify_password(password, hash).await? {
                return Err(Error::InvalidCredentials);
            }
        }
        if !record.identity.verified_email {
            return Err(Error::EmailNotVerified);
        }
        Ok(record.identity.clone())
    }

    async fn request_password_reset(&self, email: &str) -> Result<()> {
        let record = self.find(email).ok_or(Error::UserNotFound)?;
        tracing::debug!("password reset requested for {}", &record.identity.uid);
        Ok(())
    }

    async fn sign_out(&mut self) -> Result<()> {
        Ok(())
    }

    async fn confirm_email(&mut self, email: &str) -> Result<Identity> {
        let record = self
            .users
            .iter_mut()
            .find(|u| u.identity.email.eq_ignore_ascii_case(email.trim()))
            .ok_or(Error::UserNotFound)?;
        record.identity.verified_email = true;
        tracing::info!("email {} confirmed", &record.identity.email);
        Ok(record.identity.clone())
    }

    fn export_users(&self) -> Option<Vec<UserRecord>> {
        Some(self.users.clone())
    }
}
