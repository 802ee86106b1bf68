use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::prelude::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employer,
    Candidate,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::Employer => "employer",
            Role::Candidate => "candidate",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "employer" => Ok(Role::Employer),
            "candidate" => Ok(Role::Candidate),
            other => Err(Error::Validation(format!("unknown role: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    pub role: Role,
    #[serde(rename = "orgName", default, skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
    #[serde(rename = "verifiedEmail", default)]
    pub verified_email: bool,
    #[serde(default)]
    pub trust_level: u32,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    pub fn normalized(mut self) -> Self {
        if self.role != Role::Employer {
            self.org_name = None;
        }
        self
    }
}
