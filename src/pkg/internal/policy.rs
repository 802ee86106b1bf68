use serde::{Deserialize, Serialize};

use super::adaptors::{jobs::spec::JobDraft, users::spec::Identity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidJobPolicy {
    AdminApproval,
    AutoValidation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoValidation {
    pub require_verified_email: bool,
    pub required_fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub valid_job_policy: ValidJobPolicy,
    pub auto_validation: AutoValidation,
    pub trusted_employer_min_level: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            valid_job_policy: ValidJobPolicy::AdminApproval,
            auto_validation: AutoValidation {
                require_verified_email: true,
                required_fields: ["title", "institution", "location", "departments", "levels", "deadline"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            },
            trusted_employer_min_level: 2,
        }
    }
}

impl AppConfig {
    pub fn missing_fields<'a>(&'a self, draft: &JobDraft) -> Vec<&'a str> {
        self.auto_validation
            .required_fields
            .iter()
            .map(String::as_str)
            .filter(|field| !draft.is_filled(field))
            .collect()
    }

    pub fn auto_approves(&self, draft: &JobDraft, employer: &Identity) -> bool {
        if !self.missing_fields(draft).is_empty() {
            return false;
        }
        if self.auto_validation.require_verified_email && !employer.verified_email {
            return false;
        }
        match self.valid_job_policy {
            ValidJobPolicy::AutoValidation => true,
            ValidJobPolicy::AdminApproval => employer.trust_level >= self.trusted_employer_min_level,
        }
    }
}
