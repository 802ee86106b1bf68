use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::prelude::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub institution: String,
    pub location: String,
    pub departments: Vec<String>,
    pub levels: Vec<String>,
    pub description: String,
    #[serde(rename = "applicationLink")]
    pub application_link: String,
    pub deadline: NaiveDate,
    pub approved: bool,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_by: String,
    pub active: bool,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    pub fn deadline_at(&self) -> DateTime<Utc> {
        midnight(self.deadline)
    }

    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.institution,
            self.location,
            self.departments.join(" ")
        )
        .to_lowercase()
    }

    pub fn is_listed(&self) -> bool {
        self.approved && !self.archived && self.active
    }

    pub fn recency(&self) -> DateTime<Utc> {
        self.approved_at.unwrap_or(self.created_at)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawJobPosting {
    pub id: Option<String>,
    pub title: Option<String>,
    pub institution: Option<String>,
    pub location: Option<String>,
    pub departments: Option<Vec<String>>,
    pub levels: Option<Vec<String>>,
    pub description: Option<String>,
    #[serde(rename = "applicationLink", alias = "application_link")]
    pub application_link: Option<String>,
    pub deadline: Option<String>,
    pub approved: Option<bool>,
    pub approved_at: Option<String>,
    pub created_by: Option<String>,
    pub active: Option<bool>,
    pub archived: Option<bool>,
    pub created_at: Option<String>,
}

impl TryFrom<RawJobPosting> for JobPosting {
    type Error = Error;

    fn try_from(raw: RawJobPosting) -> Result<Self> {
        let id = raw
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| Error::InvalidRecord("job without id".into()))?;
        let deadline = raw
            .deadline
            .as_deref()
            .and_then(parse_date)
            .ok_or_else(|| Error::InvalidRecord(format!("job {id} has no usable deadline")))?;

        let approved = raw.approved.unwrap_or(false);
        let approved_at = raw.approved_at.as_deref().and_then(parse_instant);
        let created_at = raw
            .created_at
            .as_deref()
            .and_then(parse_instant)
            .or(approved_at)
            .unwrap_or_else(|| midnight(deadline));
        let approved_at = match (approved, approved_at) {
            (false, _) => None,
            (true, Some(at)) => Some(at),
            (true, None) => {
                tracing::warn!("job {} approved without timestamp, using creation time", &id);
                Some(created_at)
            }
        };

        Ok(JobPosting {
            id,
            title: raw.title.unwrap_or_default(),
            institution: raw.institution.unwrap_or_default(),
            location: raw.location.unwrap_or_default(),
            departments: dedup(raw.departments.unwrap_or_default()),
            levels: dedup(raw.levels.unwrap_or_default()),
            description: raw.description.unwrap_or_default(),
            application_link: raw.application_link.unwrap_or_default(),
            deadline,
            approved,
            approved_at,
            created_by: raw.created_by.unwrap_or_default(),
            active: raw.active.unwrap_or(true),
            archived: raw.archived.unwrap_or(false),
            created_at,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct JobDraft {
    pub title: String,
    pub institution: String,
    pub location: String,
    pub departments: Vec<String>,
    pub levels: Vec<String>,
    pub description: String,
    pub application_link: String,
    pub deadline: Option<NaiveDate>,
}

impl JobDraft {
    /// Whether the named field carries a value. Names use the stored
    /// (camelCase) spelling; unknown names count as filled.
    pub fn is_filled(&self, field: &str) -> bool {
        match field {
            "title" => !self.title.trim().is_empty(),
            "institution" => !self.institution.trim().is_empty(),
            "location" => !self.location.trim().is_empty(),
            "departments" => !self.departments.is_empty(),
            "levels" => !self.levels.is_empty(),
            "description" => !self.description.trim().is_empty(),
            "applicationLink" => !self.application_link.trim().is_empty(),
            "deadline" => self.deadline.is_some(),
            other => {
                tracing::warn!("unknown required field {}", other);
                true
            }
        }
    }

    pub fn into_posting(
        self,
        id: String,
        created_by: &str,
        deadline: NaiveDate,
        now: DateTime<Utc>,
        approved: bool,
    ) -> JobPosting {
        JobPosting {
            id,
            title: self.title,
            institution: self.institution,
            location: self.location,
            departments: dedup(self.departments),
            levels: dedup(self.levels),
            description: self.description,
            application_link: self.application_link,
            deadline,
            approved,
            approved_at: approved.then_some(now),
            created_by: created_by.to_string(),
            active: true,
            archived: false,
            created_at: now,
        }
    }
}

pub fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .ok()
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(midnight))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|t| t.with_timezone(&Utc).date_naive()))
}

fn dedup(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
