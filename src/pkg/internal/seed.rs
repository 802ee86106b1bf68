use chrono::{DateTime, NaiveDate, Utc};

use super::adaptors::{
    jobs::spec::{midnight, JobPosting},
    users::spec::{Identity, Role},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    midnight(date(y, m, d))
}

pub fn jobs() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: "job1".into(),
            title: "Assistant Professor – Mathematics".into(),
            institution: "IIT Patna".into(),
            location: "Patna, Bihar, India".into(),
            departments: vec!["Mathematics".into(), "Statistics".into()],
            levels: vec!["Assistant Professor".into()],
            description: "Teach UG/PG, guide projects, contribute to research in control theory. We are looking for candidates with strong background in mathematics and statistics.".into(),
            application_link: "https://example.com/apply".into(),
            deadline: date(2025, 9, 25),
            approved: true,
            approved_at: Some(at(2025, 9, 13) + chrono::Duration::minutes(16 * 60 + 45)),
            created_by: "employer1".into(),
            active: true,
            archived: false,
            created_at: at(2025, 9, 10),
        },
        JobPosting {
            id: "job2".into(),
            title: "Professor – Computer Science".into(),
            institution: "BITS Pilani".into(),
            location: "Pilani, Rajasthan, India".into(),
            departments: vec!["Computer Science".into(), "Information Technology".into()],
            levels: vec!["Professor".into()],
            description: "Lead research in AI/ML, mentor PhD students, teach advanced courses. Looking for experienced faculty with publications in top-tier venues.".into(),
            application_link: "https://example.com/apply2".into(),
            deadline: date(2025, 10, 15),
            approved: false,
            approved_at: None,
            created_by: "employer2".into(),
            active: true,
            archived: false,
            created_at: at(2025, 9, 12),
        },
        JobPosting {
            id: "job3".into(),
            title: "Associate Professor – Physics".into(),
            institution: "NIT Trichy".into(),
            location: "Tiruchirappalli, Tamil Nadu, India".into(),
            departments: vec!["Physics".into()],
            levels: vec!["Associate Professor".into()],
            description: "Research in quantum physics and condensed matter. Strong publication record required.".into(),
            application_link: "https://example.com/apply3".into(),
            deadline: date(2025, 8, 30),
            approved: true,
            approved_at: Some(at(2025, 8, 15)),
            created_by: "employer3".into(),
            active: true,
            archived: true,
            created_at: at(2025, 8, 1),
        },
    ]
}

pub fn users() -> Vec<Identity> {
    vec![
        Identity {
            uid: "admin1".into(),
            email: "admin@facultyjobs.com".into(),
            display_name: "Admin User".into(),
            role: Role::Admin,
            org_name: None,
            verified_email: true,
            trust_level: 5,
            created_at: at(2025, 1, 1),
        },
        Identity {
            uid: "employer1".into(),
            email: "employer@iitpatna.ac.in".into(),
            display_name: "IIT Patna HR".into(),
            role: Role::Employer,
            org_name: Some("IIT Patna".into()),
            verified_email: true,
            trust_level: 3,
            created_at: at(2025, 1, 15),
        },
    ]
}
