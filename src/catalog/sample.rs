use super::{Priority, Project, Status};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Return the built-in project dataset. The catalog is immutable for the
/// lifetime of the screen; creation is delegated to a separate screen.
///
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Website Redesign".to_string(),
            description: "Overhaul the marketing site with the new brand language and a responsive layout.".to_string(),
            status: Status::Active,
            priority: Priority::High,
            progress: 75,
            members: 5,
            deadline: date(2026, 12, 15),
            tags: vec![
                "design".to_string(),
                "frontend".to_string(),
                "ui/ux".to_string(),
                "branding".to_string(),
                "responsive".to_string(),
            ],
        },
        Project {
            id: 2,
            title: "Mobile Banking App".to_string(),
            description: "Customer-facing banking application for iOS and Android.".to_string(),
            status: Status::Active,
            priority: Priority::Medium,
            progress: 45,
            members: 8,
            deadline: date(2027, 3, 1),
            tags: vec![
                "mobile".to_string(),
                "fintech".to_string(),
                "security".to_string(),
            ],
        },
        Project {
            id: 3,
            title: "API Migration".to_string(),
            description: "Move the public API from the legacy monolith to the new gateway.".to_string(),
            status: Status::Completed,
            priority: Priority::High,
            progress: 100,
            members: 3,
            deadline: date(2026, 6, 30),
            tags: vec!["backend".to_string(), "infrastructure".to_string()],
        },
        Project {
            id: 4,
            title: "Analytics Dashboard".to_string(),
            description: "Internal dashboard for customer usage metrics, paused pending data review.".to_string(),
            status: Status::OnHold,
            priority: Priority::Low,
            progress: 30,
            members: 4,
            deadline: date(2027, 5, 20),
            tags: vec!["data".to_string(), "analytics".to_string()],
        },
    ]
}
