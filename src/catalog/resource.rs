use chrono::NaiveDate;
use fake::Dummy;

/// Defines lifecycle status of a project.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq)]
pub enum Status {
    Active,
    Completed,
    OnHold,
}

impl Status {
    /// Return the display label for the status.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Completed => "completed",
            Status::OnHold => "on hold",
        }
    }
}

/// Defines priority level of a project.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Return the display label for the priority.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Defines project data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub progress: u8,
    pub members: u32,
    pub deadline: NaiveDate,
    pub tags: Vec<String>,
}

impl Project {
    /// Return progress clamped to the displayable percentage range. The
    /// sample data stays within bounds; generated data may not.
    ///
    pub fn progress_clamped(&self) -> u8 {
        self.progress.min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn status_labels() {
        assert_eq!(Status::Active.label(), "active");
        assert_eq!(Status::Completed.label(), "completed");
        assert_eq!(Status::OnHold.label(), "on hold");
    }

    #[test]
    fn priority_labels() {
        assert_eq!(Priority::High.label(), "high");
        assert_eq!(Priority::Medium.label(), "medium");
        assert_eq!(Priority::Low.label(), "low");
    }

    #[test]
    fn progress_clamped_to_percentage_range() {
        let mut project: Project = Faker.fake();
        project.progress = 250;
        assert_eq!(project.progress_clamped(), 100);
        project.progress = 42;
        assert_eq!(project.progress_clamped(), 42);
    }
}
