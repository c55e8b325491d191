//! Status filter types for the chip bar.

use crate::catalog::{Project, Status};

/// Specifying the status filter selected in the chip bar. Owned exclusively
/// by the project list screen and reset to `All` on every fresh mount.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StatusFilter {
    All,
    Active,
    Completed,
    OnHold,
}

impl StatusFilter {
    /// Chip bar options in display order.
    ///
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Active,
        StatusFilter::Completed,
        StatusFilter::OnHold,
    ];

    /// Return the chip label for the filter.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Completed => "Completed",
            StatusFilter::OnHold => "On Hold",
        }
    }

    /// Return the status this filter matches, or `None` for `All`.
    ///
    pub fn status(&self) -> Option<Status> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Active => Some(Status::Active),
            StatusFilter::Completed => Some(Status::Completed),
            StatusFilter::OnHold => Some(Status::OnHold),
        }
    }

    /// Whether the given project belongs to this filter's visible set.
    ///
    pub fn matches(&self, project: &Project) -> bool {
        self.status().map_or(true, |status| project.status == status)
    }

    /// Count catalog entries matching this filter. Chip counts always
    /// reference the full catalog, never the filtered view.
    ///
    pub fn count(&self, projects: &[Project]) -> usize {
        projects.iter().filter(|p| self.matches(p)).count()
    }

    /// Return the placeholder message shown when the filtered set is empty.
    ///
    pub fn empty_message(&self) -> String {
        match self.status() {
            None => "No projects yet. Create your first project to get started.".to_string(),
            Some(status) => format!("No {} projects available.", status.label()),
        }
    }

    /// Return the chip to the right of this one, wrapping around.
    ///
    pub fn next(&self) -> StatusFilter {
        let index = Self::OPTIONS.iter().position(|f| f == self).unwrap_or(0);
        Self::OPTIONS[(index + 1) % Self::OPTIONS.len()]
    }

    /// Return the chip to the left of this one, wrapping around.
    ///
    pub fn previous(&self) -> StatusFilter {
        let index = Self::OPTIONS.iter().position(|f| f == self).unwrap_or(0);
        Self::OPTIONS[(index + Self::OPTIONS.len() - 1) % Self::OPTIONS.len()]
    }
}
