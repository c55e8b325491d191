use super::{Project, Status};

/// Aggregate statistics over the full catalog, independent of the active
/// filter.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub active: usize,
    pub average_progress: u8,
}

impl Summary {
    /// Compute summary statistics for the given catalog. Average progress
    /// rounds half up; an empty catalog yields an average of zero.
    ///
    pub fn compute(projects: &[Project]) -> Summary {
        let total = projects.len();
        let active = projects
            .iter()
            .filter(|p| p.status == Status::Active)
            .count();
        let average_progress = if total == 0 {
            0
        } else {
            let sum: u32 = projects
                .iter()
                .map(|p| u32::from(p.progress_clamped()))
                .sum();
            let count = total as u32;
            ((sum + count / 2) / count) as u8
        };
        Summary {
            total,
            active,
            average_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_projects;

    #[test]
    fn average_progress_rounds_half_up() {
        // 75 + 45 + 100 + 30 = 250 over 4 records, 62.5 rounds to 63.
        let summary = Summary::compute(&sample_projects());
        assert_eq!(summary.total, 4);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.average_progress, 63);
    }

    #[test]
    fn empty_catalog_averages_to_zero() {
        let summary = Summary::compute(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.active, 0);
        assert_eq!(summary.average_progress, 0);
    }

    #[test]
    fn summary_ignores_out_of_range_progress() {
        let mut projects = sample_projects();
        projects[0].progress = 200;
        let summary = Summary::compute(&projects);
        // Clamped to 100: (100 + 45 + 100 + 30 + 2) / 4 = 69.
        assert_eq!(summary.average_progress, 69);
    }
}
