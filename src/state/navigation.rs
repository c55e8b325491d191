//! Navigation-related state types.
//!
//! This module contains the view enum and its route paths. Navigation is
//! fire-and-forget: a view is pushed onto the stack and nothing is awaited.

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    ProjectList,
    ProjectDetail(u32),
    CreateProject,
}

impl View {
    /// Return the route path for the view.
    ///
    pub fn route(&self) -> String {
        match self {
            View::ProjectList => "projects".to_string(),
            View::ProjectDetail(id) => format!("detail/{}", id),
            View::CreateProject => "create".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_route_is_parameterized_by_id() {
        assert_eq!(View::ProjectDetail(3).route(), "detail/3");
        assert_eq!(View::ProjectDetail(42).route(), "detail/42");
    }

    #[test]
    fn static_routes() {
        assert_eq!(View::ProjectList.route(), "projects");
        assert_eq!(View::CreateProject.route(), "create");
    }
}
