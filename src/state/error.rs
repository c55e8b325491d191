//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Project not found in catalog
    #[error("Project not found: {id}")]
    ProjectNotFound { id: u32 },

    /// Invalid view transition
    #[error("Invalid view transition: {0}")]
    InvalidViewTransition(String),

    /// Generic state error
    #[error("State error: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::ProjectNotFound { id: 7 };
        assert!(error.to_string().contains("Project not found"));
        assert!(error.to_string().contains('7'));

        let error = StateError::InvalidViewTransition("Invalid".to_string());
        assert!(error.to_string().contains("Invalid view transition"));

        let error = StateError::Other("Generic error".to_string());
        assert!(error.to_string().contains("Generic error"));
    }
}
