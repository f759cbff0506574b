//! Error types for Folio

use thiserror::Error;

/// Main error type for showcase operations
///
/// None of these are fatal. Transitions that fail leave the showcase
/// state exactly as it was.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Project id is not present in the repository
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// Category label is not part of the category index
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Project has no distinct alternate-platform image to toggle to
    #[error("Project has no alternate image: {0}")]
    NoAlternateImage(String),

    /// Card is not rendered under the current filter
    #[error("Card not rendered under current filter: {0}")]
    CardNotRendered(String),

    /// Close requested while no project is open
    #[error("No project is open")]
    NothingOpen,

    /// A project record failed validation
    #[error("Invalid project '{id}': {reason}")]
    InvalidProject { id: String, reason: String },

    /// Two records share the same id
    #[error("Duplicate project id: {0}")]
    DuplicateProject(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Serialization(err.to_string())
    }
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::ProjectNotFound("42".to_string());
        assert_eq!(format!("{}", err), "Project not found: 42");

        let err = FolioError::InvalidProject {
            id: "7".to_string(),
            reason: "empty title".to_string(),
        };
        assert_eq!(format!("{}", err), "Invalid project '7': empty title");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::Serialization(_)));
    }
}
