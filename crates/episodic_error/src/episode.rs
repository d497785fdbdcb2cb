//! Episode record errors.

/// An episode with the same title is already stored.
///
/// # Examples
///
/// ```
/// use episodic_error::EpisodeExistsError;
///
/// let err = EpisodeExistsError::new("The Future of AI");
/// assert_eq!(err.title, "The Future of AI");
/// assert!(format!("{}", err).contains("The Future of AI"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Episode Exists: title '{}' at line {} in {}", title, line, file)]
pub struct EpisodeExistsError {
    /// Title that collided with a stored episode
    pub title: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl EpisodeExistsError {
    /// Create a new EpisodeExistsError for the given title.
    #[track_caller]
    pub fn new(title: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            title: title.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

/// No episode is stored under the requested id.
///
/// # Examples
///
/// ```
/// use episodic_error::EpisodeNotFoundError;
///
/// let err = EpisodeNotFoundError::new(42);
/// assert_eq!(err.id, 42);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Episode Not Found: id {} at line {} in {}", id, line, file)]
pub struct EpisodeNotFoundError {
    /// Requested episode id
    pub id: i32,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl EpisodeNotFoundError {
    /// Create a new EpisodeNotFoundError for the given id.
    #[track_caller]
    pub fn new(id: i32) -> Self {
        let location = std::panic::Location::caller();
        Self {
            id,
            line: location.line(),
            file: location.file(),
        }
    }
}
