//! Alternative generation failure.

/// Text generation failed while producing an alternative.
///
/// Wraps whatever the prompter reported into the service's own error so the
/// HTTP layer never renders adapter-specific types. `message` keeps the cause
/// for logging only.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", message, line, file)]
pub struct GenerationError {
    /// Description of the underlying failure
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use episodic_error::GenerationError;
    ///
    /// let err = GenerationError::new("quota exceeded");
    /// assert!(err.message.contains("quota"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
