//! Error types for text-generation clients.

/// Error kinds for prompter operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum PrompterErrorKind {
    /// HTTP request failed
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// API returned a non-success status
    #[display("API error ({}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Failed to deserialize response
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),

    /// Response contained no completion
    #[display("Response contained no completion")]
    EmptyCompletion,

    /// Client is misconfigured
    #[display("Configuration error: {}", _0)]
    Configuration(String),
}

/// Error wrapper with location tracking.
///
/// # Examples
///
/// ```
/// use episodic_error::{PrompterError, PrompterErrorKind};
///
/// let err = PrompterError::new(PrompterErrorKind::EmptyCompletion);
/// assert!(format!("{}", err).contains("no completion"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Prompter Error: {} at line {} in {}", kind, line, file)]
pub struct PrompterError {
    /// The error kind
    pub kind: PrompterErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl PrompterError {
    /// Create a new PrompterError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PrompterErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
