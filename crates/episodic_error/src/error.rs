//! Top-level error wrapper types.

use crate::{
    ConfigError, EpisodeExistsError, EpisodeNotFoundError, GenerationError, PrompterError,
};
#[cfg(feature = "database")]
use crate::DatabaseError;
use std::any::Any;

/// Every failure an Episodic operation can report.
///
/// # Examples
///
/// ```
/// use episodic_error::{EpisodicError, EpisodeExistsError};
///
/// let err: EpisodicError = EpisodeExistsError::new("Pilot").into();
/// assert!(format!("{}", err).contains("Episode Exists"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum EpisodicErrorKind {
    /// Duplicate title on create
    #[from(EpisodeExistsError)]
    EpisodeExists(EpisodeExistsError),
    /// Unknown episode id
    #[from(EpisodeNotFoundError)]
    EpisodeNotFound(EpisodeNotFoundError),
    /// Alternative generation failed
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Text-generation client error
    #[from(PrompterError)]
    Prompter(PrompterError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

impl EpisodicErrorKind {
    /// The concrete error carried by this kind.
    ///
    /// Lets callers dispatch on the exact error type with
    /// [`Any::type_id`] / [`Any::downcast_ref`].
    pub fn as_any(&self) -> &dyn Any {
        match self {
            Self::EpisodeExists(e) => e as &dyn Any,
            Self::EpisodeNotFound(e) => e as &dyn Any,
            Self::Generation(e) => e as &dyn Any,
            Self::Prompter(e) => e as &dyn Any,
            #[cfg(feature = "database")]
            Self::Database(e) => e as &dyn Any,
            Self::Config(e) => e as &dyn Any,
        }
    }
}

/// Episodic error with kind discrimination.
///
/// # Examples
///
/// ```
/// use episodic_error::{EpisodicResult, ConfigError};
///
/// fn might_fail() -> EpisodicResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Episodic Error: {}", _0)]
pub struct EpisodicError(Box<EpisodicErrorKind>);

impl EpisodicError {
    /// Create a new error from a kind.
    pub fn new(kind: EpisodicErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &EpisodicErrorKind {
        &self.0
    }

    /// Borrow the concrete error as `E` if that is what this error carries.
    ///
    /// ```
    /// use episodic_error::{EpisodicError, EpisodeNotFoundError, GenerationError};
    ///
    /// let err: EpisodicError = EpisodeNotFoundError::new(3).into();
    /// assert_eq!(err.downcast_ref::<EpisodeNotFoundError>().map(|e| e.id), Some(3));
    /// assert!(err.downcast_ref::<GenerationError>().is_none());
    /// ```
    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        self.0.as_any().downcast_ref::<E>()
    }
}

// Generic From implementation for any type that converts to EpisodicErrorKind
impl<T> From<T> for EpisodicError
where
    T: Into<EpisodicErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Episodic operations.
pub type EpisodicResult<T> = std::result::Result<T, EpisodicError>;
