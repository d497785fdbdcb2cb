//! Alternative generation request and response types.

use crate::Episode;
use serde::{Deserialize, Serialize};

/// Which episode field to rewrite.
///
/// # Examples
///
/// ```
/// use episodic_core::AlternativeTarget;
///
/// assert_eq!(format!("{}", AlternativeTarget::Description), "description");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum AlternativeTarget {
    /// The episode title
    #[display("title")]
    Title,
    /// The episode description
    #[display("description")]
    Description,
}

impl AlternativeTarget {
    /// Select the targeted field of an episode.
    pub fn select(self, episode: &Episode) -> &str {
        match self {
            Self::Title => &episode.title,
            Self::Description => &episode.description,
        }
    }
}

/// Request body for generating an alternative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlternativeRequest {
    /// Field to rewrite
    pub target: AlternativeTarget,
    /// Caller instructions for the rewrite
    pub prompt: String,
}

/// Result of an alternative generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlternativeResponse {
    /// Stored episode the alternative was generated from
    pub original_episode: Episode,
    /// Field that was rewritten
    pub target: AlternativeTarget,
    /// Caller instructions, echoed
    pub prompt: String,
    /// Generated text
    pub generated_alternative: String,
}
