//! Voice reviews
//!
//! Pre-recorded community reviews of schemes, narrated through the shared
//! playback channel. A review's playback owner is derived from its id, so
//! the session manager can tell review narration apart from assistant
//! replies and from other reviews.

use serde::{Deserialize, Serialize};

use crate::language;

/// A community review narrated on request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceReview {
    /// Stable review identifier
    pub id: String,
    /// Reviewer display name
    pub user_name: String,
    /// Scheme the review is about
    pub scheme_name: String,
    /// Review body, read aloud verbatim
    pub review_text: String,
    /// Locale tag of the review text (e.g. "hi-IN")
    pub language: String,
}

impl VoiceReview {
    /// Playback owner id for this review
    #[must_use]
    pub fn owner_id(&self) -> String {
        format!("review:{}", self.id)
    }

    /// Human-readable name of the review's language
    #[must_use]
    pub fn language_name(&self) -> String {
        language::display_name(&self.language)
    }
}
