//! Platform speech capability traits
//!
//! The host platform's speech facilities are consumed through these traits so
//! the pipeline never touches a concrete speech API directly. Absence of a
//! capability is a detectable condition (`None` from the platform), not a
//! crash; the callers degrade to text I/O.
//!
//! All callbacks from the platform are delivered back into the controllers as
//! token-tagged method calls; tokens are generation counters, so callbacks
//! belonging to a superseded session are ignored rather than racing the new
//! one.

use crate::Result;

/// One capture event from the platform
///
/// Produced repeatedly during a listening session; only the final transcript
/// feeds classification, and only once.
#[derive(Debug, Clone)]
pub struct Transcript {
    /// Recognized text, possibly interim
    pub text: String,
    /// Whether the platform considers this result final
    pub is_final: bool,
}

impl Transcript {
    /// Interim (non-final) transcript
    #[must_use]
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    /// Final transcript
    #[must_use]
    pub fn final_result(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// Error classes reported by the capture capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureErrorKind {
    /// Capture blocked by the user or platform policy
    /// (maps "not-allowed" / "service-not-allowed")
    PermissionDenied,
    /// Any other capture error, surfaced verbatim
    Other,
}

/// A continuous, interim-results-enabled capture session
pub trait CaptureSession {
    /// Reassign the recognition locale tag
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationRejected` if the platform refuses the tag.
    fn set_lang(&mut self, lang: &str) -> Result<()>;

    /// Begin capturing
    ///
    /// # Errors
    ///
    /// Returns an error if the platform cannot start capture.
    fn start(&mut self) -> Result<()>;

    /// Stop capturing; must be safe to call when not capturing
    fn stop(&mut self);
}

/// Factory for capture sessions
pub trait CapturePlatform {
    /// Create a new capture session, or `None` when the platform offers no
    /// speech-capture capability at all
    fn create_session(&mut self) -> Option<Box<dyn CaptureSession>>;
}

/// An available synthesis voice, drawn from the platform's catalog
///
/// Not owned by this crate: the catalog can change asynchronously, so it is
/// queried fresh per synthesis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceCandidate {
    /// Display name (e.g. "Google हिन्दी")
    pub name: String,
    /// Locale tag (e.g. "hi-IN")
    pub lang: String,
}

impl VoiceCandidate {
    /// Convenience constructor
    #[must_use]
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// One unit of synthesized speech output
#[derive(Debug, Clone)]
pub struct Utterance {
    /// Text to speak
    pub text: String,
    /// Synthesis locale tag
    pub lang: String,
    /// Volume in [0.0, 1.0]
    pub volume: f32,
    /// Speed multiplier in [0.5, 2.0]
    pub rate: f32,
    /// Explicitly selected voice; `None` lets the platform pick its default
    pub voice: Option<VoiceCandidate>,
}

impl Utterance {
    /// Build an utterance, clamping volume and rate into their valid ranges
    #[must_use]
    pub fn new(text: impl Into<String>, lang: impl Into<String>, volume: f32, rate: f32) -> Self {
        Self {
            text: text.into(),
            lang: lang.into(),
            volume: volume.clamp(0.0, 1.0),
            rate: rate.clamp(0.5, 2.0),
            voice: None,
        }
    }
}

/// The platform's synthesis capability
pub trait SynthesisCapability {
    /// Check whether the platform accepts a locale tag for synthesis
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationRejected` for tags the platform refuses;
    /// the caller moves on to the next fallback candidate.
    fn validate_lang(&self, lang: &str) -> Result<()> {
        let _ = lang;
        Ok(())
    }

    /// Queue an utterance for synthesis
    ///
    /// # Errors
    ///
    /// Returns an error if the platform rejects the request outright.
    /// Mid-utterance failures arrive later through the errored callback.
    fn speak(&mut self, utterance: &Utterance) -> Result<()>;

    /// Cancel any queued or active utterance; safe when idle
    fn cancel(&mut self);

    /// Pause the active utterance
    fn pause(&mut self);

    /// Resume a paused utterance
    fn resume(&mut self);

    /// Whether an utterance is currently being spoken
    fn is_speaking(&self) -> bool;

    /// Whether the active utterance is paused
    fn is_paused(&self) -> bool;

    /// Snapshot of the voice catalog; may be empty until the platform fires
    /// its voices-changed notification
    fn voices(&self) -> Vec<VoiceCandidate>;
}
