//! Yojana Voice - Multilingual voice assistant for welfare-scheme queries
//!
//! This library provides the core pipeline for a voice-first assistant that
//! answers questions about Indian government welfare schemes:
//! - Speech capture across six locales with per-locale fallback chains
//! - Keyword intent classification (native script, transliterations, English)
//! - Speech synthesis with tiered voice selection and deferred catalogs
//! - A playback session manager serializing the single audio output channel
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      Host                            │
//! │   Microphone  │  Text input  │  Review narration    │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │                   Assistant                          │
//! │   Capture  │  Classify  │  Synthesize  │  Playback  │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │          Platform speech capabilities                │
//! │   CapturePlatform  │  SynthesisCapability           │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod assistant;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod intent;
pub mod language;
pub mod notify;
pub mod prefs;
pub mod review;
pub mod voice;

pub use assistant::{ASSISTANT_OWNER, Assistant, InputMode};
pub use config::Config;
pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use language::{KeywordRule, LanguageProfile, PROFILES, VoiceFallback};
pub use notify::{Notifier, Severity, TracingNotifier};
pub use prefs::{FileStore, MemoryStore, PREFERENCES_KEY, PreferenceStore, UserPreferences};
pub use review::VoiceReview;
pub use voice::{
    CaptureErrorKind, CapturePlatform, CaptureSession, CaptureToken, PlaybackSessionManager,
    PlaybackState, RequestOutcome, SpeechInputController, SpeechOutputController,
    SynthesisCapability, Transcript, Utterance, UtteranceToken, VoiceCandidate,
};
