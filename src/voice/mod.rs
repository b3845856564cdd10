//! Voice pipeline
//!
//! Capture, synthesis, voice selection, and the playback session manager
//! that serializes access to the single audio output channel.

pub mod capability;
mod capture;
mod playback;
mod selection;
mod synthesis;

pub use capability::{
    CaptureErrorKind, CapturePlatform, CaptureSession, SynthesisCapability, Transcript, Utterance,
    VoiceCandidate,
};
pub use capture::{CaptureToken, SpeechInputController};
pub use playback::{PlaybackSessionManager, PlaybackState, RequestOutcome};
pub use selection::select_voice;
pub use synthesis::{SETTLE_DELAY, SpeechOutputController, UtteranceToken};
