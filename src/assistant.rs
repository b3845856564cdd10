//! Assistant orchestration
//!
//! Wires the pipeline together: capture events feed classification, the
//! classified response goes out through the playback session manager under
//! the `assistant` owner, and every failure becomes a toast rather than a
//! crash. When the platform offers no capture the assistant latches into
//! text-input mode; when it offers no synthesis, responses are still
//! returned to the host for display.

use crate::dictionary::Dictionary;
use crate::notify::{Notifier, Severity};
use crate::prefs::UserPreferences;
use crate::review::VoiceReview;
use crate::voice::{
    CaptureErrorKind, CaptureToken, PlaybackSessionManager, RequestOutcome, SpeechInputController,
    Transcript, UtteranceToken,
};
use crate::{Error, intent, language};

/// Playback owner for assistant replies
pub const ASSISTANT_OWNER: &str = "assistant";

/// How the assistant currently accepts questions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Microphone capture via the platform
    Voice,
    /// Typed input only; entered when capture is unsupported
    Text,
}

/// Top-level assistant tying capture, classification, and playback together
pub struct Assistant {
    input: SpeechInputController,
    playback: PlaybackSessionManager,
    notifier: Box<dyn Notifier>,
    dictionary: Dictionary,
    prefs: UserPreferences,
    locale_id: String,
    mode: InputMode,
    capture_token: Option<CaptureToken>,
    synthesis_notice_shown: bool,
}

impl Assistant {
    /// Assemble an assistant over the given controllers
    #[must_use]
    pub fn new(
        input: SpeechInputController,
        playback: PlaybackSessionManager,
        notifier: Box<dyn Notifier>,
        dictionary: Dictionary,
        prefs: UserPreferences,
        locale_id: impl Into<String>,
    ) -> Self {
        Self {
            input,
            playback,
            notifier,
            dictionary,
            prefs,
            locale_id: locale_id.into(),
            mode: InputMode::Voice,
            capture_token: None,
            synthesis_notice_shown: false,
        }
    }

    /// Current input mode
    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Active response locale
    #[must_use]
    pub fn locale_id(&self) -> &str {
        &self.locale_id
    }

    /// Switch the response locale; takes effect on the next start/classify
    pub fn set_locale(&mut self, locale_id: impl Into<String>) {
        self.locale_id = locale_id.into();
        tracing::info!(locale = %self.locale_id, "assistant locale changed");
    }

    /// Whether capture is currently listening
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.input.is_listening()
    }

    /// Token of the active capture session; hosts tag capture callbacks
    /// with it
    #[must_use]
    pub fn capture_token(&self) -> Option<CaptureToken> {
        self.capture_token
    }

    /// Playback manager, exposed for hosts that drive synthesis callbacks
    pub fn playback_mut(&mut self) -> &mut PlaybackSessionManager {
        &mut self.playback
    }

    /// Start listening, or stop if already listening
    ///
    /// An unsupported capture platform latches text-input mode and toasts
    /// the notice once; later toggles in text mode are silent no-ops.
    /// Returns whether the assistant is listening afterwards.
    pub fn toggle_listening(&mut self) -> bool {
        if self.mode == InputMode::Text {
            return false;
        }
        if self.input.is_listening() {
            self.input.stop();
            self.capture_token = None;
            return false;
        }

        match self.input.start(&self.locale_id) {
            Ok(token) => {
                self.capture_token = Some(token);
                self.notifier.toast(
                    self.dictionary.get_or("listening", "Listening"),
                    self.dictionary
                        .get_or("listeningHint", "Ask about any government scheme"),
                    Severity::Info,
                );
                true
            }
            Err(Error::UnsupportedCapability(_)) => {
                self.mode = InputMode::Text;
                self.notifier.toast(
                    self.dictionary
                        .get_or("voiceNotSupported", "Voice input not supported"),
                    self.dictionary.get_or(
                        "voiceNotSupportedHint",
                        "Your device does not support speech input. Please type your question.",
                    ),
                    Severity::Info,
                );
                false
            }
            Err(e) => {
                self.notifier.toast(
                    self.dictionary.get_or("micError", "Microphone error"),
                    &e.to_string(),
                    Severity::Destructive,
                );
                false
            }
        }
    }

    /// Deliver a capture transcript event
    ///
    /// A final, non-duplicate transcript is classified and spoken; the
    /// response text is returned for display. Interim and stale events
    /// return `None`.
    pub async fn handle_transcript(
        &mut self,
        token: CaptureToken,
        transcript: &Transcript,
    ) -> Option<&'static str> {
        let text = self.input.on_transcript(token, transcript)?;
        self.respond(&text).await
    }

    /// Deliver a capture error event; toasts whatever the controller surfaces
    pub fn handle_capture_error(
        &mut self,
        token: CaptureToken,
        kind: CaptureErrorKind,
        message: &str,
    ) {
        if let Some(e) = self.input.on_error(token, kind, message) {
            self.capture_token = None;
            self.notifier.toast(
                self.dictionary.get_or("micError", "Microphone error"),
                &e.to_string(),
                Severity::Destructive,
            );
        }
    }

    /// Deliver the capture session-end event
    pub fn handle_capture_ended(&mut self, token: CaptureToken) {
        self.input.on_end(token);
    }

    /// Classify typed text and speak the response
    ///
    /// The text-input path; returns the response for display, or `None` for
    /// empty input.
    pub async fn submit_text(&mut self, text: &str) -> Option<&'static str> {
        self.respond(text).await
    }

    /// Narrate a community review through the shared playback channel
    ///
    /// # Errors
    ///
    /// Propagates playback errors; the toast has already been shown.
    pub async fn play_review(&mut self, review: &VoiceReview) -> crate::Result<RequestOutcome> {
        let locale = review
            .language
            .split('-')
            .next()
            .unwrap_or(&review.language)
            .to_string();
        let outcome = self
            .playback
            .request(
                &review.owner_id(),
                &review.review_text,
                &locale,
                self.prefs.default_volume,
                self.prefs.default_speed,
            )
            .await?;
        if outcome == RequestOutcome::Started {
            self.notifier.toast(
                self.dictionary.get_or("playingReview", "Playing review"),
                &format!(
                    "Playing {}'s review in {}",
                    review.user_name,
                    review.language_name()
                ),
                Severity::Info,
            );
        }
        Ok(outcome)
    }

    /// Synthesis-started callback
    pub fn handle_playback_started(&mut self, token: UtteranceToken) {
        self.playback.handle_started(token);
    }

    /// Synthesis-ended callback
    pub fn handle_playback_ended(&mut self, token: UtteranceToken) {
        self.playback.handle_ended(token);
    }

    /// Synthesis-errored callback; toasts the failure
    pub fn handle_playback_errored(&mut self, token: UtteranceToken, message: &str) {
        if let Some(e) = self.playback.handle_errored(token, message) {
            self.notifier.toast(
                self.dictionary.get_or("playbackError", "Playback error"),
                &e.to_string(),
                Severity::Destructive,
            );
        }
    }

    /// Voice-catalog-changed callback; flushes deferred speech
    pub fn handle_voices_changed(&mut self) {
        if let Err(e) = self.playback.handle_voices_changed() {
            self.notifier.toast(
                self.dictionary.get_or("playbackError", "Playback error"),
                &e.to_string(),
                Severity::Destructive,
            );
        }
    }

    /// Classify and speak; shared by the voice and text paths
    async fn respond(&mut self, text: &str) -> Option<&'static str> {
        let response = match intent::classify(text, &self.locale_id) {
            Some(response) => response,
            None if text.trim().is_empty() => return None,
            None => language::profile(&self.locale_id).fallback_response,
        };

        if !self.playback.is_supported() {
            if !self.synthesis_notice_shown {
                self.synthesis_notice_shown = true;
                self.notifier.toast(
                    self.dictionary
                        .get_or("audioNotSupported", "Audio output not supported"),
                    self.dictionary.get_or(
                        "audioNotSupportedHint",
                        "Responses will be shown as text only.",
                    ),
                    Severity::Info,
                );
            }
            return Some(response);
        }

        // A fresh reply always replaces whatever the assistant is still
        // saying; the same-owner toggle is reserved for replaying the same
        // content, as review narration does.
        if self.playback.current_owner() == Some(ASSISTANT_OWNER) {
            self.playback.stop();
        }

        if let Err(e) = self
            .playback
            .request(
                ASSISTANT_OWNER,
                response,
                &self.locale_id,
                self.prefs.default_volume,
                self.prefs.default_speed,
            )
            .await
        {
            self.notifier.toast(
                self.dictionary.get_or("playbackError", "Playback error"),
                &e.to_string(),
                Severity::Destructive,
            );
        }
        Some(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::{CapturePlatform, CaptureSession, SpeechOutputController};

    struct NoCapture;

    impl CapturePlatform for NoCapture {
        fn create_session(&mut self) -> Option<Box<dyn CaptureSession>> {
            None
        }
    }

    fn headless_assistant(locale: &str) -> Assistant {
        Assistant::new(
            SpeechInputController::new(Box::new(NoCapture)),
            PlaybackSessionManager::new(SpeechOutputController::new(None)),
            Box::new(crate::notify::TracingNotifier),
            Dictionary::new(),
            UserPreferences::default(),
            locale,
        )
    }

    #[test]
    fn test_unsupported_capture_latches_text_mode() {
        let mut assistant = headless_assistant("en");
        assert_eq!(assistant.mode(), InputMode::Voice);
        assert!(!assistant.toggle_listening());
        assert_eq!(assistant.mode(), InputMode::Text);
        // Further toggles stay quiet and never leave text mode.
        assert!(!assistant.toggle_listening());
        assert_eq!(assistant.mode(), InputMode::Text);
    }

    #[tokio::test]
    async fn test_text_path_classifies_without_audio() {
        let mut assistant = headless_assistant("en");
        let response = assistant.submit_text("I need help with my farm").await;
        assert!(response.is_some_and(|r| r.contains("PM-KISAN")));
    }

    #[tokio::test]
    async fn test_empty_text_produces_no_response() {
        let mut assistant = headless_assistant("hi");
        assert_eq!(assistant.submit_text("   ").await, None);
    }
}
