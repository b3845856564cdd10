//! Speech input control
//!
//! Wraps a continuous, interim-results capture session bound to a target
//! locale. A new `start` always supersedes the previous session: the old
//! session is stopped and its token invalidated before the new one is
//! created, so duplicate callbacks from a stale session can never trigger a
//! second classification.

use crate::language::{self, LanguageProfile};
use crate::voice::capability::{CaptureErrorKind, CapturePlatform, CaptureSession, Transcript};
use crate::{Error, Result};

/// Token identifying one capture session
///
/// Platform callbacks carry the token of the session they were created
/// under; events with a stale token are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureToken(u64);

struct ActiveCapture {
    session: Box<dyn CaptureSession>,
    token: CaptureToken,
    profile: &'static LanguageProfile,
    /// Index into the profile's recognition candidates currently in use
    candidate_idx: usize,
    /// Last final transcript already handed to classification; guards
    /// against duplicate final events for the same utterance
    finalized: Option<String>,
    listening: bool,
}

/// Manages the single process-wide capture session
pub struct SpeechInputController {
    platform: Box<dyn CapturePlatform>,
    active: Option<ActiveCapture>,
    generation: u64,
}

impl SpeechInputController {
    /// Create a controller over a capture platform
    #[must_use]
    pub fn new(platform: Box<dyn CapturePlatform>) -> Self {
        Self {
            platform,
            active: None,
            generation: 0,
        }
    }

    /// (Re)start capture for a locale
    ///
    /// Implicitly stops any previous session first. The session is bound to
    /// the first recognition candidate the platform accepts.
    ///
    /// # Errors
    ///
    /// - `UnsupportedCapability` when the platform offers no speech capture
    ///   at all; the caller must fall back to text input.
    /// - `ConfigurationRejected` when every recognition candidate is refused.
    pub fn start(&mut self, locale_id: &str) -> Result<CaptureToken> {
        self.stop();

        let Some(mut session) = self.platform.create_session() else {
            return Err(Error::UnsupportedCapability(
                "speech capture is not available on this platform".to_string(),
            ));
        };

        let profile = language::profile(locale_id);
        let candidate_idx = Self::bind_first_accepted_lang(&mut *session, profile, 0)?;
        session.start()?;

        self.generation += 1;
        let token = CaptureToken(self.generation);
        tracing::debug!(
            locale = profile.locale_id,
            lang = profile.recognition_locales[candidate_idx],
            generation = self.generation,
            "capture session started"
        );

        self.active = Some(ActiveCapture {
            session,
            token,
            profile,
            candidate_idx,
            finalized: None,
            listening: true,
        });
        Ok(token)
    }

    /// Stop capturing; idempotent, safe with no active session
    pub fn stop(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.session.stop();
            tracing::debug!(locale = active.profile.locale_id, "capture session stopped");
        }
    }

    /// Whether a capture session is currently listening
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.active.as_ref().is_some_and(|a| a.listening)
    }

    /// Handle a transcript event from the platform
    ///
    /// Returns the final text to classify, at most once per final utterance:
    /// interim results, stale tokens, trailing empty finals, and duplicate
    /// final events all return `None`.
    pub fn on_transcript(&mut self, token: CaptureToken, transcript: &Transcript) -> Option<String> {
        let active = self.active.as_mut()?;
        if active.token != token {
            tracing::trace!(?token, "ignoring transcript from superseded session");
            return None;
        }

        tracing::trace!(
            text = %transcript.text,
            is_final = transcript.is_final,
            "capture result"
        );

        if !transcript.is_final {
            return None;
        }

        let text = transcript.text.trim();
        if text.is_empty() {
            return None;
        }
        if active.finalized.as_deref() == Some(text) {
            tracing::debug!("duplicate final transcript, already classified");
            return None;
        }

        active.finalized = Some(text.to_string());
        Some(text.to_string())
    }

    /// Handle a capture error from the platform
    ///
    /// Permission errors on a locale with known-limited platform support walk
    /// the remaining recognition candidates before anything is surfaced; the
    /// returned error, if any, is what the caller should show the user.
    pub fn on_error(
        &mut self,
        token: CaptureToken,
        kind: CaptureErrorKind,
        message: &str,
    ) -> Option<Error> {
        let surfaced = {
            let active = self.active.as_mut()?;
            if active.token != token {
                tracing::trace!(?token, "ignoring error from superseded session");
                return None;
            }

            active.listening = false;
            tracing::warn!(?kind, message, locale = active.profile.locale_id, "capture error");

            match kind {
                CaptureErrorKind::PermissionDenied if active.profile.limited_platform_support => {
                    let next = active.candidate_idx + 1;
                    match Self::restart_with_next_candidate(active, next) {
                        Ok(idx) => {
                            active.candidate_idx = idx;
                            active.listening = true;
                            return None;
                        }
                        Err(_) => Error::UnsupportedCapability(format!(
                            "no working recognition locale for this language: {message}"
                        )),
                    }
                }
                CaptureErrorKind::PermissionDenied => Error::PermissionDenied(message.to_string()),
                CaptureErrorKind::Other => Error::Recognition(message.to_string()),
            }
        };

        self.stop();
        Some(surfaced)
    }

    /// Handle the session-end notification from the platform
    pub fn on_end(&mut self, token: CaptureToken) {
        if let Some(active) = self.active.as_mut()
            && active.token == token
        {
            active.listening = false;
            tracing::debug!(locale = active.profile.locale_id, "capture session ended");
        }
    }

    /// Bind the first recognition candidate the session accepts, starting
    /// from `from_idx`; returns the accepted index
    fn bind_first_accepted_lang(
        session: &mut dyn CaptureSession,
        profile: &LanguageProfile,
        from_idx: usize,
    ) -> Result<usize> {
        for (idx, candidate) in profile.recognition_locales.iter().enumerate().skip(from_idx) {
            match session.set_lang(candidate) {
                Ok(()) => return Ok(idx),
                Err(e) => {
                    tracing::debug!(lang = candidate, error = %e, "recognition locale rejected");
                }
            }
        }
        Err(Error::ConfigurationRejected(format!(
            "no recognition locale accepted for {}",
            profile.locale_id
        )))
    }

    /// Rebind and restart the active session on the next working candidate
    fn restart_with_next_candidate(active: &mut ActiveCapture, from_idx: usize) -> Result<usize> {
        for (idx, candidate) in active
            .profile
            .recognition_locales
            .iter()
            .enumerate()
            .skip(from_idx)
        {
            if active.session.set_lang(candidate).is_err() {
                continue;
            }
            match active.session.start() {
                Ok(()) => {
                    tracing::info!(
                        locale = active.profile.locale_id,
                        lang = candidate,
                        "recovered capture with fallback recognition locale"
                    );
                    return Ok(idx);
                }
                Err(e) => {
                    tracing::debug!(lang = candidate, error = %e, "fallback candidate failed");
                }
            }
        }
        Err(Error::ConfigurationRejected(format!(
            "recognition candidates exhausted for {}",
            active.profile.locale_id
        )))
    }
}
