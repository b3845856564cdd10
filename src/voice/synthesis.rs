//! Speech output control
//!
//! Turns a response string into a synthesis request: cancels whatever was
//! in flight, waits for the platform's audio subsystem to settle, resolves
//! the synthesis locale through the profile's candidate chain, and picks a
//! voice from the current catalog. When the catalog is empty (common right
//! after startup) the prepared utterance is parked until the platform's
//! voices-changed notification, and the parked utterance is dropped if it
//! was superseded in the meantime.

use std::time::Duration;

use crate::language::{self, LanguageProfile};
use crate::voice::capability::{SynthesisCapability, Utterance};
use crate::voice::selection::select_voice;
use crate::{Error, Result};

/// Delay before issuing a synthesis request, letting the platform's audio
/// subsystem settle after a prior cancellation
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Token identifying one synthesis request
///
/// Lifecycle callbacks carry the token of the request they belong to;
/// tokens from superseded requests are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtteranceToken(u64);

struct DeferredUtterance {
    utterance: Utterance,
    token: UtteranceToken,
    profile: &'static LanguageProfile,
}

/// Manages the single process-wide synthesis channel
pub struct SpeechOutputController {
    capability: Option<Box<dyn SynthesisCapability>>,
    deferred: Option<DeferredUtterance>,
    generation: u64,
}

impl SpeechOutputController {
    /// Create a controller; `None` models a platform without synthesis
    #[must_use]
    pub fn new(capability: Option<Box<dyn SynthesisCapability>>) -> Self {
        Self {
            capability,
            deferred: None,
            generation: 0,
        }
    }

    /// Whether the platform offers synthesis at all
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.capability.is_some()
    }

    /// Whether a token belongs to the current (not superseded) request
    #[must_use]
    pub fn is_current(&self, token: UtteranceToken) -> bool {
        token.0 == self.generation
    }

    /// Synthesize a response string
    ///
    /// Cancels any in-flight utterance first; there is never more than one
    /// active utterance system-wide.
    ///
    /// # Errors
    ///
    /// - `UnsupportedCapability` when the platform has no synthesis.
    /// - `ConfigurationRejected` when every synthesis locale candidate for
    ///   the profile is refused.
    /// - Any error the capability reports when queuing the utterance.
    pub async fn speak(
        &mut self,
        text: &str,
        locale_id: &str,
        volume: f32,
        rate: f32,
    ) -> Result<UtteranceToken> {
        if self.capability.is_none() {
            return Err(Error::UnsupportedCapability(
                "speech synthesis is not available on this platform".to_string(),
            ));
        }

        self.cancel_in_flight();
        self.generation += 1;
        let token = UtteranceToken(self.generation);

        tokio::time::sleep(SETTLE_DELAY).await;

        // A stop() may have landed while settling; in that case this request
        // was superseded and must not speak.
        if !self.is_current(token) {
            tracing::debug!("synthesis request superseded during settle delay");
            return Ok(token);
        }

        let profile = language::profile(locale_id);
        let Some(capability) = self.capability.as_mut() else {
            return Ok(token);
        };
        let lang = resolve_synthesis_lang(capability.as_ref(), profile)?;
        let mut utterance = Utterance::new(text, lang, volume, rate);

        let voices = capability.voices();
        if voices.is_empty() {
            tracing::debug!(
                lang = %utterance.lang,
                "voice catalog empty, deferring until voices change"
            );
            self.deferred = Some(DeferredUtterance {
                utterance,
                token,
                profile,
            });
            return Ok(token);
        }

        utterance.voice = select_voice(&voices, &utterance.lang, profile);
        capability.speak(&utterance)?;
        tracing::debug!(lang = %utterance.lang, chars = utterance.text.len(), "utterance queued");
        Ok(token)
    }

    /// Handle the platform's voices-changed notification
    ///
    /// Speaks the deferred utterance if one is still current; a deferred
    /// utterance that was superseded or stopped is released without
    /// speaking.
    ///
    /// # Errors
    ///
    /// Returns an error if queuing the deferred utterance fails.
    pub fn on_voices_changed(&mut self) -> Result<Option<UtteranceToken>> {
        let Some(deferred) = self.deferred.take() else {
            return Ok(None);
        };
        if !self.is_current(deferred.token) {
            tracing::debug!("dropping deferred utterance from superseded request");
            return Ok(None);
        }
        let Some(capability) = self.capability.as_mut() else {
            return Ok(None);
        };

        let voices = capability.voices();
        if voices.is_empty() {
            // Catalog still not ready; keep waiting.
            self.deferred = Some(deferred);
            return Ok(None);
        }

        let mut utterance = deferred.utterance;
        utterance.voice = select_voice(&voices, &utterance.lang, deferred.profile);
        capability.speak(&utterance)?;
        tracing::debug!(lang = %utterance.lang, "deferred utterance queued");
        Ok(Some(deferred.token))
    }

    /// Cancel any active or deferred utterance and invalidate its token;
    /// idempotent, safe when idle
    pub fn stop(&mut self) {
        self.cancel_in_flight();
        self.generation += 1;
    }

    /// Pause the active utterance, if the platform reports one speaking
    pub fn pause(&mut self) {
        if let Some(capability) = self.capability.as_mut()
            && capability.is_speaking()
        {
            capability.pause();
        }
    }

    /// Resume a paused utterance
    pub fn resume(&mut self) {
        if let Some(capability) = self.capability.as_mut()
            && capability.is_paused()
        {
            capability.resume();
        }
    }

    fn cancel_in_flight(&mut self) {
        self.deferred = None;
        if let Some(capability) = self.capability.as_mut() {
            capability.cancel();
        }
    }
}

/// Resolve the synthesis locale tag through the profile's candidate chain
///
/// Candidates are tried in order; a `ConfigurationRejected` moves to the
/// next one, any other error propagates. Exhaustion surfaces
/// `ConfigurationRejected` to the caller.
fn resolve_synthesis_lang(
    capability: &dyn SynthesisCapability,
    profile: &LanguageProfile,
) -> Result<String> {
    for candidate in profile.synthesis_locales {
        match capability.validate_lang(candidate) {
            Ok(()) => return Ok((*candidate).to_string()),
            Err(Error::ConfigurationRejected(reason)) => {
                tracing::debug!(lang = candidate, reason, "synthesis locale rejected");
            }
            Err(e) => return Err(e),
        }
    }
    Err(Error::ConfigurationRejected(format!(
        "no synthesis locale accepted for {}",
        profile.locale_id
    )))
}
