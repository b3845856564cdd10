//! Playback session management
//!
//! The platform exposes exactly one audio output channel; this manager is
//! its sole owner. Assistant replies and review narration both claim the
//! channel through [`PlaybackSessionManager::request`], so at most one of
//! them plays at any instant. Every external synthesis callback maps to
//! exactly one state transition, which keeps illegal combinations (speaking
//! while loading, two concurrent owners) unrepresentable.

use crate::voice::synthesis::{SpeechOutputController, UtteranceToken};
use crate::{Error, Result};

/// Playback channel state
///
/// Normal path `Idle -> Loading -> Speaking -> Idle`; explicit pause moves
/// `Speaking <-> Paused`; stop and preemption reach `Idle` from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing owns the output channel
    #[default]
    Idle,
    /// A request was issued, waiting for the started callback
    Loading,
    /// Audio is playing
    Speaking,
    /// Audio is paused and can be resumed
    Paused,
}

/// What a playback request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A new session began loading
    Started,
    /// The owner was already playing; the request toggled it off
    Stopped,
}

struct Session {
    owner: String,
    state: PlaybackState,
    token: UtteranceToken,
}

/// Serializes access to the single audio output channel
pub struct PlaybackSessionManager {
    output: SpeechOutputController,
    session: Option<Session>,
}

impl PlaybackSessionManager {
    /// Create a manager owning the synthesis controller
    #[must_use]
    pub fn new(output: SpeechOutputController) -> Self {
        Self {
            output,
            session: None,
        }
    }

    /// Whether synthesis is available at all
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.output.is_supported()
    }

    /// Current channel state
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.session
            .as_ref()
            .map_or(PlaybackState::Idle, |s| s.state)
    }

    /// Owner currently holding the channel, if any
    #[must_use]
    pub fn current_owner(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.owner.as_str())
    }

    /// Token of the in-flight utterance; hosts tag platform callbacks with it
    #[must_use]
    pub fn current_token(&self) -> Option<UtteranceToken> {
        self.session.as_ref().map(|s| s.token)
    }

    /// Claim the output channel for `owner` and speak `text`
    ///
    /// Requesting the owner that is already speaking or paused toggles it
    /// off instead of restarting. Requesting a different owner preempts the
    /// current session; that is a normal stop for the prior owner, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Propagates synthesis errors; the session is left idle on failure.
    pub async fn request(
        &mut self,
        owner: &str,
        text: &str,
        locale_id: &str,
        volume: f32,
        rate: f32,
    ) -> Result<RequestOutcome> {
        if let Some(session) = &self.session
            && session.owner == owner
            && matches!(
                session.state,
                PlaybackState::Speaking | PlaybackState::Paused
            )
        {
            tracing::debug!(owner, "toggle: stopping own playback");
            self.stop();
            return Ok(RequestOutcome::Stopped);
        }

        if let Some(session) = &self.session {
            tracing::debug!(
                preempted = %session.owner,
                new_owner = owner,
                "preempting playback session"
            );
            self.stop();
        }

        let token = match self.output.speak(text, locale_id, volume, rate).await {
            Ok(token) => token,
            Err(e) => {
                self.session = None;
                return Err(e);
            }
        };

        self.session = Some(Session {
            owner: owner.to_string(),
            state: PlaybackState::Loading,
            token,
        });
        Ok(RequestOutcome::Started)
    }

    /// Stop playback from any state; idempotent
    pub fn stop(&mut self) {
        self.output.stop();
        if let Some(session) = self.session.take() {
            tracing::debug!(owner = %session.owner, "playback session stopped");
        }
    }

    /// Pause; no-op unless currently speaking
    pub fn pause(&mut self) {
        if let Some(session) = self.session.as_mut()
            && session.state == PlaybackState::Speaking
        {
            self.output.pause();
            session.state = PlaybackState::Paused;
        }
    }

    /// Resume; no-op unless currently paused
    pub fn resume(&mut self) {
        if let Some(session) = self.session.as_mut()
            && session.state == PlaybackState::Paused
        {
            self.output.resume();
            session.state = PlaybackState::Speaking;
        }
    }

    /// Synthesis-started callback
    pub fn handle_started(&mut self, token: UtteranceToken) {
        if !self.output.is_current(token) {
            return;
        }
        if let Some(session) = self.session.as_mut()
            && session.token == token
            && session.state == PlaybackState::Loading
        {
            session.state = PlaybackState::Speaking;
            tracing::debug!(owner = %session.owner, "playback started");
        }
    }

    /// Synthesis-ended callback; natural completion resets to idle
    pub fn handle_ended(&mut self, token: UtteranceToken) {
        if !self.output.is_current(token) {
            return;
        }
        if self
            .session
            .as_ref()
            .is_some_and(|session| session.token == token)
        {
            let session = self.session.take();
            if let Some(session) = session {
                tracing::debug!(owner = %session.owner, "playback completed");
            }
        }
    }

    /// Synthesis-errored callback
    ///
    /// Clears the session and returns the `PlaybackFailure` the caller
    /// should surface; stale tokens yield `None`.
    pub fn handle_errored(&mut self, token: UtteranceToken, message: &str) -> Option<Error> {
        if !self.output.is_current(token) {
            return None;
        }
        if self
            .session
            .as_ref()
            .is_some_and(|session| session.token == token)
        {
            self.stop();
            return Some(Error::PlaybackFailure(message.to_string()));
        }
        None
    }

    /// Voice-catalog-changed callback; flushes a deferred utterance
    ///
    /// # Errors
    ///
    /// Returns `PlaybackFailure` if the deferred utterance cannot be queued;
    /// the session is reset to idle first.
    pub fn handle_voices_changed(&mut self) -> Result<()> {
        match self.output.on_voices_changed() {
            Ok(_) => Ok(()),
            Err(e) => {
                self.session = None;
                Err(Error::PlaybackFailure(e.to_string()))
            }
        }
    }
}
