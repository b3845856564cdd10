//! Shared mock speech capabilities for integration tests
//!
//! All mocks record their calls through shared handles so tests can assert
//! on what the pipeline actually asked the platform to do.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use yojana_voice::voice::{
    CapturePlatform, CaptureSession, SynthesisCapability, Utterance, VoiceCandidate,
};
use yojana_voice::{Error, Result};

/// Everything a mock capture session was asked to do
#[derive(Debug, Default)]
pub struct CaptureLog {
    /// Locale tags accepted by `set_lang`, in order
    pub langs: Vec<String>,
    pub starts: usize,
    pub stops: usize,
    pub sessions_created: usize,
}

/// Capture platform whose sessions share one log
pub struct MockCapturePlatform {
    supported: bool,
    rejected_langs: Vec<String>,
    log: Arc<Mutex<CaptureLog>>,
}

impl Default for MockCapturePlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCapturePlatform {
    pub fn new() -> Self {
        Self {
            supported: true,
            rejected_langs: Vec::new(),
            log: Arc::new(Mutex::new(CaptureLog::default())),
        }
    }

    /// A platform with no speech capture at all
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            rejected_langs: Vec::new(),
            log: Arc::new(Mutex::new(CaptureLog::default())),
        }
    }

    /// A platform whose sessions refuse the given locale tags
    pub fn rejecting(langs: &[&str]) -> Self {
        Self {
            rejected_langs: langs.iter().map(ToString::to_string).collect(),
            ..Self::new()
        }
    }

    pub fn log(&self) -> Arc<Mutex<CaptureLog>> {
        Arc::clone(&self.log)
    }
}

impl CapturePlatform for MockCapturePlatform {
    fn create_session(&mut self) -> Option<Box<dyn CaptureSession>> {
        if !self.supported {
            return None;
        }
        self.log.lock().unwrap().sessions_created += 1;
        Some(Box::new(MockCaptureSession {
            rejected_langs: self.rejected_langs.clone(),
            log: Arc::clone(&self.log),
        }))
    }
}

struct MockCaptureSession {
    rejected_langs: Vec<String>,
    log: Arc<Mutex<CaptureLog>>,
}

impl CaptureSession for MockCaptureSession {
    fn set_lang(&mut self, lang: &str) -> Result<()> {
        if self.rejected_langs.iter().any(|l| l == lang) {
            return Err(Error::ConfigurationRejected(format!(
                "language not supported: {lang}"
            )));
        }
        self.log.lock().unwrap().langs.push(lang.to_string());
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        self.log.lock().unwrap().starts += 1;
        Ok(())
    }

    fn stop(&mut self) {
        self.log.lock().unwrap().stops += 1;
    }
}

/// Everything the mock synthesis capability was asked to do
#[derive(Debug, Default)]
pub struct SynthLog {
    pub spoken: Vec<Utterance>,
    pub cancels: usize,
    pub pauses: usize,
    pub resumes: usize,
}

/// Synthesis capability with a settable voice catalog
pub struct MockSynthesis {
    voices: Arc<Mutex<Vec<VoiceCandidate>>>,
    rejected_langs: Vec<String>,
    log: Arc<Mutex<SynthLog>>,
    speaking: bool,
    paused: bool,
}

impl MockSynthesis {
    pub fn with_voices(voices: Vec<VoiceCandidate>) -> Self {
        Self {
            voices: Arc::new(Mutex::new(voices)),
            rejected_langs: Vec::new(),
            log: Arc::new(Mutex::new(SynthLog::default())),
            speaking: false,
            paused: false,
        }
    }

    /// A capability that refuses the given synthesis locale tags
    pub fn rejecting(voices: Vec<VoiceCandidate>, langs: &[&str]) -> Self {
        Self {
            rejected_langs: langs.iter().map(ToString::to_string).collect(),
            ..Self::with_voices(voices)
        }
    }

    pub fn log(&self) -> Arc<Mutex<SynthLog>> {
        Arc::clone(&self.log)
    }

    /// Handle for mutating the catalog after construction, simulating the
    /// platform's late voice loading
    pub fn catalog(&self) -> Arc<Mutex<Vec<VoiceCandidate>>> {
        Arc::clone(&self.voices)
    }
}

impl SynthesisCapability for MockSynthesis {
    fn validate_lang(&self, lang: &str) -> Result<()> {
        if self.rejected_langs.iter().any(|l| l == lang) {
            return Err(Error::ConfigurationRejected(format!(
                "synthesis language not supported: {lang}"
            )));
        }
        Ok(())
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        self.log.lock().unwrap().spoken.push(utterance.clone());
        self.speaking = true;
        self.paused = false;
        Ok(())
    }

    fn cancel(&mut self) {
        self.log.lock().unwrap().cancels += 1;
        self.speaking = false;
        self.paused = false;
    }

    fn pause(&mut self) {
        self.log.lock().unwrap().pauses += 1;
        self.paused = true;
    }

    fn resume(&mut self) {
        self.log.lock().unwrap().resumes += 1;
        self.paused = false;
    }

    fn is_speaking(&self) -> bool {
        self.speaking
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn voices(&self) -> Vec<VoiceCandidate> {
        self.voices.lock().unwrap().clone()
    }
}

/// Notifier that records every toast for later assertion
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// (title, description) pairs in delivery order
    pub fn toasts(&self) -> Vec<(String, String)> {
        self.toasts.lock().unwrap().clone()
    }
}

impl yojana_voice::Notifier for RecordingNotifier {
    fn toast(&self, title: &str, description: &str, _severity: yojana_voice::Severity) {
        self.toasts
            .lock()
            .unwrap()
            .push((title.to_string(), description.to_string()));
    }
}

/// Convenience voice constructor
pub fn voice(name: &str, lang: &str) -> VoiceCandidate {
    VoiceCandidate::new(name, lang)
}
