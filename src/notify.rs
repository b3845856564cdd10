//! User notification sink
//!
//! Fire-and-forget toasts: a title, a description, and a severity. The host
//! UI supplies its own sink; the default forwards to tracing so headless
//! runs still record what the user would have seen.

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational message
    Info,
    /// Something failed; shown prominently
    Destructive,
}

/// Fire-and-forget notification sink; no return value is consumed
pub trait Notifier {
    /// Show a toast
    fn toast(&self, title: &str, description: &str, severity: Severity);
}

/// Default sink that logs toasts through tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn toast(&self, title: &str, description: &str, severity: Severity) {
        match severity {
            Severity::Info => tracing::info!(title, description, "toast"),
            Severity::Destructive => tracing::warn!(title, description, "toast"),
        }
    }
}
