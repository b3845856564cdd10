//! Language profiles for supported locales
//!
//! Each supported locale is described by a static [`LanguageProfile`]: the
//! ordered locale tags to try for recognition and synthesis, the keyword
//! rules that drive intent classification, and the voice-selection hints for
//! platforms with inconsistent voice tagging. Adding a locale is a data
//! change in [`profiles`], not a code change.

mod profiles;

pub use profiles::PROFILES;

/// A keyword rule: any trigger substring selects the response
///
/// Triggers are matched case-insensitively against the lowercased input.
/// They mix native script, common transliterations, and English so that
/// mixed-script speech still classifies. A trigger with a trailing space
/// ("hi ") additionally matches at the start of the input, so single-word
/// greetings fire without every word containing those letters matching.
#[derive(Debug)]
pub struct KeywordRule {
    /// Case-insensitive substrings that select this rule
    pub triggers: &'static [&'static str],
    /// Complete, locale-appropriate response sentence (no interpolation)
    pub response: &'static str,
}

/// Per-locale voice-selection fallback hints
///
/// The later selection tiers are empirically derived from observed platform
/// quirks, so they are kept as profile data rather than hard-coded.
#[derive(Debug)]
pub struct VoiceFallback {
    /// Substrings matched against voice display names (e.g. "punjabi")
    pub name_hints: &'static [&'static str],
    /// Alternate language prefixes to try when no native voice exists
    /// (e.g. Hindi voices for Punjabi text)
    pub alternate_prefixes: &'static [&'static str],
    /// Broader-region locale suffix shared by acceptable voices
    pub region_suffix: Option<&'static str>,
    /// Vendor names whose voices tend to have the widest language support
    pub vendor_hints: &'static [&'static str],
}

/// Static description of one supported locale
#[derive(Debug)]
pub struct LanguageProfile {
    /// Canonical locale tag (e.g. "hi")
    pub locale_id: &'static str,
    /// English display name, also used for name-hint voice matching
    pub english_name: &'static str,
    /// Ordered locale tags to try for speech capture
    pub recognition_locales: &'static [&'static str],
    /// Ordered locale tags to try for synthesis
    pub synthesis_locales: &'static [&'static str],
    /// Ordered keyword rules; first match wins, so order encodes priority
    pub rules: &'static [KeywordRule],
    /// Reply for non-empty input that matches no rule
    pub catch_all: &'static str,
    /// Terminal "I didn't understand" response
    pub fallback_response: &'static str,
    /// Platform support for this locale is known to be spotty; capture
    /// errors walk the remaining recognition candidates before giving up
    pub limited_platform_support: bool,
    /// Voice-selection fallback hints
    pub voice_fallback: VoiceFallback,
}

impl LanguageProfile {
    /// First recognition locale candidate
    #[must_use]
    pub fn primary_recognition_locale(&self) -> &'static str {
        self.recognition_locales[0]
    }

    /// Primary language subtag of the first synthesis candidate ("hi-IN" -> "hi")
    #[must_use]
    pub fn primary_subtag(&self) -> &'static str {
        self.synthesis_locales[0]
            .split('-')
            .next()
            .unwrap_or(self.synthesis_locales[0])
    }
}

/// Look up the profile for a locale, falling back to English for unknown tags
#[must_use]
pub fn profile(locale_id: &str) -> &'static LanguageProfile {
    PROFILES
        .iter()
        .find(|p| p.locale_id == locale_id)
        .unwrap_or_else(|| {
            tracing::debug!(locale_id, "unknown locale, using default profile");
            default_profile()
        })
}

/// The default (English) profile
#[must_use]
pub fn default_profile() -> &'static LanguageProfile {
    &PROFILES[0]
}

/// Human-readable name for a locale tag (e.g. "hi-IN" -> "Hindi")
///
/// Falls back to the uppercased primary subtag for tags outside the
/// supported set.
#[must_use]
pub fn display_name(locale_tag: &str) -> String {
    let subtag = locale_tag.split('-').next().unwrap_or(locale_tag);
    PROFILES
        .iter()
        .find(|p| p.locale_id == subtag)
        .map_or_else(|| subtag.to_uppercase(), |p| p.english_name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(profile("fr").locale_id, "en");
        assert_eq!(profile("").locale_id, "en");
    }

    #[test]
    fn test_every_profile_has_candidates_and_rules() {
        for p in PROFILES {
            assert!(
                !p.recognition_locales.is_empty(),
                "{} has no recognition candidates",
                p.locale_id
            );
            assert!(
                !p.synthesis_locales.is_empty(),
                "{} has no synthesis candidates",
                p.locale_id
            );
            assert!(!p.catch_all.is_empty(), "{} catch-all empty", p.locale_id);
            assert!(
                !p.fallback_response.is_empty(),
                "{} fallback empty",
                p.locale_id
            );
            for rule in p.rules {
                assert!(!rule.triggers.is_empty(), "{} rule has no triggers", p.locale_id);
                assert!(!rule.response.is_empty(), "{} rule response empty", p.locale_id);
            }
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_name("hi-IN"), "Hindi");
        assert_eq!(display_name("bn-IN"), "Bengali");
        assert_eq!(display_name("en-US"), "English");
        assert_eq!(display_name("fr-FR"), "FR");
    }

    #[test]
    fn test_primary_subtag_strips_region() {
        assert_eq!(profile("hi").primary_subtag(), "hi");
        assert_eq!(profile("en").primary_subtag(), "en");
    }
}
