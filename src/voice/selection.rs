//! Voice selection
//!
//! Picks the best available synthesis voice for a locale from the platform's
//! current catalog. Tiers are tried in order and the first non-empty result
//! wins; when every tier misses, no voice is assigned and the platform
//! default applies. The later tiers are driven by per-profile hint data, not
//! hard-coded vendor names, because voice catalogs vary by deployment.

use crate::language::LanguageProfile;
use crate::voice::capability::VoiceCandidate;

/// Select a voice for the requested synthesis locale
///
/// Tier order: exact tag match, primary-subtag prefix, display-name hint,
/// alternate language prefix, broader-region suffix, vendor hint. `None`
/// means "let the platform choose".
#[must_use]
pub fn select_voice(
    voices: &[VoiceCandidate],
    requested_lang: &str,
    profile: &LanguageProfile,
) -> Option<VoiceCandidate> {
    if voices.is_empty() {
        return None;
    }

    let requested = requested_lang.to_lowercase();
    let subtag = requested.split('-').next().unwrap_or(&requested).to_string();
    let hints = &profile.voice_fallback;

    let tiers: [(&str, Box<dyn Fn(&VoiceCandidate) -> bool + '_>); 6] = [
        ("exact", Box::new(|v| v.lang.to_lowercase() == requested)),
        (
            "prefix",
            Box::new(|v| v.lang.to_lowercase().starts_with(&subtag)),
        ),
        (
            "name-hint",
            Box::new(|v| {
                let name = v.name.to_lowercase();
                hints.name_hints.iter().any(|h| name.contains(h))
            }),
        ),
        (
            "alternate-prefix",
            Box::new(|v| {
                let lang = v.lang.to_lowercase();
                hints.alternate_prefixes.iter().any(|p| lang.starts_with(p))
            }),
        ),
        (
            "region",
            Box::new(|v| {
                hints
                    .region_suffix
                    .is_some_and(|s| v.lang.to_lowercase().ends_with(s))
            }),
        ),
        (
            "vendor",
            Box::new(|v| {
                let name = v.name.to_lowercase();
                hints.vendor_hints.iter().any(|h| name.contains(h))
            }),
        ),
    ];

    for (tier, matches) in &tiers {
        if let Some(voice) = voices.iter().find(|v| matches(v)) {
            tracing::debug!(
                tier,
                voice = %voice.name,
                lang = %voice.lang,
                requested = %requested,
                "voice selected"
            );
            return Some(voice.clone());
        }
    }

    tracing::debug!(requested = %requested, "no matching voice, platform default applies");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::profile;

    fn voice(name: &str, lang: &str) -> VoiceCandidate {
        VoiceCandidate::new(name, lang)
    }

    #[test]
    fn test_exact_match_wins() {
        let voices = [voice("Hindi Female", "hi-IN"), voice("US English", "en-US")];
        let selected = select_voice(&voices, "hi-IN", profile("hi")).unwrap();
        assert_eq!(selected.lang, "hi-IN");
    }

    #[test]
    fn test_prefix_match_when_region_differs() {
        let voices = [voice("Hindi", "hi"), voice("US English", "en-US")];
        let selected = select_voice(&voices, "hi-IN", profile("hi")).unwrap();
        assert_eq!(selected.lang, "hi");
    }

    #[test]
    fn test_punjabi_name_hint_beats_region_fallback() {
        let voices = [
            voice("Tamil Voice", "ta-IN"),
            voice("Microsoft Panjabi Voice", "und"),
        ];
        let selected = select_voice(&voices, "pa-IN", profile("pa")).unwrap();
        assert_eq!(selected.name, "Microsoft Panjabi Voice");
    }

    #[test]
    fn test_punjabi_falls_back_to_hindi_prefix() {
        let voices = [voice("Hindi Voice", "hi-IN"), voice("US English", "en-US")];
        let selected = select_voice(&voices, "pa-IN", profile("pa")).unwrap();
        assert_eq!(selected.lang, "hi-IN");
    }

    #[test]
    fn test_regional_fallback_for_unmatched_language() {
        let voices = [voice("Tamil Voice", "ta-IN"), voice("French", "fr-FR")];
        let selected = select_voice(&voices, "hi-IN", profile("hi")).unwrap();
        assert_eq!(selected.lang, "ta-IN");
    }

    #[test]
    fn test_vendor_fallback_when_no_regional_voice() {
        let voices = [voice("Google UK English", "en-GB"), voice("French", "fr-FR")];
        let selected = select_voice(&voices, "hi-IN", profile("hi")).unwrap();
        assert_eq!(selected.name, "Google UK English");
    }

    #[test]
    fn test_no_match_means_platform_default() {
        let voices = [voice("Siri", "fr-FR")];
        assert!(select_voice(&voices, "hi-IN", profile("hi")).is_none());
    }

    #[test]
    fn test_empty_catalog_means_platform_default() {
        assert!(select_voice(&[], "hi-IN", profile("hi")).is_none());
    }
}
