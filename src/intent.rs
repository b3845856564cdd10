//! Intent classification
//!
//! Pure mapping from (recognized text, locale) to a response string. No I/O,
//! no side effects: the same input always classifies the same way, which is
//! what makes the per-locale rule tables directly testable.

use crate::language::{self, LanguageProfile};

/// Classify recognized or typed text against a locale's keyword rules
///
/// Scans the profile's rules in declared order and returns the response of
/// the first rule with any trigger appearing as a substring of the
/// lowercased input. Rule order encodes priority, so a greeting rule beats
/// a generic scheme rule even when both match.
///
/// Returns the profile's catch-all for non-empty text that matches nothing,
/// and `None` for empty or whitespace-only text; callers must not
/// synthesize silence.
#[must_use]
pub fn classify(text: &str, locale_id: &str) -> Option<&'static str> {
    let profile = language::profile(locale_id);
    classify_with_profile(text, profile)
}

/// Classify against an explicit profile
#[must_use]
pub fn classify_with_profile(text: &str, profile: &LanguageProfile) -> Option<&'static str> {
    if text.trim().is_empty() {
        return None;
    }

    // Script-preserving normalization: only ASCII fragments mixed into
    // native-script text are affected by case folding.
    let normalized = text.to_lowercase();

    for rule in profile.rules {
        if rule.triggers.iter().any(|t| trigger_matches(&normalized, t)) {
            tracing::debug!(
                locale = profile.locale_id,
                response_len = rule.response.len(),
                "keyword rule matched"
            );
            return Some(rule.response);
        }
    }

    tracing::debug!(locale = profile.locale_id, "no rule matched, using catch-all");
    Some(profile.catch_all)
}

/// A trigger ending in a space is a word-start trigger: it also matches at
/// the head of the input, so bare "hi" greets while "chahidi" does not.
fn trigger_matches(text: &str, trigger: &str) -> bool {
    match trigger.strip_suffix(' ') {
        Some(stem) => text.starts_with(stem) || text.contains(trigger),
        None => text.contains(trigger),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::profile;

    #[test]
    fn test_empty_text_yields_no_response() {
        assert_eq!(classify("", "en"), None);
        assert_eq!(classify("   ", "hi"), None);
        assert_eq!(classify("\t\n", "pa"), None);
    }

    #[test]
    fn test_non_matching_text_yields_catch_all() {
        let response = classify("xyzzy plugh", "en").unwrap();
        assert_eq!(response, profile("en").catch_all);
        assert!(!response.is_empty());
    }

    #[test]
    fn test_farm_query_returns_english_farmer_response() {
        let response = classify("I need help with my farm", "en").unwrap();
        assert!(response.contains("PM-KISAN"));
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(
            classify("HEALTH insurance please", "en"),
            classify("health insurance please", "en")
        );
    }

    #[test]
    fn test_hindi_health_query_matches_native_script() {
        let response = classify("मुझे स्वास्थ्य योजना चाहिए", "hi").unwrap();
        assert!(response.contains("आयुष्मान भारत"));
    }

    #[test]
    fn test_transliterated_punjabi_matches() {
        let response = classify("mainu kheti bare dasso", "pa").unwrap();
        assert!(response.contains("ਪੀਐਮ-ਕਿਸਾਨ"));
    }

    #[test]
    fn test_earlier_rule_wins_over_later() {
        // "hello" (greeting) appears before "scheme" (generic) in the Hindi
        // table; a text containing both must classify as a greeting.
        let response = classify("hello, scheme batao", "hi").unwrap();
        assert_eq!(response, profile("hi").rules[0].response);
    }

    #[test]
    fn test_bare_greeting_matches_word_start_trigger() {
        let greeting = profile("en").rules[0].response;
        assert_eq!(classify("hi", "en"), Some(greeting));
        assert_eq!(classify("Hi there", "en"), Some(greeting));
        assert_eq!(classify("say hi to everyone", "en"), Some(greeting));
        // "hi" buried inside another word must not greet.
        let response = classify("think about housing", "en").unwrap();
        assert!(response.contains("PM Awas Yojana"));
    }

    #[test]
    fn test_unknown_locale_uses_english_rules() {
        let response = classify("tell me about housing", "xx").unwrap();
        assert!(response.contains("PM Awas Yojana"));
    }

    #[test]
    fn test_every_trigger_selects_its_rule_unless_shadowed() {
        for p in crate::language::PROFILES {
            for (idx, rule) in p.rules.iter().enumerate() {
                for trigger in rule.triggers {
                    let shadowed = p.rules[..idx].iter().any(|earlier| {
                        earlier.triggers.iter().any(|t| trigger_matches(trigger, t))
                    });
                    if shadowed {
                        continue;
                    }
                    let got = classify_with_profile(trigger, p).unwrap();
                    assert_eq!(
                        got, rule.response,
                        "locale {} trigger {trigger:?} classified to the wrong rule",
                        p.locale_id
                    );
                }
            }
        }
    }
}
