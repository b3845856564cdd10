//! Per-locale classification tests
//!
//! The rule tables are data; these tests pin the behavior users actually
//! depend on: a representative query in each language reaches the right
//! scheme, in the right language.

use yojana_voice::{PROFILES, intent, language};

#[test]
fn test_representative_query_per_locale() {
    let cases = [
        ("en", "how do I get health insurance", "Ayushman Bharat"),
        ("hi", "मुझे खेती के लिए मदद चाहिए", "पीएम-किसान"),
        ("bn", "আমি একজন কৃষক", "পিএম-কিষাণ"),
        ("ta", "வணக்கம்", "வணக்கம்!"),
        ("pa", "mainu pension bare dasso", "ਪੇਂਸ਼ਨ"),
        ("ml", "നമസ്കാരം", "നമസ്കാരം!"),
    ];

    for (locale, query, expected) in cases {
        let response = intent::classify(query, locale).unwrap();
        assert!(
            response.contains(expected),
            "{locale}: {query:?} answered {response:?}"
        );
    }
}

#[test]
fn test_mixed_script_english_trigger_works_in_hindi() {
    // Recognizers frequently emit Latin fragments inside Devanagari text.
    let response = intent::classify("मुझे hospital जाना है", "hi").unwrap();
    assert!(response.contains("आयुष्मान भारत"));
}

#[test]
fn test_transliterated_punjabi_reaches_native_responses() {
    for (query, expected) in [
        ("kheti layi madad", "ਪੀਐਮ-ਕਿਸਾਨ"),
        ("ghar di yojana", "ਪੀਐਮ ਆਵਾਸ ਯੋਜਨਾ"),
        ("naukri bare dasso", "ਪੀਐਮਕੇਵੀਵਾਈ"),
    ] {
        let response = intent::classify(query, "pa").unwrap();
        assert!(response.contains(expected), "{query:?} answered {response:?}");
    }
}

#[test]
fn test_catch_all_is_locale_appropriate() {
    // A nonsense query must still be answered, in the profile's own language.
    for p in PROFILES {
        let response = intent::classify("zzqq", p.locale_id).unwrap();
        assert_eq!(response, p.catch_all);
    }
}

#[test]
fn test_empty_input_is_never_answered() {
    for p in PROFILES {
        assert_eq!(intent::classify("", p.locale_id), None);
        assert_eq!(intent::classify(" \t ", p.locale_id), None);
    }
}

#[test]
fn test_triggers_are_stored_pre_lowercased() {
    // Matching lowercases the input only; a trigger with uppercase letters
    // could never fire.
    for p in PROFILES {
        for rule in p.rules {
            for trigger in rule.triggers {
                assert_eq!(
                    *trigger,
                    trigger.to_lowercase(),
                    "{}: trigger {trigger:?} is not lowercase",
                    p.locale_id
                );
            }
        }
    }
}

#[test]
fn test_display_names_cover_all_profiles() {
    for p in PROFILES {
        assert_eq!(language::display_name(p.locale_id), p.english_name);
    }
}
