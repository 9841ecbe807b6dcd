use clause_core::comparison::normalizer::{
    is_bracketed_code, is_five_letter_word, is_percent_mask, is_placeholder, is_redaction_mask,
    is_retained_char, normalize, MaskRule,
};

#[test]
fn sentinel_normalizes_to_empty() {
    assert_eq!(normalize("NOT FOUND"), "");
    // Only the exact marker; the words themselves are ordinary text.
    assert_eq!(normalize("not located here"), "not located here");
}

#[test]
fn strips_masking_and_keeps_numbers() {
    assert_eq!(
        normalize("Provider shall submit Claims within one hundred twenty (120) days."),
        "provider submit claims within one hundred twenty 120 days."
    );
    assert_eq!(normalize("[Provider Name] agrees to XX% of █████ rates [AB]."), "agrees to of .");
}

#[test]
fn retains_percent_dot_and_slash() {
    assert_eq!(normalize("95% of 3.5 and/or fees"), "95% of 3.5 and/or fees");
    assert!(normalize("a deadline of 120 days applies").contains("120"));
}

#[test]
fn collapses_whitespace_and_lowercases() {
    assert_eq!(normalize("  Covered\n\tServices   FURNISHED  "), "covered services furnished");
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
}

#[test]
fn every_standalone_five_letter_word_is_dropped() {
    // Redacted payer names are five characters; real words of that length go too.
    assert_eq!(normalize("Anthem shall pay"), "anthem pay");
    assert_eq!(normalize("hello world"), "");
    assert_eq!(normalize("networks"), "networks");
}

#[test]
fn normalize_is_idempotent() {
    let inputs = [
        "Provider shall submit Claims within one hundred twenty (120) days.",
        "[Provider Name] agrees to XX% of █████ rates [AB].",
        "For Covered Services furnished by or on behalf of Provider, the lesser of Eligible Charges or the Rate.",
        "ab-cde f'ghij (k) 10/15 7.5% ███ [x]",
        "NOT FOUND",
        "",
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
    }
}

#[test]
fn lowercasing_can_grow_a_word_into_the_mask() {
    // U+0130 lowercases to "i" plus a combining dot.
    let once = normalize("İabc rates");
    assert_eq!(once, "i\u{307}abc");
    assert_eq!(once.chars().count(), 5);
    assert_eq!(normalize(&once), "");
}

#[test]
fn mask_rule_predicates() {
    assert!(is_placeholder("[Provider Name]"));
    assert!(is_placeholder("[ ]"));
    assert!(!is_placeholder("Provider"));

    assert!(is_percent_mask("XX%"));
    assert!(!is_percent_mask("95%"));
    assert!(!is_percent_mask("xx%"));

    assert!(is_five_letter_word("shall"));
    assert!(!is_five_letter_word("submit"));
    assert!(!is_five_letter_word("days"));

    assert!(is_redaction_mask("█████"));
    assert!(is_redaction_mask("█"));
    assert!(!is_redaction_mask("#####"));

    assert!(is_bracketed_code("[AB]"));
    assert!(is_bracketed_code("[X]"));
    assert!(!is_bracketed_code("[ABCD]"));

    assert!(is_retained_char('%'));
    assert!(is_retained_char('.'));
    assert!(is_retained_char('/'));
    assert!(is_retained_char('7'));
    assert!(!is_retained_char('('));
    assert!(!is_retained_char(','));
}

#[test]
fn mask_rules_apply_in_declared_order() {
    assert_eq!(MaskRule::ALL[0], MaskRule::Placeholder);
    assert_eq!(MaskRule::ALL[4], MaskRule::BracketedCode);
    for rule in MaskRule::ALL {
        assert!(!rule.pattern().is_empty());
    }
}
