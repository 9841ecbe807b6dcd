use clause_core::comparison::{Scorer, TfIdfCosineScorer};

const NINETY: &str = "Provider must submit claims within 90 days of service";
const ONE_TWENTY: &str = "Provider must submit claims within 120 days of service";

#[test]
fn identical_clauses_score_exactly_one() {
    let scorer = TfIdfCosineScorer;
    assert_eq!(scorer.similarity(NINETY, NINETY), 1.0);
    // Equal after normalization counts as identical.
    assert_eq!(
        scorer.similarity("Provider  must submit CLAIMS.", "provider must submit claims."),
        1.0
    );
}

#[test]
fn empty_side_scores_zero() {
    let scorer = TfIdfCosineScorer;
    assert_eq!(scorer.similarity("NOT FOUND", NINETY), 0.0);
    assert_eq!(scorer.similarity(NINETY, "NOT FOUND"), 0.0);
    assert_eq!(scorer.similarity("", ""), 0.0);
    // Everything masked away.
    assert_eq!(scorer.similarity("[Name] shall █████", NINETY), 0.0);
    // Normalizes to "a %": no term of two or more characters.
    assert_eq!(scorer.similarity("a %", NINETY), 0.0);
}

#[test]
fn similarity_is_symmetric() {
    let scorer = TfIdfCosineScorer;
    let pairs = [
        (NINETY, ONE_TWENTY),
        ("aa bb", "aa cc"),
        ("Payment of 95% of the Fee Schedule", "Payment of 100% of the Fee Schedule A"),
    ];
    for (a, b) in pairs {
        assert_eq!(scorer.similarity(a, b), scorer.similarity(b, a));
    }
}

#[test]
fn numeric_deviation_lowers_the_score() {
    let scorer = TfIdfCosineScorer;
    let score = scorer.similarity(NINETY, ONE_TWENTY);
    assert!(score < 1.0);
    assert!((score - 0.80198).abs() < 1e-4, "got {score}");
}

#[test]
fn matches_two_document_tfidf_by_hand() {
    // "aa" appears in both (idf 1), "bb" and "cc" in one each (idf ln 1.5 + 1).
    let idf_single = 1.5f64.ln() + 1.0;
    let expected = 1.0 / (1.0 + idf_single * idf_single);

    let details = TfIdfCosineScorer.score("aa bb", "aa cc");
    assert!((details.score - expected).abs() < 1e-12);
    assert_eq!(details.vocabulary_size, 3);
    assert_eq!(details.shared_terms, 1);
}

#[test]
fn disjoint_vocabularies_score_zero() {
    let score = TfIdfCosineScorer.similarity("provider agrees", "payment terms");
    assert_eq!(score, 0.0);
}

#[test]
fn scores_stay_in_unit_range() {
    let scorer = TfIdfCosineScorer;
    let clauses = [NINETY, ONE_TWENTY, "aa bb", "aa aa aa bb", "Fee Schedule A", "NOT FOUND"];
    for a in clauses {
        for b in clauses {
            let score = scorer.similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "{a:?} vs {b:?} gave {score}");
        }
    }
}
