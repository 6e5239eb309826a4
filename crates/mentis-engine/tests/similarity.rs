use mentis_engine::similarity::{is_match, similarity};

const EPSILON: f64 = 1e-9;

#[test]
fn identical_terms_score_one() {
    for term in ["depression", "a", "sleep problems", "GAD-7"] {
        assert_eq!(similarity(term, term), 1.0, "{term}");
    }
}

#[test]
fn comparison_ignores_case() {
    assert_eq!(similarity("Anxiety", "ANXIETY"), 1.0);
    assert!((similarity("Fatigue", "fatigued") - similarity("fatigue", "FATIGUED")).abs() < EPSILON);
}

#[test]
fn single_edit_misspelling_still_matches() {
    assert!(similarity("depression", "depresion") > 0.7);
    assert!(is_match("hopelesness", "hopelessness", 0.7));
}

#[test]
fn empty_string_never_matches() {
    assert_eq!(similarity("", "x"), 0.0);
    assert_eq!(similarity("x", ""), 0.0);
}

#[test]
fn disjoint_terms_score_zero() {
    assert_eq!(similarity("abc", "xyz"), 0.0);
}

#[test]
fn transposition_is_counted() {
    // Classic Jaro-Winkler example: jaro 0.9444, 3-char shared prefix.
    let score = similarity("martha", "marhta");
    assert!((score - 0.961_111_111).abs() < 1e-6, "got {score}");
}

#[test]
fn repeated_letter_dropped_mid_word() {
    // Matched characters are compared pairwise in order: the shifted tail
    // "ssnes" against "sness" disagrees at three positions.
    let score = similarity("hopelessness", "hopelesness");
    assert!((score - 0.956_060_606).abs() < 1e-6, "got {score}");
}

#[test]
fn score_is_commutative() {
    let pairs = [
        ("martha", "marhta"),
        ("worry", "worthlessness"),
        ("insomnia", "isolation"),
        ("sleep problems", "sleep disturbance"),
        ("crate", "trace"),
    ];
    for (a, b) in pairs {
        assert!((similarity(a, b) - similarity(b, a)).abs() < EPSILON, "{a} / {b}");
    }
}

#[test]
fn scores_stay_in_unit_interval() {
    let terms = ["", "a", "ab", "anxiety", "panic attacks", "palpitations", "x y z"];
    for a in terms {
        for b in terms {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s), "{a} / {b} = {s}");
        }
    }
}

#[test]
fn threshold_is_strict() {
    assert!(!is_match("depression", "depression", 1.0));
    assert!(is_match("depression", "depression", 0.999));
}
