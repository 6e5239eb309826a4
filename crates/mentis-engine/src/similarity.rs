//! Fuzzy term similarity: Jaro similarity with a Winkler prefix boost.

/// Longest shared prefix that earns the Winkler boost.
const MAX_PREFIX: usize = 4;

/// Weight applied per shared prefix character.
const PREFIX_SCALE: f64 = 0.1;

/// Case-insensitive Jaro-Winkler similarity in `[0, 1]`.
///
/// Equal strings (ignoring case) score exactly `1.0`; an empty string never
/// matches anything else.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a == b {
        return 1.0;
    }

    let jaro = jaro(&a, &b);
    if jaro == 0.0 {
        return 0.0;
    }

    let prefix = a
        .iter()
        .zip(&b)
        .take(MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count();

    jaro + prefix as f64 * PREFIX_SCALE * (1.0 - jaro)
}

/// Whether two terms are close enough to count as the same, using a strict
/// `>` comparison against `threshold`.
pub fn is_match(a: &str, b: &str, threshold: f64) -> bool {
    similarity(a, b) > threshold
}

fn jaro(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);

    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, ch) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b.len());
        for j in start..end {
            if !b_matched[j] && b[j] == *ch {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk both matched sequences in order; each positional disagreement is
    // half a transposition.
    let b_sequence = b
        .iter()
        .zip(&b_matched)
        .filter_map(|(ch, matched)| matched.then_some(ch));
    let transpositions = a
        .iter()
        .zip(&a_matched)
        .filter_map(|(ch, matched)| matched.then_some(ch))
        .zip(b_sequence)
        .filter(|(x, y)| x != y)
        .count();

    let m = matches as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - transpositions as f64 / 2.0) / m) / 3.0
}
