//! Fuzzy comparator — order-insensitive similarity between two skill
//! strings, scored 0–100.
//!
//! Two modes: token-set comparison (identical token sets score 100 regardless
//! of order or repetition) and partial comparison (a short string fully
//! contained in a longer one scores 100). Classification uses the maximum of
//! the two. Both modes are symmetric.

use std::collections::BTreeSet;

use strsim::normalized_levenshtein;

/// Case-folds, strips punctuation, and splits into tokens.
pub(crate) fn tokenize(s: &str) -> Vec<String> {
    s.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Deduplicated, sorted, space-joined token form used by token-set mode.
fn canonical_token_string(s: &str) -> String {
    let tokens: BTreeSet<String> = tokenize(s).into_iter().collect();
    tokens.into_iter().collect::<Vec<_>>().join(" ")
}

/// Order-preserving folded form used by partial mode.
fn folded(s: &str) -> String {
    tokenize(s).join(" ")
}

fn scale(ratio: f64) -> u32 {
    (ratio * 100.0).round() as u32
}

/// Token-set comparison: the normalized Levenshtein ratio of the two
/// canonical token strings.
pub fn token_set_ratio(a: &str, b: &str) -> u32 {
    scale(normalized_levenshtein(
        &canonical_token_string(a),
        &canonical_token_string(b),
    ))
}

/// Partial comparison: the best alignment of the shorter string against every
/// same-length character window of the longer.
pub fn partial_ratio(a: &str, b: &str) -> u32 {
    let fa = folded(a);
    let fb = folded(b);
    let (short, long) = if fa.chars().count() <= fb.chars().count() {
        (fa, fb)
    } else {
        (fb, fa)
    };

    let window_len = short.chars().count();
    if window_len == 0 {
        return scale(normalized_levenshtein(&short, &long));
    }

    let long_chars: Vec<char> = long.chars().collect();
    let mut best = 0.0_f64;
    for window in long_chars.windows(window_len) {
        let candidate: String = window.iter().collect();
        let ratio = normalized_levenshtein(&short, &candidate);
        if ratio > best {
            best = ratio;
        }
        if best >= 1.0 {
            break;
        }
    }
    scale(best)
}

/// Combined similarity used for classification: the maximum of both modes.
pub fn similarity(a: &str, b: &str) -> u32 {
    token_set_ratio(a, b).max(partial_ratio(a, b))
}
