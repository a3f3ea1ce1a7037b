//! Similarity scores on a 0-100 scale built on normalized Levenshtein distance.

use std::collections::BTreeSet;

/// Lowercases, replaces anything that is not alphanumeric with a space and
/// collapses runs of whitespace.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    to_score(strsim::normalized_levenshtein(a, b))
}

/// Best [`ratio`] of `needle` against every window of `haystack` with the
/// same length. Falls back to the plain ratio when `needle` is the longer one.
pub fn partial_ratio(needle: &str, haystack: &str) -> u8 {
    let needle_len = needle.chars().count();
    let haystack: Vec<char> = haystack.chars().collect();

    if needle_len == 0 || haystack.is_empty() {
        return 0;
    }
    if needle_len >= haystack.len() {
        return ratio(needle, &haystack.iter().collect::<String>());
    }

    let mut best = 0;
    for window in haystack.windows(needle_len) {
        let window: String = window.iter().collect();
        best = best.max(ratio(needle, &window));
        if best == 100 {
            break;
        }
    }

    best
}

/// [`ratio`] after sorting the words of both inputs.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Compares the shared words of both inputs with each side's full word set,
/// so extra words on one side cost little.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    token_set_score(a, b, ratio)
}

/// Weighted combination of the scores above, following the usual `WRatio`
/// weighting.
///
/// Inputs of similar length use the plain and token scores, with token scores
/// weighted by 0.95. When one input is at least one and a half times longer,
/// partial scores are used instead, scaled by 0.9, or by 0.6 once the length
/// ratio reaches 8.
pub fn weighted_ratio(a: &str, b: &str) -> u8 {
    let (a_len, b_len) = (a.chars().count(), b.chars().count());
    if a_len == 0 || b_len == 0 {
        return 0;
    }

    let base = f64::from(ratio(a, b));
    let length_ratio = a_len.max(b_len) as f64 / a_len.min(b_len) as f64;

    let best = if length_ratio < 1.5 {
        let token_sort = f64::from(token_sort_ratio(a, b)) * TOKEN_SCALE;
        let token_set = f64::from(token_set_ratio(a, b)) * TOKEN_SCALE;
        base.max(token_sort).max(token_set)
    } else {
        let partial_scale = if length_ratio < 8.0 { 0.9 } else { 0.6 };
        let partial = f64::from(partial_either(a, b)) * partial_scale;
        let partial_token_sort = f64::from(partial_either(&sorted_tokens(a), &sorted_tokens(b)))
            * TOKEN_SCALE
            * partial_scale;
        let partial_token_set =
            f64::from(token_set_score(a, b, partial_either)) * TOKEN_SCALE * partial_scale;
        base.max(partial).max(partial_token_sort).max(partial_token_set)
    };

    best.round() as u8
}

const TOKEN_SCALE: f64 = 0.95;

/// [`partial_ratio`] with the shorter input as the needle.
fn partial_either(a: &str, b: &str) -> u8 {
    if a.chars().count() <= b.chars().count() {
        partial_ratio(a, b)
    } else {
        partial_ratio(b, a)
    }
}

fn token_set_score(a: &str, b: &str, scorer: fn(&str, &str) -> u8) -> u8 {
    let a_tokens: BTreeSet<&str> = a.split_whitespace().collect();
    let b_tokens: BTreeSet<&str> = b.split_whitespace().collect();

    let join = |tokens: Vec<&str>| tokens.join(" ");
    let common = join(a_tokens.intersection(&b_tokens).copied().collect());
    let only_a = join(a_tokens.difference(&b_tokens).copied().collect());
    let only_b = join(b_tokens.difference(&a_tokens).copied().collect());

    let with_a = format!("{common} {only_a}").trim().to_string();
    let with_b = format!("{common} {only_b}").trim().to_string();

    scorer(&common, &with_a)
        .max(scorer(&common, &with_b))
        .max(scorer(&with_a, &with_b))
}

fn sorted_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn to_score(similarity: f64) -> u8 {
    (similarity.clamp(0.0, 1.0) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Pain-au-Chocolat!! "), "pain au chocolat");
        assert_eq!(normalize("CROISSANT"), "croissant");
        assert_eq!(normalize("***"), "");
    }

    #[test]
    fn test_ratio_bounds() {
        assert_eq!(ratio("croissant", "croissant"), 100);
        assert_eq!(ratio("croissant", ""), 0);
        assert_eq!(ratio("croissants", "croissant"), 90);
    }

    #[test]
    fn test_partial_ratio_finds_substring() {
        assert_eq!(partial_ratio("croissant", "a croissant on a plate"), 100);
        assert_eq!(
            partial_ratio("a croissant on a plate", "croissant"),
            ratio("a croissant on a plate", "croissant")
        );
    }

    #[test]
    fn test_token_sort_ignores_word_order() {
        assert_eq!(token_sort_ratio("roll cinnamon", "cinnamon roll"), 100);
    }

    #[test]
    fn test_token_set_ignores_extra_words() {
        assert_eq!(token_set_ratio("chocolate croissant", "croissant chocolate fresh"), 100);
        assert_eq!(token_set_ratio("croissant", "baguette"), ratio("croissant", "baguette"));
    }

    #[test]
    fn test_weighted_ratio_uses_partial_for_long_text() {
        assert_eq!(weighted_ratio("almond", "almond croissant"), 90);
        assert_eq!(weighted_ratio("baguette", "baguette"), 100);
    }

    #[test]
    fn test_weighted_ratio_scales_token_scores() {
        // Same words in another order: the plain ratio is low, the token
        // scores are perfect but weighted by 0.95.
        assert_eq!(weighted_ratio("roll cinnamon", "cinnamon roll"), 95);
    }

    #[test]
    fn test_weighted_ratio_discounts_very_long_text() {
        let caption = "a tray with one small bun next to some napkins and cups";
        assert!(caption.chars().count() >= 8 * "bun".len());

        assert_eq!(weighted_ratio("bun", caption), 60);
    }
}
