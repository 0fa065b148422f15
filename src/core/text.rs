/// Token-overlap similarity between two free-text strings (0.0 to 1.0)
///
/// Both strings are lowercased and split on whitespace. A token of `a`
/// counts as matched when some token of `b` contains it or is contained
/// by it. The match count is divided by the larger token count.
///
/// The measure is deliberately crude: no stemming, no edit distance, and
/// it is not symmetric ("a b" vs "ab" scores 1.0, the reverse 0.5).
pub fn text_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let tokens_a: Vec<&str> = a.split_whitespace().collect();
    let tokens_b: Vec<&str> = b.split_whitespace().collect();

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let matched = tokens_a
        .iter()
        .filter(|token| {
            tokens_b
                .iter()
                .any(|other| other.contains(*token) || token.contains(*other))
        })
        .count();

    matched as f64 / tokens_a.len().max(tokens_b.len()) as f64
}

/// Similarity of two optional fields; missing on either side scores 0
#[inline]
pub fn optional_text_similarity(a: Option<&str>, b: Option<&str>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => text_similarity(a, b),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_text() {
        assert_eq!(text_similarity("Blue Nike Backpack", "blue nike backpack"), 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        // "blue" and "backpack" match, "nike" does not
        let sim = text_similarity("Blue Nike Backpack", "Blue Backpack");
        assert!((sim - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_substring_tokens_match() {
        // "phone" is contained in "iphone"
        assert_eq!(text_similarity("phone", "iPhone"), 1.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(text_similarity("", "wallet"), 0.0);
        assert_eq!(text_similarity("wallet", ""), 0.0);
        assert_eq!(text_similarity("   ", "wallet"), 0.0);
        assert_eq!(optional_text_similarity(None, Some("wallet")), 0.0);
    }

    #[test]
    fn test_not_symmetric() {
        assert_eq!(text_similarity("a b", "ab"), 1.0);
        assert_eq!(text_similarity("ab", "a b"), 0.5);
    }

    #[test]
    fn test_no_overlap() {
        assert_eq!(text_similarity("black umbrella", "silver keys"), 0.0);
    }
}
