/// Building names treated as interchangeable
pub const BUILDING_SYNONYMS: &[(&str, &str)] = &[
    ("library", "lib"),
    ("laboratory", "lab"),
    ("building", "bldg"),
    ("center", "centre"),
    ("math", "mathematics"),
    ("science", "sci"),
];

/// First whitespace-delimited word of a location, lowercased
pub fn building_token(location: &str) -> Option<String> {
    location
        .split_whitespace()
        .next()
        .map(|token| token.to_lowercase())
}

/// Compare two locations by their building token
///
/// Returns 1.0 for the same building, 0.5 for a known synonym pair, 0.7
/// when one token contains the other and 0.0 otherwise. Synonym pairs are
/// checked before containment.
pub fn location_similarity(a: &str, b: &str) -> f64 {
    let (building_a, building_b) = match (building_token(a), building_token(b)) {
        (Some(a), Some(b)) => (a, b),
        _ => return 0.0,
    };

    if building_a == building_b {
        return 1.0;
    }

    if are_synonyms(&building_a, &building_b) {
        return 0.5;
    }

    if building_a.contains(&building_b) || building_b.contains(&building_a) {
        return 0.7;
    }

    0.0
}

#[inline]
fn are_synonyms(a: &str, b: &str) -> bool {
    BUILDING_SYNONYMS
        .iter()
        .any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}

/// Compare two locations as whole strings
///
/// 1.0 when equal ignoring case, 0.5 when one contains the other.
pub fn full_location_similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a == b {
        1.0
    } else if a.contains(&b) || b.contains(&a) {
        0.5
    } else {
        0.0
    }
}
