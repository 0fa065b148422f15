use crate::models::{Item, ScoringScheme, ScoringWeights};
use crate::core::{
    location::{full_location_similarity, location_similarity},
    text::{optional_text_similarity, text_similarity},
};

/// Calculate a match score (0-100) between a lost item and a found item
///
/// Each factor adds `weight * similarity` to the score and `weight` to the
/// maximum, but only when both items provide the field:
///
/// | factor      | weighted              | points                  |
/// |-------------|-----------------------|-------------------------|
/// | title       | token overlap (40)    | token overlap (2)       |
/// | category    | exact (25)            | ignoring case (3)       |
/// | location    | building token (20)   | whole string (0.5)      |
/// | description | token overlap (10)    | token overlap (0)       |
/// | color       | token overlap (5)     | containment (1)         |
/// | size        | ignoring case (0)     | ignoring case (1)       |
///
/// Returns 0 when no factor applies.
pub fn calculate_match_score(
    lost: &Item,
    found: &Item,
    scheme: ScoringScheme,
    weights: &ScoringWeights,
) -> u8 {
    let factors = [
        (weights.title, both(lost.title(), found.title(), text_similarity)),
        (weights.category, both(lost.category(), found.category(), |a, b| {
            match scheme {
                ScoringScheme::Weighted => exact(a, b),
                ScoringScheme::Points => equal_ignore_case(a, b),
            }
        })),
        (weights.location, both(lost.location(), found.location(), |a, b| {
            match scheme {
                ScoringScheme::Weighted => location_similarity(a, b),
                ScoringScheme::Points => full_location_similarity(a, b),
            }
        })),
        (weights.description, both(lost.description(), found.description(), text_similarity)),
        (weights.color, both(lost.color(), found.color(), |a, b| {
            match scheme {
                ScoringScheme::Weighted => text_similarity(a, b),
                ScoringScheme::Points => containment(a, b),
            }
        })),
        (weights.size, both(lost.size(), found.size(), equal_ignore_case)),
    ];

    let (score, max_score) = factors
        .iter()
        .filter(|(weight, _)| *weight > 0.0)
        .filter_map(|(weight, similarity)| similarity.map(|s| (weight * s, *weight)))
        .fold((0.0, 0.0), |(score, max), (s, w)| (score + s, max + w));

    if max_score <= 0.0 {
        return 0;
    }

    (score / max_score * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Explain in words why two items look alike
///
/// Category and color are judged with the same comparators `scheme` scores
/// them with.
pub fn match_reasons(source: &Item, candidate: &Item, scheme: ScoringScheme) -> Vec<String> {
    let mut reasons = Vec::new();

    if let (Some(a), Some(b)) = (source.category(), candidate.category()) {
        let same = match scheme {
            ScoringScheme::Weighted => exact(a, b),
            ScoringScheme::Points => equal_ignore_case(a, b),
        };
        if same >= 1.0 {
            reasons.push(format!("Same category: {}", a));
        }
    }

    if let (Some(a), Some(b)) = (source.location(), candidate.location()) {
        if location_similarity(a, b) > 0.5 {
            reasons.push(format!("Similar location: {}", b));
        }
    }

    if let (Some(a), Some(b)) = (source.color(), candidate.color()) {
        let similar = match scheme {
            ScoringScheme::Weighted => text_similarity(a, b),
            ScoringScheme::Points => containment(a, b),
        };
        if similar > 0.5 {
            reasons.push(format!("Similar color: {}", b));
        }
    }

    if optional_text_similarity(source.title(), candidate.title()) > 0.3 {
        reasons.push("Similar description".to_string());
    }

    reasons
}

/// Apply `compare` only when both sides are present
#[inline]
fn both<F>(a: Option<&str>, b: Option<&str>, compare: F) -> Option<f64>
where
    F: Fn(&str, &str) -> f64,
{
    match (a, b) {
        (Some(a), Some(b)) => Some(compare(a, b)),
        _ => None,
    }
}

#[inline]
fn exact(a: &str, b: &str) -> f64 {
    if a == b { 1.0 } else { 0.0 }
}

#[inline]
fn equal_ignore_case(a: &str, b: &str) -> f64 {
    if a.to_lowercase() == b.to_lowercase() { 1.0 } else { 0.0 }
}

#[inline]
fn containment(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a.contains(&b) || b.contains(&a) { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_item(title: &str, category: &str, location: &str) -> Item {
        Item {
            title: Some(title.to_string()),
            category: Some(category.to_string()),
            location: Some(location.to_string()),
            ..Default::default()
        }
    }

    fn weighted(lost: &Item, found: &Item) -> u8 {
        calculate_match_score(lost, found, ScoringScheme::Weighted, &ScoringScheme::Weighted.default_weights())
    }

    fn points(lost: &Item, found: &Item) -> u8 {
        calculate_match_score(lost, found, ScoringScheme::Points, &ScoringScheme::Points.default_weights())
    }

    #[test]
    fn test_identical_items_score_100() {
        let lost = create_item("Blue Nike Backpack", "Bags & Backpacks", "Student Center");
        let found = lost.clone();

        assert_eq!(weighted(&lost, &found), 100);
        assert_eq!(points(&lost, &found), 100);
    }

    #[test]
    fn test_category_mismatch_only() {
        let lost = Item { category: Some("Electronics".to_string()), ..Default::default() };
        let found = Item { category: Some("Keys".to_string()), ..Default::default() };

        assert_eq!(weighted(&lost, &found), 0);
        assert_eq!(points(&lost, &found), 0);
    }

    #[test]
    fn test_no_shared_fields() {
        let lost = Item { title: Some("Wallet".to_string()), ..Default::default() };
        let found = Item { category: Some("Wallets".to_string()), ..Default::default() };

        assert_eq!(weighted(&lost, &found), 0);
        assert_eq!(weighted(&Item::default(), &Item::default()), 0);
    }

    #[test]
    fn test_weighted_partial_match() {
        // title 2/3 * 40, category 25, building "library" vs "gym" 0
        let lost = create_item("Black Leather Wallet", "Wallets", "Library 2F");
        let found = create_item("Black Wallet", "Wallets", "Gym lobby");

        let expected = ((2.0 / 3.0 * 40.0 + 25.0) / 85.0 * 100.0_f64).round() as u8;
        assert_eq!(weighted(&lost, &found), expected);
    }

    #[test]
    fn test_weighted_category_is_case_sensitive() {
        let lost = Item { category: Some("Keys".to_string()), ..Default::default() };
        let found = Item { category: Some("keys".to_string()), ..Default::default() };

        assert_eq!(weighted(&lost, &found), 0);
        assert_eq!(points(&lost, &found), 100);
    }

    #[test]
    fn test_points_color_and_size() {
        let mut lost = create_item("Water Bottle", "Other", "Gym");
        lost.color = Some("Dark Blue".to_string());
        lost.size = Some("Large".to_string());
        let mut found = lost.clone();
        found.color = Some("blue".to_string());
        found.size = Some("small".to_string());

        // category 3 + title 2 + color 1 + size 0 + location 0.5 out of 7.5
        assert_eq!(points(&lost, &found), (6.5_f64 / 7.5 * 100.0).round() as u8);
    }

    #[test]
    fn test_points_location_containment() {
        let lost = Item { location: Some("Student Center".to_string()), ..Default::default() };
        let found = Item { location: Some("Student Center Room 4".to_string()), ..Default::default() };

        assert_eq!(points(&lost, &found), 50);
    }

    #[test]
    fn test_zero_weight_factor_ignored() {
        let mut lost = create_item("Umbrella", "Other", "Library");
        lost.size = Some("Large".to_string());
        let mut found = lost.clone();
        found.size = Some("Small".to_string());

        // size has zero weight in the weighted table
        assert_eq!(weighted(&lost, &found), 100);
    }

    #[test]
    fn test_custom_weights() {
        let lost = create_item("Umbrella", "Other", "Library");
        let found = create_item("Umbrella", "Clothing", "Library");
        let weights = ScoringWeights {
            title: 1.0,
            category: 1.0,
            location: 0.0,
            description: 0.0,
            color: 0.0,
            size: 0.0,
        };

        assert_eq!(calculate_match_score(&lost, &found, ScoringScheme::Weighted, &weights), 50);
    }

    #[test]
    fn test_match_reasons() {
        let mut lost = create_item("Blue Nike Backpack", "Bags & Backpacks", "Student Center");
        lost.color = Some("Blue".to_string());
        let mut found = create_item("Nike Backpack", "Bags & Backpacks", "Student Lounge");
        found.color = Some("blue".to_string());

        let reasons = match_reasons(&lost, &found, ScoringScheme::Weighted);

        assert_eq!(
            reasons,
            vec![
                "Same category: Bags & Backpacks".to_string(),
                "Similar location: Student Lounge".to_string(),
                "Similar color: blue".to_string(),
                "Similar description".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_reasons_for_missing_fields() {
        assert!(match_reasons(&Item::default(), &Item::default(), ScoringScheme::Points).is_empty());
    }

    #[test]
    fn test_match_reasons_follow_scheme() {
        let mut lost = Item { category: Some("Keys".to_string()), ..Default::default() };
        lost.color = Some("Dark Blue".to_string());
        let mut found = Item { category: Some("keys".to_string()), ..Default::default() };
        found.color = Some("blue".to_string());

        assert_eq!(points(&lost, &found), 100);
        assert_eq!(
            match_reasons(&lost, &found, ScoringScheme::Points),
            vec!["Same category: Keys".to_string(), "Similar color: blue".to_string()]
        );
        assert!(match_reasons(&lost, &found, ScoringScheme::Weighted).is_empty());
    }
}
