use serde::{Deserialize, Serialize};
use crate::models::{Item, MatchStrength, ScoredItem, ScoringScheme, ScoringWeights};
use crate::core::{
    enhanced::{EnhancedScore, EnhancedScorer},
    scoring::{calculate_match_score, match_reasons},
};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredItem>,
    pub total_candidates: usize,
}

/// Candidate paired with its image-aware score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedMatch {
    pub item: Item,
    #[serde(rename = "match")]
    pub score: EnhancedScore,
}

/// Thresholds for the image-aware finder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnhancedOptions {
    pub min_score: u8,
    pub max_results: usize,
}

impl Default for EnhancedOptions {
    fn default() -> Self {
        Self {
            min_score: 60,
            max_results: 10,
        }
    }
}

/// Ranks candidate items against a source item
///
/// # Pipeline
/// 1. Drop candidates sharing the source item's id
/// 2. Score each remaining candidate and attach match reasons
/// 3. Keep scores strictly above the threshold
/// 4. Sort by score, highest first
#[derive(Debug, Clone)]
pub struct Matcher {
    scheme: ScoringScheme,
    weights: ScoringWeights,
    min_score: u8,
    enhanced: EnhancedScorer,
}

impl Matcher {
    pub fn new(scheme: ScoringScheme, weights: ScoringWeights, min_score: u8) -> Self {
        Self {
            scheme,
            weights,
            min_score,
            enhanced: EnhancedScorer::default(),
        }
    }

    /// Matcher using the scheme's default weights and threshold
    pub fn with_scheme(scheme: ScoringScheme) -> Self {
        Self::new(scheme, scheme.default_weights(), scheme.default_min_score())
    }

    pub fn with_enhanced_scorer(mut self, enhanced: EnhancedScorer) -> Self {
        self.enhanced = enhanced;
        self
    }

    pub fn scheme(&self) -> ScoringScheme {
        self.scheme
    }

    pub fn min_score(&self) -> u8 {
        self.min_score
    }

    pub fn score(&self, lost: &Item, found: &Item) -> u8 {
        calculate_match_score(lost, found, self.scheme, &self.weights)
    }

    pub fn enhanced_score(&self, lost: &Item, found: &Item) -> EnhancedScore {
        self.enhanced.score(lost, found)
    }

    /// Find candidates that plausibly describe the same object as `source`
    ///
    /// Exclusion of the source itself is by id only; a candidate with the
    /// same content but a different id is scored like any other.
    pub fn find_matches(
        &self,
        source: &Item,
        candidates: Vec<Item>,
        limit: Option<usize>,
    ) -> MatchResult {
        self.find_matches_above(source, candidates, self.min_score, limit)
    }

    /// Same as [`Matcher::find_matches`] with an explicit threshold
    pub fn find_matches_above(
        &self,
        source: &Item,
        candidates: Vec<Item>,
        min_score: u8,
        limit: Option<usize>,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut matches: Vec<ScoredItem> = candidates
            .into_iter()
            .filter(|candidate| !candidate.same_id(source))
            .filter_map(|candidate| {
                let match_score = self.score(source, &candidate);
                if match_score <= min_score {
                    return None;
                }

                Some(ScoredItem {
                    match_reasons: match_reasons(source, &candidate, self.scheme),
                    match_strength: MatchStrength::from_score(match_score),
                    match_score,
                    item: candidate,
                })
            })
            .collect();

        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        if let Some(limit) = limit {
            matches.truncate(limit);
        }

        tracing::debug!(
            "Matched {} of {} candidates (scheme: {}, min score: {})",
            matches.len(),
            total_candidates,
            self.scheme.as_str(),
            min_score
        );

        MatchResult {
            matches,
            total_candidates,
        }
    }

    /// Rank found items against a lost item with the image-aware score
    ///
    /// Unlike [`Matcher::find_matches`], a score equal to `min_score` is kept.
    pub fn find_enhanced_matches(
        &self,
        lost: &Item,
        candidates: Vec<Item>,
        options: EnhancedOptions,
    ) -> Vec<EnhancedMatch> {
        let mut matches: Vec<EnhancedMatch> = candidates
            .into_iter()
            .filter(|candidate| !candidate.same_id(lost))
            .map(|candidate| EnhancedMatch {
                score: self.enhanced.score(lost, &candidate),
                item: candidate,
            })
            .filter(|m| m.score.score >= options.min_score)
            .collect();

        matches.sort_by(|a, b| b.score.score.cmp(&a.score.score));
        matches.truncate(options.max_results);

        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_scheme(ScoringScheme::default())
    }
}
