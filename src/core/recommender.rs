use crate::core::scoring::{calculate_match_score, score_breakdown, score_from_breakdown};
use crate::models::{Destination, Preferences, ScoredDestination, ScoringWeights};

/// Default number of recommendations returned
pub const DEFAULT_LIMIT: usize = 10;

/// Ranks destinations against traveller preferences
///
/// Scores every destination, sorts by score (stable, so ties keep catalog
/// order) and keeps the top `limit`. Inputs are never mutated; results are
/// decorated copies.
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
}

impl Recommender {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single destination (0-100)
    pub fn score(&self, destination: &Destination, preferences: &Preferences) -> u8 {
        calculate_match_score(destination, preferences, &self.weights)
    }

    /// Top `limit` destinations by match score, highest first
    pub fn get_recommendations(
        &self,
        destinations: &[Destination],
        preferences: &Preferences,
        limit: usize,
    ) -> Vec<ScoredDestination> {
        self.rank(destinations, preferences, limit, false)
    }

    /// Same ranking as [`Recommender::get_recommendations`], with the earned
    /// points per sub-score attached to every result
    pub fn explain_recommendations(
        &self,
        destinations: &[Destination],
        preferences: &Preferences,
        limit: usize,
    ) -> Vec<ScoredDestination> {
        self.rank(destinations, preferences, limit, true)
    }

    fn rank(
        &self,
        destinations: &[Destination],
        preferences: &Preferences,
        limit: usize,
        explain: bool,
    ) -> Vec<ScoredDestination> {
        let mut scored: Vec<ScoredDestination> = destinations
            .iter()
            .map(|destination| {
                let breakdown = score_breakdown(destination, preferences, &self.weights);
                ScoredDestination {
                    destination: destination.clone(),
                    match_score: score_from_breakdown(&breakdown, &self.weights),
                    breakdown: explain.then_some(breakdown),
                }
            })
            .collect();

        // sort_by is stable: equal scores keep input order
        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        scored.truncate(limit);

        tracing::debug!(
            "Ranked {} destinations, returning {}",
            destinations.len(),
            scored.len()
        );

        scored
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
