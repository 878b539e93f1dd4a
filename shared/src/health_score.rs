//! Rule-based health score
//!
//! Used when the remote analysis service cannot be reached. Scores a single
//! day (the latest entry) on four equally weighted components:
//!
//! | Component | Full marks          | Max |
//! |-----------|---------------------|-----|
//! | Steps     | 10,000 or more      | 25  |
//! | Sleep     | 7 to 9 hours        | 25  |
//! | Water     | 2.5 liters or more  | 25  |
//! | Mood      | excellent           | 25  |
//!
//! The scorer is a pure function of its input. It performs no validation;
//! out-of-range values are scored as they are.

use crate::models::{HealthEntry, Mood};
use crate::types::{
    AnalysisResult, LatestEntry, Priority, Recommendation, RecommendationCategory,
    MAX_RECOMMENDATIONS,
};

// ============================================================================
// Constants
// ============================================================================

pub const MAX_HEALTH_SCORE: u8 = 100;

/// Score reported when there is nothing to analyze
pub const NO_DATA_SCORE: u8 = 50;

pub const NO_DATA_INSIGHTS: &str = "Not enough data to provide detailed analysis";

const NO_DATA_SUGGESTION: &str =
    "Start logging your daily health data to get personalized insights";

/// Points available to each component
const COMPONENT_MAX: i32 = 25;

const STEP_TARGET: u32 = 10_000;
const STEP_GOOD: u32 = 7_000;
const STEP_FAIR: u32 = 5_000;

const WATER_TARGET_L: f64 = 2.5;
const WATER_GOOD_L: f64 = 2.0;

/// Top tier threshold for the insights message (inclusive)
const GREAT_SCORE: i32 = 80;
/// Middle tier threshold for the insights message (inclusive)
const GOOD_SCORE: i32 = 60;

const INSIGHTS_PREFIX: &str = "Based on your recent data: ";

// ============================================================================
// Component Scores
// ============================================================================

/// A component's points and the recommendation it raised, if any
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentScore {
    pub points: i32,
    pub recommendation: Option<Recommendation>,
}

impl ComponentScore {
    fn full(points: i32) -> Self {
        Self {
            points,
            recommendation: None,
        }
    }

    fn with_recommendation(points: i32, recommendation: Recommendation) -> Self {
        Self {
            points,
            recommendation: Some(recommendation),
        }
    }
}

/// Score daily steps
///
/// Under 5,000 steps earns a linear share of the 10,000 target and raises
/// an exercise recommendation.
pub fn score_steps(steps: u32) -> ComponentScore {
    if steps >= STEP_TARGET {
        ComponentScore::full(25)
    } else if steps >= STEP_GOOD {
        ComponentScore::full(20)
    } else if steps >= STEP_FAIR {
        ComponentScore::full(15)
    } else {
        let points = (steps as f64 / STEP_TARGET as f64 * COMPONENT_MAX as f64).floor() as i32;
        ComponentScore::with_recommendation(
            points,
            Recommendation::new(
                RecommendationCategory::Exercise,
                Priority::High,
                format!("Aim for at least 10,000 steps daily. You're at {steps} steps."),
            ),
        )
    }
}

/// Score hours slept
///
/// 7-9 hours is ideal and 6-10 acceptable (checked in that order). Anything
/// else earns a flat 10 points.
pub fn score_sleep(hours: f64) -> ComponentScore {
    if (7.0..=9.0).contains(&hours) {
        ComponentScore::full(25)
    } else if (6.0..=10.0).contains(&hours) {
        ComponentScore::full(20)
    } else {
        ComponentScore::with_recommendation(
            10,
            Recommendation::new(
                RecommendationCategory::Sleep,
                Priority::High,
                "Aim for 7-9 hours of quality sleep each night.",
            ),
        )
    }
}

/// Score water intake in liters
pub fn score_water(liters: f64) -> ComponentScore {
    if liters >= WATER_TARGET_L {
        ComponentScore::full(25)
    } else if liters >= WATER_GOOD_L {
        ComponentScore::full(20)
    } else {
        // NaN saturates to 0 on the cast
        let points = (liters / WATER_TARGET_L * COMPONENT_MAX as f64).floor() as i32;
        ComponentScore::with_recommendation(
            points,
            Recommendation::new(
                RecommendationCategory::Hydration,
                Priority::Medium,
                "Drink at least 2-3 liters of water daily.",
            ),
        )
    }
}

/// Score self-reported mood
pub fn score_mood(mood: &Mood) -> ComponentScore {
    let points = match mood {
        Mood::Excellent => 25,
        Mood::Good => 20,
        Mood::Okay => 15,
        Mood::Bad => 10,
        Mood::Terrible => 5,
        Mood::Unrecognized(_) => 15,
    };

    if mood.is_low() {
        ComponentScore::with_recommendation(
            points,
            Recommendation::new(
                RecommendationCategory::MentalHealth,
                Priority::High,
                "Consider mindfulness practices, exercise, or talking to someone.",
            ),
        )
    } else {
        ComponentScore::full(points)
    }
}

// ============================================================================
// Fallback Analysis
// ============================================================================

/// Compute the fallback analysis, treating the last entry as the latest
pub fn compute_fallback(entries: &[HealthEntry]) -> AnalysisResult {
    compute_fallback_with(entries, LatestEntry::default())
}

/// Compute the fallback analysis with an explicit latest-entry policy
pub fn compute_fallback_with(entries: &[HealthEntry], latest: LatestEntry) -> AnalysisResult {
    match latest.select(entries) {
        Some(entry) => score_entry(entry),
        None => no_data_result(),
    }
}

/// Score a single day
pub fn score_entry(entry: &HealthEntry) -> AnalysisResult {
    let components = [
        score_steps(entry.steps),
        score_sleep(entry.sleep_hours),
        score_water(entry.water_intake),
        score_mood(&entry.mood),
    ];

    let total: i32 = components.iter().map(|c| c.points).sum();
    let recommendations: Vec<Recommendation> = components
        .into_iter()
        .filter_map(|c| c.recommendation)
        .take(MAX_RECOMMENDATIONS)
        .collect();

    AnalysisResult {
        health_score: total.clamp(0, MAX_HEALTH_SCORE as i32) as u8,
        recommendations,
        insights: insights_for(total),
    }
}

fn insights_for(score: i32) -> String {
    let message = if score >= GREAT_SCORE {
        "Great job maintaining healthy habits!"
    } else if score >= GOOD_SCORE {
        "Good progress, but there's room for improvement."
    } else {
        "Focus on the recommendations to improve your health score."
    };
    format!("{INSIGHTS_PREFIX}{message}")
}

fn no_data_result() -> AnalysisResult {
    AnalysisResult {
        health_score: NO_DATA_SCORE,
        recommendations: vec![Recommendation::new(
            RecommendationCategory::General,
            Priority::High,
            NO_DATA_SUGGESTION,
        )],
        insights: NO_DATA_INSIGHTS.to_string(),
    }
}
