//! Analysis request and response types

use crate::models::{HealthEntry, UserProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;

/// Maximum number of recommendations carried by a result
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Payload sent to the remote analysis service
///
/// Owned when parsed from input, borrowed when built for an outbound call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest<'a> {
    pub health_data: Cow<'a, [HealthEntry]>,
    #[serde(default)]
    pub user_profile: Cow<'a, UserProfile>,
}

impl<'a> AnalysisRequest<'a> {
    pub fn borrowed(health_data: &'a [HealthEntry], user_profile: &'a UserProfile) -> Self {
        Self {
            health_data: Cow::Borrowed(health_data),
            user_profile: Cow::Borrowed(user_profile),
        }
    }
}

/// Area of health a recommendation targets
///
/// The remote service may use categories beyond the ones scored locally;
/// those are carried through as `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecommendationCategory {
    Exercise,
    Sleep,
    Nutrition,
    Hydration,
    MentalHealth,
    /// Only used when there is no data to analyze
    General,
    Other(String),
}

impl RecommendationCategory {
    pub fn as_str(&self) -> &str {
        match self {
            RecommendationCategory::Exercise => "exercise",
            RecommendationCategory::Sleep => "sleep",
            RecommendationCategory::Nutrition => "nutrition",
            RecommendationCategory::Hydration => "hydration",
            RecommendationCategory::MentalHealth => "mental_health",
            RecommendationCategory::General => "general",
            RecommendationCategory::Other(raw) => raw,
        }
    }
}

impl From<String> for RecommendationCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "exercise" => RecommendationCategory::Exercise,
            "sleep" => RecommendationCategory::Sleep,
            "nutrition" => RecommendationCategory::Nutrition,
            "hydration" => RecommendationCategory::Hydration,
            "mental_health" => RecommendationCategory::MentalHealth,
            "general" => RecommendationCategory::General,
            _ => RecommendationCategory::Other(value),
        }
    }
}

impl From<RecommendationCategory> for String {
    fn from(category: RecommendationCategory) -> Self {
        match category {
            RecommendationCategory::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Other(raw) => raw,
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Other(value),
        }
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    #[serde(default)]
    pub priority: Priority,
    pub suggestion: String,
}

impl Recommendation {
    pub fn new(
        category: RecommendationCategory,
        priority: Priority,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            category,
            priority,
            suggestion: suggestion.into(),
        }
    }
}

/// Health score with recommendations, from either the remote service or
/// the local fallback scorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub health_score: u8,
    pub recommendations: Vec<Recommendation>,
    pub insights: String,
}

/// How the "latest" entry is picked from a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LatestEntry {
    /// Trust the caller's ascending ordering and take the last element
    #[default]
    LastInSequence,
    /// Take the entry with the greatest date regardless of position
    MostRecentDate,
}

impl LatestEntry {
    pub fn select<'a>(&self, entries: &'a [HealthEntry]) -> Option<&'a HealthEntry> {
        match self {
            LatestEntry::LastInSequence => entries.last(),
            // max_by_key keeps the last of equal dates, matching LastInSequence on ties
            LatestEntry::MostRecentDate => entries.iter().max_by_key(|e| e.date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRange {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Immutable record of one analysis, ready for persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub id: Uuid,
    pub user_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub health_score: u8,
    pub recommendations: Vec<Recommendation>,
    pub insights: String,
    pub data_range: DataRange,
}

impl AnalysisReport {
    pub fn new(
        user_id: Uuid,
        result: AnalysisResult,
        data_range: DataRange,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            generated_at,
            health_score: result.health_score,
            recommendations: result.recommendations,
            insights: result.insights,
            data_range,
        }
    }
}
