//! Data models for daily health tracking

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Self-reported mood for a day
///
/// Unknown values are kept rather than rejected so that a stray value in
/// stored data never breaks analysis. Validation reports them separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    Excellent,
    Good,
    #[default]
    Okay,
    Bad,
    Terrible,
    Unrecognized(String),
}

impl Mood {
    pub fn as_str(&self) -> &str {
        match self {
            Mood::Excellent => "excellent",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Bad => "bad",
            Mood::Terrible => "terrible",
            Mood::Unrecognized(raw) => raw,
        }
    }

    /// Whether this mood warrants a mental health recommendation
    pub fn is_low(&self) -> bool {
        matches!(self, Mood::Bad | Mood::Terrible)
    }
}

impl From<String> for Mood {
    fn from(value: String) -> Self {
        match value.as_str() {
            "excellent" => Mood::Excellent,
            "good" => Mood::Good,
            "okay" => Mood::Okay,
            "bad" => Mood::Bad,
            "terrible" => Mood::Terrible,
            _ => Mood::Unrecognized(value),
        }
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> Self {
        match mood {
            Mood::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user's aggregate health data for a single calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntry {
    #[serde(with = "calendar_day")]
    pub date: NaiveDate,
    #[serde(default)]
    #[validate(range(max = 100000))]
    pub steps: u32,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 24.0))]
    pub sleep_hours: f64,
    /// Liters
    #[serde(default)]
    #[validate(range(min = 0.0, max = 20.0))]
    pub water_intake: f64,
    #[serde(default)]
    #[validate(range(max = 10000))]
    pub calories: u32,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Notes cannot exceed 500 characters"))]
    pub notes: Option<String>,
}

impl HealthEntry {
    /// Create an entry with zeroed metrics and a neutral mood
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            steps: 0,
            sleep_hours: 0.0,
            water_intake: 0.0,
            calories: 0,
            mood: Mood::default(),
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Demographic context forwarded to the remote analysis service
///
/// Bounds are checked by `validation::validate_user_profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Centimeters
    #[serde(default)]
    pub height: Option<f64>,
    /// Kilograms
    #[serde(default)]
    pub weight: Option<f64>,
}

/// Entry dates travel as `YYYY-MM-DD`. Full timestamps are accepted on input
/// and truncated to their UTC day.
mod calendar_day {
    use chrono::{DateTime, NaiveDate};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date) = NaiveDate::parse_from_str(&raw, FORMAT) {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.naive_utc().date())
            .map_err(|_| de::Error::custom(format!("invalid date: {raw}")))
    }
}
