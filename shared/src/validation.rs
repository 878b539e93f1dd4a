//! Input validation functions
//!
//! Bounds on health entries and profiles. Scoring never validates; callers
//! check data here before handing it to analysis.
//! Uses both custom validators and the `validator` crate for derive macros.

use crate::errors::ValidationError;
use crate::models::{HealthEntry, Mood, UserProfile};
use validator::{Validate, ValidationErrors};

/// Maximum length of free-text notes on an entry
pub const MAX_NOTES_LENGTH: usize = 500;

/// Valid mood values
pub const VALID_MOODS: &[&str] = &["excellent", "good", "okay", "bad", "terrible"];

/// Validate a step count
pub fn validate_steps(steps: u32) -> Result<(), String> {
    if steps > 100_000 {
        return Err("Steps seems unrealistic".to_string());
    }
    Ok(())
}

/// Validate hours slept
pub fn validate_sleep_hours(hours: f64) -> Result<(), String> {
    if hours.is_nan() || hours.is_infinite() {
        return Err("Sleep hours must be a valid number".to_string());
    }
    if hours < 0.0 {
        return Err("Sleep hours cannot be negative".to_string());
    }
    if hours > 24.0 {
        return Err("Sleep hours cannot exceed 24".to_string());
    }
    Ok(())
}

/// Validate water intake (in liters)
pub fn validate_water_intake(liters: f64) -> Result<(), String> {
    if liters.is_nan() || liters.is_infinite() {
        return Err("Water intake must be a valid number".to_string());
    }
    if liters < 0.0 {
        return Err("Water intake cannot be negative".to_string());
    }
    if liters > 20.0 {
        return Err("Water intake seems unrealistic".to_string());
    }
    Ok(())
}

/// Validate daily calories
pub fn validate_calories(calories: u32) -> Result<(), String> {
    if calories > 10_000 {
        return Err("Calories seems unrealistic".to_string());
    }
    Ok(())
}

/// Validate mood
pub fn validate_mood(mood: &Mood) -> Result<(), String> {
    match mood {
        Mood::Unrecognized(_) => Err(format!(
            "Invalid mood. Must be one of: {}",
            VALID_MOODS.join(", ")
        )),
        _ => Ok(()),
    }
}

/// Validate every field of a health entry, reporting the first failure
pub fn validate_health_entry(entry: &HealthEntry) -> Result<(), ValidationError> {
    let checks = [
        ("steps", validate_steps(entry.steps)),
        ("sleepHours", validate_sleep_hours(entry.sleep_hours)),
        ("waterIntake", validate_water_intake(entry.water_intake)),
        ("calories", validate_calories(entry.calories)),
        ("mood", validate_mood(&entry.mood)),
    ];
    for (field, check) in checks {
        check.map_err(|message| ValidationError::new(field, message))?;
    }

    // Remaining declarative bounds (notes length)
    entry.validate().map_err(first_error)
}

/// Validate a sequence of entries, naming the offending index on failure
pub fn validate_health_entries(entries: &[HealthEntry]) -> Result<(), ValidationError> {
    entries.iter().enumerate().try_for_each(|(i, entry)| {
        validate_health_entry(entry).map_err(|e| e.at_index("healthData", i))
    })
}

/// Validate an age in years
pub fn validate_age(age: u32) -> Result<(), String> {
    if age < 1 {
        return Err("Age must be at least 1".to_string());
    }
    if age > 150 {
        return Err("Age must be less than 150".to_string());
    }
    Ok(())
}

/// Validate height (in centimeters)
pub fn validate_height(cm: f64) -> Result<(), String> {
    if cm.is_nan() || cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if cm > 300.0 {
        return Err("Height must be less than 300 cm".to_string());
    }
    Ok(())
}

/// Validate weight (in kilograms)
pub fn validate_weight(kg: f64) -> Result<(), String> {
    if kg.is_nan() || kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if kg < 10.0 {
        return Err("Weight must be at least 10 kg".to_string());
    }
    if kg > 500.0 {
        return Err("Weight must be less than 500 kg".to_string());
    }
    Ok(())
}

/// Validate the optional profile fields that are present
pub fn validate_user_profile(profile: &UserProfile) -> Result<(), ValidationError> {
    let checks = [
        ("age", profile.age.map(validate_age)),
        ("height", profile.height.map(validate_height)),
        ("weight", profile.weight.map(validate_weight)),
    ];
    for (field, check) in checks {
        if let Some(Err(message)) = check {
            return Err(ValidationError::new(field, message));
        }
    }
    Ok(())
}

fn first_error(errors: ValidationErrors) -> ValidationError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    match fields.first() {
        Some((field, errs)) => {
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| {
                    errs.first()
                        .map(|e| format!("failed {} check", e.code))
                        .unwrap_or_else(|| "invalid value".to_string())
                });
            ValidationError::new(field.to_string(), message)
        }
        None => ValidationError::new("unknown", "invalid value"),
    }
}
