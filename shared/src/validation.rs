//! Input validation functions
//!
//! Range and format checks for the presentation boundary. The estimation
//! core itself only requires presence (see
//! [`crate::estimation::estimate_calories`]); these helpers let a form
//! reject out-of-range or unknown values before they reach it, and expose
//! the option lists its selector widgets render.

use crate::activities::{activities, find_activity};

/// Bounds offered by the weight selector (kg)
pub const MIN_WEIGHT_KG: f64 = 40.0;
pub const MAX_WEIGHT_KG: f64 = 150.0;

/// Bounds offered by the duration selector (minutes)
pub const MIN_DURATION_MINUTES: f64 = 10.0;
pub const MAX_DURATION_MINUTES: f64 = 190.0;

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < MIN_WEIGHT_KG {
        return Err(format!("Weight must be at least {} kg", MIN_WEIGHT_KG));
    }
    if weight_kg > MAX_WEIGHT_KG {
        return Err(format!("Weight must be at most {} kg", MAX_WEIGHT_KG));
    }
    Ok(())
}

/// Validate duration value (in minutes)
pub fn validate_duration_minutes(minutes: f64) -> Result<(), String> {
    if minutes.is_nan() || minutes.is_infinite() {
        return Err("Duration must be a valid number".to_string());
    }
    if minutes < MIN_DURATION_MINUTES {
        return Err(format!(
            "Duration must be at least {} minutes",
            MIN_DURATION_MINUTES
        ));
    }
    if minutes > MAX_DURATION_MINUTES {
        return Err(format!(
            "Duration must be at most {} minutes",
            MAX_DURATION_MINUTES
        ));
    }
    Ok(())
}

/// Validate an activity identifier against the catalog
///
/// Stricter than the estimator, which maps unknown ids to a MET of 0;
/// a form that wants to surface the mistake instead uses this check.
pub fn validate_activity_id(id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("Activity cannot be empty".to_string());
    }
    if find_activity(id).is_none() {
        let known: Vec<&str> = activities().iter().map(|a| a.id).collect();
        return Err(format!(
            "Unknown activity. Must be one of: {}",
            known.join(", ")
        ));
    }
    Ok(())
}

// ============================================================================
// Selector Options
// ============================================================================

/// Weight options rendered by the presentation layer, in kg
pub fn weight_options_kg() -> Vec<u32> {
    (MIN_WEIGHT_KG as u32..=MAX_WEIGHT_KG as u32).collect()
}

/// Duration options rendered by the presentation layer, in minutes
pub fn duration_options_minutes() -> Vec<u32> {
    (MIN_DURATION_MINUTES as u32..=MAX_DURATION_MINUTES as u32).collect()
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to the labels the form displays
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" | "weight_kg" => "Weight (kg)",
        "duration" | "duration_minutes" => "Duration (minutes)",
        "activity" => "Activity",
        _ => field_name,
    }
}
