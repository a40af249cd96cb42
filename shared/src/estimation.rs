//! Calorie estimation module
//!
//! Provides the calorie burn calculation from body weight, exercise
//! duration, and a catalog activity, plus the single-owner form state the
//! presentation layer holds between user edits and a calculation.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: the estimate is computed with no side effects
//! 2. **Explicit State**: form fields live in one owned value, no ambient globals
//! 3. **Notification Decoupled**: the core returns a result or an error;
//!    surfacing either to the user is the presentation layer's job

use serde::{Deserialize, Serialize};

use crate::activities::met_for;
use crate::errors::EstimationError;

// ============================================================================
// Core Estimation
// ============================================================================

/// Estimate calories burned for an activity
///
/// Formula: `kcal/min = (MET × 3.5 × weight(kg)) / 200`, scaled by the
/// duration in minutes and rounded to the nearest whole kilocalorie
/// (ties round away from zero).
///
/// Fails with [`EstimationError::MissingInput`] when weight, duration, or
/// activity is unset. An activity id not present in the catalog resolves
/// to a MET of 0 and therefore an estimate of 0 (see
/// [`crate::activities::met_for`]).
pub fn estimate_calories(
    weight_kg: Option<f64>,
    duration_minutes: Option<f64>,
    activity: &str,
) -> Result<u32, EstimationError> {
    let mut missing = Vec::new();
    if weight_kg.is_none() {
        missing.push("weight");
    }
    if duration_minutes.is_none() {
        missing.push("duration");
    }
    if activity.is_empty() {
        missing.push("activity");
    }
    if !missing.is_empty() {
        return Err(EstimationError::MissingInput(missing.join(", ")));
    }

    let weight_kg = weight_kg.unwrap_or_default();
    let duration_minutes = duration_minutes.unwrap_or_default();

    let met = met_for(activity);
    let calories_per_minute = (met * 3.5 * weight_kg) / 200.0;
    let total_calories = calories_per_minute * duration_minutes;

    Ok(total_calories.round() as u32)
}

// ============================================================================
// Request and Form State
// ============================================================================

/// Transient estimation inputs as held by the presentation layer
///
/// A request is complete only when all three fields are set; an empty
/// activity string means unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimationRequest {
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Exercise duration in minutes
    pub duration_minutes: Option<f64>,
    /// Catalog activity identifier (empty = unset)
    #[serde(default)]
    pub activity: String,
}

impl EstimationRequest {
    /// Whether all required fields are set
    pub fn is_complete(&self) -> bool {
        self.weight_kg.is_some() && self.duration_minutes.is_some() && !self.activity.is_empty()
    }

    /// Names of the fields still unset
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.weight_kg.is_none() {
            missing.push("weight");
        }
        if self.duration_minutes.is_none() {
            missing.push("duration");
        }
        if self.activity.is_empty() {
            missing.push("activity");
        }
        missing
    }

    /// Run the estimation over the held inputs
    pub fn estimate(&self) -> Result<u32, EstimationError> {
        estimate_calories(self.weight_kg, self.duration_minutes, &self.activity)
    }
}

/// Single-owner form state: the current request plus the last result
///
/// The presentation layer mutates this through the setters as the user
/// edits, calls [`EstimatorForm::calculate`] on the user action, and
/// [`EstimatorForm::clear`] on reset. No other state exists between
/// invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatorForm {
    request: EstimationRequest,
    calories_burned: Option<u32>,
}

impl EstimatorForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_weight_kg(&mut self, weight_kg: f64) {
        self.request.weight_kg = Some(weight_kg);
    }

    pub fn set_duration_minutes(&mut self, duration_minutes: f64) {
        self.request.duration_minutes = Some(duration_minutes);
    }

    pub fn set_activity(&mut self, activity: &str) {
        self.request.activity = activity.to_string();
    }

    /// Calculate and record the estimate for the current inputs
    ///
    /// On failure the previously recorded result is kept, matching the
    /// reference behavior of leaving the last estimate on screen while
    /// the error notification shows.
    pub fn calculate(&mut self) -> Result<u32, EstimationError> {
        let calories = self.request.estimate()?;
        self.calories_burned = Some(calories);
        Ok(calories)
    }

    /// Discard the current request and result, returning to the initial
    /// empty state
    pub fn clear(&mut self) {
        self.request = EstimationRequest::default();
        self.calories_burned = None;
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.request.weight_kg
    }

    pub fn duration_minutes(&self) -> Option<f64> {
        self.request.duration_minutes
    }

    pub fn activity(&self) -> &str {
        &self.request.activity
    }

    /// The last successfully calculated estimate, if any
    pub fn calories_burned(&self) -> Option<u32> {
        self.calories_burned
    }

    pub fn request(&self) -> &EstimationRequest {
        &self.request
    }
}
