//! Calorie Burn Estimator WASM Module
//!
//! This crate provides WebAssembly bindings for the estimation core so the
//! browser presentation layer can compute estimates, populate its selector
//! widgets, and keep its form state without any server round-trip.
//!
//! Outcomes cross the boundary as JSON strings in the agreed wire shape:
//! `{"result": <integer>}` or `{"error": "MissingInputError"}`.

use wasm_bindgen::prelude::*;

use calorie_estimator_shared::types::{activity_catalog, EstimateOutcome};
use calorie_estimator_shared::validation;
use calorie_estimator_shared::EstimatorForm;

fn outcome_json(outcome: EstimateOutcome) -> String {
    // The outcome shapes contain only an integer or a static code, so
    // serialization cannot fail
    serde_json::to_string(&outcome).unwrap_or_else(|_| r#"{"error":"MissingInputError"}"#.into())
}

/// Estimate calories burned for a weight (kg), duration (minutes), and
/// catalog activity id, returning the outcome JSON
#[wasm_bindgen]
pub fn estimate_calories(
    weight_kg: Option<f64>,
    duration_minutes: Option<f64>,
    activity: &str,
) -> String {
    let outcome: EstimateOutcome =
        calorie_estimator_shared::estimate_calories(weight_kg, duration_minutes, activity).into();
    outcome_json(outcome)
}

/// The activity catalog as a JSON array of `{id, label, met}` entries,
/// for populating the activity selector
#[wasm_bindgen]
pub fn catalog_json() -> String {
    // Static catalog of plain values, serialization cannot fail
    serde_json::to_string(&activity_catalog()).unwrap_or_else(|_| "[]".into())
}

/// Weight options rendered by the weight selector, in kg
#[wasm_bindgen]
pub fn weight_options_kg() -> Vec<u32> {
    validation::weight_options_kg()
}

/// Duration options rendered by the duration selector, in minutes
#[wasm_bindgen]
pub fn duration_options_minutes() -> Vec<u32> {
    validation::duration_options_minutes()
}

/// Single-owner form state held by the page between user edits
///
/// The page writes fields as the user edits, calls `calculate` on the
/// button press, and `clear` on the reset control. Notification of the
/// outcome stays on the JavaScript side.
#[wasm_bindgen]
#[derive(Default)]
pub struct CalorieForm {
    inner: EstimatorForm,
}

#[wasm_bindgen]
impl CalorieForm {
    /// Create an empty form
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_weight_kg(&mut self, weight_kg: f64) {
        self.inner.set_weight_kg(weight_kg);
    }

    pub fn set_duration_minutes(&mut self, duration_minutes: f64) {
        self.inner.set_duration_minutes(duration_minutes);
    }

    pub fn set_activity(&mut self, activity: &str) {
        self.inner.set_activity(activity);
    }

    /// Calculate the estimate for the current inputs, returning the
    /// outcome JSON. On success the result is also retained on the form.
    pub fn calculate(&mut self) -> String {
        let outcome: EstimateOutcome = self.inner.calculate().into();
        outcome_json(outcome)
    }

    /// Discard all inputs and the last result
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.inner.weight_kg()
    }

    pub fn duration_minutes(&self) -> Option<f64> {
        self.inner.duration_minutes()
    }

    pub fn activity(&self) -> String {
        self.inner.activity().to_string()
    }

    /// The last successfully calculated estimate, if any
    pub fn calories_burned(&self) -> Option<u32> {
        self.inner.calories_burned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_success_json() {
        let json = estimate_calories(Some(40.0), Some(10.0), "walking");
        assert_eq!(json, r#"{"result":25}"#);
    }

    #[test]
    fn test_estimate_missing_input_json() {
        let json = estimate_calories(None, Some(70.0), "walking");
        assert_eq!(json, r#"{"error":"MissingInputError"}"#);
    }

    #[test]
    fn test_catalog_json() {
        let catalog = catalog_json();
        assert!(catalog.starts_with('['));
        assert!(catalog.contains(r#""id":"swimming_freestyle""#));
        assert!(catalog.contains(r#""label":"Hiking (Uphill)""#));
    }

    #[test]
    fn test_selector_options() {
        assert_eq!(weight_options_kg().len(), 111);
        assert_eq!(duration_options_minutes().len(), 181);
    }

    #[test]
    fn test_form_roundtrip() {
        let mut form = CalorieForm::new();
        form.set_weight_kg(70.0);
        form.set_duration_minutes(60.0);
        form.set_activity("walking");
        assert_eq!(form.calculate(), r#"{"result":257}"#);
        assert_eq!(form.calories_burned(), Some(257));

        form.clear();
        assert_eq!(form.weight_kg(), None);
        assert_eq!(form.duration_minutes(), None);
        assert_eq!(form.activity(), "");
        assert_eq!(form.calories_burned(), None);
        assert_eq!(form.calculate(), r#"{"error":"MissingInputError"}"#);
    }
}
