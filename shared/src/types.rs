//! Presentation-boundary request and response types
//!
//! These are the wire shapes the JavaScript presentation layer exchanges
//! with the estimator: a request with optional fields, an outcome that is
//! either `{"result": <integer>}` or `{"error": "MissingInputError"}`, and
//! the serializable catalog export for the activity selector.

use serde::{Deserialize, Serialize};

use crate::activities::{activities, Activity};
use crate::errors::EstimationError;
use crate::estimation::estimate_calories;

/// Estimation request as submitted by the presentation layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimateRequest {
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub duration_minutes: Option<f64>,
    #[serde(default)]
    pub activity: String,
}

impl EstimateRequest {
    /// Run the estimation and fold the result into the wire shape
    pub fn outcome(&self) -> EstimateOutcome {
        estimate_calories(self.weight_kg, self.duration_minutes, &self.activity).into()
    }
}

/// Outcome of an estimation call
///
/// Serializes as `{"result": 25}` on success and
/// `{"error": "MissingInputError"}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EstimateOutcome {
    Success { result: u32 },
    Failure { error: String },
}

impl From<Result<u32, EstimationError>> for EstimateOutcome {
    fn from(result: Result<u32, EstimationError>) -> Self {
        match result {
            Ok(calories) => EstimateOutcome::Success { result: calories },
            Err(err) => EstimateOutcome::Failure {
                error: err.code().to_string(),
            },
        }
    }
}

/// Catalog entry in its serializable export shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityInfo {
    pub id: String,
    pub label: String,
    pub met: f64,
}

impl From<&Activity> for ActivityInfo {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id.to_string(),
            label: activity.label.to_string(),
            met: activity.met,
        }
    }
}

/// The full catalog export consumed by the activity selector
pub fn activity_catalog() -> Vec<ActivityInfo> {
    activities().iter().map(ActivityInfo::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_wire_shape() {
        let outcome = EstimateOutcome::Success { result: 25 };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"result":25}"#);
    }

    #[test]
    fn test_failure_wire_shape() {
        let outcome: EstimateOutcome =
            estimate_calories(None, Some(70.0), "walking").into();
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"error":"MissingInputError"}"#);
    }

    #[test]
    fn test_request_outcome() {
        let request = EstimateRequest {
            weight_kg: Some(40.0),
            duration_minutes: Some(10.0),
            activity: "walking".to_string(),
        };
        assert_eq!(request.outcome(), EstimateOutcome::Success { result: 25 });
    }

    #[test]
    fn test_request_deserializes_with_missing_fields() {
        let request: EstimateRequest = serde_json::from_str(r#"{"weight_kg": 70.0}"#).unwrap();
        assert_eq!(request.weight_kg, Some(70.0));
        assert_eq!(request.duration_minutes, None);
        assert_eq!(request.activity, "");
        assert_eq!(
            request.outcome(),
            EstimateOutcome::Failure {
                error: "MissingInputError".to_string()
            }
        );
    }

    #[test]
    fn test_catalog_export() {
        let catalog = activity_catalog();
        assert_eq!(catalog.len(), 10);
        let walking = catalog.iter().find(|a| a.id == "walking").unwrap();
        assert_eq!(walking.label, "Walking (3 mph)");
        assert_eq!(walking.met, 3.5);

        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains(r#""id":"running_moderate""#));
        assert!(json.contains(r#""met":9.8"#));
    }
}
