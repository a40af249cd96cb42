//! Activity catalog module
//!
//! Provides the fixed MET (Metabolic Equivalent of Task) lookup table used
//! by the calorie estimation formula, plus the lookup helpers consumed by
//! the presentation layer's activity selector.
//!
//! # Design Principles
//!
//! 1. **Fixed at Startup**: entries are compile-time constants, no runtime insertion
//! 2. **Pure Lookups**: no side effects, no internal state
//! 3. **Display Decoupled**: labels feed selector widgets only, never the formula

/// A single catalog entry: activity identifier, display label, and MET coefficient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activity {
    /// Stable identifier used by the presentation layer and the estimator
    pub id: &'static str,
    /// Human-readable label for selector widgets (not used in computation)
    pub label: &'static str,
    /// MET coefficient: energy cost relative to resting metabolic rate
    pub met: f64,
}

/// The fixed activity catalog
///
/// Coefficients follow the compendium values for each activity at the
/// intensity named in the label.
const ACTIVITIES: &[Activity] = &[
    Activity {
        id: "walking",
        label: "Walking (3 mph)",
        met: 3.5,
    },
    Activity {
        id: "running_moderate",
        label: "Running (6 mph)",
        met: 9.8,
    },
    Activity {
        id: "cycling_moderate",
        label: "Cycling (12-14 mph)",
        met: 8.0,
    },
    Activity {
        id: "swimming_freestyle",
        label: "Swimming (Freestyle, moderate)",
        met: 7.0,
    },
    Activity {
        id: "aerobics_general",
        label: "Aerobics (General)",
        met: 5.5,
    },
    Activity {
        id: "weight_lifting",
        label: "Weight Lifting (General)",
        met: 3.0,
    },
    Activity {
        id: "basketball",
        label: "Basketball (Game)",
        met: 8.0,
    },
    Activity {
        id: "soccer",
        label: "Soccer (Game)",
        met: 7.0,
    },
    Activity {
        id: "dancing_vigorous",
        label: "Dancing (Vigorous)",
        met: 8.0,
    },
    Activity {
        id: "hiking",
        label: "Hiking (Uphill)",
        met: 6.0,
    },
];

/// Get the full catalog as a read-only slice
pub fn activities() -> &'static [Activity] {
    ACTIVITIES
}

/// Look up a catalog entry by identifier
pub fn find_activity(id: &str) -> Option<&'static Activity> {
    ACTIVITIES.iter().find(|a| a.id == id)
}

/// Resolve the MET coefficient for an activity identifier
///
/// An identifier not present in the catalog resolves to 0.0 rather than
/// an error, which in turn yields a zero-calorie estimate. Callers that
/// want to reject unknown identifiers up front should use
/// [`crate::validation::validate_activity_id`] at the input boundary.
pub fn met_for(id: &str) -> f64 {
    find_activity(id).map(|a| a.met).unwrap_or(0.0)
}

/// Check the catalog invariants: unique non-empty identifiers, non-empty
/// labels, and positive finite MET coefficients
///
/// The catalog is a compile-time constant, so a release build only needs
/// this once at startup (the test suite runs it on every change).
pub fn validate_catalog() -> Result<(), String> {
    for (i, activity) in ACTIVITIES.iter().enumerate() {
        if activity.id.is_empty() {
            return Err(format!("Activity at index {} has an empty id", i));
        }
        if activity.label.is_empty() {
            return Err(format!("Activity '{}' has an empty label", activity.id));
        }
        if !activity.met.is_finite() || activity.met <= 0.0 {
            return Err(format!(
                "Activity '{}' has an invalid MET coefficient: {}",
                activity.id, activity.met
            ));
        }
        if ACTIVITIES[..i].iter().any(|a| a.id == activity.id) {
            return Err(format!("Duplicate activity id: '{}'", activity.id));
        }
    }
    Ok(())
}
