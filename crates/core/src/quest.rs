//! Quest progress and claim rules.
//!
//! Quests track a fitness metric toward a numeric target. Progress is
//! monotone and clamped; completion is one-directional; claiming is
//! terminal.

use crate::error::CoreError;

/// Metric code for quests driven by step counts.
pub const METRIC_STEPS: &str = "steps";

/// Metric code for quests driven by calories burned.
pub const METRIC_CALORIES: &str = "calories";

/// Metric code for quests driven by distance covered, in meters.
pub const METRIC_DISTANCE_METERS: &str = "distance_meters";

/// All valid quest metric codes (the `metric` column).
pub const VALID_METRICS: &[&str] = &[METRIC_STEPS, METRIC_CALORIES, METRIC_DISTANCE_METERS];

/// The fitness metric a quest is measured against.
///
/// Stored as an explicit column on the quest record so progress dispatch is
/// typed rather than inferred from the quest's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Steps,
    Calories,
    DistanceMeters,
}

impl MetricKind {
    /// String code used in the database and over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Steps => METRIC_STEPS,
            MetricKind::Calories => METRIC_CALORIES,
            MetricKind::DistanceMeters => METRIC_DISTANCE_METERS,
        }
    }

    /// Parse a metric code, rejecting anything outside [`VALID_METRICS`].
    pub fn parse(code: &str) -> Result<Self, CoreError> {
        match code {
            METRIC_STEPS => Ok(MetricKind::Steps),
            METRIC_CALORIES => Ok(MetricKind::Calories),
            METRIC_DISTANCE_METERS => Ok(MetricKind::DistanceMeters),
            other => Err(CoreError::Validation(format!(
                "Invalid quest metric '{other}'. Must be one of: {}",
                VALID_METRICS.join(", ")
            ))),
        }
    }
}

/// Result of applying a metric delta to a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub current_value: i32,
    pub completed: bool,
}

/// Advance a quest by `delta`, clamping at the target.
///
/// `current_value` never decreases and never exceeds `target_value`;
/// `completed` flips true exactly when the target is reached.
pub fn apply_progress(current_value: i32, target_value: i32, delta: i32) -> ProgressUpdate {
    let delta = delta.max(0);
    let current_value = (current_value + delta).min(target_value);
    ProgressUpdate {
        current_value,
        completed: current_value >= target_value,
    }
}

/// Reject a progress/target pair where the counter would sit past the
/// target. Guards direct edits; [`apply_progress`] can never produce such
/// a pair.
pub fn validate_progress_bounds(current_value: i32, target_value: i32) -> Result<(), CoreError> {
    if current_value > target_value {
        return Err(CoreError::Validation(format!(
            "current_value {current_value} cannot exceed target_value {target_value}"
        )));
    }
    Ok(())
}

/// Check the claim preconditions: the quest must be completed and not yet
/// claimed. Each failure is a distinct rejected-precondition result.
pub fn validate_claim(completed: bool, claimed: bool) -> Result<(), CoreError> {
    if !completed {
        return Err(CoreError::Validation("Quest not completed".to_string()));
    }
    if claimed {
        return Err(CoreError::Validation("Quest already claimed".to_string()));
    }
    Ok(())
}
