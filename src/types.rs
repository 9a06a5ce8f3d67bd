//! Core types for the fitness tracker
//!
//! This module defines the data that flows through the tracker: the workout
//! type catalogue, the raw inputs shared by every workout, and the info
//! message produced for each processed package.

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Workout type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    SportsWalking,
    #[serde(rename = "SWM")]
    Swimming,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 3] = [
        WorkoutType::Swimming,
        WorkoutType::Running,
        WorkoutType::SportsWalking,
    ];

    /// Three-letter sensor code
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
            WorkoutType::Swimming => "SWM",
        }
    }

    /// Name shown in the info message
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::SportsWalking => "SportsWalking",
            WorkoutType::Swimming => "Swimming",
        }
    }

    /// Number of positional values a package of this type carries
    pub fn arity(&self) -> usize {
        match self {
            WorkoutType::Running => 3,
            WorkoutType::SportsWalking => 4,
            WorkoutType::Swimming => 5,
        }
    }

    /// Look up a workout type by its sensor code
    pub fn from_code(code: &str) -> Result<Self, TrackerError> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or_else(|| TrackerError::InvalidKey(code.to_string()))
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw inputs common to every workout
///
/// Only built through [`TrainingData::new`], so a held value always has a
/// positive duration:
///
/// ```compile_fail
/// use fitness_tracker::TrainingData;
///
/// let data = TrainingData { action: 15000, duration: 0.0, weight: 75.0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingData {
    /// Steps or strokes counted by the sensor
    action: u32,
    /// Workout duration (hours)
    duration: f64,
    /// Athlete weight (kg)
    weight: f64,
}

impl TrainingData {
    /// Build validated training data. Duration must be strictly positive.
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, TrackerError> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(TrackerError::InvalidDuration(duration));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(TrackerError::InvalidValue {
                field: "weight",
                value: weight,
            });
        }
        Ok(Self {
            action,
            duration,
            weight,
        })
    }

    pub fn action(&self) -> u32 {
        self.action
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Information about a completed workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Workout type name
    pub training_type: String,
    /// Duration (hours)
    pub duration: f64,
    /// Distance covered (km)
    pub distance: f64,
    /// Mean speed (km/h)
    pub speed: f64,
    /// Calories spent (kcal)
    pub calories: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(WorkoutType::from_code("RUN").unwrap(), WorkoutType::Running);
        assert_eq!(
            WorkoutType::from_code("WLK").unwrap(),
            WorkoutType::SportsWalking
        );
        assert_eq!(WorkoutType::from_code("SWM").unwrap(), WorkoutType::Swimming);
    }

    #[test]
    fn test_from_code_unknown() {
        let err = WorkoutType::from_code("XYZ").unwrap_err();
        assert!(matches!(err, TrackerError::InvalidKey(ref k) if k == "XYZ"));

        // Codes are case sensitive
        assert!(WorkoutType::from_code("run").is_err());
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&WorkoutType::Swimming).unwrap();
        assert_eq!(json, "\"SWM\"");

        let parsed: WorkoutType = serde_json::from_str("\"WLK\"").unwrap();
        assert_eq!(parsed, WorkoutType::SportsWalking);
    }

    #[test]
    fn test_training_data_rejects_bad_duration() {
        assert!(matches!(
            TrainingData::new(100, 0.0, 70.0),
            Err(TrackerError::InvalidDuration(_))
        ));
        assert!(matches!(
            TrainingData::new(100, -1.0, 70.0),
            Err(TrackerError::InvalidDuration(_))
        ));
        assert!(matches!(
            TrainingData::new(100, f64::NAN, 70.0),
            Err(TrackerError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_training_data_accessors() {
        let data = TrainingData::new(15000, 1.5, 75.0).unwrap();
        assert_eq!(data.action(), 15000);
        assert_eq!(data.duration(), 1.5);
        assert_eq!(data.weight(), 75.0);
    }

    #[test]
    fn test_training_data_rejects_infinite_duration() {
        assert!(matches!(
            TrainingData::new(15000, f64::INFINITY, 75.0),
            Err(TrackerError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_training_data_rejects_negative_weight() {
        let err = TrainingData::new(100, 1.0, -5.0).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidValue { field: "weight", .. }));
    }
}
