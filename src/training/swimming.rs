//! Swimming calculator

use super::Training;
use crate::error::TrackerError;
use crate::types::{TrainingData, WorkoutType, M_IN_KM};

/// Distance covered per stroke (meters)
pub const LEN_STROKE: f64 = 1.38;

const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Workout: swimming
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    data: TrainingData,
    /// Pool length (meters)
    length_pool: f64,
    /// Number of laps swum
    count_pool: u32,
}

impl Swimming {
    pub fn new(data: TrainingData, length_pool: f64, count_pool: u32) -> Result<Self, TrackerError> {
        if !length_pool.is_finite() || length_pool < 0.0 {
            return Err(TrackerError::InvalidValue {
                field: "length_pool",
                value: length_pool,
            });
        }
        Ok(Self {
            data,
            length_pool,
            count_pool,
        })
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn training_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn len_step(&self) -> f64 {
        LEN_STROKE
    }

    // Speed comes from the pool laps, not from the stroke count.
    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.data.duration()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.data.weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_swimming(action: u32, weight: f64, length_pool: f64, count_pool: u32) -> Swimming {
        Swimming::new(TrainingData::new(action, 1.0, weight).unwrap(), length_pool, count_pool)
            .unwrap()
    }

    #[test]
    fn test_distance_uses_stroke_length() {
        let swim = make_swimming(720, 80.0, 25.0, 40);

        // 720 * 1.38 / 1000 = 0.9936
        assert!((swim.distance() - 0.9936).abs() < 1e-9);
    }

    #[test]
    fn test_mean_speed_uses_pool() {
        let swim = make_swimming(720, 80.0, 25.0, 40);

        // 25 * 40 / 1000 / 1 = 1.0
        assert_eq!(swim.mean_speed(), 1.0);
    }

    #[test]
    fn test_spent_calories() {
        let swim = make_swimming(720, 80.0, 25.0, 40);

        // (1.0 + 1.1) * 2 * 80 = 336.0
        assert!((swim.spent_calories() - 336.0).abs() < 1e-9);
    }

    #[test]
    fn test_stroke_count_does_not_affect_speed() {
        let a = make_swimming(100, 80.0, 50.0, 20);
        let b = make_swimming(5000, 80.0, 50.0, 20);
        assert_eq!(a.mean_speed(), b.mean_speed());
        assert_eq!(a.spent_calories(), b.spent_calories());
    }

    #[test]
    fn test_negative_pool_length_rejected() {
        let data = TrainingData::new(720, 1.0, 80.0).unwrap();
        let err = Swimming::new(data, -25.0, 40).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidValue { field: "length_pool", .. }));
    }
}
