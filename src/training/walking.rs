//! Sports walking calculator

use super::Training;
use crate::error::TrackerError;
use crate::types::{TrainingData, WorkoutType, MIN_IN_H};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Workout: sports walking
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    data: TrainingData,
    /// Athlete height (cm)
    height: u32,
}

impl SportsWalking {
    /// Height must be non-zero, it divides the squared speed.
    pub fn new(data: TrainingData, height: u32) -> Result<Self, TrackerError> {
        if height == 0 {
            return Err(TrackerError::InvalidValue {
                field: "height",
                value: 0.0,
            });
        }
        Ok(Self { data, height })
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Training for SportsWalking {
    fn training_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn spent_calories(&self) -> f64 {
        let mean_speed = self.mean_speed();
        (CALORIES_WEIGHT_MULTIPLIER * self.data.weight()
            + floor_div(mean_speed * mean_speed, self.height as f64)
                * CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.data.weight())
            * (self.data.duration() * MIN_IN_H)
    }
}

/// Float floor division.
///
/// Derives the quotient from the remainder of `x % y` rather than from
/// `floor(x / y)`, so a quotient that rounds up to an integer in `x / y`
/// still floors to the lower value.
fn floor_div(x: f64, y: f64) -> f64 {
    let rem = x % y;
    let mut div = (x - rem) / y;
    if rem != 0.0 && ((y < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div != 0.0 {
        let mut floored = div.floor();
        if div - floored > 0.5 {
            floored += 1.0;
        }
        floored
    } else {
        0.0_f64.copysign(x / y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_walking(action: u32, duration: f64, weight: f64, height: u32) -> SportsWalking {
        SportsWalking::new(TrainingData::new(action, duration, weight).unwrap(), height).unwrap()
    }

    #[test]
    fn test_mean_speed() {
        let walk = make_walking(9000, 1.0, 75.0, 180);

        // 9000 * 0.65 / 1000 = 5.85
        assert!((walk.mean_speed() - 5.85).abs() < 1e-9);
    }

    #[test]
    fn test_spent_calories_slow_walk() {
        let walk = make_walking(9000, 1.0, 75.0, 180);

        // 5.85^2 // 180 == 0, so only the weight term remains: 0.035 * 75 * 60
        let expected = (0.035 * 75.0 + 0.0 * 0.029 * 75.0) * (1.0 * 60.0);
        assert_eq!(walk.spent_calories(), expected);
        assert!((walk.spent_calories() - 157.5).abs() < 1e-9);
    }

    #[test]
    fn test_spent_calories_fast_walk() {
        // 2 hours over 60000 steps: 39 km, 19.5 km/h, 380.25 // 150 == 2
        let walk = make_walking(60000, 2.0, 80.0, 150);
        let expected = (0.035 * 80.0 + 2.0 * 0.029 * 80.0) * (2.0 * 60.0);
        assert_eq!(walk.spent_calories(), expected);
    }

    #[test]
    fn test_zero_height_rejected() {
        let data = TrainingData::new(9000, 1.0, 75.0).unwrap();
        let err = SportsWalking::new(data, 0).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidValue { field: "height", .. }));
    }

    #[test]
    fn test_floor_div() {
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(380.25, 150.0), 2.0);
        assert_eq!(floor_div(7.0, 2.0), 3.0);
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
        assert_eq!(floor_div(6.0, 3.0), 2.0);
        // 1 / 0.1 is 10.0 in plain division but floors to 9
        assert_eq!(floor_div(1.0, 0.1), 9.0);
    }
}
