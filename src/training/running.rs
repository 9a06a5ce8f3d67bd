//! Running calculator

use super::Training;
use crate::types::{TrainingData, WorkoutType, MIN_IN_H, M_IN_KM};

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

/// Workout: running
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    data: TrainingData,
}

impl Running {
    pub fn new(data: TrainingData) -> Self {
        Self { data }
    }
}

impl Training for Running {
    fn training_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_MEAN_SPEED_SHIFT)
            * self.data.weight()
            / M_IN_KM
            * (self.data.duration() * MIN_IN_H)
    }
}
