//! Workout calculators
//!
//! Each workout type turns its raw sensor inputs into distance, mean speed
//! and spent calories with its own formula. The shared arithmetic lives in
//! the default methods of [`Training`]; every calculator must supply its own
//! calorie formula.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::types::{InfoMessage, TrainingData, WorkoutType, M_IN_KM};

/// Distance covered per step (meters)
pub const LEN_STEP: f64 = 0.65;

/// Trait for workout calculators
pub trait Training {
    /// Workout type of this calculator
    fn training_type(&self) -> WorkoutType;

    /// Raw inputs shared by every workout
    fn data(&self) -> &TrainingData;

    /// Distance covered per action (meters)
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance covered (km)
    fn distance(&self) -> f64 {
        self.data().action() as f64 * self.len_step() / M_IN_KM
    }

    /// Mean speed over the whole workout (km/h)
    fn mean_speed(&self) -> f64 {
        self.distance() / self.data().duration()
    }

    /// Calories spent (kcal)
    fn spent_calories(&self) -> f64;

    /// Summarize the workout as an info message
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.training_type().name().to_string(),
            duration: self.data().duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

/// A constructed calculator of any workout type
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn inner(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::SportsWalking(t) => t,
            Workout::Swimming(t) => t,
        }
    }
}

impl Training for Workout {
    fn training_type(&self) -> WorkoutType {
        self.inner().training_type()
    }

    fn data(&self) -> &TrainingData {
        self.inner().data()
    }

    fn len_step(&self) -> f64 {
        self.inner().len_step()
    }

    fn distance(&self) -> f64 {
        self.inner().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.inner().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.inner().spent_calories()
    }

    fn show_training_info(&self) -> InfoMessage {
        self.inner().show_training_info()
    }
}

impl From<Running> for Workout {
    fn from(t: Running) -> Self {
        Workout::Running(t)
    }
}

impl From<SportsWalking> for Workout {
    fn from(t: SportsWalking) -> Self {
        Workout::SportsWalking(t)
    }
}

impl From<Swimming> for Workout {
    fn from(t: Swimming) -> Self {
        Workout::Swimming(t)
    }
}
