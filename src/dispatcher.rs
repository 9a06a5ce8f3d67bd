//! Package dispatch
//!
//! Maps a sensor workout code plus its flat list of positional values onto
//! the matching calculator:
//!
//! | Code  | Values                                             |
//! |-------|----------------------------------------------------|
//! | `RUN` | action, duration, weight                           |
//! | `WLK` | action, duration, weight, height                   |
//! | `SWM` | action, duration, weight, length_pool, count_pool  |

use tracing::debug;

use crate::error::TrackerError;
use crate::training::{Running, SportsWalking, Swimming, Workout};
use crate::types::{TrainingData, WorkoutType};

/// Build the calculator for a sensor package.
///
/// Fails with [`TrackerError::InvalidKey`] for an unknown code and with
/// [`TrackerError::InvalidArguments`] when the number of values does not
/// match the workout type.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, TrackerError> {
    let kind = WorkoutType::from_code(workout_type)?;

    if data.len() != kind.arity() {
        return Err(TrackerError::InvalidArguments {
            code: workout_type.to_string(),
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    debug!(code = workout_type, values = ?data, "dispatching package");

    let training = TrainingData::new(
        whole_number("action", data[0])?,
        data[1],
        non_negative("weight", data[2])?,
    )?;

    let workout: Workout = match kind {
        WorkoutType::Running => Running::new(training).into(),
        WorkoutType::SportsWalking => {
            SportsWalking::new(training, whole_number("height", data[3])?)?.into()
        }
        WorkoutType::Swimming => Swimming::new(
            training,
            non_negative("length_pool", data[3])?,
            whole_number("count_pool", data[4])?,
        )?
        .into(),
    };

    Ok(workout)
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, TrackerError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(TrackerError::InvalidValue { field, value })
    }
}

fn whole_number(field: &'static str, value: f64) -> Result<u32, TrackerError> {
    let value = non_negative(field, value)?;
    if value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(TrackerError::InvalidValue { field, value });
    }
    Ok(value as u32)
}
