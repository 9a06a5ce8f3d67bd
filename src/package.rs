//! Sensor packages
//!
//! A package is what the sensor delivers for one workout: the workout code
//! plus the positional values for that workout type, e.g.
//!
//! ```json
//! {"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}
//! ```
//!
//! Packages can be read from a JSON array or from NDJSON (one package per
//! line).

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dispatcher::read_package;
use crate::error::TrackerError;
use crate::training::Workout;

/// One sensor package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Workout code (`RUN`, `WLK` or `SWM`)
    pub workout_type: String,
    /// Positional values for the workout type
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Build the calculator for this package
    pub fn to_workout(&self) -> Result<Workout, TrackerError> {
        read_package(&self.workout_type, &self.data)
    }

    /// Check that the package dispatches to a valid calculator
    pub fn validate(&self) -> Result<(), TrackerError> {
        self.to_workout().map(|_| ())
    }
}

/// Validation failure for a single package in a batch
#[derive(Debug)]
pub struct PackageValidation {
    /// Index of the package in the batch
    pub index: usize,
    /// Workout code of the package
    pub workout_type: String,
    /// Why the package was rejected
    pub error: TrackerError,
}

/// Reader for package batches
pub struct PackageReader;

impl PackageReader {
    /// Parse a JSON array of packages
    pub fn parse_array(json: &str) -> Result<Vec<Package>, TrackerError> {
        let packages: Vec<Package> = serde_json::from_str(json)?;
        Ok(packages)
    }

    /// Parse NDJSON (newline-delimited JSON) containing packages
    pub fn parse_ndjson(ndjson: &str) -> Result<Vec<Package>, TrackerError> {
        let mut packages = Vec::new();
        for (line_num, line) in ndjson.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<Package>(trimmed) {
                Ok(package) => packages.push(package),
                Err(e) => {
                    return Err(TrackerError::ParseError(format!(
                        "Failed to parse line {}: {}",
                        line_num + 1,
                        e
                    )));
                }
            }
        }
        Ok(packages)
    }

    /// Validate a batch, returning only the packages that failed
    pub fn validate_packages(packages: &[Package]) -> Vec<PackageValidation> {
        packages
            .iter()
            .enumerate()
            .filter_map(|(index, package)| match package.validate() {
                Ok(()) => None,
                Err(error) => {
                    warn!(index, code = %package.workout_type, %error, "invalid package");
                    Some(PackageValidation {
                        index,
                        workout_type: package.workout_type.clone(),
                        error,
                    })
                }
            })
            .collect()
    }
}
