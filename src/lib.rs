//! Fitness Tracker - Workout metrics from raw sensor packages
//!
//! The tracker turns a sensor package (a workout code plus positional values)
//! into distance, mean speed and spent calories through a deterministic
//! pipeline: dispatch → calculator → info message.
//!
//! ## Workout types
//!
//! - **Running** (`RUN`): action, duration, weight
//! - **Sports walking** (`WLK`): action, duration, weight, height
//! - **Swimming** (`SWM`): action, duration, weight, pool length, pool laps

pub mod dispatcher;
pub mod error;
pub mod message;
pub mod package;
pub mod pipeline;
pub mod training;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use dispatcher::read_package;
pub use error::TrackerError;
pub use package::{Package, PackageReader};
pub use pipeline::{demo_packages, process_package, process_packages};
pub use training::{Running, SportsWalking, Swimming, Training, Workout};
pub use types::{InfoMessage, TrainingData, WorkoutType};

/// Tracker version
pub const TRACKER_VERSION: &str = env!("CARGO_PKG_VERSION");
