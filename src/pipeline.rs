//! Pipeline orchestration
//!
//! Runs packages through the full pipeline:
//! 1. Dispatcher - Select and construct the calculator
//! 2. Training - Compute distance, mean speed and calories
//! 3. InfoMessage - Collect the results for rendering

use tracing::debug;

use crate::error::TrackerError;
use crate::package::Package;
use crate::training::Training;
use crate::types::InfoMessage;

/// Compute the info message for a single package.
///
/// # Example
/// ```
/// use fitness_tracker::{process_package, Package};
///
/// let info = process_package(&Package::new("RUN", vec![15000.0, 1.0, 75.0])).unwrap();
/// assert_eq!(info.training_type, "Running");
/// ```
pub fn process_package(package: &Package) -> Result<InfoMessage, TrackerError> {
    let workout = package.to_workout()?;
    let info = workout.show_training_info();
    debug!(
        training_type = %info.training_type,
        distance = info.distance,
        speed = info.speed,
        calories = info.calories,
        "processed package"
    );
    Ok(info)
}

/// Compute info messages for a batch, in input order.
///
/// Stops at the first invalid package and returns its error unchanged.
pub fn process_packages(packages: &[Package]) -> Result<Vec<InfoMessage>, TrackerError> {
    packages.iter().map(process_package).collect()
}

/// Reference packages used by the demo driver
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_demo_messages() {
        let messages: Vec<String> = process_packages(&demo_packages())
            .unwrap()
            .iter()
            .map(InfoMessage::get_message)
            .collect();

        assert_eq!(
            messages,
            vec![
                "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
                 Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
                    .to_string(),
                "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
                 Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
                    .to_string(),
                "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
                 Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_order_preserved() {
        let packages = vec![
            Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        ];
        let infos = process_packages(&packages).unwrap();

        let names: Vec<&str> = infos.iter().map(|i| i.training_type.as_str()).collect();
        assert_eq!(names, vec!["SportsWalking", "Running"]);
    }

    #[test]
    fn test_first_error_propagated() {
        let packages = vec![
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("XYZ", vec![1.0]),
            Package::new("SWM", vec![1.0]),
        ];

        let err = process_packages(&packages).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidKey(ref k) if k == "XYZ"));
    }

    #[test]
    fn test_info_serializes() {
        let info = process_package(&Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]))
            .unwrap();
        let value = serde_json::to_value(&info).unwrap();

        assert_eq!(value["training_type"], "Swimming");
        assert_eq!(value["speed"], 1.0);
        assert_eq!(value["duration"], 1.0);
    }
}
