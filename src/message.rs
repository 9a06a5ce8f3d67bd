//! Info message rendering
//!
//! Renders an [`InfoMessage`] as the single-line workout summary. Every
//! numeric field is printed fixed-point with three decimals.

use std::fmt;

use crate::types::InfoMessage;

impl InfoMessage {
    /// Render the workout summary line
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_info(duration: f64, distance: f64, speed: f64, calories: f64) -> InfoMessage {
        InfoMessage {
            training_type: "Swimming".to_string(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    #[test]
    fn test_message_layout() {
        let info = make_info(1.0, 0.9936, 1.0, 336.0);
        assert_eq!(
            info.get_message(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_three_decimals_regardless_of_precision() {
        let info = make_info(1.23456789, 12.0, 0.1, 1234567.891234);
        let message = info.get_message();

        assert!(message.contains("Длительность: 1.235 ч.;"));
        assert!(message.contains("Дистанция: 12.000 км;"));
        assert!(message.contains("Ср. скорость: 0.100 км/ч;"));
        assert!(message.contains("Потрачено ккал: 1234567.891."));
    }

    #[test]
    fn test_no_scientific_notation() {
        let info = make_info(1.0, 1e-7, 1e12, 0.0);
        let message = info.get_message();

        assert!(message.contains("Дистанция: 0.000 км;"));
        assert!(message.contains("Ср. скорость: 1000000000000.000 км/ч;"));
        assert!(!message.contains('e'));
    }

    #[test]
    fn test_display_matches_get_message() {
        let info = make_info(0.5, 2.0, 4.0, 10.0);
        assert_eq!(format!("{info}"), info.get_message());
    }
}
