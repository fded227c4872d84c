//! Health self-evaluations (symptom flag plus body temperature).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, RoomNumber, Timestamp};

/// Lowest plausible reading from a working thermometer, in degrees Celsius.
pub const MIN_TEMPERATURE_C: f64 = 30.0;

/// Highest plausible reading, in degrees Celsius.
pub const MAX_TEMPERATURE_C: f64 = 45.0;

/// Readings at or above this are treated as fever.
pub const FEVER_THRESHOLD_C: f64 = 37.5;

/// A stored self-evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub id: DbId,
    pub room: RoomNumber,
    pub symptom: bool,
    pub temperature: f64,
    pub evaluated_at: Timestamp,
}

/// DTO for submitting a self-evaluation. Both fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvaluation {
    pub room: RoomNumber,
    pub symptom: bool,
    pub temperature: f64,
}

impl CreateEvaluation {
    /// Whether staff should look at this room.
    pub fn is_concerning(&self) -> bool {
        self.symptom || self.temperature >= FEVER_THRESHOLD_C
    }
}

/// Validate a self-evaluation before it reaches the store.
pub fn validate_create(input: &CreateEvaluation) -> Result<(), CoreError> {
    crate::door::validate_room(input.room)?;
    if !input.temperature.is_finite()
        || !(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&input.temperature)
    {
        return Err(CoreError::Validation(format!(
            "Temperature must be between {MIN_TEMPERATURE_C} and {MAX_TEMPERATURE_C}, got {}",
            input.temperature
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(symptom: bool, temperature: f64) -> CreateEvaluation {
        CreateEvaluation {
            room: 202,
            symptom,
            temperature,
        }
    }

    #[test]
    fn normal_reading_passes() {
        assert!(validate_create(&input(false, 36.6)).is_ok());
    }

    #[test]
    fn out_of_range_readings_rejected() {
        assert!(validate_create(&input(false, 29.9)).is_err());
        assert!(validate_create(&input(false, 45.1)).is_err());
        assert!(validate_create(&input(false, f64::NAN)).is_err());
    }

    #[test]
    fn fever_or_symptom_is_concerning() {
        assert!(!input(false, 36.8).is_concerning());
        assert!(input(false, 37.5).is_concerning());
        assert!(input(true, 36.2).is_concerning());
    }
}
