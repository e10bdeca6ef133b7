use crate::errors::ValidationError;
use serde::Serialize;

pub const DEFAULT_HOURLY_WAGE: i64 = 10030;
pub const DEFAULT_PAYDAY: u32 = 25;
pub const DEFAULT_CURRENCY_SUFFIX: &str = "원";

/// User preferences that feed the add path and the display layer.
/// Only `default_hourly_wage` reaches stored data, and only as a prefill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub default_hourly_wage: i64,
    pub payday_day_of_month: u32,
    pub currency_suffix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_hourly_wage: DEFAULT_HOURLY_WAGE,
            payday_day_of_month: DEFAULT_PAYDAY,
            currency_suffix: DEFAULT_CURRENCY_SUFFIX.to_string(),
        }
    }
}

impl Settings {
    pub fn check_wage(wage: i64) -> Result<i64, ValidationError> {
        if wage <= 0 {
            return Err(ValidationError::NonPositiveWage(wage));
        }
        Ok(wage)
    }

    pub fn check_payday(day: u32) -> Result<u32, ValidationError> {
        if !(1..=31).contains(&day) {
            return Err(ValidationError::PaydayOutOfRange(day));
        }
        Ok(day)
    }
}
