use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Total significant digits a balance may carry.
pub const BALANCE_MAX_DIGITS: u32 = 10;
/// Fractional digits every balance is stored with.
pub const BALANCE_DECIMAL_PLACES: u32 = 2;

/// Account balance held as an exact decimal, always at scale 2.
///
/// Inputs with more fractional precision than the scale allows are rejected
/// rather than rounded. Trailing zeros are not precision, so `10.500` is
/// accepted as `10.50` while `10.005` is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance(Decimal);

impl Balance {
    pub fn parse(value: Decimal) -> Result<Self, ValidationError> {
        if value.normalize().scale() > BALANCE_DECIMAL_PLACES {
            return Err(ValidationError::new(format!(
                "Ensure that there are no more than {BALANCE_DECIMAL_PLACES} decimal places"
            )));
        }

        let mut value = value;
        value.rescale(BALANCE_DECIMAL_PLACES);

        let integer_digits = BALANCE_MAX_DIGITS - BALANCE_DECIMAL_PLACES;
        if value.abs() >= Decimal::from(10_i64.pow(integer_digits)) {
            return Err(ValidationError::new(format!(
                "Ensure that there are no more than {integer_digits} digits before the decimal point"
            )));
        }

        Ok(Self(value))
    }

    pub fn parse_str(s: &str) -> Result<Self, ValidationError> {
        let value = Decimal::from_str_exact(s.trim()).map_err(|e| {
            ValidationError::new(format!("Invalid balance '{s}': {e}"))
        })?;
        Self::parse(value)
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self(Decimal::new(0, BALANCE_DECIMAL_PLACES))
    }
}

impl FromStr for Balance {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<Decimal> for Balance {
    fn as_ref(&self) -> &Decimal {
        &self.0
    }
}
