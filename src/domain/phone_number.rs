use super::ValidationError;
use serde::{Deserialize, Serialize};

pub const MAX_PHONE_NUMBER_LENGTH: usize = 15;

/// Free-form contact number. No format is imposed beyond its length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// An absent or blank number maps to `None`.
    pub fn parse(s: Option<String>) -> Result<Option<Self>, ValidationError> {
        let Some(s) = s.filter(|s| !s.is_empty()) else {
            return Ok(None);
        };

        if s.chars().count() > MAX_PHONE_NUMBER_LENGTH {
            return Err(ValidationError::new(format!(
                "Phone number may be at most {MAX_PHONE_NUMBER_LENGTH} characters"
            )));
        }

        Ok(Some(Self(s)))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[test]
fn test_valid_phone_numbers() {
    for valid in ["+44 20 7946 000", "555-0100", "1"] {
        let parsed = PhoneNumber::parse(Some(valid.to_string()))
            .expect(valid)
            .expect("Phone number should be present");
        assert_eq!(parsed.as_ref(), valid);
    }
}

#[test]
fn test_blank_phone_numbers_are_absent() {
    assert_eq!(PhoneNumber::parse(None), Ok(None));
    assert_eq!(PhoneNumber::parse(Some("".to_string())), Ok(None));
}

#[test]
fn test_long_phone_numbers() {
    let result = PhoneNumber::parse(Some("1".repeat(16)));
    assert_eq!(
        result.unwrap_err().as_ref(),
        "Phone number may be at most 15 characters"
    );
}
