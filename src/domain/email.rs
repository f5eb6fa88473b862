use super::ValidationError;
use serde::{Deserialize, Serialize};

pub const MAX_EMAIL_LENGTH: usize = 254;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn parse(s: String) -> Result<Self, ValidationError> {
        if s.chars().count() > MAX_EMAIL_LENGTH {
            return Err(ValidationError::new(format!(
                "Email may be at most {MAX_EMAIL_LENGTH} characters"
            )));
        }

        if !validator::validate_email(&s) {
            return Err(ValidationError::new(format!(
                "Invalid email address: {s}"
            )));
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
