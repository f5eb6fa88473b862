use super::ValidationError;
use serde::{Deserialize, Serialize};

pub const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstName(String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastName(String);

impl FirstName {
    pub fn parse(name: String) -> Result<Self, ValidationError> {
        validate_name(&name, "First name")?;
        Ok(Self(name))
    }
}

impl LastName {
    pub fn parse(name: String) -> Result<Self, ValidationError> {
        validate_name(&name, "Last name")?;
        Ok(Self(name))
    }
}

fn validate_name(name: &str, field: &str) -> Result<(), ValidationError> {
    match name.chars().count() {
        x if x < 1 => Err(ValidationError::new(format!(
            "{field} cannot be empty"
        ))),
        x if x > MAX_NAME_LENGTH => Err(ValidationError::new(format!(
            "{field} may be at most {MAX_NAME_LENGTH} characters"
        ))),
        _ => Ok(()),
    }
}

impl AsRef<str> for FirstName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LastName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
