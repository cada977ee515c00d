use std::fmt;

use super::errors::ValidationError;

/// Number of characters every order uid carries.
pub const ORDER_ID_LEN: usize = 20;

/// An order uid that passed the length check. Content is otherwise opaque;
/// format correctness is the server's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    /// Trim `raw` and accept it when it is exactly [`ORDER_ID_LEN`] characters.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        let actual = trimmed.chars().count();
        if actual != ORDER_ID_LEN {
            return Err(ValidationError::WrongLength { actual });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
