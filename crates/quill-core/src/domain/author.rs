use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Author of a post. Both names are always present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    /// Create an author, rejecting blank names.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        if first_name.trim().is_empty() {
            return Err(DomainError::MissingField {
                field: "author.firstName",
            });
        }
        if last_name.trim().is_empty() {
            return Err(DomainError::MissingField {
                field: "author.lastName",
            });
        }

        Ok(Self {
            first_name,
            last_name,
        })
    }

    /// The "First Last" form used on the wire.
    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
