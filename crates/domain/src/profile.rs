//! The static identity record served by `/me`.

use serde::Serialize;

use crate::error::DomainError;

/// One of the three required profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Email,
    Name,
    Stack,
}

impl ProfileField {
    /// All fields in serialization order.
    pub const ALL: [ProfileField; 3] = [
        ProfileField::Email,
        ProfileField::Name,
        ProfileField::Stack,
    ];

    /// Returns the JSON key of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Email => "email",
            ProfileField::Name => "name",
            ProfileField::Stack => "stack",
        }
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable profile of the service owner.
///
/// A `Profile` is always fully populated: [`Profile::new`] rejects empty
/// fields, so there is no way to hold a partially filled one. Field
/// declaration order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    email: String,
    name: String,
    stack: String,
}

impl Profile {
    /// Creates a profile, reporting every empty field at once.
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        stack: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let profile = Self {
            email: email.into(),
            name: name.into(),
            stack: stack.into(),
        };

        let missing: Vec<ProfileField> = ProfileField::ALL
            .into_iter()
            .filter(|field| profile.get(*field).is_empty())
            .collect();

        if missing.is_empty() {
            Ok(profile)
        } else {
            Err(DomainError::MissingProfileFields(missing))
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stack(&self) -> &str {
        &self.stack
    }

    /// Returns the value of the given field.
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Email => &self.email,
            ProfileField::Name => &self.name,
            ProfileField::Stack => &self.stack,
        }
    }
}
