//! Uncommitted form values.

use crate::types::NewRecord;

/// One of the three form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Username,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Username];

    /// Placeholder label of the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "NAME",
            Field::Email => "EMAIL",
            Field::Username => "USERNAME",
        }
    }
}

/// Draft values of the create form. Values are kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub username: String,
}

impl Draft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Username => &self.username,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Username => self.username = value,
        }
    }

    /// True when no field is the empty string. Whitespace counts as content.
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|f| !self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_new_record(&self) -> NewRecord {
        NewRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
        }
    }
}
