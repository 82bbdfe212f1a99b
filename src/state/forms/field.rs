//! Demo request form fields

use serde::{Deserialize, Serialize};

/// Identifies one of the demo request form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    Email,
    Company,
    Role,
    Message,
}

impl FieldKey {
    /// All fields in display order
    pub const ALL: [FieldKey; 5] = [
        FieldKey::Name,
        FieldKey::Email,
        FieldKey::Company,
        FieldKey::Role,
        FieldKey::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Name => "Name",
            FieldKey::Email => "Email",
            FieldKey::Company => "Company",
            FieldKey::Role => "Role",
            FieldKey::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldKey::Name => "Your name",
            FieldKey::Email => "you@company.com",
            FieldKey::Company => "Company name",
            FieldKey::Role => "Your role",
            FieldKey::Message => "Tell us about your inspection needs...",
        }
    }

    /// Whether the field must be non-blank before submitting
    pub fn is_required(self) -> bool {
        matches!(self, FieldKey::Name | FieldKey::Email | FieldKey::Company)
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FieldKey::Message)
    }
}

/// Values of the demo request form, serialized as the request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoRequestFields {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub message: String,
}

impl DemoRequestFields {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Company => &self.company,
            FieldKey::Role => &self.role,
            FieldKey::Message => &self.message,
        }
    }

    pub fn set(&mut self, key: FieldKey, value: String) {
        match key {
            FieldKey::Name => self.name = value,
            FieldKey::Email => self.email = value,
            FieldKey::Company => self.company = value,
            FieldKey::Role => self.role = value,
            FieldKey::Message => self.message = value,
        }
    }

    /// Required fields that are empty or whitespace-only
    pub fn missing_required(&self) -> Vec<FieldKey> {
        FieldKey::ALL
            .into_iter()
            .filter(|key| key.is_required() && self.get(*key).trim().is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        FieldKey::ALL.into_iter().all(|key| self.get(key).is_empty())
    }

    /// Clear every field value
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
