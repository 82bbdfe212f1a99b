//! Demo request form state and focus handling

use super::field::{DemoRequestFields, FieldKey};
use crate::error::FormError;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Externally visible submission status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

/// Record stored by the backend for an accepted demo request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle phase; the error only exists while failed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Sending,
    Sent { receipt: Option<SubmissionReceipt> },
    Failed { error: FormError },
}

/// State of one mounted demo request form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: DemoRequestFields,
    pub phase: FormPhase,
}

impl FormState {
    pub fn status(&self) -> FormStatus {
        match self.phase {
            FormPhase::Idle => FormStatus::Idle,
            FormPhase::Sending => FormStatus::Sending,
            FormPhase::Sent { .. } => FormStatus::Sent,
            FormPhase::Failed { .. } => FormStatus::Failed,
        }
    }

    /// Human-readable error, present only when failed
    pub fn error_message(&self) -> Option<String> {
        match &self.phase {
            FormPhase::Failed { error } => Some(error.to_string()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FormError> {
        match &self.phase {
            FormPhase::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        match &self.phase {
            FormPhase::Sent { receipt } => receipt.as_ref(),
            _ => None,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.status() == FormStatus::Sending
    }

    /// Label of the submit button for the current status
    pub fn submit_label(&self) -> &'static str {
        if self.is_sending() {
            "Sending..."
        } else {
            "Submit request"
        }
    }
}

/// Focus position inside the contact form: the five fields, then the button
#[derive(Debug, Clone, Default)]
pub struct ContactFormFocus {
    pub active_field_index: usize,
}

impl ContactFormFocus {
    /// Index of the submit button row
    pub const SUBMIT_INDEX: usize = FieldKey::ALL.len();

    /// Field under focus, `None` when the submit button is focused
    pub fn active_key(&self) -> Option<FieldKey> {
        FieldKey::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_INDEX
    }

    pub fn focus_key(&mut self, key: FieldKey) {
        if let Some(index) = FieldKey::ALL.iter().position(|k| *k == key) {
            self.active_field_index = index;
        }
    }
}

impl Form for ContactFormFocus {
    fn field_count(&self) -> usize {
        FieldKey::ALL.len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
}
