//! # Contact Form Types
//!
//! Field-addressable form data, the per-submit validation error map, the
//! submission phase flag, and the wire request body.
//!
//! Empty string is the canonical "unfilled" state for every field; the
//! validator never sees an absent value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Field
// =============================================================================

/// One of the three contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Visitor name
    Name,
    /// Visitor email (implicit for authenticated sessions)
    Email,
    /// Message body
    Message,
}

impl Field {
    /// Stable lowercase key, matching the wire/form field ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ContactFormData
// =============================================================================

/// Current values of the three form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    /// Visitor name
    pub name: String,
    /// Visitor email; holds the auth identifier when prefilled
    pub email: String,
    /// Message body
    pub message: String,
}

impl ContactFormData {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Write one field, preserving the others.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

// =============================================================================
// ValidationErrors
// =============================================================================

/// Field-keyed validation messages for a single submit attempt.
///
/// Absence of a key means the field is valid. Produced fresh on every
/// validation pass; never merged with a prior result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    /// Empty error map (everything valid).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any earlier one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// True when every field passed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate failing fields in stable order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

// =============================================================================
// SubmissionPhase
// =============================================================================

/// Submission lifecycle flag.
///
/// There is no resting Success/Error state: outcome is communicated
/// transiently through the notifier and the phase always returns to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionPhase {
    /// No submission in flight; the submit action is enabled
    #[default]
    Idle,
    /// A submission is in flight; further submits are rejected
    Submitting,
}

impl SubmissionPhase {
    /// True while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionPhase::Submitting)
    }
}

// =============================================================================
// ContactRequest
// =============================================================================

/// JSON body posted to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    /// Sender email; the auth identifier for logged-in visitors
    #[serde(rename = "email_id")]
    pub email: String,
    /// Sender name
    pub name: String,
    /// Message body
    pub message: String,
}

impl From<&ContactFormData> for ContactRequest {
    fn from(data: &ContactFormData) -> Self {
        Self {
            email: data.email.clone(),
            name: data.name.clone(),
            message: data.message.clone(),
        }
    }
}
