/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Field identifiers and the field-level error set produced by lead validation.

use std::collections::BTreeMap;

use validator::ValidationErrors;

/// Message used when a required field is absent from the candidate record.
pub const REQUIRED: &str = "Required";

/// One field of the lead form, in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LeadField {
    FullName,
    Email,
    Phone,
    Message,
    Consent,
}

impl LeadField {
    pub const ALL: [LeadField; 5] = [
        LeadField::FullName,
        LeadField::Email,
        LeadField::Phone,
        LeadField::Message,
        LeadField::Consent,
    ];

    /// The JSON key used on the wire and in the form (`fullName`, `email`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            LeadField::FullName => "fullName",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
            LeadField::Message => "message",
            LeadField::Consent => "consent",
        }
    }

    /// Resolve either the wire key or the Rust field name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fullName" | "full_name" => Some(LeadField::FullName),
            "email" => Some(LeadField::Email),
            "phone" => Some(LeadField::Phone),
            "message" => Some(LeadField::Message),
            "consent" => Some(LeadField::Consent),
            _ => None,
        }
    }
}

impl std::fmt::Display for LeadField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages, at most one per field.
///
/// An empty set means the candidate is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<LeadField, String>);

impl FieldErrors {
    /// Record a message for `field`. The first message recorded for a field wins,
    /// so a "Required" from parsing is not overwritten by a rule violation.
    pub fn insert(&mut self, field: LeadField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: LeadField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn remove(&mut self, field: LeadField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LeadField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Aggregate all violations into a single message, in schema order:
    /// `Validation error: Invalid email address at "email"; ...`
    pub fn summary(&self) -> String {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{message} at \"{field}\""))
            .collect();
        format!("Validation error: {}", parts.join("; "))
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (name, violations) in errors.field_errors() {
            let Some(field) = LeadField::from_name(name.as_ref()) else {
                continue;
            };
            if let Some(violation) = violations.first() {
                let message = violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| violation.code.to_string());
                out.insert(field, message);
            }
        }
        out
    }
}
