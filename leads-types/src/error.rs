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

//! API error body.
//!
//! Every failed API response carries a single human-readable message:
//! `{ "error": "..." }`. Internal detail (database errors and the like) is
//! logged server-side and never placed in this body.

use serde::{Deserialize, Serialize};

use crate::schema::FieldErrors;

/// Body returned alongside every 4xx/5xx status from the lead API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable error message, suitable for display.
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Aggregate every field violation into one message.
    pub fn validation(errors: &FieldErrors) -> Self {
        Self::new(errors.summary())
    }

    /// The request body could not be read as a JSON object at all.
    pub fn malformed_body(detail: &str) -> Self {
        Self::new(format!("Validation error: {detail}"))
    }

    pub fn save_failed() -> Self {
        Self::new("Failed to save lead")
    }

    pub fn fetch_failed() -> Self {
        Self::new("Failed to fetch leads")
    }
}

impl std::fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.error)
    }
}

impl std::error::Error for ErrorBody {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LeadField;

    #[test]
    fn serializes_as_single_error_key() {
        let body = ErrorBody::save_failed();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Failed to save lead" }));
    }

    #[test]
    fn validation_body_names_each_field() {
        let mut errors = FieldErrors::default();
        errors.insert(LeadField::Email, "Invalid email address");
        errors.insert(LeadField::Consent, "You must agree to the terms");
        let body = ErrorBody::validation(&errors);
        assert!(body.error.contains("at \"email\""));
        assert!(body.error.contains("at \"consent\""));
    }
}
