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

//! The lead candidate submitted by the form and accepted by `POST /api/leads`.
//!
//! [`NewLead::from_candidate`] is the one place the lead rules are applied.
//! The form controller calls it before submitting and the API endpoint calls
//! it again on the received body.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

use crate::schema::{FieldErrors, LeadField, REQUIRED};

/// Contactable addresses need a dotted domain ending in an alphabetic TLD.
static EMAIL_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$")
        .expect("valid regex")
});

/// Request body for `POST /api/leads`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    #[validate(length(min = 2, message = "Name is required"))]
    pub full_name: String,

    #[validate(
        email(message = "Invalid email address"),
        regex(path = *EMAIL_DOMAIN, message = "Invalid email address")
    )]
    pub email: String,

    /// Only the length is checked; no format or locale rules.
    #[validate(length(min = 10, message = "Valid phone number required"))]
    pub phone: String,

    #[serde(default)]
    pub message: Option<String>,

    #[validate(custom(function = "validate_consent"))]
    pub consent: bool,
}

fn validate_consent(consent: &bool) -> Result<(), ValidationError> {
    if *consent {
        Ok(())
    } else {
        Err(ValidationError::new("consent")
            .with_message(Cow::Borrowed("You must agree to the terms")))
    }
}

impl NewLead {
    /// Parse and validate a raw candidate record (field name to JSON value).
    ///
    /// Collects every violation rather than stopping at the first. Unknown
    /// keys are ignored.
    pub fn from_candidate(candidate: &Map<String, Value>) -> Result<NewLead, FieldErrors> {
        let mut errors = FieldErrors::default();

        let full_name = required_text(candidate, LeadField::FullName, &mut errors);
        let email = required_text(candidate, LeadField::Email, &mut errors);
        let phone = required_text(candidate, LeadField::Phone, &mut errors);
        let message = optional_text(candidate, LeadField::Message, &mut errors);
        let consent = required_flag(candidate, LeadField::Consent, &mut errors);

        let lead = NewLead {
            full_name,
            email,
            phone,
            message,
            consent,
        };

        if let Err(violations) = lead.validate() {
            errors.merge(FieldErrors::from(&violations));
        }

        if errors.is_empty() {
            Ok(lead)
        } else {
            Err(errors)
        }
    }

    /// The message, or an empty string if none was given.
    pub fn message_or_empty(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

fn required_text(candidate: &Map<String, Value>, field: LeadField, errors: &mut FieldErrors) -> String {
    match candidate.get(field.as_str()) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => {
            errors.insert(field, REQUIRED);
            String::new()
        }
        Some(_) => {
            errors.insert(field, "Expected string");
            String::new()
        }
    }
}

fn optional_text(
    candidate: &Map<String, Value>,
    field: LeadField,
    errors: &mut FieldErrors,
) -> Option<String> {
    match candidate.get(field.as_str()) {
        Some(Value::String(s)) => Some(s.clone()),
        None | Some(Value::Null) => None,
        Some(_) => {
            errors.insert(field, "Expected string");
            None
        }
    }
}

fn required_flag(candidate: &Map<String, Value>, field: LeadField, errors: &mut FieldErrors) -> bool {
    match candidate.get(field.as_str()) {
        Some(Value::Bool(b)) => *b,
        None | Some(Value::Null) => {
            errors.insert(field, REQUIRED);
            false
        }
        Some(_) => {
            errors.insert(field, "Expected boolean");
            false
        }
    }
}
