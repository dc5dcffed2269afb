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

//! Form state for the inspection request page.
//!
//! One `LeadForm` lives for as long as the form view does. All mutation comes
//! from discrete user events (typing, picking files, pressing submit), so the
//! controller takes `&mut self` and needs no locking.

use std::collections::BTreeSet;

use leads_types::{FieldErrors, LeadField, NewLead};
use serde_json::{Map, Value};

use crate::attachment::Attachment;
use crate::submit::SubmitReceipt;
use crate::LeadSubmitter;

/// Most photos a single request may carry.
pub const MAX_ATTACHMENTS: usize = 5;

/// Shown to the user for any submission failure. Details go to the log.
pub const GENERIC_FAILURE: &str =
    "There was an error submitting your request. Please try again.";

/// A raw value typed or toggled by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(text) => Value::String(text),
            FieldValue::Flag(flag) => Value::Bool(flag),
        }
    }
}

/// Result of pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent. Show each message by its field.
    Invalid(FieldErrors),
    /// Accepted by the endpoint. The view moves on to the success page.
    Submitted(SubmitReceipt),
    /// The endpoint or network failed. Show the message; the form is left as is.
    Failed(String),
}

/// Values, errors and attachments for one lead form.
#[derive(Debug, Clone)]
pub struct LeadForm {
    values: Map<String, Value>,
    errors: FieldErrors,
    dirty: BTreeSet<LeadField>,
    attachments: Vec<Attachment>,
    failure: Option<String>,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadForm {
    /// Empty text fields and consent unchecked.
    pub fn new() -> Self {
        let mut values = Map::new();
        for field in LeadField::ALL {
            let initial = match field {
                LeadField::Consent => Value::Bool(false),
                _ => Value::String(String::new()),
            };
            values.insert(field.as_str().to_string(), initial);
        }
        Self {
            values,
            errors: FieldErrors::default(),
            dirty: BTreeSet::new(),
            attachments: Vec::new(),
            failure: None,
        }
    }

    pub fn value(&self, field: LeadField) -> Option<&Value> {
        self.values.get(field.as_str())
    }

    /// Current text of a field, or `""` for non-text values.
    pub fn text(&self, field: LeadField) -> &str {
        self.value(field).and_then(Value::as_str).unwrap_or("")
    }

    pub fn consent(&self) -> bool {
        self.value(LeadField::Consent)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Update one field and mark it dirty. A stale error for that field is cleared.
    pub fn set_field(&mut self, field: LeadField, value: impl Into<FieldValue>) {
        let value: FieldValue = value.into();
        self.values
            .insert(field.as_str().to_string(), Value::from(value));
        self.dirty.insert(field);
        self.errors.remove(field);
    }

    pub fn is_dirty(&self, field: LeadField) -> bool {
        self.dirty.contains(&field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: LeadField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Message from the last failed submission, if any.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Append picked files. Non-images are skipped and anything past
    /// [`MAX_ATTACHMENTS`] is dropped without an error.
    pub fn add_attachments(&mut self, files: impl IntoIterator<Item = Attachment>) {
        for file in files {
            if self.attachments.len() >= MAX_ATTACHMENTS {
                break;
            }
            if !file.is_image() {
                log::debug!("Skipping non-image attachment {}", file.file_name);
                continue;
            }
            self.attachments.push(file);
        }
    }

    /// Remove the attachment at `index`. Out of range is a no-op.
    pub fn remove_attachment(&mut self, index: usize) -> Option<Attachment> {
        if index < self.attachments.len() {
            Some(self.attachments.remove(index))
        } else {
            None
        }
    }

    /// Run the lead rules on the current values. An empty set means valid.
    pub fn validate(&mut self) -> FieldErrors {
        match self.check() {
            Ok(_) => FieldErrors::default(),
            Err(errors) => errors,
        }
    }

    fn check(&mut self) -> Result<NewLead, FieldErrors> {
        match NewLead::from_candidate(&self.values) {
            Ok(lead) => {
                self.errors = FieldErrors::default();
                Ok(lead)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Validate, then hand the lead and attachments to `submitter`.
    ///
    /// Invalid forms never touch the network. On success the form is cleared;
    /// on failure it is kept so the user can try again.
    pub async fn submit(&mut self, submitter: &LeadSubmitter) -> SubmitOutcome {
        self.failure = None;

        let lead = match self.check() {
            Ok(lead) => lead,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        match submitter.submit(&lead, &self.attachments).await {
            Ok(receipt) => {
                *self = LeadForm::new();
                SubmitOutcome::Submitted(receipt)
            }
            Err(err) => {
                log::error!("Error submitting form: {err}");
                self.failure = Some(GENERIC_FAILURE.to_string());
                SubmitOutcome::Failed(GENERIC_FAILURE.to_string())
            }
        }
    }
}
