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

//! Lead form controller and submission client.
//!
//! [`LeadForm`] owns the form state (values, field errors, photo attachments)
//! and validates with the same rules as the API before anything leaves the
//! machine. [`LeadSubmitter`] sends a validated lead to one of two endpoints:
//! a third-party form relay (multipart, with photos) or the local lead API
//! (JSON). Pick one per deployment.
//!
//! # Example
//!
//! ```no_run
//! use leads_client::{Endpoint, LeadForm, LeadSubmitter, SubmitOutcome};
//! use leads_client::leads_types::LeadField;
//!
//! # async fn example() {
//! let submitter = LeadSubmitter::new(Endpoint::LocalApi("http://localhost:5000".into()));
//!
//! let mut form = LeadForm::new();
//! form.set_field(LeadField::FullName, "Jane Doe");
//! form.set_field(LeadField::Email, "jane@example.com");
//! form.set_field(LeadField::Phone, "6145551234");
//! form.set_field(LeadField::Consent, true);
//!
//! match form.submit(&submitter).await {
//!     SubmitOutcome::Submitted(_) => println!("navigate to /success"),
//!     SubmitOutcome::Invalid(errors) => println!("{}", errors.summary()),
//!     SubmitOutcome::Failed(message) => println!("{message}"),
//! }
//! # }
//! ```

pub mod attachment;
pub mod error;
pub mod form;
pub mod submit;

pub use attachment::Attachment;
pub use error::SubmitError;
pub use form::{FieldValue, LeadForm, SubmitOutcome, GENERIC_FAILURE, MAX_ATTACHMENTS};
pub use leads_types;
pub use submit::SubmitReceipt;

use leads_types::ErrorBody;
use reqwest::Client;

/// Where submissions are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Full URL of a hosted form relay that accepts multipart posts.
    Relay(String),
    /// Base URL of the local lead API, e.g. `"http://localhost:5000"`.
    LocalApi(String),
}

/// Sends leads to the configured [`Endpoint`].
///
/// Each call is a single attempt. There is no retry, backoff, or queueing;
/// a failed submission is reported to the caller and forgotten.
#[derive(Debug, Clone)]
pub struct LeadSubmitter {
    endpoint: Endpoint,
    http: Client,
}

impl LeadSubmitter {
    pub fn new(endpoint: Endpoint) -> Self {
        let endpoint = match endpoint {
            Endpoint::LocalApi(base) => Endpoint::LocalApi(base.trim_end_matches('/').to_string()),
            relay => relay,
        };
        Self {
            endpoint,
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Build a GET request for a local API path.
    pub(crate) fn get(&self, base: &str, path: &str) -> reqwest::RequestBuilder {
        self.http.get(format!("{base}{path}"))
    }

    /// Build a POST request for an absolute URL.
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.http.post(url)
    }
}

/// Parse a local API response, returning `T` on success or mapping the
/// `{ "error": ... }` body to [`SubmitError`].
pub(crate) async fn parse_api_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, SubmitError> {
    let status = response.status().as_u16();
    match status {
        200 | 201 => Ok(response.json().await?),
        400 => {
            let text = response.text().await.unwrap_or_default();
            Err(SubmitError::Validation(error_message(&text)))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(SubmitError::Rejected {
                status,
                body: error_message(&text),
            })
        }
    }
}

/// Parse a response where only the status code matters.
pub(crate) async fn parse_status_only(response: reqwest::Response) -> Result<(), SubmitError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let text = response.text().await.unwrap_or_default();
    Err(SubmitError::Rejected {
        status: status.as_u16(),
        body: text,
    })
}

/// Pull the message out of an `ErrorBody`, falling back to the raw text.
fn error_message(text: &str) -> String {
    serde_json::from_str::<ErrorBody>(text)
        .map(|body| body.error)
        .unwrap_or_else(|_| text.to_string())
}
