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

//! Error types for the lead submission client.

use thiserror::Error;

/// Errors returned by [`LeadSubmitter`](crate::LeadSubmitter) methods.
///
/// These carry operator-level detail. The form controller logs them and
/// shows the user a generic message instead.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The local API rejected the lead (HTTP 400).
    #[error("Lead rejected: {0}")]
    Validation(String),

    /// The endpoint answered with a non-success status.
    #[error("Submission failed ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// An attachment could not be turned into a multipart part.
    #[error("Invalid attachment '{file_name}': {reason}")]
    InvalidAttachment { file_name: String, reason: String },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The operation is not available for the configured endpoint.
    #[error("Configuration error: {0}")]
    Config(String),
}
