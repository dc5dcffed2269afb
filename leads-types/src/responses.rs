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

//! Response types for the lead API.
//!
//! - `POST /api/leads` returns `201` with a [`Lead`].
//! - `GET /api/leads` returns `200` with a JSON array of [`Lead`].
//! - Failures return [`crate::ErrorBody`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::requests::NewLead;

/// A stored lead. `id` and `created_at` are assigned by storage, never by the client.
///
/// ```json
/// { "id": "6f1c...", "fullName": "Jane Doe", "email": "jane@example.com",
///   "phone": "6145551234", "message": "", "consent": true,
///   "createdAt": "2025-06-01T14:03:22.512Z" }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub consent: bool,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// Build the stored record from a validated candidate.
    pub fn from_new(new: NewLead, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            message: new.message.unwrap_or_default(),
            full_name: new.full_name,
            email: new.email,
            phone: new.phone,
            consent: new.consent,
            created_at,
        }
    }
}
