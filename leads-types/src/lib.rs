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

//! Shared API types for the roof inspection lead service.
//!
//! This crate defines the lead contract used by both the form controller
//! (client side, for fast feedback) and the API endpoint (server side, as the
//! trust boundary). Both run the exact same rules through
//! [`NewLead::from_candidate`], so the two can never drift apart.
//!
//! It is intentionally framework-agnostic: no axum, no reqwest, no database types.

pub mod error;
pub mod requests;
pub mod responses;
pub mod schema;

pub use error::ErrorBody;
pub use requests::NewLead;
pub use responses::Lead;
pub use schema::{FieldErrors, LeadField};
