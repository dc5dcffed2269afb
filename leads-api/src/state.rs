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

//! Shared application state passed to every Axum handler via `State`.

use crate::store::LeadStore;

/// Application state shared across all request handlers.
///
/// Handlers hold no other shared mutable state; each request is independent.
#[derive(Clone)]
pub struct AppState {
    /// Where validated leads are persisted.
    pub store: LeadStore,
}

impl AppState {
    pub fn new(store: LeadStore) -> Self {
        Self { store }
    }
}
