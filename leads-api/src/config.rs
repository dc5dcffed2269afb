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

//! Application configuration loaded from environment variables.

use std::env;

/// Configuration for the lead API.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server (e.g. "0.0.0.0:5000").
    pub listen_addr: String,
    /// PostgreSQL connection string. `None` keeps leads in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled PostgreSQL connections.
    pub db_max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Optional
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:5000"`)
    /// - `DATABASE_URL` (unset or empty: in-memory storage)
    /// - `DB_MAX_CONNECTIONS` (default: `"5"`)
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| "0.0.0.0:5000".to_string());
        let database_url = lookup("DATABASE_URL").filter(|s| !s.is_empty());
        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid unsigned integer")?;

        Ok(Self {
            listen_addr,
            database_url,
            db_max_connections,
        })
    }
}
