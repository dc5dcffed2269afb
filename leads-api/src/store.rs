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

//! Append-only lead storage.
//!
//! Two backends share one interface: an in-memory list for development and
//! tests, and PostgreSQL for deployments. Both support exactly two operations,
//! `create` and `list_all`; there is no update or delete.

use std::sync::Arc;

use chrono::Utc;
use leads_types::{Lead, NewLead};
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db::leads as db_leads;

/// Failure raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// In-memory backend. Records are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    leads: Arc<RwLock<Vec<Lead>>>,
}

/// Storage backend selected at startup.
#[derive(Debug, Clone)]
pub enum LeadStore {
    Memory(MemoryStore),
    Postgres(PgPool),
}

impl LeadStore {
    pub fn memory() -> Self {
        LeadStore::Memory(MemoryStore::default())
    }

    pub fn postgres(pool: PgPool) -> Self {
        LeadStore::Postgres(pool)
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            LeadStore::Memory(_) => "memory",
            LeadStore::Postgres(_) => "postgres",
        }
    }

    /// Persist a validated lead, assigning its id and creation timestamp.
    pub async fn create(&self, new: NewLead) -> Result<Lead, StoreError> {
        let id = Uuid::new_v4().to_string();
        match self {
            LeadStore::Memory(mem) => {
                let lead = Lead::from_new(new, id, Utc::now());
                mem.leads.write().await.push(lead.clone());
                Ok(lead)
            }
            LeadStore::Postgres(pool) => {
                let row = db_leads::create(pool, &id, &new).await?;
                Ok(row.into())
            }
        }
    }

    /// Every stored lead in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Lead>, StoreError> {
        match self {
            LeadStore::Memory(mem) => Ok(mem.leads.read().await.clone()),
            LeadStore::Postgres(pool) => {
                let rows = db_leads::list_all(pool).await?;
                Ok(rows.into_iter().map(Lead::from).collect())
            }
        }
    }
}
