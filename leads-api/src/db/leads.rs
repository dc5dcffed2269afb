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

//! Lead table queries.

use chrono::{DateTime, Utc};
use leads_types::{Lead, NewLead};
use sqlx::PgPool;

/// Row returned from the `leads` table.
#[derive(Debug, sqlx::FromRow)]
pub struct LeadRow {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub consent: bool,
    pub created_at: DateTime<Utc>,
}

impl From<LeadRow> for Lead {
    fn from(row: LeadRow) -> Self {
        Lead {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            phone: row.phone,
            message: row.message,
            consent: row.consent,
            created_at: row.created_at,
        }
    }
}

/// Create the `leads` table if it does not exist yet.
///
/// `seq` only exists to give `list_all` a stable insertion order.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS leads (
            seq        BIGSERIAL PRIMARY KEY,
            id         TEXT NOT NULL UNIQUE,
            full_name  TEXT NOT NULL,
            email      TEXT NOT NULL,
            phone      TEXT NOT NULL,
            message    TEXT NOT NULL DEFAULT '',
            consent    BOOLEAN NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Insert a validated lead under `id`; the database assigns `created_at`.
pub async fn create(pool: &PgPool, id: &str, lead: &NewLead) -> Result<LeadRow, sqlx::Error> {
    sqlx::query_as::<_, LeadRow>(
        r#"
        INSERT INTO leads (id, full_name, email, phone, message, consent, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, NOW())
        RETURNING id, full_name, email, phone, message, consent, created_at
        "#,
    )
    .bind(id)
    .bind(&lead.full_name)
    .bind(&lead.email)
    .bind(&lead.phone)
    .bind(lead.message_or_empty())
    .bind(lead.consent)
    .fetch_one(pool)
    .await
}

/// Every stored lead, oldest first.
pub async fn list_all(pool: &PgPool) -> Result<Vec<LeadRow>, sqlx::Error> {
    sqlx::query_as::<_, LeadRow>(
        r#"
        SELECT id, full_name, email, phone, message, consent, created_at
        FROM leads
        ORDER BY seq ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Delete a lead by id. Only used to clean up after integration tests.
pub async fn delete_by_id(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM leads WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
