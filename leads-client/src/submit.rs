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

//! Sending a validated lead to the configured endpoint.

use leads_types::{Lead, NewLead};
use reqwest::header::ACCEPT;
use reqwest::multipart::Form;

use crate::attachment::Attachment;
use crate::error::SubmitError;
use crate::{parse_api_response, parse_status_only, Endpoint, LeadSubmitter};

/// What a successful submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReceipt {
    /// The relay accepted the form. It returns nothing we keep.
    Relayed,
    /// The local API stored the lead.
    Stored(Lead),
}

/// Text fields posted to the relay, in posting order.
pub fn relay_text_fields(lead: &NewLead) -> [(&'static str, String); 5] {
    [
        ("name", lead.full_name.clone()),
        ("email", lead.email.clone()),
        ("phone", lead.phone.clone()),
        ("message", lead.message_or_empty().to_string()),
        ("consent", if lead.consent { "Yes" } else { "No" }.to_string()),
    ]
}

/// Build the multipart body for the relay: text fields, then `photo_N` parts.
pub fn relay_form(lead: &NewLead, attachments: &[Attachment]) -> Result<Form, SubmitError> {
    let mut form = Form::new();
    for (name, value) in relay_text_fields(lead) {
        form = form.text(name, value);
    }
    for (index, attachment) in attachments.iter().enumerate() {
        form = form.part(Attachment::part_name(index), attachment.to_part()?);
    }
    Ok(form)
}

impl LeadSubmitter {
    /// Submit a validated lead once.
    ///
    /// Relay: `POST <url>` as multipart with photos.
    /// Local API: `POST /api/leads` as JSON. The local API has no attachment
    /// field, so any attachments are dropped with a warning.
    pub async fn submit(
        &self,
        lead: &NewLead,
        attachments: &[Attachment],
    ) -> Result<SubmitReceipt, SubmitError> {
        match &self.endpoint {
            Endpoint::Relay(url) => {
                let form = relay_form(lead, attachments)?;
                let response = self
                    .post(url)
                    .header(ACCEPT, "application/json")
                    .multipart(form)
                    .send()
                    .await?;
                parse_status_only(response).await?;
                log::info!("Lead relayed with {} attachment(s)", attachments.len());
                Ok(SubmitReceipt::Relayed)
            }
            Endpoint::LocalApi(base) => {
                if !attachments.is_empty() {
                    log::warn!(
                        "Local lead API does not accept attachments; dropping {}",
                        attachments.len()
                    );
                }
                let url = format!("{base}/api/leads");
                let response = self.post(&url).json(lead).send().await?;
                let stored: Lead = parse_api_response(response).await?;
                log::info!("Lead stored with id {}", stored.id);
                Ok(SubmitReceipt::Stored(stored))
            }
        }
    }

    /// List every stored lead.
    ///
    /// Calls `GET /api/leads`. Only the local API supports this.
    pub async fn list_leads(&self) -> Result<Vec<Lead>, SubmitError> {
        match &self.endpoint {
            Endpoint::LocalApi(base) => {
                let response = self.get(base, "/api/leads").send().await?;
                parse_api_response(response).await
            }
            Endpoint::Relay(_) => Err(SubmitError::Config(
                "listing leads requires the local lead API endpoint".to_string(),
            )),
        }
    }
}
