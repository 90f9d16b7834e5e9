// src/leads/airtable.rs

use crate::config::AirtableConfig;
use crate::domain::lead::LeadRecord;
use crate::leads::capture::{Confirmation, LeadCapture, SubmissionError};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const NEW_LEAD_STATUS: &str = "New Lead";

pub struct AirtableClient {
    api_key: Option<String>,
    base_id: Option<String>,
    table_name: String,
    api_url: String,
    timeout: Duration,
    client: Client,
}

#[derive(Serialize)]
struct CreateRecords<'a> {
    records: Vec<NewRecord<'a>>,
}

#[derive(Serialize)]
struct NewRecord<'a> {
    fields: LeadFields<'a>,
}

/// Column names as they exist in the leads table.
#[derive(Serialize, Debug, PartialEq)]
struct LeadFields<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "email")]
    email: &'a str,
    #[serde(rename = "business type")]
    business_type: &'a str,
    #[serde(rename = "Social Media")]
    socials: String,
    #[serde(rename = "Revenue Range")]
    revenue: &'a str,
    #[serde(rename = "Goals")]
    goals: &'a str,
    #[serde(rename = "Call Date", skip_serializing_if = "Option::is_none")]
    call_date: Option<&'a str>,
    #[serde(rename = "Call Time", skip_serializing_if = "Option::is_none")]
    call_time: Option<&'a str>,
    #[serde(rename = "Timestamp")]
    timestamp: String,
    #[serde(rename = "Source")]
    source: &'a str,
    #[serde(rename = "Status")]
    status: &'static str,
}

#[derive(Deserialize)]
struct CreatedRecords {
    records: Vec<serde_json::Value>,
}

impl AirtableClient {
    pub fn new(cfg: &AirtableConfig) -> Result<Self, SubmissionError> {
        let client = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| SubmissionError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key: cfg.api_key.clone(),
            base_id: cfg.base_id.clone(),
            table_name: cfg.table_name.clone(),
            api_url: cfg.api_url.clone(),
            timeout: cfg.timeout,
            client,
        })
    }

    /// `{api_url}/{base_id}/{table}` with each segment percent-encoded.
    fn endpoint(&self, base_id: &str) -> Result<Url, SubmissionError> {
        let mut url = Url::parse(&self.api_url).map_err(|e| {
            SubmissionError::MissingConfig(format!("invalid AIRTABLE_API_URL {:?}: {e}", self.api_url))
        })?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                SubmissionError::MissingConfig(format!(
                    "AIRTABLE_API_URL cannot be a base: {}",
                    self.api_url
                ))
            })?;
            segments.pop_if_empty().push(base_id).push(&self.table_name);
        }
        Ok(url)
    }

    fn credentials(&self) -> Result<(&str, &str), SubmissionError> {
        match (self.api_key.as_deref(), self.base_id.as_deref()) {
            (Some(key), Some(base)) => Ok((key, base)),
            _ => Err(SubmissionError::MissingConfig(
                "AIRTABLE_API_KEY and AIRTABLE_BASE_ID must be set".into(),
            )),
        }
    }
}

fn lead_fields(record: &LeadRecord) -> LeadFields<'_> {
    LeadFields {
        name: &record.name,
        email: &record.email,
        business_type: &record.business_type,
        socials: record
            .socials
            .as_ref()
            .map(|s| s.to_display())
            .unwrap_or_default(),
        revenue: record.revenue.as_deref().unwrap_or(""),
        goals: record.goals.as_deref().unwrap_or(""),
        call_date: record.selected_date.as_ref().map(|d| d.full_date.as_str()),
        call_time: record.selected_time.as_deref(),
        timestamp: record.timestamp.to_rfc3339(),
        source: &record.source,
        status: NEW_LEAD_STATUS,
    }
}

fn parse_created(body: &str) -> Result<Confirmation, SubmissionError> {
    let created: CreatedRecords = serde_json::from_str(body)
        .map_err(|e| SubmissionError::UnexpectedResponse(format!("invalid JSON: {e}")))?;

    let record = created
        .records
        .into_iter()
        .next()
        .ok_or_else(|| SubmissionError::UnexpectedResponse("no record returned".into()))?;

    let id = record
        .get("id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| SubmissionError::UnexpectedResponse("record has no id".into()))?
        .to_string();
    let created_time = record
        .get("createdTime")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    Ok(Confirmation {
        id,
        created_time,
        record,
    })
}

impl LeadCapture for AirtableClient {
    fn check_config(&self) -> Result<(), SubmissionError> {
        let (_, base_id) = self.credentials()?;
        self.endpoint(base_id).map(|_| ())
    }

    fn submit(&self, record: &LeadRecord) -> Result<Confirmation, SubmissionError> {
        let (api_key, base_id) = self.credentials()?;
        let url = self.endpoint(base_id)?;

        let payload = CreateRecords {
            records: vec![NewRecord {
                fields: lead_fields(record),
            }],
        };

        let resp = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    SubmissionError::Timeout(self.timeout.as_secs())
                } else {
                    SubmissionError::Transport(e.to_string())
                }
            })?;

        let status = resp.status();
        let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Airtable rejected lead: {}", text);
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        let confirmation = parse_created(&text)?;
        tracing::info!(record_id = %confirmation.id, source = %record.source, "Lead saved");
        Ok(confirmation)
    }
}
