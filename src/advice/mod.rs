//! Recommendation client.
//!
//! Summarizes a domain's collected records, embeds the summary in a fixed
//! prompt, and POSTs it to a hosted text-generation endpoint. The call is
//! strictly best-effort: any failure is logged and the report simply ships
//! without a recommendations section.

use std::env;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::{
    ADVICE_API_KEY_ENV, ADVICE_MAX_TOKENS, ADVICE_MODEL_ENV, ADVICE_URL_ENV, ADVICE_VENDOR_ENV,
    DEFAULT_ADVICE_MODEL, DEFAULT_ADVICE_URL, DEFAULT_ADVICE_VENDOR,
};
use crate::models::DomainReport;

#[derive(Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

/// Client for the hosted text-generation endpoint.
pub struct AdviceClient {
    http: Arc<reqwest::Client>,
    endpoint: String,
    model: String,
    vendor: String,
    api_key: String,
}

impl AdviceClient {
    /// Builds a client from the environment.
    ///
    /// The credential comes from `ANTHROPIC_API_KEY` (a `.env` file works —
    /// it is loaded at startup); endpoint, model, and vendor name have env
    /// overrides. Returns `None`, with a warning, when no credential is
    /// configured.
    pub fn from_env(http: Arc<reqwest::Client>) -> Option<Self> {
        let api_key = match env::var(ADVICE_API_KEY_ENV) {
            Ok(key) if !key.is_empty() => key,
            _ => {
                log::warn!(
                    "{} is not set; skipping recommendations",
                    ADVICE_API_KEY_ENV
                );
                return None;
            }
        };
        Some(Self {
            http,
            endpoint: env::var(ADVICE_URL_ENV).unwrap_or_else(|_| DEFAULT_ADVICE_URL.to_string()),
            model: env::var(ADVICE_MODEL_ENV)
                .unwrap_or_else(|_| DEFAULT_ADVICE_MODEL.to_string()),
            vendor: env::var(ADVICE_VENDOR_ENV)
                .unwrap_or_else(|_| DEFAULT_ADVICE_VENDOR.to_string()),
            api_key,
        })
    }

    /// Requests free-text recommendations for one domain's findings.
    ///
    /// # Returns
    ///
    /// The trimmed response text. Errors are for the caller to log; they
    /// must never abort the batch.
    pub async fn recommendations(&self, report: &DomainReport) -> Result<String> {
        let prompt = build_prompt(report, &self.vendor);
        let request = GenerationRequest {
            model: &self.model,
            max_tokens: ADVICE_MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: &prompt,
            }],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&request)
            .send()
            .await
            .context("recommendation request failed")?
            .error_for_status()
            .context("recommendation service returned an error status")?;

        let body: GenerationResponse = response
            .json()
            .await
            .context("failed to parse recommendation response")?;

        let text = body
            .content
            .iter()
            .filter(|block| block.kind == "text")
            .map(|block| block.text.as_str())
            .collect::<Vec<&str>>()
            .join("\n")
            .trim()
            .to_string();

        if text.is_empty() {
            return Err(anyhow!("recommendation response contained no text"));
        }
        Ok(text)
    }
}

/// Builds the fixed prompt: record summary + the three asks (security
/// recommendations, two vendor upsell angles, a cold-call narrative).
pub fn build_prompt(report: &DomainReport, vendor: &str) -> String {
    let mut summary = String::new();
    summary.push_str(&format!("Domain: {}\n", report.domain));
    summary.push_str(&format!("Primary MX: {}\n", report.mx_target));
    summary.push_str(&format!("Mail filter provider: {}\n", report.provider));
    for (preference, exchange) in &report.mx_records {
        summary.push_str(&format!("MX record: {preference} {exchange}\n"));
    }
    summary.push_str(&format!("SPF: {}\n", report.spf.summary()));
    if let Some(record) = report.spf.record() {
        summary.push_str(&format!("SPF record: {record}\n"));
    }
    summary.push_str(&format!("DMARC: {}\n", report.dmarc.summary()));
    if let Some(record) = report.dmarc.record() {
        summary.push_str(&format!("DMARC record: {record}\n"));
    }
    if report.dkim_records.is_empty() {
        summary.push_str("DKIM: no key records found at common selectors\n");
    }
    for record in &report.dkim_records {
        summary.push_str(&format!("DKIM record: {record}\n"));
    }
    for record in &report.txt_records {
        summary.push_str(&format!("TXT record: {record}\n"));
    }

    format!(
        "You are reviewing the email security posture of a prospect's domain \
         based on its public DNS records.\n\n{summary}\n\
         Write, in this order:\n\
         1. Concrete security recommendations for this domain's email \
         authentication posture.\n\
         2. Two specific angles where {vendor} could add value as a managed \
         service, tied to the findings above.\n\
         3. A short cold-call introduction (three or four sentences) a sales \
         engineer could open with, referencing these findings.\n\
         Keep it factual and grounded in the records listed above."
    )
}
