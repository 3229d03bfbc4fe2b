use crate::domain::value_objects::ChargeStatus;
use base64::Engine;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Pix charge to be created (`POST /api/pix/cashIn`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Amount in cents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,

    /// Where the provider posts status changes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// How the amount is split between accounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_rules: Option<Vec<SplitRuleRequest>>,
}

impl ChargeRequest {
    pub fn new(value: i64) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    pub fn with_split_rule(mut self, rule: SplitRuleRequest) -> Self {
        self.split_rules.get_or_insert_with(Vec::new).push(rule);
        self
    }

    /// Split rules in submission order; empty when none were given.
    pub fn split_rules(&self) -> &[SplitRuleRequest] {
        self.split_rules.as_deref().unwrap_or(&[])
    }
}

/// Share of a charge credited to another account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRuleRequest {
    /// Amount in cents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl SplitRuleRequest {
    pub fn new(value: i64, account_id: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            account_id: Some(account_id.into()),
        }
    }
}

/// Charge as created by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeResponse {
    pub id: String,

    /// Pix copy-and-paste payload
    pub qr_code: Option<String>,

    pub status: Option<ChargeStatus>,

    /// Amount in cents
    pub value: Option<i64>,

    pub webhook_url: Option<String>,

    /// QR code image, base64 encoded
    pub qr_code_base64: Option<String>,

    pub webhook: Option<WebhookResponse>,

    pub split_rules: Option<Vec<SplitRuleResponse>>,

    /// Pix end-to-end identifier, set once paid
    pub end_to_end_id: Option<String>,

    pub payer_name: Option<String>,

    pub payer_national_registration: Option<String>,
}

impl ChargeResponse {
    pub fn is_paid(&self) -> bool {
        self.status.is_some_and(|s| s.is_paid())
    }

    /// Decoded QR code image bytes.
    ///
    /// Accepts both a bare base64 payload and a `data:image/png;base64,...` URI.
    pub fn qr_code_image(&self) -> Option<Result<Vec<u8>, base64::DecodeError>> {
        self.qr_code_base64.as_deref().map(|raw| {
            let payload = match raw.strip_prefix("data:") {
                Some(rest) => rest.split_once(',').map(|(_, data)| data).unwrap_or(rest),
                None => raw,
            };
            base64::engine::general_purpose::STANDARD.decode(payload.trim())
        })
    }
}

/// Split rule as realized by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRuleResponse {
    pub id: Option<i64>,

    #[serde(rename = "type")]
    pub rule_type: Option<String>,

    pub amount: Option<i64>,

    pub transaction_id: Option<String>,

    pub account_id: Option<String>,

    pub created_at: Option<DateTime<FixedOffset>>,

    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// Delivery state of the webhook attached to a charge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookResponse {
    pub id: Option<String>,

    pub url: Option<String>,

    pub http_status: Option<i32>,

    pub http_error: Option<i32>,

    pub attempt: Option<i32>,

    pub complete: Option<bool>,

    pub transaction_id: Option<String>,

    pub transfer_id: Option<String>,

    pub account_id: Option<String>,

    pub created_at: Option<DateTime<FixedOffset>>,

    pub updated_at: Option<DateTime<FixedOffset>>,

    pub deleted_at: Option<DateTime<FixedOffset>>,
}
