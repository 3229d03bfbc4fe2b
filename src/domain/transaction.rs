use crate::domain::charge::{SplitRuleResponse, WebhookResponse};
use crate::domain::pix_datetime;
use crate::domain::value_objects::TransactionStatus;
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Full state of a transaction (`GET /api/transactions/{id}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: String,

    pub status: Option<TransactionStatus>,

    /// Amount in cents
    pub value: Option<i64>,

    pub description: Option<String>,

    pub payment_type: Option<String>,

    pub created_at: Option<DateTime<FixedOffset>>,

    pub updated_at: Option<DateTime<FixedOffset>>,

    pub webhook_url: Option<String>,

    pub split_rules: Option<Vec<SplitRuleResponse>>,

    pub end_to_end_id: Option<String>,

    pub payer_name: Option<String>,

    pub payer_national_registration: Option<String>,

    pub webhook: Option<WebhookResponse>,

    pub pix_details: Option<PixDetailsResponse>,

    pub transaction_product: Option<Vec<TransactionProductResponse>>,
}

impl TransactionResponse {
    pub fn is_paid(&self) -> bool {
        self.status.is_some_and(|s| s.is_paid())
    }
}

/// Pix-specific part of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixDetailsResponse {
    pub id: Option<String>,

    /// Local time without offset, see [`pix_datetime`]
    #[serde(default, with = "pix_datetime")]
    pub expiration_date: Option<NaiveDateTime>,

    /// EMV payload behind the QR code
    pub emv: Option<String>,

    pub created_at: Option<DateTime<FixedOffset>>,

    pub updated_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionProductResponse {
    pub id: Option<String>,
}
