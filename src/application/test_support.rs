//! In-memory provider used by the application layer tests.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::{
    AuthHeaders, ChargeRequest, ChargeResponse, ChargeStatus, TransactionResponse,
    TransactionStatus,
};
use crate::ports::{AccountLookupPort, ChargeGatewayPort, TransactionGatewayPort};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    AccountCheck(String),
    CreateCharge(ChargeRequest),
    RetrieveTransaction(String),
}

#[derive(Default)]
pub struct StubProvider {
    accounts: HashSet<String>,
    failing_account: Option<String>,
    calls: Mutex<Vec<Call>>,
}

impl StubProvider {
    pub fn with_accounts(accounts: &[&str]) -> Self {
        Self {
            accounts: accounts.iter().map(|a| a.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Account lookups for `account_id` fail with a 500
    pub fn failing_on(mut self, account_id: &str) -> Self {
        self.failing_account = Some(account_id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn account_checks(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::AccountCheck(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn charges_created(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::CreateCharge(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl AccountLookupPort for StubProvider {
    async fn exists_by_account_id(
        &self,
        _headers: &AuthHeaders,
        account_id: &str,
    ) -> DomainResult<bool> {
        self.record(Call::AccountCheck(account_id.to_string()));
        if self.failing_account.as_deref() == Some(account_id) {
            return Err(DomainError::RemoteCallFailure {
                status: 500,
                body: "internal error".to_string(),
            });
        }
        Ok(self.accounts.contains(account_id))
    }
}

#[async_trait]
impl ChargeGatewayPort for StubProvider {
    async fn create_charge(
        &self,
        _headers: &AuthHeaders,
        request: &ChargeRequest,
    ) -> DomainResult<ChargeResponse> {
        self.record(Call::CreateCharge(request.clone()));
        Ok(ChargeResponse {
            id: "charge_1".to_string(),
            qr_code: Some("00020101021226770014BR.GOV.BCB.PIX".to_string()),
            status: Some(ChargeStatus::Created),
            value: request.value,
            webhook_url: request.webhook_url.clone(),
            qr_code_base64: None,
            webhook: None,
            split_rules: None,
            end_to_end_id: None,
            payer_name: None,
            payer_national_registration: None,
        })
    }
}

#[async_trait]
impl TransactionGatewayPort for StubProvider {
    async fn retrieve_transaction(
        &self,
        _headers: &AuthHeaders,
        transaction_id: &str,
    ) -> DomainResult<TransactionResponse> {
        self.record(Call::RetrieveTransaction(transaction_id.to_string()));
        Ok(TransactionResponse {
            id: transaction_id.to_string(),
            status: Some(TransactionStatus::Paid),
            value: Some(2500),
            description: None,
            payment_type: Some("pix".to_string()),
            created_at: None,
            updated_at: None,
            webhook_url: None,
            split_rules: None,
            end_to_end_id: None,
            payer_name: None,
            payer_national_registration: None,
            webhook: None,
            pix_details: None,
            transaction_product: None,
        })
    }
}
