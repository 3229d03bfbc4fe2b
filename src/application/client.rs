use crate::application::{AccountService, ChargeService, TransactionService};
use crate::domain::errors::DomainResult;
use crate::domain::{AuthHeaders, ChargeRequest, ChargeResponse, TransactionResponse};
use crate::infrastructure::{PushinPayAdapter, PushinPayConfig};
use crate::ports::{AccountLookupPort, ChargeGatewayPort, TransactionGatewayPort};
use std::sync::Arc;

/// Every port the client needs, implemented by one provider handle
pub trait PushinPayPort: AccountLookupPort + ChargeGatewayPort + TransactionGatewayPort {}

impl<P: AccountLookupPort + ChargeGatewayPort + TransactionGatewayPort> PushinPayPort for P {}

/// Async Pushin Pay client.
///
/// All services share one provider handle, and with the default adapter one
/// HTTP connection pool. Futures are driven by the caller's tokio runtime.
///
/// ```no_run
/// # async fn run() -> pushinpay::DomainResult<()> {
/// use pushinpay::{AuthHeaders, ChargeRequest, PushinPayClient, PushinPayConfig, SplitRuleRequest};
///
/// let client = PushinPayClient::new(PushinPayConfig::production()?)?;
/// let headers = AuthHeaders::bearer("my-token");
///
/// let request = ChargeRequest::new(10000)
///     .with_webhook_url("https://example.com/webhook")
///     .with_split_rule(SplitRuleRequest::new(5000, "acc_1"));
/// let charge = client.create_charge(&headers, &request).await?;
/// println!("{}", charge.id);
/// # Ok(())
/// # }
/// ```
pub struct PushinPayClient<P: PushinPayPort = PushinPayAdapter> {
    accounts: AccountService<P>,
    charges: ChargeService<P, P>,
    transactions: TransactionService<P>,
}

impl PushinPayClient<PushinPayAdapter> {
    pub fn new(config: PushinPayConfig) -> DomainResult<Self> {
        let adapter = PushinPayAdapter::new(Arc::new(config))?;
        Ok(Self::with_port(Arc::new(adapter)))
    }

    /// Config from `PUSHIN_PAY_*` environment variables
    pub fn from_env() -> DomainResult<Self> {
        Self::new(PushinPayConfig::from_env()?)
    }
}

impl<P: PushinPayPort> PushinPayClient<P> {
    pub fn with_port(port: Arc<P>) -> Self {
        Self {
            accounts: AccountService::new(port.clone()),
            charges: ChargeService::new(port.clone(), port.clone()),
            transactions: TransactionService::new(port),
        }
    }

    pub async fn exists_by_account_id(
        &self,
        headers: &AuthHeaders,
        account_id: &str,
    ) -> DomainResult<bool> {
        self.accounts.exists_by_account_id(headers, account_id).await
    }

    pub async fn validate_charge(
        &self,
        headers: &AuthHeaders,
        request: &ChargeRequest,
    ) -> DomainResult<()> {
        self.charges.validate(headers, request).await
    }

    pub async fn create_charge(
        &self,
        headers: &AuthHeaders,
        request: &ChargeRequest,
    ) -> DomainResult<ChargeResponse> {
        self.charges.create(headers, request).await
    }

    pub async fn retrieve_by_transaction_id(
        &self,
        headers: &AuthHeaders,
        transaction_id: &str,
    ) -> DomainResult<TransactionResponse> {
        self.transactions
            .retrieve_by_transaction_id(headers, transaction_id)
            .await
    }

    pub fn accounts(&self) -> &AccountService<P> {
        &self.accounts
    }

    pub fn charges(&self) -> &ChargeService<P, P> {
        &self.charges
    }

    pub fn transactions(&self) -> &TransactionService<P> {
        &self.transactions
    }
}
