use crate::domain::errors::DomainResult;
use crate::domain::{AuthHeaders, TransactionResponse};
use async_trait::async_trait;

/// Transaction lookup port
#[async_trait]
pub trait TransactionGatewayPort: Send + Sync {
    async fn retrieve_transaction(
        &self,
        headers: &AuthHeaders,
        transaction_id: &str,
    ) -> DomainResult<TransactionResponse>;
}
