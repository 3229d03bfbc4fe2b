use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::{AuthHeaders, TransactionResponse};
use crate::ports::TransactionGatewayPort;
use std::sync::Arc;
use tracing::info;

/// Transaction retrieval
pub struct TransactionService<T: TransactionGatewayPort> {
    gateway: Arc<T>,
}

impl<T: TransactionGatewayPort> TransactionService<T> {
    pub fn new(gateway: Arc<T>) -> Self {
        Self { gateway }
    }

    pub async fn retrieve_by_transaction_id(
        &self,
        headers: &AuthHeaders,
        transaction_id: &str,
    ) -> DomainResult<TransactionResponse> {
        if transaction_id.trim().is_empty() {
            return Err(DomainError::InvalidArgument(
                "transaction_id must not be blank".to_string(),
            ));
        }

        info!("Retrieving transaction: {}", transaction_id);
        let transaction = self
            .gateway
            .retrieve_transaction(headers, transaction_id)
            .await?;

        info!(
            "Transaction {} retrieved ({:?})",
            transaction.id, transaction.status
        );
        Ok(transaction)
    }
}
