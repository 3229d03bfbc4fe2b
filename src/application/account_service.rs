use crate::domain::errors::DomainResult;
use crate::domain::AuthHeaders;
use crate::ports::AccountLookupPort;
use std::sync::Arc;
use tracing::info;

/// Account lookups
pub struct AccountService<A: AccountLookupPort> {
    accounts: Arc<A>,
}

impl<A: AccountLookupPort> AccountService<A> {
    pub fn new(accounts: Arc<A>) -> Self {
        Self { accounts }
    }

    /// Whether the account exists. A not-found answer is `Ok(false)`; any
    /// other failure is returned as an error.
    pub async fn exists_by_account_id(
        &self,
        headers: &AuthHeaders,
        account_id: &str,
    ) -> DomainResult<bool> {
        info!("Checking account: {}", account_id);

        let exists = self.accounts.exists_by_account_id(headers, account_id).await?;

        info!("Account {} exists: {}", account_id, exists);
        Ok(exists)
    }
}
