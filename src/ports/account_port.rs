use crate::domain::errors::DomainResult;
use crate::domain::AuthHeaders;
use async_trait::async_trait;

/// Account existence lookup port
#[async_trait]
pub trait AccountLookupPort: Send + Sync {
    /// `Ok(true)` when the account exists, `Ok(false)` when the provider
    /// reports it as not found. Every other outcome is an error.
    async fn exists_by_account_id(
        &self,
        headers: &AuthHeaders,
        account_id: &str,
    ) -> DomainResult<bool>;
}
