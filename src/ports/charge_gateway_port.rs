use crate::domain::errors::DomainResult;
use crate::domain::{AuthHeaders, ChargeRequest, ChargeResponse};
use async_trait::async_trait;

/// Remote charge creation port.
///
/// Implementations send the request as given; validation happens upstream in
/// [`ChargeService`](crate::application::ChargeService).
#[async_trait]
pub trait ChargeGatewayPort: Send + Sync {
    async fn create_charge(
        &self,
        headers: &AuthHeaders,
        request: &ChargeRequest,
    ) -> DomainResult<ChargeResponse>;
}
