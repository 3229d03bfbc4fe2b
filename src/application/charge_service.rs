use crate::application::charge_validator::ChargeValidator;
use crate::domain::errors::DomainResult;
use crate::domain::{AuthHeaders, ChargeRequest, ChargeResponse};
use crate::ports::{AccountLookupPort, ChargeGatewayPort};
use std::sync::Arc;
use tracing::{debug, info};

/// Charge creation
pub struct ChargeService<A: AccountLookupPort, G: ChargeGatewayPort> {
    validator: ChargeValidator<A>,
    gateway: Arc<G>,
}

impl<A: AccountLookupPort, G: ChargeGatewayPort> ChargeService<A, G> {
    pub fn new(accounts: Arc<A>, gateway: Arc<G>) -> Self {
        Self {
            validator: ChargeValidator::new(accounts),
            gateway,
        }
    }

    /// Validates the request and, only if it passes, creates the charge.
    pub async fn create(
        &self,
        headers: &AuthHeaders,
        request: &ChargeRequest,
    ) -> DomainResult<ChargeResponse> {
        info!(
            "Creating Pix charge: value={:?}, split_rules={}",
            request.value,
            request.split_rules().len()
        );

        // 1. Client-side validation, may look up split accounts
        if let Err(e) = self.validator.validate(headers, request).await {
            debug!("Charge request rejected: {}", e);
            return Err(e);
        }

        // 2. Remote creation
        let response = self.gateway.create_charge(headers, request).await?;

        info!("Charge created: {} ({:?})", response.id, response.status);
        Ok(response)
    }

    /// Runs the validation step alone, without creating anything
    pub async fn validate(&self, headers: &AuthHeaders, request: &ChargeRequest) -> DomainResult<()> {
        self.validator.validate(headers, request).await
    }
}
