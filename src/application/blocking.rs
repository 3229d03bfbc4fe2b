//! Blocking Pushin Pay client.
//!
//! Each call runs the matching async operation to completion on a private
//! single-threaded tokio runtime. Do not call these methods from inside an
//! async context; use [`crate::PushinPayClient`] there instead.

use crate::application::client::{PushinPayClient as AsyncClient, PushinPayPort};
use crate::domain::errors::DomainResult;
use crate::domain::{AuthHeaders, ChargeRequest, ChargeResponse, TransactionResponse};
use crate::infrastructure::{PushinPayAdapter, PushinPayConfig};
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

pub struct PushinPayClient<P: PushinPayPort = PushinPayAdapter> {
    inner: AsyncClient<P>,
    runtime: Runtime,
}

impl PushinPayClient<PushinPayAdapter> {
    pub fn new(config: PushinPayConfig) -> DomainResult<Self> {
        let adapter = PushinPayAdapter::new(Arc::new(config))?;
        Self::with_port(Arc::new(adapter))
    }

    pub fn from_env() -> DomainResult<Self> {
        Self::new(PushinPayConfig::from_env()?)
    }
}

impl<P: PushinPayPort> PushinPayClient<P> {
    pub fn with_port(port: Arc<P>) -> DomainResult<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            inner: AsyncClient::with_port(port),
            runtime,
        })
    }

    pub fn exists_by_account_id(&self, headers: &AuthHeaders, account_id: &str) -> DomainResult<bool> {
        self.runtime
            .block_on(self.inner.exists_by_account_id(headers, account_id))
    }

    pub fn validate_charge(&self, headers: &AuthHeaders, request: &ChargeRequest) -> DomainResult<()> {
        self.runtime
            .block_on(self.inner.validate_charge(headers, request))
    }

    pub fn create_charge(
        &self,
        headers: &AuthHeaders,
        request: &ChargeRequest,
    ) -> DomainResult<ChargeResponse> {
        self.runtime
            .block_on(self.inner.create_charge(headers, request))
    }

    pub fn retrieve_by_transaction_id(
        &self,
        headers: &AuthHeaders,
        transaction_id: &str,
    ) -> DomainResult<TransactionResponse> {
        self.runtime
            .block_on(self.inner.retrieve_by_transaction_id(headers, transaction_id))
    }
}
