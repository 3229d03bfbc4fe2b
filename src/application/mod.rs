pub mod account_service;
pub mod blocking;
pub mod charge_service;
pub mod charge_validator;
pub mod client;
pub mod transaction_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use account_service::AccountService;
pub use charge_service::ChargeService;
pub use charge_validator::ChargeValidator;
pub use client::{PushinPayClient, PushinPayPort};
pub use transaction_service::TransactionService;
