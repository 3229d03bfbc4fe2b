pub mod account_port;
pub mod charge_gateway_port;
pub mod transaction_port;

pub use account_port::AccountLookupPort;
pub use charge_gateway_port::ChargeGatewayPort;
pub use transaction_port::TransactionGatewayPort;
