pub mod charge;
pub mod errors;
pub mod pix_datetime;
pub mod transaction;
pub mod value_objects;

pub use charge::{
    ChargeRequest, ChargeResponse, SplitRuleRequest, SplitRuleResponse, WebhookResponse,
};
pub use errors::{DomainError, DomainResult};
pub use transaction::{PixDetailsResponse, TransactionProductResponse, TransactionResponse};
pub use value_objects::{AuthHeaders, ChargeStatus, TransactionStatus, UnknownStatus};
