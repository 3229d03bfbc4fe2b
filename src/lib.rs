//! Client for the Pushin Pay Pix API.
//!
//! Covers account existence checks, Pix charge creation with split rules and
//! transaction retrieval. Charge requests are validated locally before they
//! are sent: amounts must be positive, the webhook URL must parse, every split
//! account must exist and the splits may not add up to more than the charge.
//!
//! [`PushinPayClient`] is the async entry point; [`blocking::PushinPayClient`]
//! offers the same operations for synchronous callers. Both forward the
//! caller's [`AuthHeaders`] verbatim on every request.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::blocking;
pub use application::{
    AccountService, ChargeService, ChargeValidator, PushinPayClient, PushinPayPort,
    TransactionService,
};
pub use domain::*;
pub use infrastructure::{PushinPayAdapter, PushinPayConfig};
