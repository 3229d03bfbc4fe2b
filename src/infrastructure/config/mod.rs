pub mod pushin_pay_config;

pub use pushin_pay_config::{PushinPayConfig, DEFAULT_BASE_URL};
