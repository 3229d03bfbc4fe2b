pub mod adapters;
pub mod config;

pub use adapters::PushinPayAdapter;
pub use config::PushinPayConfig;
