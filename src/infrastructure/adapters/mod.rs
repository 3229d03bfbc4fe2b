pub mod pushin_pay_adapter;

pub use pushin_pay_adapter::PushinPayAdapter;
