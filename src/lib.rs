pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod shell;
pub mod views;

pub const NAME: &str = "contacts-cli";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
