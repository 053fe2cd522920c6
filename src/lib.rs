pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod types;

pub use config::Config;
pub use database::DbPool;
