pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod ui;

pub use error::{AppError, Result};
