pub mod app;
pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod web;

pub use app::{build_router, run, StartupError};
pub use config::Config;
