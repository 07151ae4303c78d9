pub mod config;
pub mod controllers;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod server;
pub mod services;
pub mod views;

pub use config::WebConfig;
pub use server::AppState;
