//! Library entrypoint for bistwatch.
//!
//! This file exists mainly to make controller and monitor tests easy
//! (integration tests under `tests/` can import the app state, routers,
//! controllers, services).

pub mod config;
pub mod models;

pub mod services;

pub mod controllers;
pub mod handlers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub db: mongodb::Database,
    pub settings: config::Settings,
    pub finnhub: services::finnhub::FinnhubClient,
    pub telegram: Option<services::telegram::TelegramClient>,
}
