pub mod app;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod form;
pub mod models;
pub mod relay;
pub mod sheets;
