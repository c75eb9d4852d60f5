pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod state;
pub mod views;
