pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod flash;
pub mod models;
pub mod services;
pub mod state;
pub mod uploads;
pub mod views;
