//! Configuration Module
//!
//! Handles application configuration loading.

mod app_config;

pub use app_config::AppConfig;
