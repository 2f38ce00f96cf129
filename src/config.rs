// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL prepended to image names when building image links.
    pub image_base_url: String,
    pub rust_log: String,
    /// Directory the rolling log files are written to.
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let image_base_url =
            env::var("IMAGE_BASE_URL").unwrap_or_else(|_| "/assets/images/".to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        Self {
            image_base_url,
            rust_log,
            log_dir,
        }
    }
}
