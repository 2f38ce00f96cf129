// src/lib.rs

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;
pub mod utils;

// Re-export specific items for convenience if needed
pub use render::link::{ImageLinkOptions, RouteTable, UrlResolver, image_link};
pub use render::text::{field_code, field_label};
pub use utils::html::{filter_script, sanitize_expression_markup, sanitize_html};
