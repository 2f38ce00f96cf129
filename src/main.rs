// src/main.rs

use dotenvy::dotenv;
use std::env;
use std::fs;
use survey_view::config::Config;
use survey_view::error::ViewError;
use survey_view::logging::LogRoutes;
use survey_view::models::field::FieldRecord;
use survey_view::models::options::{CodeOptions, LabelOptions};
use survey_view::render::text::{field_code, field_label};

/// Export preview: print `code<TAB>label` for every record of a field map.
fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    // Output is plain text, so the HTML log route stays off.
    let mut routes = LogRoutes::default();
    routes.disable_html();
    let _guards = routes.init(&config);

    let path = env::args()
        .nth(1)
        .expect("usage: survey-view <fieldmap.json>");

    let fields = load_field_map(&path).expect("Failed to load field map");

    tracing::info!("Loaded {} field records from {}", fields.len(), path);

    // Exports usually want shortened labels; opt in via EXPORT_ABBREVIATE.
    let abbreviate = env::var("EXPORT_ABBREVIATE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok());
    let label_opts = LabelOptions {
        abbreviate,
        ..LabelOptions::default()
    };
    let code_opts = CodeOptions::default();

    for field in &fields {
        let code = field_code(field, &code_opts);
        let label = field_label(field, &label_opts);
        println!("{}\t{}", code, label.trim_end());
    }
}

/// A field map file is a JSON array of records, one per form field.
fn load_field_map(path: &str) -> Result<Vec<FieldRecord>, ViewError> {
    let raw = fs::read_to_string(path)?;
    let fields = serde_json::from_str(&raw)?;
    Ok(fields)
}
