use log::debug;
use serde_json::Value;

use crate::tables::{self, COLOR_PALETTE, FIELDS, OBSERVATORIES, SITES, TELESCOPES};
use crate::types::{FieldMetadata, SiteMetadata};

pub const VALUE_DIGITS: usize = 4;

pub fn field_metadata(key: &str) -> Option<&'static FieldMetadata> {
    FIELDS.iter().find(|f| f.key == key)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_field(key: &str) -> String {
    match field_metadata(key) {
        Some(meta) => meta.human_readable.to_string(),
        None => {
            debug!("no label for field {:?}, deriving one", key);
            key.split('_').map(capitalize).collect::<Vec<_>>().join(" ")
        }
    }
}

pub fn get_field_description(key: &str) -> &'static str {
    field_metadata(key).map(|f| f.description).unwrap_or("")
}

fn is_displayed(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Objects collapse to `key: value, key: value` (null, false and empty
/// strings dropped, zero kept), fractional numbers get four decimals, and
/// everything else comes back as is.
pub fn format_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .filter(|(_, v)| is_displayed(v))
                .map(|(k, v)| format!("{}: {}", k, display_value(v)))
                .collect();
            Value::String(parts.join(", "))
        }
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.is_finite() && f.fract() != 0.0 => {
                Value::String(format!("{:.*}", VALUE_DIGITS, f))
            }
            _ => value.clone(),
        },
        _ => value.clone(),
    }
}

pub fn display_value(value: &Value) -> String {
    match format_value(value) {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

pub fn extract_top_level_errors(errors: &Value) -> Vec<String> {
    let mut found = Vec::new();
    match errors {
        Value::String(message) => found.push(message.clone()),
        Value::Object(map) => {
            if let Some(Value::Array(items)) = map.get("non_field_errors") {
                found.extend(items.iter().filter_map(Value::as_str).map(str::to_string));
            }
        }
        _ => {}
    }
    found
}

pub fn site_metadata(code: &str) -> Option<&'static SiteMetadata> {
    SITES.iter().find(|s| s.code == code)
}

pub fn site_color(code: &str) -> Option<&'static str> {
    site_metadata(code).and_then(|s| s.color)
}

/// `lsc.doma.1m0a` becomes `Cerro Tololo 1m 1`. Unknown parts are shown as their codes.
pub fn readable_site_name(resource: &str) -> String {
    let mut parts = resource.split('.');
    let site = parts.next().unwrap_or("");
    let observatory = parts.next().unwrap_or("");
    let telescope = parts.next().unwrap_or("");

    let site_name = site_metadata(site).map(|s| s.name).unwrap_or(site);
    let telescope_name = tables::lookup(TELESCOPES, telescope).unwrap_or(telescope);
    let number = tables::lookup(OBSERVATORIES, observatory).unwrap_or(observatory);
    format!("{} {} {}", site_name, telescope_name, number)
}

pub fn palette_color(index: usize) -> &'static str {
    COLOR_PALETTE[index % COLOR_PALETTE.len()]
}
