use std::collections::BTreeMap;

use log::{debug, warn};
use percent_encoding::percent_decode_str;

use crate::types::QueryValue;

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

const SAFE_METHODS: [&str; 4] = ["GET", "HEAD", "OPTIONS", "TRACE"];

/// Percent-decodes a URI component. `+` is left alone, and text with a broken
/// escape is returned as written.
pub fn decode_component(text: &str) -> String {
    match percent_decode_str(text).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            debug!("keeping undecodable component {:?}: {}", text, err);
            text.to_string()
        }
    }
}

pub fn parse_query_string(query: &str) -> BTreeMap<String, QueryValue> {
    let mut params: BTreeMap<String, QueryValue> = BTreeMap::new();
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
        let value = decode_component(raw);
        match params.remove(key) {
            None => {
                params.insert(key.to_string(), QueryValue::Single(value));
            }
            Some(QueryValue::Single(first)) => {
                params.insert(key.to_string(), QueryValue::Multiple(vec![first, value]));
            }
            Some(QueryValue::Multiple(mut values)) => {
                values.push(value);
                params.insert(key.to_string(), QueryValue::Multiple(values));
            }
        }
    }
    params
}

pub fn get_cookie(cookie_header: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
        .map(decode_component)
}

pub fn is_csrf_safe_method(method: &str) -> bool {
    SAFE_METHODS.contains(&method)
}

pub fn add_csrf_header<R, W>(
    method: &str,
    cross_domain: bool,
    read_cookie: R,
    mut write_header: W,
) -> bool
where
    R: FnOnce(&str) -> Option<String>,
    W: FnMut(&str, &str),
{
    if is_csrf_safe_method(method) || cross_domain {
        return false;
    }
    match read_cookie(CSRF_COOKIE) {
        Some(token) => {
            write_header(CSRF_HEADER, &token);
            true
        }
        None => {
            warn!("{} request without a {} cookie", method, CSRF_COOKIE);
            false
        }
    }
}
