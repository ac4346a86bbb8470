use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ArchiveError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    pub api_root: String,
    pub ui_root: String,
    pub thumbnail_root: String,
    pub download_limit: u64,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            api_root: "https://archive-api.lco.global/".to_string(),
            ui_root: "https://archive.lco.global/".to_string(),
            thumbnail_root: "https://thumbnails.lco.global/".to_string(),
            download_limit: 1000,
        }
    }
}

impl ArchiveConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ArchiveError> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub id: u64,
    #[serde(default)]
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramePage {
    pub count: u64,
    #[serde(default)]
    pub results: Vec<Frame>,
}

pub fn frames_for_request_url(config: &ArchiveConfig, request_id: u64) -> String {
    format!(
        "{}frames/?limit={}&REQNUM={}",
        config.api_root, config.download_limit, request_id
    )
}

pub fn latest_frame_url(config: &ArchiveConfig, request_id: u64) -> String {
    format!("{}frames/?ordering=-id&limit=1&REQNUM={}", config.api_root, request_id)
}

pub fn thumbnail_url(config: &ArchiveConfig, frame_id: u64, height: u32) -> String {
    format!("{}{}/?height={}", config.thumbnail_root, frame_id, height)
}

pub fn token_auth_url(config: &ArchiveConfig) -> String {
    format!("{}api-token-auth/", config.api_root)
}

pub fn zip_download_url(config: &ArchiveConfig) -> String {
    format!("{}frames/zip/", config.api_root)
}

/// Form fields for a zip download POST: `frame_ids[i]` for each frame, then the token.
pub fn zip_download_form(frame_ids: &[u64], auth_token: Option<&str>) -> Vec<(String, String)> {
    let mut form: Vec<(String, String)> = frame_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (format!("frame_ids[{}]", i), id.to_string()))
        .collect();
    form.push(("auth_token".to_string(), auth_token.unwrap_or_default().to_string()));
    form
}

pub fn frame_ids_for_download(
    page: &FramePage,
    config: &ArchiveConfig,
) -> Result<Vec<u64>, ArchiveError> {
    if page.count > config.download_limit {
        warn!(
            "refusing zip download of {} products (limit {})",
            page.count, config.download_limit
        );
        return Err(ArchiveError::TooManyProducts {
            count: page.count,
            limit: config.download_limit,
        });
    }
    Ok(page.results.iter().map(|f| f.id).collect())
}

pub fn requires_archive_token(url: &str, config: &ArchiveConfig) -> bool {
    let thumbnail_host = config
        .thumbnail_root
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let api_match = !config.api_root.is_empty() && url.contains(&config.api_root);
    api_match || (!thumbnail_host.is_empty() && url.contains(thumbnail_host))
}

pub fn archive_auth_header(token: &str) -> String {
    format!("Token {}", token)
}

pub fn bearer_auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
