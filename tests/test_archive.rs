use portal_utils::archive::*;
use portal_utils::error::ArchiveError;
use portal_utils::timeline::{needs_update, zoom};
use portal_utils::types::PlotWindow;
use serde_json::json;

// ── Config ──

#[test]
fn test_default_config() {
    let c = ArchiveConfig::default();
    assert_eq!(c.api_root, "https://archive-api.lco.global/");
    assert_eq!(c.ui_root, "https://archive.lco.global/");
    assert_eq!(c.thumbnail_root, "https://thumbnails.lco.global/");
    assert_eq!(c.download_limit, 1000);
}

#[test]
fn test_config_from_partial_toml() {
    let c = ArchiveConfig::from_toml_str("download_limit = 50\napi_root = \"http://localhost/\"").unwrap();
    assert_eq!(c.download_limit, 50);
    assert_eq!(c.api_root, "http://localhost/");
    assert_eq!(c.thumbnail_root, ArchiveConfig::default().thumbnail_root);
}

#[test]
fn test_config_rejects_bad_toml() {
    let err = ArchiveConfig::from_toml_str("download_limit = \"many\"").unwrap_err();
    assert!(matches!(err, ArchiveError::Config(_)));
}

// ── URLs ──

#[test]
fn test_archive_urls() {
    let c = ArchiveConfig::default();
    assert_eq!(
        frames_for_request_url(&c, 42),
        "https://archive-api.lco.global/frames/?limit=1000&REQNUM=42"
    );
    assert_eq!(
        latest_frame_url(&c, 42),
        "https://archive-api.lco.global/frames/?ordering=-id&limit=1&REQNUM=42"
    );
    assert_eq!(thumbnail_url(&c, 7, 75), "https://thumbnails.lco.global/7/?height=75");
    assert_eq!(token_auth_url(&c), "https://archive-api.lco.global/api-token-auth/");
    assert_eq!(zip_download_url(&c), "https://archive-api.lco.global/frames/zip/");
}

#[test]
fn test_token_required_for_archive_hosts_only() {
    let c = ArchiveConfig::default();
    assert!(requires_archive_token("https://archive-api.lco.global/frames/1/", &c));
    assert!(requires_archive_token("https://thumbnails.lco.global/1/?height=75", &c));
    assert!(!requires_archive_token("/api/profile/", &c));
    assert!(!requires_archive_token("https://archive.lco.global/", &c));
}

#[test]
fn test_empty_api_root_does_not_match_everything() {
    let c = ArchiveConfig::from_toml_str("api_root = \"\"\nthumbnail_root = \"\"").unwrap();
    assert!(!requires_archive_token("/api/profile/", &c));
    assert!(!requires_archive_token("https://example.org/", &c));
}

#[test]
fn test_auth_headers() {
    assert_eq!(archive_auth_header("abc"), "Token abc");
    assert_eq!(bearer_auth_header("xyz"), "Bearer xyz");
}

// ── Zip downloads ──

#[test]
fn test_zip_download_form() {
    let form = zip_download_form(&[11, 12], Some("tok"));
    let expected: Vec<(String, String)> = vec![
        ("frame_ids[0]".into(), "11".into()),
        ("frame_ids[1]".into(), "12".into()),
        ("auth_token".into(), "tok".into()),
    ];
    assert_eq!(form, expected);
    assert_eq!(zip_download_form(&[], None), vec![("auth_token".to_string(), String::new())]);
}

#[test]
fn test_frame_ids_from_listing() {
    let page: FramePage = serde_json::from_value(json!({
        "count": 2,
        "results": [
            {"id": 5, "filename": "a.fits.fz"},
            {"id": 9, "filename": "b.fits.fz", "extra": true}
        ]
    }))
    .unwrap();
    assert_eq!(page.results[1].filename, "b.fits.fz");
    assert_eq!(frame_ids_for_download(&page, &ArchiveConfig::default()).unwrap(), vec![5, 9]);
}

#[test]
fn test_frame_ids_over_limit() {
    let page = FramePage { count: 1500, results: Vec::new() };
    match frame_ids_for_download(&page, &ArchiveConfig::default()) {
        Err(ArchiveError::TooManyProducts { count, limit }) => {
            assert_eq!((count, limit), (1500, 1000));
        }
        other => panic!("expected TooManyProducts, got {:?}", other),
    }
}

// ── Plot windows ──

#[test]
fn test_zoom_out_and_in() {
    let w = PlotWindow { start: 0.0, end: 100.0 };
    assert_eq!(zoom(w, 0.5), PlotWindow { start: -50.0, end: 150.0 });
    assert_eq!(zoom(w, -0.25), PlotWindow { start: 25.0, end: 75.0 });
    assert_eq!(zoom(w, 0.0), w);
}

#[test]
fn test_needs_update() {
    let w = PlotWindow { start: 0.0, end: 100.0 };
    assert!(!needs_update(w, w));
    assert!(needs_update(w, PlotWindow { start: 0.0, end: 90.0 }));
}
