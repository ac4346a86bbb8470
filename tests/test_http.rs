use portal_utils::http::*;
use portal_utils::types::QueryValue;

// ── Query strings ──

#[test]
fn test_parse_query_single_values() {
    let q = parse_query_string("?state=PENDING&limit=20");
    assert_eq!(q.len(), 2);
    assert_eq!(q["state"], QueryValue::Single("PENDING".into()));
    assert_eq!(q["limit"].first(), "20");
}

#[test]
fn test_parse_query_repeated_keys_accumulate() {
    let q = parse_query_string("a=1&b=2&a=3&a=4");
    assert_eq!(q["a"], QueryValue::Multiple(vec!["1".into(), "3".into(), "4".into()]));
    assert_eq!(q["b"], QueryValue::Single("2".into()));
    assert_eq!(q["a"].to_vec().len(), 3);
}

#[test]
fn test_parse_query_two_values() {
    let q = parse_query_string("site=lsc&site=ogg");
    assert_eq!(q["site"], QueryValue::Multiple(vec!["lsc".into(), "ogg".into()]));
}

#[test]
fn test_parse_query_decoding() {
    let q = parse_query_string("title=hello%20world&plus=a+b&eq=b=c");
    assert_eq!(q["title"].first(), "hello world");
    assert_eq!(q["plus"].first(), "a+b");
    assert_eq!(q["eq"].first(), "b=c");
}

#[test]
fn test_parse_query_degenerate_input() {
    assert!(parse_query_string("").is_empty());
    assert!(parse_query_string("?").is_empty());
    let q = parse_query_string("flag&&x=%ZZ");
    assert_eq!(q["flag"].first(), "");
    assert_eq!(q["x"].first(), "%ZZ");
}

#[test]
fn test_decode_component_utf8() {
    assert_eq!(decode_component("caf%C3%A9"), "café");
    assert_eq!(decode_component("%C3"), "%C3");
    assert_eq!(decode_component("50%"), "50%");
}

// ── Cookies ──

#[test]
fn test_get_cookie() {
    let header = "sessionid=abc; csrftoken=tok%3D1; other=2";
    assert_eq!(get_cookie(header, "csrftoken").as_deref(), Some("tok=1"));
    assert_eq!(get_cookie(header, "sessionid").as_deref(), Some("abc"));
    assert_eq!(get_cookie(header, "other").as_deref(), Some("2"));
}

#[test]
fn test_get_cookie_missing() {
    assert_eq!(get_cookie("csrftokenx=1; a=2", "csrftoken"), None);
    assert_eq!(get_cookie("", "csrftoken"), None);
    assert_eq!(get_cookie("a=1", ""), None);
}

#[test]
fn test_get_cookie_first_match_wins() {
    assert_eq!(get_cookie("a=1;a=2", "a").as_deref(), Some("1"));
}

// ── CSRF ──

#[test]
fn test_csrf_safe_methods() {
    for m in ["GET", "HEAD", "OPTIONS", "TRACE"] {
        assert!(is_csrf_safe_method(m), "{}", m);
    }
    for m in ["POST", "PUT", "PATCH", "DELETE", "get", ""] {
        assert!(!is_csrf_safe_method(m), "{}", m);
    }
}

fn run_csrf(method: &str, cross_domain: bool, cookie: Option<&str>) -> (bool, Vec<(String, String)>) {
    let mut headers = Vec::new();
    let written = add_csrf_header(
        method,
        cross_domain,
        |name| get_cookie(&cookie.map(|c| format!("{}={}", name, c)).unwrap_or_default(), name),
        |name, value| headers.push((name.to_string(), value.to_string())),
    );
    (written, headers)
}

#[test]
fn test_csrf_header_written_for_unsafe_same_origin() {
    let (written, headers) = run_csrf("POST", false, Some("secret"));
    assert!(written);
    assert_eq!(headers, vec![(CSRF_HEADER.to_string(), "secret".to_string())]);
}

#[test]
fn test_csrf_header_skipped_for_safe_method() {
    let (written, headers) = run_csrf("GET", false, Some("secret"));
    assert!(!written);
    assert!(headers.is_empty());
}

#[test]
fn test_csrf_header_skipped_cross_domain() {
    let (written, headers) = run_csrf("DELETE", true, Some("secret"));
    assert!(!written);
    assert!(headers.is_empty());
}

#[test]
fn test_csrf_header_skipped_without_cookie() {
    let (written, headers) = run_csrf("POST", false, None);
    assert!(!written);
    assert!(headers.is_empty());
}
