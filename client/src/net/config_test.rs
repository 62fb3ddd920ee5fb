use super::*;

#[test]
fn http_maps_to_ws() {
    let url = ws_url("http://localhost:3000", "room-1").expect("valid base");
    assert_eq!(url, "ws://localhost:3000/ws/room-1");
}

#[test]
fn https_maps_to_wss() {
    let url = ws_url("https://sketchroom.example", "abc").expect("valid base");
    assert_eq!(url, "wss://sketchroom.example/ws/abc");
}

#[test]
fn ws_scheme_passes_through() {
    let url = ws_url("ws://127.0.0.1:9000", "r").expect("valid base");
    assert_eq!(url, "ws://127.0.0.1:9000/ws/r");

    let url = ws_url("wss://sketchroom.example", "r").expect("valid base");
    assert_eq!(url, "wss://sketchroom.example/ws/r");
}

#[test]
fn trailing_slash_tolerated() {
    let url = ws_url("http://localhost:3000/", "room-1").expect("valid base");
    assert_eq!(url, "ws://localhost:3000/ws/room-1");
}

#[test]
fn unknown_scheme_rejected() {
    let err = ws_url("ftp://nope", "room-1").expect_err("ftp is not a socket scheme");
    assert_eq!(err, ConfigError::InvalidBaseUrl("ftp://nope".to_owned()));
}

#[test]
fn resolve_falls_back_to_default_natively() {
    // Without a browser there is no storage or location to consult.
    assert_eq!(resolve_base_url(), DEFAULT_BASE_URL);
}
