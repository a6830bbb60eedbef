//! End-to-end behaviour of the locale gate.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use locale_gate::http::GeoCountry;
use locale_gate::HttpServer;
use tower::ServiceExt;

mod common;

fn router(locales: &[&str]) -> axum::Router {
    // Redirect paths never reach the upstream.
    let config = common::config(locales, "127.0.0.1:9".parse().unwrap());
    HttpServer::new(&config).unwrap().router()
}

fn get(uri: &str, headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder().uri(uri).header(header::HOST, "shop.test");
    for (k, v) in headers {
        builder = builder.header(*k, *v);
    }
    builder.body(Body::empty()).unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

fn set_cookies(response: &axum::response::Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_bypasses_gate() {
    let response = router(&["en", "de"]).oneshot(get("/health", &[])).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"Server is running\n");
}

#[tokio::test]
async fn test_accept_language_redirect_sets_cookie() {
    let response = router(&["en", "de", "fr"])
        .oneshot(get("/shop", &[("accept-language", "fr;q=0.9, en;q=0.8")]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "http://shop.test/fr/shop");
    assert_eq!(set_cookies(&response), vec!["NEXT_LOCALE=fr; Max-Age=31536000; Path=/"]);
}

#[tokio::test]
async fn test_country_beats_accept_language() {
    let response = router(&["en", "de"])
        .oneshot(get(
            "/products?id=7",
            &[("accept-language", "en-US,en;q=0.9"), ("x-vercel-ip-country", "AT")],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "http://shop.test/de/products?id=7");
    assert_eq!(set_cookies(&response), vec!["NEXT_LOCALE=de; Max-Age=31536000; Path=/"]);
}

#[tokio::test]
async fn test_platform_geo_extension() {
    let mut request = get("/", &[("cf-ipcountry", "US")]);
    request.extensions_mut().insert(GeoCountry("DE".into()));

    let response = router(&["en", "de"]).oneshot(request).await.unwrap();
    assert_eq!(location(&response), "http://shop.test/de/");
}

#[tokio::test]
async fn test_unservable_country_falls_back_to_default() {
    let response = router(&["en"])
        .oneshot(get("/deals", &[("cf-ipcountry", "BR"), ("accept-language", "pt-BR")]))
        .await
        .unwrap();

    assert_eq!(location(&response), "http://shop.test/en/deals");
}

#[tokio::test]
async fn test_garbage_quality_falls_through_to_default() {
    let response = router(&["en", "de"])
        .oneshot(get("/", &[("accept-language", "xx-YY;q=notanumber")]))
        .await
        .unwrap();

    assert_eq!(location(&response), "http://shop.test/en/");
}

#[tokio::test]
async fn test_cookie_passes_through_without_new_cookie() {
    let upstream = common::start_echo_backend().await;
    let (gate, _shutdown) = common::start_gate(common::config(&["en", "de"], upstream)).await;

    let response = common::client()
        .get(format!("http://{}/anything", gate))
        .header("cookie", "NEXT_LOCALE=de")
        .header("accept-language", "en")
        .header("cf-ipcountry", "US")
        .send()
        .await
        .expect("gate unreachable");

    assert_eq!(response.status(), 200);
    assert!(response.headers().get("set-cookie").is_none());
    assert_eq!(response.text().await.unwrap(), "upstream saw /anything");
}

#[tokio::test]
async fn test_locale_prefixed_path_passes_through() {
    let upstream = common::start_echo_backend().await;
    let (gate, _shutdown) = common::start_gate(common::config(&["en", "de"], upstream)).await;

    let response = common::client()
        .get(format!("http://{}/de/shop?page=2", gate))
        .header("cf-ipcountry", "FR")
        .send()
        .await
        .expect("gate unreachable");

    assert_eq!(response.status(), 200);
    assert!(response.headers().get("set-cookie").is_none());
    assert_eq!(response.text().await.unwrap(), "upstream saw /de/shop?page=2");
}

#[tokio::test]
async fn test_excluded_prefixes_pass_through() {
    let upstream = common::start_echo_backend().await;
    let (gate, _shutdown) = common::start_gate(common::config(&["en", "de"], upstream)).await;
    let client = common::client();

    for path in ["/api/cart", "/_next/static/app.js", "/images/logo.png"] {
        let response = client
            .get(format!("http://{}{}", gate, path))
            .send()
            .await
            .expect("gate unreachable");
        assert_eq!(response.status(), 200, "{path}");
        assert_eq!(response.text().await.unwrap(), format!("upstream saw {}", path));
    }
}

#[tokio::test]
async fn test_live_redirect_uses_request_host() {
    let upstream = common::start_echo_backend().await;
    let (gate, _shutdown) = common::start_gate(common::config(&["en", "de", "fr"], upstream)).await;

    let response = common::client()
        .get(format!("http://{}/shop", gate))
        .header("accept-language", "fr;q=0.9, en;q=0.8")
        .send()
        .await
        .expect("gate unreachable");

    assert_eq!(response.status(), 307);
    assert_eq!(
        response.headers()["location"].to_str().unwrap(),
        format!("http://{}/fr/shop", gate)
    );
    assert_eq!(
        response.headers()["set-cookie"].to_str().unwrap(),
        "NEXT_LOCALE=fr; Max-Age=31536000; Path=/"
    );
}

#[tokio::test]
async fn test_unreachable_upstream_is_bad_gateway() {
    let response = router(&["en"])
        .oneshot(get("/en/shop", &[]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
