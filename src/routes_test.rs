use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn router() -> Router {
    let root = std::env::temp_dir().join("cheeky-roots-routes-test");
    static_routes(&root, &root.join("assets"))
}

#[tokio::test]
async fn healthz_returns_ok() {
    let resp = router()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let resp = router()
        .oneshot(Request::builder().uri("/assets/missing.png").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn shipped_logo_is_served() {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let router = static_routes(&manifest.join("target/site"), &manifest.join("client/public"));
    let resp = router
        .oneshot(Request::builder().uri(storefront::util::routes::LOGO_PATH).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let resp = router()
        .oneshot(Request::builder().method("POST").uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
