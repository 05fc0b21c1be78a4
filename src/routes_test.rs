use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use leptos::prelude::LeptosOptions;
use tower::ServiceExt;

use super::*;

/// Assets directory under the system temp dir, removed on drop.
struct AssetsFixture(PathBuf);

impl AssetsFixture {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("portfolio-routes-{name}-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("images")).unwrap();
        std::fs::write(dir.join("images").join("card.txt"), "card image").unwrap();
        Self(dir)
    }

    fn config(&self) -> SiteConfig {
        SiteConfig { bind_addr: crate::config::DEFAULT_BIND_ADDR, port: 0, assets_dir: self.0.clone() }
    }
}

impl Drop for AssetsFixture {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

async fn get_path(app: Router, path: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, body)
}

async fn get_page(assets: &AssetsFixture) -> (StatusCode, String) {
    let options = LeptosOptions::builder().output_name("portfolio").build();
    let (status, body) = get_path(app(&assets.config(), options), "/").await;
    (status, String::from_utf8(body).unwrap())
}

// =============================================================================
// static_routes
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let assets = AssetsFixture::new("healthz");
    let (status, _) = get_path(static_routes(&assets.config()), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn serves_project_images_from_assets_dir() {
    let assets = AssetsFixture::new("images");
    let (status, body) = get_path(static_routes(&assets.config()), "/images/card.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"card image");
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let assets = AssetsFixture::new("missing");
    let (status, _) = get_path(static_routes(&assets.config()), "/images/nope.webp").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn fixture_directory_is_removed_on_drop() {
    let assets = AssetsFixture::new("cleanup");
    let dir = assets.0.clone();
    assert!(dir.exists());
    drop(assets);
    assert!(!dir.exists());
}

// =============================================================================
// app: server-rendered page
// =============================================================================

#[tokio::test]
async fn home_page_renders_page_elements() {
    let assets = AssetsFixture::new("page");
    let (status, html) = get_page(&assets).await;

    assert_eq!(status, StatusCode::OK);
    for needle in [
        r#"id="theme-toggle""#,
        r#"class="projects-container""#,
        r#"id="contact-form""#,
        r#"id="form-status""#,
        r#"type="submit""#,
    ] {
        assert!(html.contains(needle), "missing {needle}");
    }
}

#[tokio::test]
async fn home_page_renders_one_card_per_project() {
    let assets = AssetsFixture::new("cards");
    let (_, html) = get_page(&assets).await;

    assert_eq!(html.matches(r#"class="project-card""#).count(), 3);
    assert!(html.contains("<h2>AI Financial Assistant</h2>"));
}

#[tokio::test]
async fn home_page_head_applies_stored_theme_before_paint() {
    let assets = AssetsFixture::new("theme");
    let (_, html) = get_page(&assets).await;

    let head_end = html.find("</head>").unwrap();
    let script_at = html.find(r#"localStorage.getItem("theme")"#).unwrap();
    assert!(script_at < head_end);
    assert!(html.contains(r#"document.documentElement.setAttribute("data-theme",t)"#));
}
