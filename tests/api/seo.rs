use crate::helpers::{spawn_app, spawn_app_with};

#[tokio::test]
async fn page_metadata_is_served_as_json() {
    let app = spawn_app().await;

    let response = app.get("/api/seo/products").await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["title"], "Integrated Solar Panel Systems | AxiWatt");
    assert_eq!(body["canonicalUrl"], "https://axiwatt.com/products");
    assert_eq!(body["ogUrl"], "https://axiwatt.com/products");
    assert_eq!(body["twitterCard"], "summary_large_image");
}

#[tokio::test]
async fn unknown_page_is_a_404() {
    let app = spawn_app().await;

    let response = app.get("/api/seo/blog").await;

    assert_eq!(404, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Unknown page");
}

#[tokio::test]
async fn all_pages_are_listed_by_key() {
    let app = spawn_app().await;

    let body: serde_json::Value = app.get("/api/seo").await.json().await.unwrap();

    let pages = body.as_object().unwrap();
    assert_eq!(pages.len(), 8);
    for key in [
        "home",
        "about",
        "products",
        "technology",
        "process",
        "partners",
        "privacy",
        "terms",
    ] {
        assert!(pages.contains_key(key), "{} is missing", key);
    }
    assert_eq!(pages["home"]["canonicalUrl"], "https://axiwatt.com");
}

#[tokio::test]
async fn urls_follow_the_configured_origin() {
    let app =
        spawn_app_with(|c| c.application.base_url = "https://staging.axiwatt.com/".into()).await;

    let body: serde_json::Value = app.get("/api/seo/terms").await.json().await.unwrap();

    assert_eq!(body["canonicalUrl"], "https://staging.axiwatt.com/terms");
}
