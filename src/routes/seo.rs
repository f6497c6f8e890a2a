use crate::seo::{Page, PageMeta, SeoConfig};
use actix_web::{HttpResponse, get, web};
use std::collections::BTreeMap;

#[get("/api/seo")]
pub async fn all_page_meta(seo: web::Data<SeoConfig>) -> HttpResponse {
    let pages: BTreeMap<&'static str, PageMeta> =
        seo.pages().map(|(page, meta)| (page.key(), meta)).collect();
    HttpResponse::Ok().json(pages)
}

#[get("/api/seo/{page}")]
pub async fn page_meta(page: web::Path<String>, seo: web::Data<SeoConfig>) -> HttpResponse {
    match Page::from_key(&page) {
        Some(page) => HttpResponse::Ok().json(seo.page(page)),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "Unknown page" })),
    }
}
