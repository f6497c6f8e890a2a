use crate::routes::error_chain_fmt;
use crate::seo::{Page, SeoConfig, render_page_shell};
use crate::static_files::{self, AssetRoot, CachePolicy, etag_matches, generate_etag, mime};
use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use std::path::PathBuf;

/// Where the site lives on disk.
pub struct SiteSettings {
    pub dist_dir: PathBuf,
    pub public_dir: PathBuf,
    pub render_page_meta: bool,
}

#[derive(thiserror::Error)]
pub enum SiteError {
    #[error("Failed to read the SPA shell")]
    MissingShell(#[source] std::io::Error),
}

impl std::fmt::Debug for SiteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SiteError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body("Internal Server Error")
    }
}

#[tracing::instrument(name = "Serving site", skip_all, fields(path = %req.path()))]
pub async fn serve_site(
    req: HttpRequest,
    path: web::Path<String>,
    site: web::Data<SiteSettings>,
    seo: web::Data<SeoConfig>,
) -> Result<HttpResponse, SiteError> {
    let path = path.into_inner();
    let if_none_match = req
        .headers()
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok());

    // Page routes go straight to the shell so `/` gets metadata as well.
    let page = Page::from_route(&path).filter(|_| site.render_page_meta);
    let roots = [
        (&site.dist_dir, AssetRoot::Build),
        (&site.public_dir, AssetRoot::Public),
    ];
    for (dir, root) in roots.into_iter().filter(|_| page.is_none()) {
        if let Some(file) = static_files::load(dir, &path, root).await {
            return Ok(file_response(
                file.content,
                file.content_type,
                file.cache_policy,
                if_none_match,
            ));
        }
    }

    let generated = match path.trim_matches('/') {
        "sitemap.xml" => Some((seo.sitemap_xml(), mime::content_type("sitemap.xml", Some("xml")))),
        "robots.txt" => Some((seo.robots_txt(), mime::content_type("robots.txt", Some("txt")))),
        _ => None,
    };
    if let Some((document, content_type)) = generated {
        return Ok(file_response(
            document.into_bytes(),
            content_type,
            CachePolicy::SITE_METADATA,
            if_none_match,
        ));
    }

    let shell = tokio::fs::read_to_string(site.dist_dir.join("index.html"))
        .await
        .map_err(|e| {
            tracing::error!(error.message = %e, "SPA shell is unavailable");
            SiteError::MissingShell(e)
        })?;
    let shell = match page {
        Some(page) => render_page_shell(&shell, &seo.page(page)),
        None => shell,
    };
    Ok(file_response(
        shell.into_bytes(),
        mime::content_type("index.html", Some("html")),
        CachePolicy::SHELL,
        if_none_match,
    ))
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}

fn file_response(
    content: Vec<u8>,
    content_type: &'static str,
    cache_policy: CachePolicy,
    if_none_match: Option<&str>,
) -> HttpResponse {
    let etag = generate_etag(&content);
    let cache_control = cache_policy.to_header_value();

    if etag_matches(if_none_match, &etag) {
        return HttpResponse::NotModified()
            .insert_header((header::ETAG, etag))
            .insert_header((header::CACHE_CONTROL, cache_control))
            .finish();
    }

    HttpResponse::Ok()
        .content_type(content_type)
        .insert_header((header::ETAG, etag))
        .insert_header((header::CACHE_CONTROL, cache_control))
        .body(content)
}
