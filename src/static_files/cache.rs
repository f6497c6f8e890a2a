//! Cache-Control policy and `ETag` handling for site files.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Fingerprinted build output; safe to cache for a year.
const IMMUTABLE_EXTENSIONS: [&str; 12] = [
    "js", "css", "woff", "woff2", "ttf", "eot", "svg", "png", "jpg", "jpeg", "gif", "ico",
];

const ONE_HOUR: u32 = 3600;
const ONE_DAY: u32 = 86_400;
const ONE_YEAR: u32 = 31_536_000;

/// Directory a file was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetRoot {
    /// Front-end build output.
    Build,
    /// Hand-maintained public files.
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    Public(u32),
    Immutable(u32),
}

impl CachePolicy {
    /// Policy for the SPA shell served on unknown routes.
    pub const SHELL: CachePolicy = CachePolicy::Public(ONE_HOUR);
    /// Policy for generated sitemap/robots documents.
    pub const SITE_METADATA: CachePolicy = CachePolicy::Public(ONE_DAY);

    /// First matching rule wins: site metadata documents, then
    /// fingerprinted assets, then a per-root default.
    pub fn for_file(file_name: &str, extension: Option<&str>, root: AssetRoot) -> Self {
        let extension = extension.map(str::to_ascii_lowercase);
        let extension = extension.as_deref();

        // Only the crawler file itself; `notes-robots.txt` is an ordinary file.
        if matches!(extension, Some("xml" | "webmanifest")) || file_name == "robots.txt" {
            return Self::SITE_METADATA;
        }
        if extension.is_some_and(|e| IMMUTABLE_EXTENSIONS.contains(&e)) {
            return Self::Immutable(ONE_YEAR);
        }
        match root {
            AssetRoot::Build => Self::Public(ONE_HOUR),
            AssetRoot::Public => Self::Public(0),
        }
    }

    pub fn to_header_value(self) -> String {
        match self {
            Self::Public(max_age) => format!("public, max-age={max_age}"),
            Self::Immutable(max_age) => format!("public, immutable, max-age={max_age}"),
        }
    }
}

/// Weak content hash, e.g. `W/"9f3c2a..."`.
///
/// The hash covers the uncompressed bytes while `Compress` may re-encode
/// the body, so the tag only promises semantic equivalence.
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("W/\"{:x}\"", hasher.finish())
}

fn opaque_tag(etag: &str) -> &str {
    etag.strip_prefix("W/").unwrap_or(etag)
}

/// True when `If-None-Match` lists the `ETag` (or `*`), i.e. a 304 is due.
/// Comparison is weak: `W/` prefixes are ignored on both sides.
pub fn etag_matches(if_none_match: Option<&str>, etag: &str) -> bool {
    let etag = opaque_tag(etag);
    if_none_match.is_some_and(|client_etag| {
        client_etag
            .split(',')
            .map(str::trim)
            .any(|e| e == "*" || opaque_tag(e) == etag)
    })
}
