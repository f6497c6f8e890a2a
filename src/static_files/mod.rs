//! Lookup of site files on disk.

pub mod cache;
pub mod mime;

pub use cache::{AssetRoot, CachePolicy, etag_matches, generate_etag};

use std::path::{Component, Path, PathBuf};
use tokio::fs;

const INDEX_FILE: &str = "index.html";

#[derive(Debug)]
pub struct SiteFile {
    pub content: Vec<u8>,
    pub content_type: &'static str,
    pub cache_policy: CachePolicy,
}

impl SiteFile {
    fn from_disk(path: &Path, content: Vec<u8>, root: AssetRoot) -> Self {
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        let extension = path.extension().and_then(|e| e.to_str());
        Self {
            content,
            content_type: mime::content_type(file_name, extension),
            cache_policy: CachePolicy::for_file(file_name, extension, root),
        }
    }
}

/// Maps a decoded request path onto `root`. Directories resolve to their
/// `index.html`; anything that would leave `root` resolves to nothing, and
/// so does any path through a dotfile or dot-directory.
#[tracing::instrument(name = "Looking up site file", skip(root_dir))]
pub async fn load(root_dir: &Path, request_path: &str, root: AssetRoot) -> Option<SiteFile> {
    let relative = Path::new(request_path.trim_start_matches('/'));
    if relative.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        Component::CurDir => false,
        _ => true,
    }) {
        tracing::warn!("Rejected hidden or out-of-root path");
        return None;
    }

    let mut file_path: PathBuf = root_dir.join(relative);
    if fs::metadata(&file_path).await.ok()?.is_dir() {
        file_path.push(INDEX_FILE);
    }

    let Ok(root_canonical) = fs::canonicalize(root_dir).await else {
        tracing::warn!(root = %root_dir.display(), "Site root is missing");
        return None;
    };
    // Missing files are the common case, not worth a log line.
    let file_canonical = fs::canonicalize(&file_path).await.ok()?;
    if !file_canonical.starts_with(&root_canonical) {
        tracing::warn!(
            resolved = %file_canonical.display(),
            "Blocked a symlink leading outside the site root"
        );
        return None;
    }

    match fs::read(&file_canonical).await {
        Ok(content) => Some(SiteFile::from_disk(&file_canonical, content, root)),
        Err(e) => {
            tracing::error!(
                error.message = %e,
                path = %file_canonical.display(),
                "Failed to read site file"
            );
            None
        }
    }
}
