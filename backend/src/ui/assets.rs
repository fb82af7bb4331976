//! Asset bundle access and path resolution for the single-page app.
//!
//! `AssetBundle` is a read-only file store addressed by absolute logical paths
//! (`/index.html`, `/static/js/main.js`). `SpaAssets` sits in front of a bundle
//! and rewrites request paths: everything is looked up under the mount prefix,
//! except `SHELL_PATH`, which always resolves to the bundle's `/index.html`.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::sync::Arc;
use thiserror::Error;

/// Reserved path that asks for the application shell instead of a file.
pub const SHELL_PATH: &str = "/default";

/// The shell document inside the bundle.
pub const SHELL_DOCUMENT: &str = "/index.html";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),
}

/// A file read from a bundle.
#[derive(Debug, Clone)]
pub struct Asset {
    pub data: Cow<'static, [u8]>,
    pub mime_type: String,
}

/// Read-only hierarchical file store.
pub trait AssetBundle: Send + Sync {
    /// Opens the file at an absolute, already normalised path.
    fn open(&self, path: &str) -> Result<Asset, AssetError>;
}

/// The web client build, compiled into the binary.
#[derive(RustEmbed)]
#[folder = "webassets/"]
struct WebAssets;

/// `AssetBundle` over the embedded web client build.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl AssetBundle for EmbeddedAssets {
    fn open(&self, path: &str) -> Result<Asset, AssetError> {
        let key = path.trim_start_matches('/');
        let file = WebAssets::get(key).ok_or_else(|| AssetError::NotFound(path.to_string()))?;

        Ok(Asset {
            data: file.data,
            mime_type: mime_guess::from_path(key)
                .first_or_octet_stream()
                .to_string(),
        })
    }
}

/// Resolves request paths against a bundle mounted at `prefix`.
#[derive(Clone)]
pub struct SpaAssets {
    bundle: Arc<dyn AssetBundle>,
    prefix: String,
}

impl SpaAssets {
    pub fn new(bundle: Arc<dyn AssetBundle>, prefix: impl Into<String>) -> Self {
        Self {
            bundle,
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Maps a request path to the bundle path it is served from.
    pub fn resolve(&self, path: &str) -> String {
        if path == SHELL_PATH {
            SHELL_DOCUMENT.to_string()
        } else {
            clean_join(&self.prefix, path)
        }
    }

    /// Opens the file behind a request path. Misses are returned as
    /// `AssetError::NotFound`; there is no shell fallback at this level.
    pub fn open(&self, path: &str) -> Result<Asset, AssetError> {
        self.bundle.open(&self.resolve(path))
    }

    /// Opens a file by its bundle path, bypassing the prefix.
    pub fn open_root(&self, path: &str) -> Result<Asset, AssetError> {
        self.bundle.open(&clean_join("/", path))
    }
}

/// Joins `base` and `path` into an absolute path with `.`, `..` and empty
/// segments removed. `..` never climbs above the root.
fn clean_join(base: &str, path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(path.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    format!("/{}", segments.join("/"))
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use std::collections::HashMap;

    /// In-memory bundle for tests.
    #[derive(Default)]
    pub struct MemoryAssets {
        files: HashMap<String, Vec<u8>>,
    }

    impl MemoryAssets {
        pub fn with(mut self, path: &str, data: &str) -> Self {
            self.files.insert(path.to_string(), data.as_bytes().to_vec());
            self
        }
    }

    impl AssetBundle for MemoryAssets {
        fn open(&self, path: &str) -> Result<Asset, AssetError> {
            self.files
                .get(path)
                .map(|data| Asset {
                    data: Cow::Owned(data.clone()),
                    mime_type: mime_guess::from_path(path)
                        .first_or_octet_stream()
                        .to_string(),
                })
                .ok_or_else(|| AssetError::NotFound(path.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::MemoryAssets;
    use super::*;

    fn spa() -> SpaAssets {
        let bundle = MemoryAssets::default()
            .with("/index.html", "<html>shell</html>")
            .with("/static/js/main.js", "console.log(1)")
            .with("/default", "not the shell");
        SpaAssets::new(Arc::new(bundle), "/static")
    }

    #[test]
    fn test_clean_join() {
        assert_eq!(clean_join("/static", "/js/main.js"), "/static/js/main.js");
        assert_eq!(clean_join("/static", "js//./main.js"), "/static/js/main.js");
        assert_eq!(clean_join("/static", "/../index.html"), "/index.html");
        assert_eq!(clean_join("/static", "/../../../etc/passwd"), "/etc/passwd");
        assert_eq!(clean_join("/", ""), "/");
    }

    #[test]
    fn test_shell_path_ignores_prefix() {
        let spa = spa();
        assert_eq!(spa.resolve(SHELL_PATH), "/index.html");

        let asset = spa.open(SHELL_PATH).unwrap();
        assert_eq!(asset.data.as_ref(), b"<html>shell</html>");
        assert_eq!(asset.mime_type, "text/html");
    }

    #[test]
    fn test_prefixed_lookup() {
        let spa = spa();
        let asset = spa.open("/js/main.js").unwrap();
        assert_eq!(asset.data.as_ref(), b"console.log(1)");
        assert!(asset.mime_type.contains("javascript"));
    }

    #[test]
    fn test_missing_asset_is_not_found() {
        let spa = spa();
        assert_eq!(
            spa.open("/js/missing.js").unwrap_err(),
            AssetError::NotFound("/static/js/missing.js".to_string())
        );
        // Only the exact sentinel is rewritten.
        assert!(spa.open("/default/").is_err());
    }

    #[test]
    fn test_embedded_bundle_has_shell() {
        let asset = EmbeddedAssets.open(SHELL_DOCUMENT).unwrap();
        assert!(!asset.data.is_empty());
        assert_eq!(asset.mime_type, "text/html");
        assert!(EmbeddedAssets.open("/favicon.ico").is_ok());
        assert!(EmbeddedAssets.open("/nope.txt").is_err());
    }
}
