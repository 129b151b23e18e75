//! Static-asset link resolution.
//!
//! Each resource is offered as a "view" link (opened in a new tab) and a
//! "download" link. Both point at the same asset under a fixed public base
//! path. Existence of the asset is never checked here.

use serde::Serialize;

use crate::models::Resource;

/// Base path the site serves resource PDFs from.
pub const DEFAULT_ASSET_BASE: &str = "/pdfs/";

/// `filename` relative to the asset directory, with leading `/` removed.
///
/// Both URL building and on-disk lookups go through this.
pub fn asset_relative(filename: &str) -> &str {
    filename.trim_start_matches('/')
}

/// Join `filename` onto `base` with exactly one `/` between them.
pub fn asset_url(base: &str, filename: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{}/{}", base, asset_relative(filename))
}

/// The two actions offered for each rendered resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetLinks {
    pub view_url: String,
    pub download_url: String,
    /// Suggested file name for the saved download.
    pub download_name: String,
}

impl AssetLinks {
    pub fn for_resource(resource: &Resource, base: &str) -> Self {
        let url = asset_url(base, &resource.filename);
        Self {
            view_url: url.clone(),
            download_url: url,
            download_name: resource.filename.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_url_single_separator() {
        assert_eq!(asset_url("/pdfs", "a.pdf"), "/pdfs/a.pdf");
        assert_eq!(asset_url("/pdfs/", "a.pdf"), "/pdfs/a.pdf");
        assert_eq!(asset_url("/pdfs/", "/a.pdf"), "/pdfs/a.pdf");
    }

    #[test]
    fn test_asset_relative_strips_leading_slashes() {
        assert_eq!(asset_relative("/a.pdf"), "a.pdf");
        assert_eq!(asset_relative("//sub/a.pdf"), "sub/a.pdf");
        assert_eq!(asset_relative("a.pdf"), "a.pdf");
    }

    #[test]
    fn test_asset_url_absolute_base() {
        assert_eq!(
            asset_url("https://cdn.example.org/docs/", "4. Crime Scenes (1).pdf"),
            "https://cdn.example.org/docs/4. Crime Scenes (1).pdf"
        );
    }

    #[test]
    fn test_links_for_resource() {
        let r = Resource::new(8, "Note-Making Strategies", "9. Note-Making .pdf", "", "Documentation");
        let links = AssetLinks::for_resource(&r, DEFAULT_ASSET_BASE);
        assert_eq!(links.view_url, "/pdfs/9. Note-Making .pdf");
        assert_eq!(links.download_url, links.view_url);
        assert_eq!(links.download_name, "9. Note-Making .pdf");
    }
}
