//! TOML configuration.
//!
//! Every section is optional. A missing file at the default location
//! falls back to [`Config::minimal`], which reproduces the published site.

use anyhow::{Context, Result};
use forensic_catalog_core::links::DEFAULT_ASSET_BASE;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Location checked when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "./config/fcat.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// TOML file of `[[resources]]`; the built-in list is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Local copy of the asset directory, only read by `fcat check`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            dir: None,
        }
    }
}

fn default_base_path() -> String {
    DEFAULT_ASSET_BASE.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_email")]
    pub email: Option<String>,
    #[serde(default = "default_linkedin")]
    pub linkedin: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: default_tagline(),
            owner: default_owner(),
            role: default_role(),
            email: default_email(),
            linkedin: default_linkedin(),
        }
    }
}

fn default_site_name() -> String {
    "Sigma Forensic Scholars".to_string()
}
fn default_tagline() -> String {
    "Advanced Forensic Education Hub".to_string()
}
fn default_owner() -> String {
    "Prof. Sidhvita Kaithepalli".to_string()
}
fn default_role() -> String {
    "Assistant Professor of Forensic Science".to_string()
}
fn default_email() -> Option<String> {
    Some("kaithepalli.sidhvita643@gmail.com".to_string())
}
fn default_linkedin() -> Option<String> {
    Some("https://www.linkedin.com/in/sidhvita-kaithepalli/".to_string())
}

impl Config {
    /// Built-in catalog, `/pdfs/` base path, default site details.
    pub fn minimal() -> Self {
        Self::default()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let mut config = parse_config(&content)?;

    // Relative catalog paths are resolved against the config file's directory.
    if let (Some(catalog_path), Some(base)) = (config.catalog.path.as_ref(), path.parent()) {
        if catalog_path.is_relative() {
            config.catalog.path = Some(base.join(catalog_path));
        }
    }
    if let (Some(dir), Some(base)) = (config.assets.dir.as_ref(), path.parent()) {
        if dir.is_relative() {
            config.assets.dir = Some(base.join(dir));
        }
    }

    Ok(config)
}

/// Parse and validate config text.
pub fn parse_config(content: &str) -> Result<Config> {
    let mut config: Config =
        toml::from_str(content).with_context(|| "Failed to parse config file")?;

    // TOML has no null; an empty string switches a contact link off.
    config.site.email = config.site.email.filter(|e| !e.trim().is_empty());
    config.site.linkedin = config.site.linkedin.filter(|u| !u.trim().is_empty());

    if config.assets.base_path.trim().is_empty() {
        anyhow::bail!("assets.base_path must not be empty");
    }

    if let Some(email) = &config.site.email {
        if !email.contains('@') {
            anyhow::bail!("site.email must be an email address, got '{}'", email);
        }
    }

    if let Some(url) = &config.site.linkedin {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            anyhow::bail!("site.linkedin must be an http(s) URL, got '{}'", url);
        }
    }

    Ok(config)
}

/// Pick the config for this run.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
/// used when present, otherwise [`Config::minimal`].
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                load_config(default)
            } else {
                tracing::debug!("no config file at {}, using defaults", DEFAULT_CONFIG_PATH);
                Ok(Config::minimal())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert!(cfg.catalog.path.is_none());
        assert_eq!(cfg.assets.base_path, "/pdfs/");
        assert!(cfg.assets.dir.is_none());
        assert_eq!(cfg.site.name, "Sigma Forensic Scholars");
        assert_eq!(
            cfg.site.email.as_deref(),
            Some("kaithepalli.sidhvita643@gmail.com")
        );
    }

    #[test]
    fn test_partial_sections() {
        let cfg = parse_config(
            r#"
[assets]
base_path = "https://cdn.example.org/pdfs"

[site]
name = "Evidence Hub"
"#,
        )
        .unwrap();
        assert_eq!(cfg.assets.base_path, "https://cdn.example.org/pdfs");
        assert_eq!(cfg.site.name, "Evidence Hub");
        assert_eq!(cfg.site.tagline, "Advanced Forensic Education Hub");
    }

    #[test]
    fn test_rejects_empty_base_path() {
        let err = parse_config("[assets]\nbase_path = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("assets.base_path"));
    }

    #[test]
    fn test_rejects_bad_email() {
        let err = parse_config("[site]\nemail = \"not-an-address\"\n").unwrap_err();
        assert!(err.to_string().contains("site.email"));
    }

    #[test]
    fn test_rejects_bad_linkedin() {
        let err = parse_config("[site]\nlinkedin = \"linkedin.com/in/x\"\n").unwrap_err();
        assert!(err.to_string().contains("site.linkedin"));
    }

    #[test]
    fn test_empty_contact_fields_are_unset() {
        let cfg = parse_config("[site]\nemail = \"\"\nlinkedin = \" \"\n").unwrap();
        assert!(cfg.site.email.is_none());
        assert!(cfg.site.linkedin.is_none());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(parse_config("[site\nname = 1").is_err());
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("fcat.toml");
        std::fs::write(
            &path,
            "[catalog]\npath = \"resources.toml\"\n\n[assets]\ndir = \"pdfs\"\n",
        )
        .unwrap();
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.catalog.path, Some(tmp.path().join("resources.toml")));
        assert_eq!(cfg.assets.dir, Some(tmp.path().join("pdfs")));
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = load_config(Path::new("/nonexistent/fcat.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
