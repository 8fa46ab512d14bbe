//! Configuration file support for seagro.
//!
//! Loads optional `seagro.toml` from the working directory, or the file
//! passed with `--config`.

use crate::error::CliError;
use seagro_site::{PageOptions, StyleMode};
use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::warn;

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "seagro.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeagroConfig {
    pub page: PageConfig,
    pub output: OutputConfig,
    pub serve: ServeConfig,
}

/// Document metadata. Unset fields keep the renderer defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub lang: Option<String>,
    /// Link this stylesheet instead of inlining the page CSS.
    pub stylesheet: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    pub addr: SocketAddr,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
        }
    }
}

impl SeagroConfig {
    /// Load `seagro.toml` from the given directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }

        Self::load_from_path(&path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "ignoring config, using defaults");
            Self::default()
        })
    }

    /// Load config from a specific path. Unlike [`Self::load`], a missing or
    /// malformed file is an error.
    pub fn load_from_path(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build renderer options. `stylesheet` (from the command line) wins over
    /// the configured one.
    pub fn page_options(&self, stylesheet: Option<String>) -> PageOptions {
        let defaults = PageOptions::default();
        let page = &self.page;

        PageOptions {
            title: page.title.clone().unwrap_or(defaults.title),
            description: page.description.clone().unwrap_or(defaults.description),
            lang: page.lang.clone().unwrap_or(defaults.lang),
            style: stylesheet
                .or_else(|| page.stylesheet.clone())
                .map_or(StyleMode::Inline, StyleMode::Linked),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).expect("create config");
        write!(file, "{body}").expect("write config");
        path
    }

    #[test]
    fn test_default_config() {
        let config = SeagroConfig::default();
        assert_eq!(config.output.dir, PathBuf::from("dist"));
        assert_eq!(config.serve.addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.page_options(None), PageOptions::default());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        assert_eq!(SeagroConfig::load(temp.path()), SeagroConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            temp.path(),
            r#"
[page]
title = "SeaGro Staging"
lang = "de"
stylesheet = "css/site.css"

[output]
dir = "public"

[serve]
addr = "0.0.0.0:3000"
"#,
        );

        let config = SeagroConfig::load(temp.path());
        assert_eq!(config.page.title.as_deref(), Some("SeaGro Staging"));
        assert_eq!(config.output.dir, PathBuf::from("public"));
        assert_eq!(config.serve.addr.port(), 3000);

        let options = config.page_options(None);
        assert_eq!(options.title, "SeaGro Staging");
        assert_eq!(options.lang, "de");
        assert_eq!(options.description, PageOptions::default().description);
        assert_eq!(options.style, StyleMode::Linked("css/site.css".into()));
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let temp = TempDir::new().expect("temp dir");
        write_config(temp.path(), "[output]\ndir = \"site\"\n");

        let config = SeagroConfig::load(temp.path());
        assert_eq!(config.output.dir, PathBuf::from("site"));
        assert_eq!(config.serve, ServeConfig::default());
        assert_eq!(config.page, PageConfig::default());
    }

    #[test]
    fn test_invalid_implicit_config_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        write_config(temp.path(), "[serve]\naddr = \"not an address\"\n");

        assert_eq!(SeagroConfig::load(temp.path()), SeagroConfig::default());
    }

    #[test]
    fn test_invalid_explicit_config_is_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(temp.path(), "[page\ntitle = ");

        let err = SeagroConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, CliError::ConfigParse { .. }));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = SeagroConfig::load_from_path(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CliError::ConfigRead { .. }));
    }

    #[test]
    fn test_cli_stylesheet_overrides_config() {
        let config = SeagroConfig {
            page: PageConfig {
                stylesheet: Some("from-config.css".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let options = config.page_options(Some("from-cli.css".into()));
        assert_eq!(options.style, StyleMode::Linked("from-cli.css".into()));
    }
}
