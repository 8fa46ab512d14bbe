//! Writes the rendered page to disk.

use crate::error::CliError;
use seagro_site::styles::PAGE_CSS;
use seagro_site::{PageOptions, StyleMode, render_page};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{info, warn};

/// File name of the rendered page inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Resolve a stylesheet href to a path inside the output directory.
///
/// Only plain relative paths qualify; URLs, absolute paths and anything
/// climbing out with `..` are left for the caller to host. A query or
/// fragment is dropped, and `.` segments are folded away.
pub fn local_stylesheet(href: &str) -> Option<PathBuf> {
    let href = href.split(['?', '#']).next().unwrap_or(href);
    if href.contains("://") || href.starts_with("//") {
        return None;
    }

    let mut path = PathBuf::new();
    for component in Path::new(href).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    (!path.as_os_str().is_empty()).then_some(path)
}

/// Where a linked stylesheet lives next to the page, if it is local.
///
/// Fails when the href would land on (or under) the page itself.
pub fn stylesheet_path(style: &StyleMode) -> Result<Option<PathBuf>, CliError> {
    let StyleMode::Linked(href) = style else {
        return Ok(None);
    };

    match local_stylesheet(href) {
        Some(path) if path.starts_with(INDEX_FILE) => Err(CliError::StylesheetClash {
            href: href.to_owned(),
        }),
        Some(path) => Ok(Some(path)),
        None => {
            warn!(%href, "stylesheet is not a local path, leaving it to the host");
            Ok(None)
        }
    }
}

/// Render the page into `dir`, returning every file written.
pub fn write_site(dir: &Path, options: &PageOptions) -> Result<Vec<PathBuf>, CliError> {
    let stylesheet = stylesheet_path(&options.style)?;
    create_dir(dir)?;

    let index = dir.join(INDEX_FILE);
    write_file(&index, &render_page(options))?;
    let mut written = vec![index];

    if let Some(relative) = stylesheet {
        let css = dir.join(relative);
        if let Some(parent) = css.parent() {
            create_dir(parent)?;
        }
        write_file(&css, PAGE_CSS)?;
        written.push(css);
    }

    for path in &written {
        info!(path = %path.display(), "wrote");
    }
    Ok(written)
}

fn create_dir(dir: &Path) -> Result<(), CliError> {
    fs::create_dir_all(dir).map_err(|source| CliError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
