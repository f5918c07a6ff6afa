//! Site Injection
//!
//! Walks a static site and injects the navigation into every HTML page,
//! using each page's position under the site root as its location path.
//! Re-running over an already injected site leaves files unchanged.

use ignore::WalkBuilder;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

use crate::config::{NavConfig, SiteConfig};
use crate::document::initialize_with_config;
use crate::error::{NavError, NavResult};
use crate::static_page::StaticPage;

/// Options for a single injection run
#[derive(Debug, Clone, Default)]
pub struct InjectOptions {
    /// Write results under this directory instead of rewriting in place
    pub output_dir: Option<PathBuf>,
    /// Compute results without writing anything
    pub dry_run: bool,
}

/// Summary of an injection run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteReport {
    /// HTML pages found
    pub scanned: usize,
    /// Pages whose output differs from their input
    pub updated: usize,
    /// Pages already carrying the current navigation
    pub unchanged: usize,
    /// Pages without a head or body, left untouched
    pub skipped: usize,
}

/// URL path of `file` relative to `root`, e.g. `/pages/ml.html`
pub fn location_path(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;
    let mut path = String::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                path.push('/');
                path.push_str(part.to_str()?);
            }
            _ => return None,
        }
    }
    Some(path)
}

/// HTML files under `root`, sorted by path
pub fn collect_pages(root: &Path, site: &SiteConfig) -> NavResult<Vec<PathBuf>> {
    let excluded = site.exclude_dirs.clone();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(!site.include_hidden)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            let name = entry.file_name().to_string_lossy();
            !(entry.depth() > 0 && is_dir && excluded.iter().any(|d| *d == name))
        })
        .build();

    let mut pages = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }

        let is_html = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
            .unwrap_or(false);

        if is_html {
            pages.push(entry.into_path());
        }
    }

    Ok(pages)
}

/// Inject the navigation into every page under `root`
pub fn inject_site(
    root: &Path,
    nav: &NavConfig,
    site: &SiteConfig,
    options: &InjectOptions,
) -> NavResult<SiteReport> {
    let mut report = SiteReport::default();

    for file in collect_pages(root, site)? {
        report.scanned += 1;

        let Some(url_path) = location_path(root, &file) else {
            tracing::warn!("Skipping {:?}: path is not valid UTF-8", file);
            report.skipped += 1;
            continue;
        };

        let original = std::fs::read_to_string(&file).map_err(|source| NavError::Io {
            path: file.clone(),
            source,
        })?;

        let mut page = StaticPage::new(original.as_str());
        let init = match initialize_with_config(&mut page, &url_path, nav) {
            Ok(init) => init,
            Err(e @ (NavError::MissingHead | NavError::MissingBody)) => {
                tracing::warn!("Skipping {}: {}", url_path, e);
                report.skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let rendered = page.into_html();
        let changed = rendered != original;
        if changed {
            report.updated += 1;
        } else {
            report.unchanged += 1;
        }

        tracing::info!(
            page = %url_path,
            section = %init.page,
            base = %init.base_path,
            changed,
            "Processed page"
        );

        if options.dry_run {
            continue;
        }

        let target = match &options.output_dir {
            Some(out) => out.join(file.strip_prefix(root).unwrap_or(file.as_path())),
            None if changed => file.clone(),
            None => continue,
        };

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|source| NavError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&target, rendered).map_err(|source| NavError::Io {
            path: target.clone(),
            source,
        })?;
    }

    tracing::info!(
        "Scanned {} pages: {} updated, {} unchanged, {} skipped",
        report.scanned,
        report.updated,
        report.unchanged,
        report.skipped
    );

    Ok(report)
}
