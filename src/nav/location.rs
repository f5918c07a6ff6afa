//! Location context
//!
//! Resolves how many directory levels a page sits below the site root, and
//! therefore which relative prefix its links need.

use serde::Serialize;
use std::fmt;

/// Directory marker for nested analysis pages (two levels deep)
pub const NESTED_ANALYSIS_DIR: &str = "/pages/analysis/";

/// Directory marker for first-level pages
pub const PAGES_DIR: &str = "/pages/";

/// Relative prefix from the current page back to the site root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BasePath {
    Root,
    OneLevel,
    TwoLevels,
}

impl BasePath {
    /// Resolve from a URL path such as `/pages/analysis/gap-fill.html`
    pub fn from_path(path: &str) -> Self {
        if path.contains(NESTED_ANALYSIS_DIR) {
            BasePath::TwoLevels
        } else if path.contains(PAGES_DIR) {
            BasePath::OneLevel
        } else {
            BasePath::Root
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            BasePath::Root => "",
            BasePath::OneLevel => "../",
            BasePath::TwoLevels => "../../",
        }
    }

    /// Prefix `target` so it resolves from the current page
    pub fn resolve(&self, target: &str) -> String {
        format!("{}{}", self.prefix(), target)
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Last path segment of a URL path; empty for directory paths like `/`
pub fn filename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}
