//! Page keys and link entries

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Logical section a page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKey {
    Home,
    Analysis,
    GapFill,
    Ml,
}

/// Known filenames and the section they belong to.
/// `intraday.html` lives under analysis without its own nav entry.
const PAGE_MAP: &[(&str, PageKey)] = &[
    ("index.html", PageKey::Home),
    ("", PageKey::Home),
    ("golden-gate.html", PageKey::Analysis),
    ("gap-fill.html", PageKey::GapFill),
    ("intraday.html", PageKey::Analysis),
    ("ml.html", PageKey::Ml),
];

impl PageKey {
    pub const ALL: [PageKey; 4] = [PageKey::Home, PageKey::Analysis, PageKey::GapFill, PageKey::Ml];

    /// Map a page filename to its key, falling back to `Home`
    pub fn from_filename(filename: &str) -> Self {
        PAGE_MAP
            .iter()
            .find(|(name, _)| *name == filename)
            .map(|(_, key)| *key)
            .unwrap_or(PageKey::Home)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::Analysis => "analysis",
            PageKey::GapFill => "gapfill",
            PageKey::Ml => "ml",
        }
    }

    /// Body class used as a page-specific styling hook, e.g. `page-home`
    pub fn body_class(&self) -> String {
        format!("{}{}", BODY_CLASS_PREFIX, self.as_str())
    }
}

/// Prefix shared by all page body classes
pub const BODY_CLASS_PREFIX: &str = "page-";

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown page key: {}", s))
    }
}

/// A single navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageEntry {
    pub href: String,
    pub icon: &'static str,
    pub label: &'static str,
    pub id: PageKey,
}

impl PageEntry {
    pub fn new(href: String, icon: &'static str, label: &'static str, id: PageKey) -> Self {
        Self { href, icon, label, id }
    }
}
