//! Navigation Widget
//!
//! Builds the shared navigation bar for a single page: resolves the base
//! path from the page's location, marks the current section as active,
//! and renders markup and styles.

use serde::Serialize;

use crate::config::NavConfig;
use crate::document::{self, Document, InitReport};
use crate::error::NavResult;
use crate::html::Element;
use crate::nav::location::{filename, BasePath};
use crate::nav::page::{PageEntry, PageKey};
use crate::style::{Rule, Stylesheet};

/// Element id of the injected `<nav>`
pub const NAV_ID: &str = "saty-nav";

/// Element id of the injected `<style>`
pub const STYLE_ID: &str = "saty-nav-style";

/// What the widget renders for one page, in machine-readable form
#[derive(Debug, Clone, Serialize)]
pub struct NavSnapshot<'a> {
    pub path: &'a str,
    pub page: PageKey,
    pub base_path: &'static str,
    pub body_class: String,
    pub links: &'a [PageEntry],
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
}

/// Navigation bar for one page
#[derive(Debug, Clone, Serialize)]
pub struct NavigationWidget {
    location_path: String,
    base_path: BasePath,
    pages: Vec<PageEntry>,
    brand: String,
    logo_icon: String,
    logo_href: String,
}

impl NavigationWidget {
    /// Create a widget for the page at `location_path` with default settings
    pub fn new(location_path: impl Into<String>) -> Self {
        Self::with_config(location_path, &NavConfig::default())
    }

    /// Create a widget using the given navigation settings
    pub fn with_config(location_path: impl Into<String>, config: &NavConfig) -> Self {
        let location_path = location_path.into();
        let base_path = BasePath::from_path(&location_path);

        let pages = vec![
            PageEntry::new(base_path.resolve("index.html"), "fas fa-home", "Home", PageKey::Home),
            PageEntry::new(
                base_path.resolve("pages/analysis/golden-gate.html"),
                "fas fa-chart-line",
                "GG Analysis",
                PageKey::Analysis,
            ),
            PageEntry::new(
                base_path.resolve("pages/analysis/gap-fill.html"),
                "fas fa-chart-area",
                "Gap Fill",
                PageKey::GapFill,
            ),
            PageEntry::new(base_path.resolve("pages/ml.html"), "fas fa-brain", "ML", PageKey::Ml),
        ];

        // The logo has always pointed at the bare `index.html`; prefixing is opt-in.
        let logo_href = if config.prefix_logo {
            base_path.resolve("index.html")
        } else {
            "index.html".to_string()
        };

        tracing::debug!(path = %location_path, base = %base_path, "Resolved navigation context");

        Self {
            location_path,
            base_path,
            pages,
            brand: config.brand.clone(),
            logo_icon: config.logo_icon.clone(),
            logo_href,
        }
    }

    pub fn location_path(&self) -> &str {
        &self.location_path
    }

    pub fn base_path(&self) -> BasePath {
        self.base_path
    }

    /// Link entries in display order
    pub fn pages(&self) -> &[PageEntry] {
        &self.pages
    }

    /// Section of the current page; unknown filenames fall back to `Home`
    pub fn current_page(&self) -> PageKey {
        PageKey::from_filename(filename(&self.location_path))
    }

    /// Build the navigation bar as an element tree
    pub fn nav_element(&self) -> Element {
        let current = self.current_page();

        let links = self.pages.iter().map(|page| {
            Element::new("a")
                .attr("href", page.href.as_str())
                .class("nav-link")
                .class(if page.id == current { "active" } else { "" })
                .child(Element::new("i").class(page.icon))
                .text(format!(" {}", page.label))
        });

        let logo = Element::new("a")
            .attr("href", self.logo_href.as_str())
            .class("logo")
            .child(Element::new("i").class(&self.logo_icon))
            .text(format!(" {}", self.brand));

        Element::new("nav").id(NAV_ID).class("top-nav").child(
            Element::new("div")
                .class("nav-container")
                .child(logo)
                .child(Element::new("div").class("nav-links").children(links)),
        )
    }

    /// Render the navigation markup
    pub fn generate_nav_html(&self) -> String {
        self.nav_element().render()
    }

    /// Render the navigation stylesheet
    pub fn generate_nav_css(&self) -> String {
        nav_stylesheet().render()
    }

    /// Resolution and rendered output together; the stylesheet only when
    /// `include_css` is set
    pub fn snapshot(&self, include_css: bool) -> NavSnapshot<'_> {
        let page = self.current_page();
        NavSnapshot {
            path: &self.location_path,
            page,
            base_path: self.base_path.prefix(),
            body_class: page.body_class(),
            links: &self.pages,
            html: self.generate_nav_html(),
            css: include_css.then(|| self.generate_nav_css()),
        }
    }

    /// Inject styles, markup, and the page body class into `doc`.
    ///
    /// Safe to call repeatedly: previously injected navigation is replaced.
    pub fn init<D: Document + ?Sized>(&self, doc: &mut D) -> NavResult<InitReport> {
        document::initialize_widget(doc, self)
    }
}

/// The fixed navigation stylesheet
pub fn nav_stylesheet() -> Stylesheet {
    Stylesheet::new()
        .rule(
            Rule::new(".top-nav")
                .decl("background", "rgba(255, 255, 255, 0.95)")
                .decl("backdrop-filter", "blur(10px)")
                .decl("border-bottom", "1px solid rgba(52, 152, 219, 0.1)")
                .decl("padding", "15px 0")
                .decl("margin-bottom", "20px")
                .decl("position", "sticky")
                .decl("top", "0")
                .decl("z-index", "100"),
        )
        .rule(
            Rule::new(".nav-container")
                .decl("max-width", "1200px")
                .decl("margin", "0 auto")
                .decl("display", "flex")
                .decl("justify-content", "space-between")
                .decl("align-items", "center")
                .decl("padding", "0 20px"),
        )
        .rule(
            Rule::new(".logo")
                .decl("font-size", "1.5rem")
                .decl("font-weight", "700")
                .decl("color", "#2c3e50")
                .decl("text-decoration", "none"),
        )
        .rule(Rule::new(".nav-links").decl("display", "flex").decl("gap", "8px"))
        .rule(
            Rule::new(".nav-link")
                .decl("background", "transparent")
                .decl("color", "#2c3e50")
                .decl("padding", "10px 16px")
                .decl("border-radius", "6px")
                .decl("text-decoration", "none")
                .decl("font-weight", "500")
                .decl("font-size", "0.95rem")
                .decl("transition", "all 0.2s ease")
                .decl("border", "1px solid transparent"),
        )
        .rule(
            Rule::new(".nav-link:hover")
                .decl("background", "#3498db")
                .decl("color", "white")
                .decl("transform", "translateY(-1px)"),
        )
        .rule(
            Rule::new(".nav-link.active")
                .decl("background", "#3498db")
                .decl("color", "white"),
        )
        .rule(Rule::new(".nav-link:hover:not(.active)").decl("background", "#3498db"))
        .media(
            "(max-width: 768px)",
            vec![
                Rule::new(".nav-links").decl("flex-wrap", "wrap").decl("gap", "4px"),
                Rule::new(".nav-link")
                    .decl("font-size", "0.85rem")
                    .decl("padding", "8px 12px"),
            ],
        )
}
