//! # SATY Navigation
//!
//! The shared navigation bar for the SATY Analytics static pages. Every page
//! gets the same bar, with links resolved relative to the page's depth in
//! the site and the current section highlighted.
//!
//! ## Modules
//!
//! - [`nav`]: Page keys, base path resolution, and the `NavigationWidget`
//! - [`html`] / [`style`]: Structured markup and stylesheet builders
//! - [`document`]: The host `Document` trait and idempotent [`initialize`]
//! - [`markup`]: HTML tokenizer used to locate tags in page text
//! - [`static_page`]: A `Document` over HTML text, for build-time injection
//! - `site`: Injects the navigation into every page of a static site
//! - [`config`]: TOML configuration with environment overrides
//!
//! The default `cli` feature enables the `saty-nav` binary and the
//! filesystem `site` feature. The browser binding builds with
//! `default-features = false`.
//!
//! ## Quick Start
//!
//! ```rust
//! use saty_nav::{initialize, StaticPage};
//!
//! let mut page = StaticPage::new("<html><head></head><body><h1>ML</h1></body></html>");
//! let report = initialize(&mut page, "/pages/ml.html").unwrap();
//!
//! assert_eq!(report.page.body_class(), "page-ml");
//! assert!(page.as_str().contains(r#"<a href="../pages/ml.html" class="nav-link active">"#));
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod html;
pub mod markup;
pub mod nav;
#[cfg(feature = "site")]
pub mod site;
pub mod static_page;
pub mod style;

pub use config::{generate_default_config, Config, ConfigError, LoggingConfig, NavConfig, SiteConfig};
pub use document::{initialize, initialize_with_config, initialize_widget, Document, InitReport};
pub use error::{NavError, NavResult};
pub use nav::{BasePath, NavSnapshot, NavigationWidget, PageEntry, PageKey, NAV_ID, STYLE_ID};
#[cfg(feature = "site")]
pub use site::{inject_site, InjectOptions, SiteReport};
pub use static_page::StaticPage;
