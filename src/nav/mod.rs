//! SATY Navigation
//!
//! The shared navigation bar for the analytics pages:
//!
//! - **page**: Page keys, the filename mapping, and link entries
//! - **location**: Base path resolution from the page's URL path
//! - **widget**: `NavigationWidget`, which renders markup and styles
//!
//! # Example
//!
//! ```
//! use saty_nav::nav::{NavigationWidget, PageKey};
//!
//! let widget = NavigationWidget::new("/pages/analysis/golden-gate.html");
//! assert_eq!(widget.current_page(), PageKey::Analysis);
//! assert_eq!(widget.base_path().prefix(), "../../");
//!
//! let html = widget.generate_nav_html();
//! assert!(html.contains(r#"href="../../pages/ml.html""#));
//! ```

pub mod location;
pub mod page;
pub mod widget;

pub use location::{filename, BasePath, NESTED_ANALYSIS_DIR, PAGES_DIR};
pub use page::{PageEntry, PageKey, BODY_CLASS_PREFIX};
pub use widget::{nav_stylesheet, NavSnapshot, NavigationWidget, NAV_ID, STYLE_ID};
