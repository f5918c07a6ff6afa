//! Host Document
//!
//! The operations the navigation needs from whatever hosts the page: a
//! browser DOM, or an HTML file being rewritten on disk. Injection goes
//! through [`initialize`], which replaces earlier injections instead of
//! stacking them.

use serde::Serialize;

use crate::config::NavConfig;
use crate::error::NavResult;
use crate::nav::{BasePath, NavigationWidget, PageKey, BODY_CLASS_PREFIX, NAV_ID, STYLE_ID};

/// DOM operations required to inject the navigation bar
pub trait Document {
    /// Remove the element with the given id. Returns whether one was found.
    fn remove_element_by_id(&mut self, id: &str) -> NavResult<bool>;

    /// Append a `<style>` element with the given id to the head
    fn append_head_style(&mut self, id: &str, css: &str) -> NavResult<()>;

    /// Insert markup at the very start of the body
    fn prepend_body_html(&mut self, html: &str) -> NavResult<()>;

    /// Classes currently on the body element
    fn body_classes(&self) -> NavResult<Vec<String>>;

    fn add_body_class(&mut self, class: &str) -> NavResult<()>;

    fn remove_body_class(&mut self, class: &str) -> NavResult<()>;
}

/// Outcome of injecting the navigation into a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InitReport {
    /// Section the page was marked as
    pub page: PageKey,
    /// Prefix applied to the nav links
    pub base_path: BasePath,
    /// Whether a previous injection was removed first
    pub replaced: bool,
}

/// Inject the navigation for the page at `location_path` using default settings
pub fn initialize<D: Document + ?Sized>(doc: &mut D, location_path: &str) -> NavResult<InitReport> {
    initialize_with_config(doc, location_path, &NavConfig::default())
}

/// Inject the navigation for the page at `location_path`
pub fn initialize_with_config<D: Document + ?Sized>(
    doc: &mut D,
    location_path: &str,
    config: &NavConfig,
) -> NavResult<InitReport> {
    let widget = NavigationWidget::with_config(location_path, config);
    initialize_widget(doc, &widget)
}

/// Inject an already-built widget into `doc`
pub fn initialize_widget<D: Document + ?Sized>(
    doc: &mut D,
    widget: &NavigationWidget,
) -> NavResult<InitReport> {
    let removed_nav = doc.remove_element_by_id(NAV_ID)?;
    let removed_style = doc.remove_element_by_id(STYLE_ID)?;

    // Only page classes we own; hosts may use other `page-*` classes.
    for class in doc.body_classes()? {
        let ours = class
            .strip_prefix(BODY_CLASS_PREFIX)
            .map(|key| key.parse::<PageKey>().is_ok())
            .unwrap_or(false);
        if ours {
            doc.remove_body_class(&class)?;
        }
    }

    doc.append_head_style(STYLE_ID, &widget.generate_nav_css())?;
    doc.prepend_body_html(&widget.generate_nav_html())?;

    let page = widget.current_page();
    doc.add_body_class(&page.body_class())?;

    let replaced = removed_nav || removed_style;
    tracing::debug!(
        path = %widget.location_path(),
        page = %page,
        replaced,
        "Navigation injected"
    );

    Ok(InitReport {
        page,
        base_path: widget.base_path(),
        replaced,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavError;

    /// Records calls instead of holding markup
    #[derive(Default)]
    struct RecordingDocument {
        styles: Vec<String>,
        body: Vec<String>,
        classes: Vec<String>,
    }

    impl Document for RecordingDocument {
        fn remove_element_by_id(&mut self, id: &str) -> NavResult<bool> {
            let needle = format!(r#"id="{}""#, id);
            let before = self.styles.len() + self.body.len();
            self.styles.retain(|s| !s.contains(&needle));
            self.body.retain(|s| !s.contains(&needle));
            Ok(before != self.styles.len() + self.body.len())
        }

        fn append_head_style(&mut self, id: &str, css: &str) -> NavResult<()> {
            self.styles.push(format!(r#"<style id="{}">{}</style>"#, id, css));
            Ok(())
        }

        fn prepend_body_html(&mut self, html: &str) -> NavResult<()> {
            self.body.insert(0, html.to_string());
            Ok(())
        }

        fn body_classes(&self) -> NavResult<Vec<String>> {
            Ok(self.classes.clone())
        }

        fn add_body_class(&mut self, class: &str) -> NavResult<()> {
            if !self.classes.iter().any(|c| c == class) {
                self.classes.push(class.to_string());
            }
            Ok(())
        }

        fn remove_body_class(&mut self, class: &str) -> NavResult<()> {
            self.classes.retain(|c| c != class);
            Ok(())
        }
    }

    struct HeadlessDocument;

    impl Document for HeadlessDocument {
        fn remove_element_by_id(&mut self, _id: &str) -> NavResult<bool> {
            Ok(false)
        }
        fn append_head_style(&mut self, _id: &str, _css: &str) -> NavResult<()> {
            Err(NavError::MissingHead)
        }
        fn prepend_body_html(&mut self, _html: &str) -> NavResult<()> {
            Ok(())
        }
        fn body_classes(&self) -> NavResult<Vec<String>> {
            Ok(Vec::new())
        }
        fn add_body_class(&mut self, _class: &str) -> NavResult<()> {
            Ok(())
        }
        fn remove_body_class(&mut self, _class: &str) -> NavResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_initialize_injects_everything() {
        let mut doc = RecordingDocument {
            body: vec!["<main>content</main>".to_string()],
            ..Default::default()
        };

        let report = initialize(&mut doc, "/pages/ml.html").unwrap();
        assert_eq!(report.page, PageKey::Ml);
        assert_eq!(report.base_path, BasePath::OneLevel);
        assert!(!report.replaced);

        assert_eq!(doc.styles.len(), 1);
        assert!(doc.body[0].starts_with(r#"<nav id="saty-nav""#));
        assert_eq!(doc.body[1], "<main>content</main>");
        assert_eq!(doc.classes, vec!["page-ml"]);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut doc = RecordingDocument::default();

        initialize(&mut doc, "/index.html").unwrap();
        let report = initialize(&mut doc, "/index.html").unwrap();

        assert!(report.replaced);
        assert_eq!(doc.styles.len(), 1);
        assert_eq!(doc.body.len(), 1);
        assert_eq!(doc.classes, vec!["page-home"]);
    }

    #[test]
    fn test_reinitialize_swaps_page_class() {
        let mut doc = RecordingDocument {
            classes: vec!["page-wide".to_string(), "dark".to_string()],
            ..Default::default()
        };

        initialize(&mut doc, "/pages/analysis/gap-fill.html").unwrap();
        initialize(&mut doc, "/pages/ml.html").unwrap();

        assert_eq!(doc.classes, vec!["page-wide", "dark", "page-ml"]);
    }

    #[test]
    fn test_missing_head_propagates() {
        let err = initialize(&mut HeadlessDocument, "/index.html").unwrap_err();
        assert!(matches!(err, NavError::MissingHead));
    }

    #[test]
    fn test_widget_init_delegates() {
        let mut doc = RecordingDocument::default();
        let widget = NavigationWidget::new("/pages/analysis/intraday.html");

        widget.init(&mut doc).unwrap();
        widget.init(&mut doc).unwrap();

        assert_eq!(doc.body.len(), 1);
        assert_eq!(doc.classes, vec!["page-analysis"]);
    }
}
