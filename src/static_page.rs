//! Static Page Host
//!
//! A [`Document`] backed by the text of an HTML file. Edits are made in
//! place on the source text so everything outside the injected regions is
//! preserved byte for byte.
//!
//! Tags are located through [`crate::markup`], so markup-like text inside
//! comments, `<script>` and `<style>` is never matched. Tag matching is
//! ASCII case-insensitive.

use std::ops::Range;

use crate::document::Document;
use crate::error::{NavError, NavResult};
use crate::html::escape_attr;
use crate::markup::{tokenize, StartTag, Token, TokenKind};

/// An HTML document held as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPage {
    html: String,
}

impl StaticPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Whether an element with `id` is present
    pub fn contains_id(&self, id: &str) -> bool {
        self.find_element_by_id(id).is_some()
    }

    fn tokens(&self) -> Vec<Token> {
        tokenize(&self.html)
    }

    /// Span and parsed form of the first start tag named `name`
    fn find_open_tag(&self, name: &str) -> Option<(Range<usize>, StartTag)> {
        self.tokens().into_iter().find_map(|token| match token.kind {
            TokenKind::StartTag(tag) if tag.name == name => Some((token.span, tag)),
            _ => None,
        })
    }

    /// Span of the first end tag named `name` at or after `from`
    fn find_close_tag(&self, name: &str, from: usize) -> Option<Range<usize>> {
        self.tokens().into_iter().find_map(|token| match &token.kind {
            TokenKind::EndTag(end) if end == name && token.span.start >= from => Some(token.span),
            _ => None,
        })
    }

    /// Span of the whole element carrying `id`, start tag through its
    /// matching end tag
    fn find_element_by_id(&self, id: &str) -> Option<Range<usize>> {
        let tokens = self.tokens();
        let (index, tag) = tokens.iter().enumerate().find_map(|(i, token)| match &token.kind {
            TokenKind::StartTag(tag) if tag.attr_value("id") == Some(id) => Some((i, tag)),
            _ => None,
        })?;
        let start = tokens[index].span.clone();
        if tag.is_void() {
            return Some(start);
        }

        let mut depth = 0usize;
        for token in &tokens[index + 1..] {
            match &token.kind {
                TokenKind::StartTag(inner) if inner.name == tag.name && !inner.is_void() => {
                    depth += 1
                }
                TokenKind::EndTag(name) if *name == tag.name => {
                    if depth == 0 {
                        return Some(start.start..token.span.end);
                    }
                    depth -= 1;
                }
                _ => {}
            }
        }

        // Unclosed: drop the start tag alone
        Some(start)
    }

    fn set_body_classes(&mut self, classes: &[String]) -> NavResult<()> {
        let (range, body) = self.find_open_tag("body").ok_or(NavError::MissingBody)?;
        let tag = &self.html[range.clone()];
        let rendered = format!(r#" class="{}""#, escape_attr(&classes.join(" ")));

        let new_tag = match body.attr("class") {
            Some(attr) => {
                let span = attr.span.start - range.start..attr.span.end - range.start;
                let replacement = if classes.is_empty() { "" } else { rendered.as_str() };
                format!("{}{}{}", &tag[..span.start], replacement, &tag[span.end..])
            }
            None if classes.is_empty() => return Ok(()),
            None => {
                let insert_at = if body.self_closing {
                    tag.len() - 2
                } else {
                    tag.len() - 1
                };
                format!("{}{}{}", &tag[..insert_at], rendered, &tag[insert_at..])
            }
        };

        self.html.replace_range(range, &new_tag);
        Ok(())
    }
}

impl Document for StaticPage {
    fn remove_element_by_id(&mut self, id: &str) -> NavResult<bool> {
        let mut removed = false;
        while let Some(range) = self.find_element_by_id(id) {
            self.html.replace_range(range, "");
            removed = true;
        }
        Ok(removed)
    }

    fn append_head_style(&mut self, id: &str, css: &str) -> NavResult<()> {
        let (head, _) = self.find_open_tag("head").ok_or(NavError::MissingHead)?;
        let close = self
            .find_close_tag("head", head.end)
            .ok_or(NavError::MissingHead)?;
        let style = format!(r#"<style id="{}">{}</style>"#, escape_attr(id), css);
        self.html.insert_str(close.start, &style);
        Ok(())
    }

    fn prepend_body_html(&mut self, html: &str) -> NavResult<()> {
        let (body, _) = self.find_open_tag("body").ok_or(NavError::MissingBody)?;
        self.html.insert_str(body.end, html);
        Ok(())
    }

    fn body_classes(&self) -> NavResult<Vec<String>> {
        let (_, body) = self.find_open_tag("body").ok_or(NavError::MissingBody)?;
        let classes = body
            .attr_value("class")
            .map(|v| v.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        Ok(classes)
    }

    fn add_body_class(&mut self, class: &str) -> NavResult<()> {
        let mut classes = self.body_classes()?;
        if classes.iter().any(|c| c == class) {
            return Ok(());
        }
        classes.push(class.to_string());
        self.set_body_classes(&classes)
    }

    fn remove_body_class(&mut self, class: &str) -> NavResult<()> {
        let mut classes = self.body_classes()?;
        let before = classes.len();
        classes.retain(|c| c != class);
        if classes.len() == before {
            return Ok(());
        }
        self.set_body_classes(&classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::initialize;
    use crate::nav::{NAV_ID, STYLE_ID};

    const PAGE: &str = "<!DOCTYPE html>\n<html>\n<head>\n<title>ML</title>\n</head>\n<body class=\"dark\">\n<h1>Models</h1>\n</body>\n</html>\n";

    #[test]
    fn test_open_tag_skips_prefix_matches() {
        let page = StaticPage::new("<html><header></header><head></head><body></body></html>");
        let (head, _) = page.find_open_tag("head").unwrap();
        assert_eq!(&page.as_str()[head], "<head>");
    }

    #[test]
    fn test_close_tag_skips_prefix_matches() {
        let page = StaticPage::new("<body><nav id=\"n\"><navbar></navbar></nav><p>x</p></body>");
        let range = page.find_element_by_id("n").unwrap();
        assert_eq!(
            &page.as_str()[range],
            "<nav id=\"n\"><navbar></navbar></nav>"
        );
    }

    #[test]
    fn test_element_by_id_with_nested_same_tag() {
        let page = StaticPage::new("<body><div id=\"outer\"><div>a</div>b</div><p>c</p></body>");
        let range = page.find_element_by_id("outer").unwrap();
        assert_eq!(&page.as_str()[range], "<div id=\"outer\"><div>a</div>b</div>");
    }

    #[test]
    fn test_body_class_editing() {
        let mut page = StaticPage::new("<html><head></head><BODY data-theme=\"x\"></BODY></html>");
        assert!(page.body_classes().unwrap().is_empty());

        page.add_body_class("page-ml").unwrap();
        assert_eq!(
            page.as_str(),
            "<html><head></head><BODY data-theme=\"x\" class=\"page-ml\"></BODY></html>"
        );

        page.add_body_class("page-ml").unwrap();
        assert_eq!(page.body_classes().unwrap(), vec!["page-ml"]);

        page.remove_body_class("page-ml").unwrap();
        assert_eq!(
            page.as_str(),
            "<html><head></head><BODY data-theme=\"x\"></BODY></html>"
        );
    }

    #[test]
    fn test_initialize_static_page() {
        let mut page = StaticPage::new(PAGE);
        let report = initialize(&mut page, "/pages/ml.html").unwrap();
        assert_eq!(report.page.as_str(), "ml");

        let html = page.as_str();
        assert!(html.contains(r#"<style id="saty-nav-style">.top-nav {"#));
        assert!(html.contains("<body class=\"dark page-ml\"><nav id=\"saty-nav\" class=\"top-nav\">"));
        assert!(html.contains(r#"<a href="../pages/ml.html" class="nav-link active">"#));
        assert!(html.find("</nav>").unwrap() < html.find("<h1>Models</h1>").unwrap());
        assert!(page.contains_id(NAV_ID));
        assert!(page.contains_id(STYLE_ID));
    }

    #[test]
    fn test_initialize_twice_is_stable() {
        let mut page = StaticPage::new(PAGE);
        initialize(&mut page, "/pages/analysis/golden-gate.html").unwrap();
        let first = page.as_str().to_string();

        let report = initialize(&mut page, "/pages/analysis/golden-gate.html").unwrap();
        assert!(report.replaced);
        assert_eq!(page.as_str(), first);
        assert_eq!(page.as_str().matches("<nav ").count(), 1);
        assert_eq!(page.as_str().matches("<style ").count(), 1);
    }

    #[test]
    fn test_initialize_twice_with_head_script() {
        let mut page = StaticPage::new(
            "<html><head><script>/* a<b isn't */ var x = 1;</script></head><body><p>hi</p></body></html>",
        );
        initialize(&mut page, "/pages/ml.html").unwrap();
        let first = page.as_str().to_string();

        let report = initialize(&mut page, "/pages/ml.html").unwrap();
        assert!(report.replaced);
        assert_eq!(page.as_str(), first);
        assert_eq!(page.as_str().matches("<nav ").count(), 1);
        assert_eq!(page.as_str().matches("<style ").count(), 1);
        assert!(page.as_str().contains("<script>/* a<b isn't */ var x = 1;</script>"));
    }

    #[test]
    fn test_ids_inside_scripts_are_ignored() {
        let script = r#"<script>document.write('<nav id="saty-nav">');</script>"#;
        let mut page = StaticPage::new(format!("<html><head></head><body>{}</body></html>", script));

        initialize(&mut page, "/index.html").unwrap();
        initialize(&mut page, "/index.html").unwrap();

        assert!(page.as_str().contains(script));
        assert_eq!(page.as_str().matches(r#"<nav id="saty-nav" class="top-nav">"#).count(), 1);
    }

    #[test]
    fn test_commented_tags_are_ignored() {
        let comment = r#"<!-- layout: <body class="x"> -->"#;
        let mut page = StaticPage::new(format!(
            "<html><head>{}</head><body><p>hi</p></body></html>",
            comment
        ));

        initialize(&mut page, "/index.html").unwrap();

        let html = page.as_str();
        assert!(html.contains(comment));
        assert!(html.contains(r#"<body class="page-home"><nav id="saty-nav" class="top-nav">"#));
        assert!(html.find("<style id=\"saty-nav-style\">").unwrap() > html.find(comment).unwrap());
        assert_eq!(page.body_classes().unwrap(), vec!["page-home"]);
    }

    #[test]
    fn test_remove_restores_original() {
        let mut page = StaticPage::new(PAGE);
        initialize(&mut page, "/index.html").unwrap();

        page.remove_element_by_id(NAV_ID).unwrap();
        page.remove_element_by_id(STYLE_ID).unwrap();
        page.remove_body_class("page-home").unwrap();

        assert_eq!(page.into_html(), PAGE);
    }

    #[test]
    fn test_missing_containers() {
        let mut page = StaticPage::new("<p>fragment</p><!-- <head></head><body> -->");
        assert!(matches!(
            page.append_head_style(STYLE_ID, ""),
            Err(NavError::MissingHead)
        ));
        assert!(matches!(
            page.prepend_body_html("<nav></nav>"),
            Err(NavError::MissingBody)
        ));
        assert!(!page.remove_element_by_id(NAV_ID).unwrap());
    }
}
