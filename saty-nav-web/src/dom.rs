//! Browser Document
//!
//! [`Document`] implementation over the live DOM.

use saty_nav::{Document, NavError, NavResult};
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

/// The page's DOM
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// The document of the current window
    pub fn from_window() -> NavResult<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self::new)
            .ok_or_else(|| NavError::Host("no document available".to_string()))
    }

    fn body(&self) -> NavResult<HtmlElement> {
        self.document.body().ok_or(NavError::MissingBody)
    }
}

fn host_error(err: JsValue) -> NavError {
    NavError::Host(format!("{:?}", err))
}

impl Document for WebDocument {
    fn remove_element_by_id(&mut self, id: &str) -> NavResult<bool> {
        let mut removed = false;
        while let Some(el) = self.document.get_element_by_id(id) {
            el.remove();
            removed = true;
        }
        Ok(removed)
    }

    fn append_head_style(&mut self, id: &str, css: &str) -> NavResult<()> {
        let head = self.document.head().ok_or(NavError::MissingHead)?;
        let style = self.document.create_element("style").map_err(host_error)?;
        style.set_id(id);
        style.set_text_content(Some(css));
        head.append_child(&style).map_err(host_error)?;
        Ok(())
    }

    fn prepend_body_html(&mut self, html: &str) -> NavResult<()> {
        self.body()?
            .insert_adjacent_html("afterbegin", html)
            .map_err(host_error)
    }

    fn body_classes(&self) -> NavResult<Vec<String>> {
        let list = self.body()?.class_list();
        Ok((0..list.length()).filter_map(|i| list.item(i)).collect())
    }

    fn add_body_class(&mut self, class: &str) -> NavResult<()> {
        self.body()?.class_list().add_1(class).map_err(host_error)
    }

    fn remove_body_class(&mut self, class: &str) -> NavResult<()> {
        self.body()?.class_list().remove_1(class).map_err(host_error)
    }
}
