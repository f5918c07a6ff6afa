//! SATY Navigation for the browser
//!
//! Injects the shared navigation bar once the page's DOM is ready, and
//! exports the `SATYNavigation` class so pages can drive it by hand.
//!
//! ```js
//! import init, { SATYNavigation } from "./pkg/saty_nav_web.js";
//!
//! await init();                       // auto-injects on DOMContentLoaded
//! new SATYNavigation().init();        // re-injecting replaces the bar
//! ```

use saty_nav::{NavError, NavigationWidget};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod dom;

pub use dom::WebDocument;

/// The navigation bar for one page, as seen from JavaScript
#[wasm_bindgen(js_name = SATYNavigation)]
pub struct SatyNavigation {
    widget: NavigationWidget,
}

#[wasm_bindgen(js_class = SATYNavigation)]
impl SatyNavigation {
    /// Build for the current `window.location.pathname`
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SatyNavigation, JsValue> {
        Ok(Self::for_path(&current_path()?))
    }

    /// Build for an explicit URL path
    #[wasm_bindgen(js_name = forPath)]
    pub fn for_path(path: &str) -> SatyNavigation {
        Self {
            widget: NavigationWidget::new(path),
        }
    }

    #[wasm_bindgen(js_name = getCurrentPage)]
    pub fn get_current_page(&self) -> String {
        self.widget.current_page().to_string()
    }

    #[wasm_bindgen(js_name = generateNavHTML)]
    pub fn generate_nav_html(&self) -> String {
        self.widget.generate_nav_html()
    }

    #[wasm_bindgen(js_name = generateNavCSS)]
    pub fn generate_nav_css(&self) -> String {
        self.widget.generate_nav_css()
    }

    /// Inject into the current document, replacing any earlier injection
    pub fn init(&self) -> Result<(), JsValue> {
        let mut doc = WebDocument::from_window().map_err(to_js)?;
        self.widget.init(&mut doc).map(|_| ()).map_err(to_js)
    }
}

/// Inject the navigation for `path` (default: the current location)
#[wasm_bindgen(js_name = initializeNavigation)]
pub fn initialize_navigation(path: Option<String>) -> Result<String, JsValue> {
    let path = match path {
        Some(path) => path,
        None => current_path()?,
    };
    let mut doc = WebDocument::from_window().map_err(to_js)?;
    let report = saty_nav::initialize(&mut doc, &path).map_err(to_js)?;
    Ok(report.page.to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    // DOMContentLoaded has already fired unless the document is still loading
    if document.ready_state() != "loading" {
        auto_init();
        return Ok(());
    }

    let on_ready = Closure::wrap(Box::new(move || {
        auto_init();
    }) as Box<dyn FnMut()>);
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();

    Ok(())
}

fn auto_init() {
    match initialize_navigation(None) {
        Ok(page) => web_sys::console::debug_1(&format!("SATY navigation ready: page-{}", page).into()),
        Err(e) => web_sys::console::error_1(&format!("SATY navigation failed: {:?}", e).into()),
    }
}

fn current_path() -> Result<String, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window available"))?
        .location()
        .pathname()
}

fn to_js(err: NavError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
