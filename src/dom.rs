//! DOM Helpers

use wasm_bindgen::JsCast;

/// Current value of the input, textarea or select that fired `ev`
pub fn target_value(ev: &web_sys::Event) -> String {
    let Some(target) = ev.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return area.value();
    }
    if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}

/// `data-*` attribute on `<body>`, if present
pub fn body_data(name: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .body()?
        .get_attribute(&format!("data-{}", name))
}
