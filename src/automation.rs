//! Automation Hooks
//!
//! Exposes `window.rubricEditor` so test drivers can read form values and
//! validation messages without scraping the DOM.

use wasm_bindgen::prelude::*;

use crate::context::EditorContext;

/// Install `window.rubricEditor.{values, validate, validationErrors}`
pub fn install(ctx: EditorContext) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let api = js_sys::Object::new();

    let values = Closure::<dyn Fn() -> JsValue>::new(move || {
        let json = ctx.read(|editor| editor.to_json());
        match json {
            Ok(json) => js_sys::JSON::parse(&json).unwrap_or(JsValue::NULL),
            Err(e) => {
                log::error!("[automation] {}", e);
                JsValue::NULL
            }
        }
    });
    let validate = Closure::<dyn Fn() -> JsValue>::new(move || {
        let valid = ctx.commit(|editor| editor.validate()).unwrap_or(false);
        JsValue::from_bool(valid)
    });
    let errors = Closure::<dyn Fn() -> JsValue>::new(move || {
        let errors = ctx.read(|editor| editor.validation_errors());
        serde_wasm_bindgen::to_value(&errors).unwrap_or(JsValue::NULL)
    });

    let entries: [(&str, &JsValue); 3] = [
        ("values", values.as_ref()),
        ("validate", validate.as_ref()),
        ("validationErrors", errors.as_ref()),
    ];
    for (key, function) in entries {
        if js_sys::Reflect::set(&api, &JsValue::from_str(key), function).is_err() {
            log::warn!("[automation] could not register {}", key);
        }
    }
    if js_sys::Reflect::set(&window, &JsValue::from_str("rubricEditor"), &api).is_err() {
        log::warn!("[automation] could not attach to window");
    }

    values.forget();
    validate.forget();
    errors.forget();
}
