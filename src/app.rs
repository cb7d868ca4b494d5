//! Rubric Editor App
//!
//! Mounts the editor: criteria, training examples, AI examples and the
//! validation panel.

use leptos::prelude::*;
use reactive_stores::Store;
use rubric_form::{EditorConfig, MapCatalog, RubricEditor, Translator};
use std::rc::Rc;

use crate::automation;
use crate::components::{AiExampleSection, CriterionList, TrainingExampleList, ValidationPanel};
use crate::context::EditorContext;
use crate::dom::body_data;
use crate::store::{store_last_event, store_record_event, EditorState};

/// Config from `<body data-editor-config="...">`, else defaults
fn load_config() -> EditorConfig {
    match body_data("editor-config") {
        Some(json) => EditorConfig::from_json(&json).unwrap_or_else(|e| {
            log::error!("[APP] {}, using defaults", e);
            EditorConfig::default()
        }),
        None => EditorConfig::default(),
    }
}

/// Translations from `<body data-editor-i18n="...">`, else English
fn load_catalog() -> Rc<dyn Translator> {
    match body_data("editor-i18n").map(|json| MapCatalog::from_json(&json)) {
        Some(Ok(catalog)) => Rc::new(catalog),
        Some(Err(e)) => {
            log::error!("[APP] {}, using English", e);
            Rc::new(MapCatalog::default())
        }
        None => Rc::new(MapCatalog::default()),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let ai_enabled = config.ai_examples_enabled;
    let editor = RubricEditor::with_catalog(config, load_catalog());

    let store = Store::new(EditorState::default());
    editor.subscribe(move |notification| {
        log::info!("[APP] {}", notification.event_name());
        store_record_event(&store, notification.event_name());
    });

    let ctx = EditorContext::new(editor);
    provide_context(ctx);
    provide_context(store);
    automation::install(ctx);

    view! {
        <div class="rubric-editor">
            <h1>"Rubric"</h1>

            <CriterionList />

            <p class="rubric-total">
                {move || format!("{} points possible", ctx.watch(|e| e.total_points()))}
            </p>

            <TrainingExampleList />

            <Show when=move || ai_enabled>
                <AiExampleSection />
            </Show>

            <ValidationPanel />

            <p class="last-event">
                {move || store_last_event(&store).unwrap_or_default()}
            </p>
        </div>
    }
}
