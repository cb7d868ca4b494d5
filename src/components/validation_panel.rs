//! Validation Panel Component
//!
//! Runs validation over the whole form and lists the messages.

use leptos::prelude::*;

use crate::context::use_editor;
use crate::store::{
    store_clear_errors, store_errors, store_set_errors, store_validated, use_editor_store,
};

#[component]
pub fn ValidationPanel() -> impl IntoView {
    let ctx = use_editor();
    let store = use_editor_store();

    let validate = move |_| {
        let errors = ctx
            .commit(|e| {
                let valid = e.validate();
                log::info!("[ValidationPanel] valid={}", valid);
                e.validation_errors()
            })
            .unwrap_or_default();
        store_set_errors(&store, errors);
    };

    let clear = move |_| {
        ctx.commit(|e| e.clear_validation_errors());
        store_clear_errors(&store);
    };

    view! {
        <section class="validation-panel">
            <button type="button" class="validate-btn" on:click=validate>"Validate"</button>
            <button type="button" class="clear-validation-btn" on:click=clear>"Clear"</button>
            <Show when=move || store_validated(&store)>
                {move || {
                    let errors = store_errors(&store);
                    if errors.is_empty() {
                        view! { <p class="validation-ok">"The rubric is valid."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="validation-errors">
                                {errors.into_iter().map(|message| view! { <li>{message}</li> }).collect_view()}
                            </ul>
                        }.into_any()
                    }
                }}
            </Show>
        </section>
    }
}
