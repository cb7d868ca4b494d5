//! Criterion List Component
//!
//! Editable criteria, each with its own option rows.

use leptos::prelude::*;
use rubric_form::{Feedback, Item};

use crate::components::{DeleteConfirmButton, OptionRow};
use crate::context::{report, use_editor};
use crate::dom::target_value;

/// Feedback options
const FEEDBACK_CHOICES: &[(Feedback, &str)] = &[
    (Feedback::Disabled, "None"),
    (Feedback::Optional, "Optional"),
    (Feedback::Required, "Required"),
];

/// All criteria plus the add button
#[component]
pub fn CriterionList() -> impl IntoView {
    let ctx = use_editor();
    let count = move || ctx.watch_structure(|e| e.criteria().len());

    view! {
        <section class="criteria">
            {move || (0..count()).map(|index| view! { <CriterionCard index=index /> }).collect_view()}
            <button
                type="button"
                class="add-criterion-btn"
                on:click=move |_| {
                    let name = ctx.reshape(|e| e.add_criterion());
                    log::debug!("[CriterionList] added {:?}", name);
                }
            >
                "Add Criterion"
            </button>
        </section>
    }
}

/// One criterion: label, prompt, feedback mode and options
#[component]
fn CriterionCard(index: usize) -> impl IntoView {
    let ctx = use_editor();

    let (label, prompt, feedback) = ctx.read(|e| {
        e.criteria()
            .get(index)
            .map(|c| (c.label().to_string(), c.prompt().to_string(), c.feedback()))
            .unwrap_or_default()
    });
    let name = move || ctx.watch(|e| e.criteria().get(index).and_then(|c| c.name().map(str::to_string)));
    let prompt_marked = move || ctx.watch(|e| e.criteria().get(index).map(|c| c.prompt_marked()).unwrap_or(false));
    let option_count = move || ctx.watch_structure(|e| e.criteria().get(index).map(|c| c.options().len()).unwrap_or(0));

    let commit = move || report("CriterionCard", ctx.commit(|e| e.commit_criterion(index)));

    view! {
        <div class="criterion" data-criterion=name>
            <div class="criterion-header">
                <input
                    type="text"
                    class="criterion-label"
                    placeholder="Criterion Name"
                    prop:value=label
                    on:input=move |ev| {
                        let value = target_value(&ev);
                        report("CriterionCard", ctx.edit(|e| e.criterion_mut(index).map(|c| c.set_label(value))));
                    }
                    on:blur=move |_| commit()
                />
                <DeleteConfirmButton
                    button_class="remove-criterion-btn"
                    on_confirm=Callback::new(move |_: ()| report("CriterionCard", ctx.reshape(|e| e.remove_criterion(index))))
                />
            </div>

            <textarea
                class=move || if prompt_marked() { "criterion-prompt invalid" } else { "criterion-prompt" }
                placeholder="Criterion Prompt"
                prop:value=prompt
                on:input=move |ev| {
                    let value = target_value(&ev);
                    report("CriterionCard", ctx.edit(|e| e.criterion_mut(index).map(|c| c.set_prompt(value))));
                }
                on:blur=move |_| commit()
            ></textarea>

            <label class="criterion-feedback">
                "Feedback "
                <select
                    prop:value=feedback.as_str()
                    on:change=move |ev| {
                        let value = Feedback::from_str(&target_value(&ev));
                        report("CriterionCard", ctx.edit(|e| e.criterion_mut(index).map(|c| c.set_feedback(value))));
                        commit();
                    }
                >
                    {FEEDBACK_CHOICES.iter().map(|(mode, text)| view! {
                        <option value=mode.as_str() selected={*mode == feedback}>{*text}</option>
                    }).collect_view()}
                </select>
            </label>

            <div class="criterion-options">
                {move || (0..option_count()).map(|option| view! {
                    <OptionRow criterion=index index=option />
                }).collect_view()}
            </div>
            <button
                type="button"
                class="add-option-btn"
                on:click=move |_| report("CriterionCard", ctx.reshape(|e| e.add_option(index).map(|_| ())))
            >
                "Add Option"
            </button>
        </div>
    }
}
