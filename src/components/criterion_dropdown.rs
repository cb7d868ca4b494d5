//! Criterion Dropdown Component
//!
//! Option picker for one criterion inside a training or AI example.

use leptos::prelude::*;
use rubric_form::CriterionSelect;

use crate::dom::target_value;

/// Dropdown listing the criterion's options; reports `(criterion, option)`
#[component]
pub fn CriterionDropdown(
    select: CriterionSelect,
    #[prop(into)] on_pick: Callback<(String, String)>,
) -> impl IntoView {
    let criterion = select.criterion().to_string();
    let selected = select.selected().to_string();
    let class = if select.is_marked() { "example-option invalid" } else { "example-option" };

    let choices = select
        .choices()
        .iter()
        .map(|choice| {
            let is_selected = choice.value == selected;
            view! {
                <option value=choice.value.clone() selected=is_selected>
                    {choice.display.clone()}
                </option>
            }
        })
        .collect_view();

    view! {
        <label class="example-criterion">
            <span class="example-criterion-name">{select.label().to_string()}</span>
            <select
                class=class
                prop:value=selected.clone()
                on:change=move |ev| on_pick.run((criterion.clone(), target_value(&ev)))
            >
                {choices}
            </select>
        </label>
    }
}
