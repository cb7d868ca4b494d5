//! Option Row Component
//!
//! Label, points and explanation inputs for one criterion option.

use leptos::prelude::*;
use rubric_form::RubricOption;

use crate::components::DeleteConfirmButton;
use crate::context::{report, use_editor};
use crate::dom::target_value;

/// A single option of criterion `criterion`
#[component]
pub fn OptionRow(criterion: usize, index: usize) -> impl IntoView {
    let ctx = use_editor();

    let (label, points, explanation) = ctx.read(|e| {
        e.criteria()
            .get(criterion)
            .and_then(|c| c.options().get(index))
            .map(|o| (o.label().to_string(), o.points_raw().to_string(), o.explanation().to_string()))
            .unwrap_or_default()
    });
    let (min, max) = ctx.read(|e| (e.config().points_min, e.config().points_max));
    let points_marked = move || {
        ctx.watch(|e| {
            e.criteria()
                .get(criterion)
                .and_then(|c| c.options().get(index))
                .map(|o| o.points_marked())
                .unwrap_or(false)
        })
    };

    let commit = move || report("OptionRow", ctx.commit(|e| e.commit_option(criterion, index)));
    let edit = move |apply: fn(&mut RubricOption, String), value: String| {
        let written = ctx.edit(|e| {
            e.criterion_mut(criterion)
                .and_then(|c| c.option_mut(index))
                .map(|option| apply(option, value))
        });
        report("OptionRow", written);
    };

    view! {
        <div class="option-row">
            <input
                type="text"
                class="option-label"
                placeholder="Option Name"
                prop:value=label
                on:input=move |ev| edit(|o, v| o.set_label(v), target_value(&ev))
                on:blur=move |_| commit()
            />
            <input
                type="number"
                class=move || if points_marked() { "option-points invalid" } else { "option-points" }
                min=min.to_string()
                max=max.to_string()
                prop:value=points
                on:input=move |ev| edit(|o, v| o.set_points_raw(v), target_value(&ev))
                on:blur=move |_| commit()
            />
            <textarea
                class="option-explanation"
                placeholder="Option Explanation"
                prop:value=explanation
                on:input=move |ev| edit(|o, v| o.set_explanation(v), target_value(&ev))
                on:blur=move |_| commit()
            ></textarea>
            <DeleteConfirmButton
                button_class="remove-option-btn"
                on_confirm=Callback::new(move |_: ()| report("OptionRow", ctx.reshape(|e| e.remove_option(criterion, index))))
            />
        </div>
    }
}
