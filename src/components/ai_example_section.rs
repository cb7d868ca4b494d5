//! AI Example Section Component
//!
//! Menu of AI examples on one side, the selected example on the other.
//! Menu entries and panels find each other by identifier only.

use leptos::prelude::*;
use rubric_form::Item;

use crate::components::{CriterionDropdown, DeleteConfirmButton};
use crate::context::{report, use_editor};
use crate::dom::target_value;

#[component]
pub fn AiExampleSection() -> impl IntoView {
    let ctx = use_editor();

    let names = move || {
        ctx.watch_structure(|e| {
            e.ai_examples(|pairs| {
                pairs
                    .menu_items()
                    .iter()
                    .filter_map(|item| item.name().map(str::to_string))
                    .collect::<Vec<_>>()
            })
        })
    };
    let placeholder = move || ctx.watch(|e| e.ai_examples(|pairs| pairs.scope().placeholder_visible));

    view! {
        <section class="ai-examples">
            <h2>"AI Examples"</h2>
            <nav class="ai-example-menu">
                <ul>
                    {move || names().into_iter().map(|name| view! { <AiMenuItem name=name /> }).collect_view()}
                </ul>
                <button
                    type="button"
                    class="add-ai-example-btn"
                    on:click=move |_| {
                        let added = ctx.reshape(|e| e.add_ai_pair().map(|_| ()));
                        report("AiExampleSection", added);
                    }
                >
                    "Add AI Example"
                </button>
            </nav>
            <div class=move || if placeholder() { "ai-example-placeholder" } else { "ai-example-placeholder hidden" }>
                "Select an example to edit it."
            </div>
            {move || names().into_iter().map(|name| view! { <AiExamplePanel name=name /> }).collect_view()}
        </section>
    }
}

/// Menu entry: click selects, × removes the pair
#[component]
fn AiMenuItem(name: String) -> impl IntoView {
    let ctx = use_editor();

    let lookup = name.clone();
    let state = move || {
        ctx.watch(|e| {
            e.ai_examples(|pairs| {
                pairs
                    .menu_items()
                    .iter()
                    .find(|item| item.name() == Some(lookup.as_str()))
                    .map(|item| (item.display().to_string(), item.is_emphasized()))
                    .unwrap_or_default()
            })
        })
    };
    let state_for_class = state.clone();

    let select_name = name.clone();
    let remove_name = name;

    view! {
        <li class=move || if state_for_class().1 { "ai-menu-item selected" } else { "ai-menu-item" }>
            <span
                class="ai-menu-label"
                on:click=move |_| report("AiMenuItem", ctx.commit(|e| e.select_ai_example(&select_name)))
            >
                {move || {
                    let (display, _) = state();
                    if display.is_empty() { "Unnamed Example".to_string() } else { display }
                }}
            </span>
            <DeleteConfirmButton
                button_class="remove-ai-example-btn"
                on_confirm=Callback::new(move |_: ()| report("AiMenuItem", ctx.reshape(|e| e.remove_ai_pair(&remove_name))))
            />
        </li>
    }
}

/// Editable AI example, shown only while selected
#[component]
fn AiExamplePanel(name: String) -> impl IntoView {
    let ctx = use_editor();

    let (label, answer) = ctx.read(|e| {
        e.ai_examples(|pairs| {
            pairs
                .examples()
                .iter()
                .find(|x| x.name() == Some(name.as_str()))
                .map(|x| (x.label().to_string(), x.example().answer().to_string()))
                .unwrap_or_default()
        })
    });

    let lookup = name.clone();
    let hidden = move || {
        ctx.watch(|e| {
            e.ai_examples(|pairs| {
                pairs
                    .examples()
                    .iter()
                    .find(|x| x.name() == Some(lookup.as_str()))
                    .map(|x| x.is_hidden())
                    .unwrap_or(true)
            })
        })
    };
    let lookup = name.clone();
    let selects = move || {
        ctx.watch(|e| {
            e.ai_examples(|pairs| {
                pairs
                    .examples()
                    .iter()
                    .find(|x| x.name() == Some(lookup.as_str()))
                    .map(|x| x.example().selects().to_vec())
                    .unwrap_or_default()
            })
        })
    };

    let pick_name = name.clone();
    let pick = Callback::new(move |(criterion, option): (String, String)| {
        let picked = ctx.commit(|e| {
            e.update_ai_example(&pick_name, |x| x.example_mut().select_option(&criterion, &option))
        });
        if let Some(Ok(false)) = picked {
            log::warn!("[AiExamplePanel] unknown option {:?} for {:?}", option, criterion);
        }
    });

    let label_name = name.clone();
    let answer_name = name.clone();
    let commit_name = name;
    let commit = move || {
        let name = commit_name.clone();
        report("AiExamplePanel", ctx.commit(move |e| e.commit_ai_example(&name)));
    };
    let commit_answer = commit.clone();

    view! {
        <div class=move || if hidden() { "ai-example hidden" } else { "ai-example" }>
            <input
                type="text"
                class="ai-example-label"
                placeholder="Example Name"
                prop:value=label
                on:input=move |ev| {
                    let value = target_value(&ev);
                    report("AiExamplePanel", ctx.edit(|e| e.update_ai_example(&label_name, |x| x.set_label(value))));
                }
                on:blur=move |_| commit()
            />
            <textarea
                class="ai-example-answer"
                placeholder="Response"
                prop:value=answer
                on:input=move |ev| {
                    let value = target_value(&ev);
                    report("AiExamplePanel", ctx.edit(|e| e.update_ai_example(&answer_name, |x| x.example_mut().set_answer(value))));
                }
                on:blur=move |_| commit_answer()
            ></textarea>
            <div class="example-selects">
                {move || selects().into_iter().map(|select| view! {
                    <CriterionDropdown select=select on_pick=pick />
                }).collect_view()}
            </div>
        </div>
    }
}
