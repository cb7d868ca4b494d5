//! Training Example List Component
//!
//! Sample answers with one option picked per criterion.

use leptos::prelude::*;

use crate::components::{CriterionDropdown, DeleteConfirmButton};
use crate::context::{report, use_editor};
use crate::dom::target_value;

/// All training examples plus the add button
#[component]
pub fn TrainingExampleList() -> impl IntoView {
    let ctx = use_editor();
    let count = move || ctx.watch_structure(|e| e.training_examples(|examples| examples.len()));

    view! {
        <section class="training-examples">
            <h2>"Training Examples"</h2>
            {move || (0..count()).map(|index| view! { <TrainingExampleCard index=index /> }).collect_view()}
            <button
                type="button"
                class="add-example-btn"
                on:click=move |_| {
                    let index = ctx.reshape(|e| e.add_training_example());
                    log::debug!("[TrainingExampleList] added {:?}", index);
                }
            >
                "Add Training Example"
            </button>
        </section>
    }
}

#[component]
fn TrainingExampleCard(index: usize) -> impl IntoView {
    let ctx = use_editor();

    let answer = ctx.read(|e| {
        e.training_examples(|examples| {
            examples.get(index).map(|x| x.answer().to_string()).unwrap_or_default()
        })
    });
    let selects = move || {
        ctx.watch(|e| {
            e.training_examples(|examples| {
                examples.get(index).map(|x| x.selects().to_vec()).unwrap_or_default()
            })
        })
    };

    let pick = Callback::new(move |(criterion, option): (String, String)| {
        let picked = ctx.commit(|e| {
            e.update_training_example(index, |x| x.select_option(&criterion, &option))
        });
        if let Some(Ok(false)) = picked {
            log::warn!("[TrainingExampleCard] unknown option {:?} for {:?}", option, criterion);
        }
    });

    view! {
        <div class="training-example">
            <textarea
                class="example-answer"
                placeholder="Response"
                prop:value=answer
                on:input=move |ev| {
                    let value = target_value(&ev);
                    report("TrainingExampleCard", ctx.edit(|e| e.update_training_example(index, |x| x.set_answer(value))));
                }
                on:blur=move |_| report("TrainingExampleCard", ctx.commit(|e| e.commit_training_example(index)))
            ></textarea>
            <div class="example-selects">
                {move || selects().into_iter().map(|select| view! {
                    <CriterionDropdown select=select on_pick=pick />
                }).collect_view()}
            </div>
            <DeleteConfirmButton
                button_class="remove-example-btn"
                on_confirm=Callback::new(move |_: ()| report("TrainingExampleCard", ctx.reshape(|e| e.remove_training_example(index))))
            />
        </div>
    }
}
