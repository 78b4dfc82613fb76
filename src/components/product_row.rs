//! Product Row Component
//!
//! Checkbox, inline-editable label and delete button for one item.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::take_label;
use crate::models::Item;

/// A single list row.
///
/// Typing into the label only updates a local draft; the edit intent fires
/// when the label loses focus with a non-blank draft.
#[component]
pub fn ProductRow(
    item: Item,
    #[prop(into)] on_toggle: Callback<u32>,
    #[prop(into)] on_edit: Callback<(u32, String)>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let id = item.id;
    let is_done = item.is_done;
    let draft = StoredValue::new(String::new());

    let commit_draft = move || {
        if let Some(label) = draft.try_update_value(take_label).flatten() {
            on_edit.run((id, label));
        }
    };

    view! {
        <li class="item" id=id.to_string()>
            <input
                type="checkbox"
                prop:checked=is_done
                on:change=move |_| on_toggle.run(id)
            />
            <span
                class=if is_done { "editable lineThrough" } else { "editable" }
                contenteditable="true"
                on:input=move |ev| {
                    let Some(span) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) else {
                        return;
                    };
                    draft.set_value(span.inner_text());
                }
                on:focusout=move |_| commit_draft()
            >
                {item.label}
            </span>
            <button class="delete" on:click=move |_| on_delete.run(id)>"×"</button>
        </li>
    }
}
