//! New Product Form Component
//!
//! Text input plus submit button firing the add intent.

use leptos::prelude::*;

use crate::components::take_label;

/// Form for adding a product to the list.
///
/// Blank input never reaches `on_add`; the input is cleared after a submit.
#[component]
pub fn NewProductForm(
    placeholder: &'static str,
    #[prop(into)] on_add: Callback<String>,
) -> impl IntoView {
    let (product_text, set_product_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut label = None;
        set_product_text.update(|text| label = take_label(text));
        if let Some(label) = label {
            on_add.run(label);
        }
    };

    view! {
        <form class="form" on:submit=submit>
            <input
                class="input"
                type="text"
                name="addProduct"
                placeholder=placeholder
                prop:value=move || product_text.get()
                on:input=move |ev| set_product_text.set(event_target_value(&ev))
            />
            <button class="button" type="submit">"Add"</button>
        </form>
    }
}
