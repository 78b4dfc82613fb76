//! Product List Component
//!
//! Redraws every row from the current snapshot on each change.

use leptos::prelude::*;

use crate::components::ProductRow;
use crate::models::Item;

/// The shopping list, or the empty-state message when there is nothing in it
#[component]
pub fn ProductList(
    items: ReadSignal<Vec<Item>>,
    empty_message: &'static str,
    #[prop(into)] on_toggle: Callback<u32>,
    #[prop(into)] on_edit: Callback<(u32, String)>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    view! {
        <ul class="list">
            {move || {
                let items = items.get();
                if items.is_empty() {
                    view! { <p class="offer">{empty_message}</p> }.into_any()
                } else {
                    items.into_iter().map(move |item| view! {
                        <ProductRow
                            item=item
                            on_toggle=on_toggle
                            on_edit=on_edit
                            on_delete=on_delete
                        />
                    }).collect_view().into_any()
                }
            }}
        </ul>
        <p class="item-count">{move || list_summary(&items.get())}</p>
    }
}

/// Footer line, e.g. "3 items, 1 bought"
pub fn list_summary(items: &[Item]) -> String {
    let bought = items.iter().filter(|item| item.is_done).count();
    format!("{} items, {} bought", items.len(), bought)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_summary() {
        assert_eq!(list_summary(&[]), "0 items, 0 bought");

        let mut eggs = Item::new(2, "eggs");
        eggs.is_done = true;
        assert_eq!(list_summary(&[Item::new(1, "milk"), eggs]), "2 items, 1 bought");
    }
}
