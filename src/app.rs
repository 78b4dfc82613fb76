//! Shopping List App
//!
//! Builds store, model, view and controller in dependency order.

use leptos::prelude::*;

use crate::components::{ListHeader, NewProductForm, ProductList};
use crate::config::AppConfig;
use crate::controller::Controller;
use crate::shopping_list::ShoppingList;
use crate::storage::{BrowserStorage, MemoryStorage, Storage};

/// Prefer localStorage; keep the session usable without it
fn open_storage() -> Box<dyn Storage> {
    match BrowserStorage::new() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("[APP] {}, list will not survive a reload", e);
            Box::new(MemoryStorage::new())
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let model = ShoppingList::load(open_storage(), config.storage_key);
    let controller = Controller::new(model);
    let handlers = controller.handlers();

    view! {
        <div class="app">
            <ListHeader title=config.title intro=config.intro />

            <NewProductForm placeholder=config.placeholder on_add=handlers.add />

            <ProductList
                items=controller.items()
                empty_message=config.empty_message
                on_toggle=handlers.toggle
                on_edit=handlers.edit
                on_delete=handlers.delete
            />
        </div>
    }
}
