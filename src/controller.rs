//! List Controller
//!
//! Connects view intents to the `ShoppingList` model and republishes the
//! list into a signal the components render from.

use leptos::prelude::*;

use crate::error::ListError;
use crate::models::Item;
use crate::shopping_list::ShoppingList;

/// Intent handlers handed to the view
#[derive(Clone, Copy)]
pub struct ListHandlers {
    pub add: Callback<String>,
    pub delete: Callback<u32>,
    pub toggle: Callback<u32>,
    pub edit: Callback<(u32, String)>,
}

#[derive(Clone, Copy)]
pub struct Controller {
    model: StoredValue<ShoppingList, LocalStorage>,
    /// Copy of the list the view renders from
    items: ReadSignal<Vec<Item>>,
}

impl Controller {
    pub fn new(mut model: ShoppingList) -> Self {
        let (items, set_items) = signal(Vec::<Item>::new());

        // Show what was loaded before the first user action
        set_items.set(model.items().to_vec());
        model.bind_changed(move |items| set_items.set(items.to_vec()));

        Self {
            model: StoredValue::new_local(model),
            items,
        }
    }

    pub fn items(&self) -> ReadSignal<Vec<Item>> {
        self.items
    }

    pub fn handlers(self) -> ListHandlers {
        ListHandlers {
            add: Callback::new(move |label: String| self.add(&label)),
            delete: Callback::new(move |id: u32| self.delete(id)),
            toggle: Callback::new(move |id: u32| self.toggle(id)),
            edit: Callback::new(move |(id, label): (u32, String)| self.edit(id, &label)),
        }
    }

    pub fn add(&self, label: &str) {
        match self.model.try_update_value(|model| model.add(label)) {
            Some(Ok(item)) => log::info!("[CTRL] Added #{} '{}'", item.id, item.label),
            Some(Err(e)) => log_rejected("add", &e),
            None => log::error!("[CTRL] List model was disposed"),
        }
    }

    pub fn delete(&self, id: u32) {
        log::info!("[CTRL] Delete #{}", id);
        self.model.update_value(|model| model.delete(id));
    }

    pub fn toggle(&self, id: u32) {
        log::info!("[CTRL] Toggle #{}", id);
        self.model.update_value(|model| model.toggle(id));
    }

    pub fn edit(&self, id: u32, label: &str) {
        match self.model.try_update_value(|model| model.edit(id, label)) {
            Some(Ok(())) => log::info!("[CTRL] Edit #{}", id),
            Some(Err(e)) => log_rejected("edit", &e),
            None => log::error!("[CTRL] List model was disposed"),
        }
    }
}

fn log_rejected(intent: &str, err: &ListError) {
    match err {
        ListError::InvalidInput(msg) => log::debug!("[CTRL] Ignored {}: {}", intent, msg),
        ListError::IdsExhausted => log::error!("[CTRL] {} failed: {}", intent, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, Storage};

    const KEY: &str = "shoppingList";

    #[test]
    fn test_initial_render_shows_loaded_items() {
        let storage = MemoryStorage::new();
        storage.set_item(KEY, r#"[{"id":1,"label":"milk","isDone":true}]"#).unwrap();

        let controller = Controller::new(ShoppingList::load(Box::new(storage), KEY));

        assert_eq!(
            controller.items().get_untracked(),
            vec![Item { id: 1, label: "milk".to_string(), is_done: true }]
        );
    }

    #[test]
    fn test_intents_rerender() {
        let storage = MemoryStorage::new();
        let controller = Controller::new(ShoppingList::load(Box::new(storage.clone()), KEY));
        let handlers = controller.handlers();

        handlers.add.run("milk".to_string());
        handlers.add.run("eggs".to_string());
        handlers.toggle.run(2);
        handlers.edit.run((1, "oat milk".to_string()));
        handlers.delete.run(2);

        assert_eq!(controller.items().get_untracked(), vec![Item::new(1, "oat milk")]);
        assert_eq!(
            storage.get_item(KEY).unwrap().as_deref(),
            Some(r#"[{"id":1,"label":"oat milk","isDone":false}]"#)
        );
    }

    #[test]
    fn test_blank_add_leaves_view_unchanged() {
        let controller = Controller::new(ShoppingList::load(Box::new(MemoryStorage::new()), KEY));
        controller.add("  ");
        assert!(controller.items().get_untracked().is_empty());
    }

    #[test]
    fn test_blank_edit_leaves_view_unchanged() {
        let storage = MemoryStorage::new();
        let controller = Controller::new(ShoppingList::load(Box::new(storage.clone()), KEY));
        controller.add("milk");

        controller.edit(1, "\t ");

        assert_eq!(controller.items().get_untracked(), vec![Item::new(1, "milk")]);
        assert_eq!(
            storage.get_item(KEY).unwrap().as_deref(),
            Some(r#"[{"id":1,"label":"milk","isDone":false}]"#)
        );
    }
}
