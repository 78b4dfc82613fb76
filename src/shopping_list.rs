//! Shopping List State
//!
//! Owns the item collection. Every mutation notifies the bound change
//! callback and writes the whole list back to the store before returning.

use crate::error::{ListError, ListResult};
use crate::models::Item;
use crate::storage::Storage;

type ChangedCallback = Box<dyn Fn(&[Item])>;

/// The list model
pub struct ShoppingList {
    items: Vec<Item>,
    storage: Box<dyn Storage>,
    storage_key: String,
    on_changed: Option<ChangedCallback>,
}

impl ShoppingList {
    /// Load the list stored under `storage_key`.
    ///
    /// A missing key, a failed read or unparsable JSON all start an empty list.
    pub fn load(storage: Box<dyn Storage>, storage_key: &str) -> Self {
        let items = match storage.get_item(storage_key) {
            Ok(Some(json)) => serde_json::from_str::<Vec<Item>>(&json).unwrap_or_else(|e| {
                log::warn!("Discarding unreadable list under '{}': {}", storage_key, e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Could not read '{}', starting empty: {}", storage_key, e);
                Vec::new()
            }
        };
        log::debug!("Loaded {} items", items.len());

        Self {
            items,
            storage,
            storage_key: storage_key.to_string(),
            on_changed: None,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Register the change callback, replacing any previous one
    pub fn bind_changed(&mut self, callback: impl Fn(&[Item]) + 'static) {
        self.on_changed = Some(Box::new(callback));
    }

    /// Append a new item. Blank labels are rejected without committing.
    pub fn add(&mut self, label: &str) -> ListResult<Item> {
        if label.trim().is_empty() {
            return Err(ListError::InvalidInput("label is empty".to_string()));
        }

        let item = Item::new(self.next_id()?, label);
        self.items.push(item.clone());
        log::debug!("Added item {}", item.id);
        self.commit();
        Ok(item)
    }

    /// Relabel the item with `id`. Unknown ids leave the list unchanged;
    /// blank labels are rejected without committing.
    pub fn edit(&mut self, id: u32, label: &str) -> ListResult<()> {
        if label.trim().is_empty() {
            return Err(ListError::InvalidInput("label is empty".to_string()));
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.label = label.to_string();
        }
        self.commit();
        Ok(())
    }

    /// Flip the bought flag of the item with `id`
    pub fn toggle(&mut self, id: u32) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.is_done = !item.is_done;
        }
        self.commit();
    }

    pub fn delete(&mut self, id: u32) {
        self.items.retain(|item| item.id != id);
        self.commit();
    }

    fn next_id(&self) -> ListResult<u32> {
        match self.items.iter().map(|item| item.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(ListError::IdsExhausted),
        }
    }

    /// Notify, then persist. Write failures are logged and the in-memory
    /// list stays authoritative.
    fn commit(&self) {
        if let Some(callback) = &self.on_changed {
            callback(&self.items);
        }

        let json = match serde_json::to_string(&self.items) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize list: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set_item(&self.storage_key, &json) {
            log::error!("Failed to persist list: {}", e);
        }
    }
}
