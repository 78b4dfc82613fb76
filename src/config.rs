//! App Configuration
//!
//! Storage, logging and UI text settings.

use log::LevelFilter;

/// App-wide settings, built once at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// Name used in log lines
    pub app_name: &'static str,
    /// localStorage key holding the JSON list
    pub storage_key: &'static str,
    pub log_level: LevelFilter,
    pub title: &'static str,
    pub intro: &'static str,
    pub placeholder: &'static str,
    pub empty_message: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "ShoppingList",
            storage_key: "shoppingList",
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
            title: "Shopping List",
            intro: "You can write some products, which you want to buy so that you dont forget about them in the store!",
            placeholder: "Add product",
            empty_message: "Write your shopping list!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_storage_key() {
        let config = AppConfig::default();
        assert_eq!(config.storage_key, "shoppingList");
        assert_eq!(config.empty_message, "Write your shopping list!");
    }
}
