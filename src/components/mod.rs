//! UI Components
//!
//! Leptos components for the shopping list view.

mod draft;
mod list_header;
mod new_product_form;
mod product_list;
mod product_row;

pub use draft::take_label;
pub use list_header::ListHeader;
pub use new_product_form::NewProductForm;
pub use product_list::ProductList;
pub use product_row::ProductRow;
