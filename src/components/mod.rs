//! UI Components
//!
//! Reusable Leptos components.

mod item_list;
mod new_item_form;

pub use item_list::ItemList;
pub use new_item_form::NewItemForm;
