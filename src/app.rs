//! Items Frontend App
//!
//! Main application component: creation form plus item list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ItemList, NewItemForm};
use crate::models::Item;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (items, set_items) = signal(Vec::<Item>::new());
    let (loading, set_loading) = signal(true);

    // Load items on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_items().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} items", loaded.len()).into());
                    set_items.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching items: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="app">
            <h1>"Leptos Items Demo"</h1>

            <NewItemForm set_items=set_items />

            <ItemList items=items loading=loading />

            <p class="item-count">{move || format!("{} items", items.get().len())}</p>
        </div>
    }
}
