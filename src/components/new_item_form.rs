//! New Item Form Component
//!
//! Form for submitting new items to the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, CreateItemArgs};
use crate::models::Item;

/// Form for creating new items
#[component]
pub fn NewItemForm(set_items: WriteSignal<Vec<Item>>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        if name_value.is_empty() { return; }
        let description_value = description.get();

        spawn_local(async move {
            let args = CreateItemArgs {
                name: &name_value,
                description: &description_value,
            };
            match api::create_item(&args).await {
                Ok(created) => {
                    set_items.update(|items| items.push(created));
                    // Clear the draft only once the backend confirmed
                    set_name.set(String::new());
                    set_description.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error adding item: {}", e).into());
                }
            }
        });
    };

    view! {
        <div class="add-item">
            <h2>"Add New Item"</h2>
            <form class="new-item-form" on:submit=create_item>
                <input
                    type="text"
                    placeholder="Name"
                    required=true
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_description.set(input.value());
                    }
                />
                <button type="submit">"Add Item"</button>
            </form>
        </div>
    }
}
