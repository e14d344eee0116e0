//! Item List Component
//!
//! Renders fetched items, with a loading indicator while the initial
//! request is in flight.

use leptos::prelude::*;

use crate::models::Item;

/// Item list with loading state
#[component]
pub fn ItemList(
    items: ReadSignal<Vec<Item>>,
    loading: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="items-list">
            <h2>"Items"</h2>
            {move || if loading.get() {
                view! { <p class="loading">"Loading..."</p> }.into_any()
            } else {
                view! {
                    <ul>
                        <For
                            each=move || items.get()
                            key=|item| item.id
                            children=move |item| {
                                view! {
                                    <li>
                                        <strong>{item.name.clone()}</strong>
                                        ": "
                                        {item.description.clone().unwrap_or_default()}
                                    </li>
                                }
                            }
                        />
                    </ul>
                }.into_any()
            }}
        </div>
    }
}
