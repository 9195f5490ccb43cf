//! Item Table Component
//!
//! Editable item rows plus the capacity input. Rows are keyed by position
//! and read their cells reactively: an edit updates input values in place,
//! and only a change in length adds or drops rows.

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::config::AppConfig;
use crate::items::{parse_amount, Column};
use crate::models::ItemField;
use crate::notifications::use_notifier;
use crate::store::{
    store_add_item, store_clear_items, store_remove_item, store_set_capacity, store_update_item,
    use_app_store, AppStateStoreFields,
};

#[component]
fn ItemRow(index: usize) -> impl IntoView {
    let store = use_app_store();
    let cell = move |column: Column| store.items().read().cell_text(index, column);

    view! {
        <tr>
            <td>
                <input
                    type="text"
                    prop:value=move || cell(Column::Name)
                    on:change=move |ev| {
                        store_update_item(&store, index, ItemField::Name(event_target_value(&ev)));
                    }
                />
            </td>
            <td>
                <input
                    type="number"
                    min="0.1"
                    step="0.1"
                    prop:value=move || cell(Column::Weight)
                    on:change=move |ev| {
                        let weight = parse_amount(&event_target_value(&ev));
                        store_update_item(&store, index, ItemField::Weight(weight));
                    }
                />
            </td>
            <td>
                <input
                    type="number"
                    min="0"
                    step="1"
                    prop:value=move || cell(Column::Value)
                    on:change=move |ev| {
                        let value = parse_amount(&event_target_value(&ev));
                        store_update_item(&store, index, ItemField::Value(value));
                    }
                />
            </td>
            <td>
                <button class="btn btn-danger btn-small" on:click=move |_| store_remove_item(&store, index)>
                    "Remove"
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn ItemTable() -> impl IntoView {
    let store = use_app_store();
    let notifier = use_notifier();
    let default_capacity = use_context::<AppConfig>()
        .expect("AppConfig should be provided")
        .default_capacity;

    view! {
        <section class="panel items">
            <div class="panel-header">
                <h2>"Items"</h2>
                <span class="item-count">{move || format!("{} items added", store.items().read().len())}</span>
            </div>

            <label class="capacity-field">
                "Capacity (kg)"
                <input
                    type="number"
                    min="0.1"
                    step="0.1"
                    placeholder=default_capacity.to_string()
                    prop:value=move || store.items().read().capacity().to_string()
                    on:change=move |ev| store_set_capacity(&store, parse_amount(&event_target_value(&ev)))
                />
            </label>

            <table class="items-table">
                <thead>
                    <tr>
                        <th>"Item"</th>
                        <th>"Weight (kg)"</th>
                        <th>"Value ($)"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || 0..store.items().read().len()
                        key=|index: &usize| *index
                        children=move |index| view! { <ItemRow index=index /> }
                    />
                </tbody>
            </table>
            <Show when=move || store.items().read().is_empty()>
                <p class="placeholder">"No items yet. Add one or load a preset."</p>
            </Show>

            <div class="items-actions">
                <button class="btn" on:click=move |_| store_add_item(&store)>"+ Add Item"</button>
                <ConfirmButton
                    label="Clear All"
                    prompt="Clear all items?"
                    button_class="btn btn-danger"
                    on_confirm=move |_: ()| {
                        store_clear_items(&store);
                        notifier.info("All items cleared");
                    }
                />
            </div>
        </section>
    }
}
