//! Algorithm Grid Component
//!
//! Catalog cards; the selected algorithm is highlighted.

use leptos::prelude::*;

use crate::store::{store_select_algorithm, use_app_store, AppStateStoreFields};

#[component]
pub fn AlgorithmGrid() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="panel algorithms">
            <h2>"Algorithm"</h2>
            <div class="algorithm-grid">
                {move || {
                    let catalog = store.catalog().get();
                    if !catalog.is_loaded() {
                        return view! { <p class="placeholder">"No algorithms loaded yet."</p> }.into_any();
                    }
                    catalog.all().iter().cloned().map(|algo| {
                        let class = if algo.id == catalog.selected() {
                            "algorithm-card algorithm-selected"
                        } else {
                            "algorithm-card"
                        };
                        let id = algo.id.clone();
                        view! {
                            <div class=class on:click=move |_| store_select_algorithm(&store, &id)>
                                <h3>{algo.name}</h3>
                                <p class="algorithm-description">{algo.description}</p>
                                <div class="algorithm-meta">
                                    <div>"Time: " {algo.time_complexity}</div>
                                    <div>"Space: " {algo.space_complexity}</div>
                                    {algo.best_for.map(|best| view! { <div>"Best for: " {best}</div> })}
                                </div>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </section>
    }
}
