//! Preset Grid Component
//!
//! One card per preset; clicking a card replaces the item list.

use leptos::prelude::*;

use crate::models::{Difficulty, Preset};
use crate::notifications::use_notifier;
use crate::store::{store_apply_preset, use_app_store, AppStateStoreFields};

fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "badge badge-easy",
        Difficulty::Medium => "badge badge-medium",
        Difficulty::Hard => "badge badge-hard",
    }
}

#[component]
pub fn PresetGrid() -> impl IntoView {
    let store = use_app_store();
    let notifier = use_notifier();

    let load = move |preset: &Preset| {
        store_apply_preset(&store, preset);
        notifier.success(format!("Loaded preset: {}", preset.name));
    };

    view! {
        <section class="panel presets">
            <h2>"Presets"</h2>
            <div class="presets-grid">
                {move || {
                    store.presets().get().presets().iter().cloned().map(|preset| {
                        let summary = format!(
                            "{} items • Capacity: {} kg",
                            preset.items.len(),
                            preset.capacity,
                        );
                        let badge = difficulty_class(preset.difficulty);
                        let difficulty = preset.difficulty.label();
                        let name = preset.name.clone();
                        let description = preset.description.clone();
                        view! {
                            <div class="preset-card" on:click=move |_| load(&preset)>
                                <div class="preset-card-header">
                                    <h3>{name}</h3>
                                    <span class=badge>{difficulty}</span>
                                </div>
                                <p class="preset-description">{description}</p>
                                <div class="preset-meta">{summary}</div>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </section>
    }
}
