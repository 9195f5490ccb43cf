//! Action Bar Component
//!
//! Solve / compare triggers, the loading indicator and result export.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::export::{export_result, BrowserDownload, ExportFormat};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ActionBar(
    #[prop(into)] on_solve: Callback<()>,
    #[prop(into)] on_compare: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let export = move |format: ExportFormat| {
        let api = ctx.api();
        let current = store.current_result().get_untracked();
        spawn_local(async move {
            match export_result(&*api, &BrowserDownload, format, current.as_ref()).await {
                Ok(_) => ctx
                    .notifier
                    .success(format!("Exported to {} successfully!", format.label())),
                Err(e) => ctx
                    .notifier
                    .error(e.user_message(&format!("Failed to export {}", format.label()))),
            }
        });
    };

    view! {
        <div class="action-bar">
            <button class="btn btn-primary" on:click=move |_| on_solve.run(())>"Solve"</button>
            <button class="btn btn-secondary" on:click=move |_| on_compare.run(())>"Compare All Algorithms"</button>
            <button class="btn" on:click=move |_| export(ExportFormat::Json)>"Export JSON"</button>
            <button class="btn" on:click=move |_| export(ExportFormat::Csv)>"Export CSV"</button>
            <Show when=move || ctx.is_loading()>
                <div class="loading">
                    <span class="spinner"></span>
                    "Working..."
                </div>
            </Show>
        </div>
    }
}
