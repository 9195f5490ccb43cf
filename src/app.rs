//! Knapsack Solver App
//!
//! Main application component: instance editing on the left, results on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::charts::reset_all;
use crate::commands::{HttpApi, KnapsackApi};
use crate::components::{ActionBar, AlgorithmGrid, ComparisonPanel, ItemTable, PresetGrid, ResultPanel, ToastStack};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Outcome;
use crate::notifications::Notifier;
use crate::orchestrator::Completion;
use crate::store::{store_show_compared, store_show_solved, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::with_capacity(config.default_capacity));
    let notifier = Notifier::new(config.toast);
    let ctx = AppContext::new(HttpApi::new(config.api_base_url.clone()), notifier);

    // Provide context to all children
    provide_context(store);
    provide_context(notifier);
    provide_context(ctx);
    provide_context(config);

    // Load presets and the algorithm catalog on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.presets().await {
                Ok(presets) => {
                    log::info!("loaded {} presets", presets.len());
                    store.presets().write().load(presets);
                }
                Err(e) => {
                    log::error!("{}", e);
                    notifier.error("Failed to load presets");
                }
            }
            match api.algorithms().await {
                Ok(algorithms) => {
                    log::info!("loaded {} algorithms", algorithms.len());
                    store.catalog().write().load(algorithms);
                }
                Err(e) => {
                    log::error!("{}", e);
                    notifier.error("Failed to load algorithms");
                }
            }
        });
    });

    let on_solve = move |_: ()| {
        let problem = store.items().read_untracked().problem();
        let algorithm = store.catalog().read_untracked().selected().to_string();
        let request = ctx.orchestrator().solve(problem, algorithm);
        ctx.begin_request();
        spawn_local(async move {
            let reply = request.await;
            ctx.end_request();
            match reply {
                Ok(Completion::Current(outcome)) => {
                    ctx.with_charts(reset_all);
                    store_show_solved(&store, outcome);
                    notifier.success("Solution computed successfully!");
                }
                Ok(Completion::Superseded) => log::debug!("solve reply superseded"),
                Err(e) => notifier.error(e.user_message("Failed to solve problem. Please try again.")),
            }
        });
    };

    let on_compare = move |_: ()| {
        let problem = store.items().read_untracked().problem();
        let request = ctx.orchestrator().compare(problem);
        ctx.begin_request();
        spawn_local(async move {
            let reply = request.await;
            ctx.end_request();
            match reply {
                Ok(Completion::Current(results)) => {
                    ctx.with_charts(reset_all);
                    store_show_compared(&store, results);
                    notifier.success("Algorithm comparison completed!");
                }
                Ok(Completion::Superseded) => log::debug!("compare reply superseded"),
                Err(e) => notifier.error(e.user_message("Failed to compare algorithms")),
            }
        });
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Knapsack Problem Solver"</h1>
            </header>

            <main class="main-content">
                <div class="column column-input">
                    <PresetGrid />
                    <ItemTable />
                    <AlgorithmGrid />
                    <ActionBar on_solve=on_solve on_compare=on_compare />
                </div>

                <div class="column column-output">
                    {move || match store.outcome().get() {
                        Some(Outcome::Solved(outcome)) => view! { <ResultPanel outcome=outcome /> }.into_any(),
                        Some(Outcome::Compared(results)) => view! { <ComparisonPanel results=results /> }.into_any(),
                        None => view! {
                            <p class="placeholder">"Add items and press Solve to see results."</p>
                        }.into_any(),
                    }}
                </div>
            </main>

            <ToastStack />
        </div>
    }
}
