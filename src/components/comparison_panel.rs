//! Comparison Panel Component
//!
//! Every algorithm's result on the same instance, with the fastest and most
//! profitable entries called out.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_chartjs::{ChartCanvas, ChartSlot as _};

use crate::charts::{clear_comparison_charts, render_comparison_charts, ChartSlot};
use crate::context::AppContext;
use crate::export::{export_comparison, BrowserDownload};
use crate::models::SolveResult;
use crate::presentation::{to_comparison_view, Champion};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn ChampionCard(#[prop(into)] title: String, #[prop(into)] tone: String, champion: Champion) -> impl IntoView {
    view! {
        <div class=tone>
            <div class="champion-title">{title}</div>
            <div class="champion-name">{champion.algorithm_name}</div>
            <div class="champion-headline">{champion.headline}</div>
        </div>
    }
}

#[component]
pub fn ComparisonPanel(results: Vec<SolveResult>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let catalog = store.catalog().get_untracked();
    let Some(comparison) = to_comparison_view(&results, &catalog) else {
        log::warn!("comparison came back empty");
        return ().into_any();
    };

    let results = StoredValue::new(results);
    Effect::new(move |_| {
        results.with_value(|results| ctx.with_charts(|charts| render_comparison_charts(charts, results, &catalog)));
    });
    on_cleanup(move || ctx.with_charts(clear_comparison_charts));

    let export_csv = move |_| {
        let api = ctx.api();
        let results = results.get_value();
        spawn_local(async move {
            match export_comparison(&*api, &BrowserDownload, Some(results.as_slice())).await {
                Ok(_) => ctx.notifier.success("Exported comparison to CSV successfully!"),
                Err(e) => ctx.notifier.error(e.user_message("Failed to export comparison")),
            }
        });
    };

    view! {
        <section class="panel comparison">
            <div class="panel-header">
                <h2>"Algorithm Comparison"</h2>
                <button class="btn" on:click=export_csv>"Export Comparison CSV"</button>
            </div>

            <div class="champions">
                <ChampionCard title="⚡ Fastest Algorithm" tone="champion champion-fastest" champion=comparison.fastest />
                <ChampionCard title="💰 Most Profitable" tone="champion champion-profit" champion=comparison.most_profitable />
            </div>

            <table class="comparison-table">
                <thead>
                    <tr>
                        <th>"Algorithm"</th>
                        <th>"Max Profit"</th>
                        <th>"Total Weight"</th>
                        <th>"Items Selected"</th>
                        <th>"Execution Time"</th>
                    </tr>
                </thead>
                <tbody>
                    {comparison.rows.into_iter().map(|row| {
                        let row_class = if row.error.is_some() { "row-failed" } else { "" };
                        view! {
                            <tr class=row_class>
                                <td>
                                    <div class="algorithm-name">{row.algorithm_name}</div>
                                    <div class="caption">{row.time_complexity}</div>
                                    {row.error.map(|error| view! { <div class="row-error">{error}</div> })}
                                </td>
                                <td>
                                    {row.profit}
                                    {row.is_most_profitable.then(|| view! { <span class="mark-profit">" 🏆"</span> })}
                                </td>
                                <td>{row.weight}</td>
                                <td>{row.items_selected}</td>
                                <td>
                                    {row.time}
                                    {row.is_fastest.then(|| view! { <span class="mark-fastest">" ⚡"</span> })}
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </section>

        <section class="panel charts">
            <div class="charts-grid">
                <ChartCanvas canvas_id=ChartSlot::TimeComparison.canvas_id() title="Execution Time Comparison" />
                <ChartCanvas canvas_id=ChartSlot::ProfitComparison.canvas_id() title="Profit Comparison" />
            </div>
        </section>
    }
    .into_any()
}
