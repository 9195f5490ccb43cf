//! Result Panel Component
//!
//! Single-algorithm result: summary cards, algorithm info, selected items,
//! optional step trace and the two distribution charts.

use leptos::prelude::*;
use leptos_chartjs::{ChartCanvas, ChartSlot as _};

use crate::charts::{clear_result_charts, render_result_charts, ChartSlot};
use crate::components::RecommendationPanel;
use crate::context::AppContext;
use crate::models::{Decision, SolveOutcome};
use crate::presentation::{to_recommendation_view, to_result_view, CardTone, Inclusion, StepRow};
use crate::store::{use_app_store, AppStateStoreFields};

fn tone_class(tone: CardTone) -> &'static str {
    match tone {
        CardTone::Profit => "summary-card tone-profit",
        CardTone::Weight => "summary-card tone-weight",
        CardTone::Time => "summary-card tone-time",
    }
}

fn step_marker(decision: Option<Decision>) -> &'static str {
    match decision {
        Some(Decision::Include) => "step-marker step-include",
        Some(Decision::Partial) => "step-marker step-partial",
        Some(Decision::Skip) => "step-marker step-skip",
        None => "step-marker",
    }
}

#[component]
fn StepList(steps: Vec<StepRow>) -> impl IntoView {
    view! {
        <div class="steps">
            <h3>"Algorithm Steps"</h3>
            {steps.into_iter().map(|step| view! {
                <div class="step">
                    <span class=step_marker(step.decision)>{step.number}</span>
                    <div class="step-body">
                        <p>{step.description}</p>
                        <div class="step-meta">
                            {format!("Weight: {} | Profit: {}", step.weight, step.profit)}
                        </div>
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn ResultPanel(outcome: SolveOutcome) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let algorithm = store.catalog().read_untracked().describe(&outcome.result.algorithm);
    let view_model = to_result_view(&outcome.result, &algorithm);
    let recommendation = outcome.recommendation.as_ref().map(to_recommendation_view);

    // Canvases exist once the effect runs
    let result = outcome.result;
    Effect::new(move |_| ctx.with_charts(|charts| render_result_charts(charts, &result)));
    on_cleanup(move || ctx.with_charts(clear_result_charts));

    let info = view_model.algorithm_info;

    view! {
        {recommendation.map(|recommendation| view! { <RecommendationPanel recommendation=recommendation /> })}

        <section class="panel results">
            <h2>"Results"</h2>
            <div class="summary-cards">
                {view_model.summary_cards.into_iter().map(|card| view! {
                    <div class=tone_class(card.tone)>
                        <div class="summary-label">{card.label}</div>
                        <div class="summary-value">{card.value}</div>
                    </div>
                }).collect_view()}
            </div>

            <div class="algorithm-info">
                <h3>{info.name}</h3>
                <p>{info.description}</p>
                <div class="algorithm-meta">
                    <span>"Time: " {info.time_complexity}</span>
                    <span>"Space: " {info.space_complexity}</span>
                    {info.best_for.map(|best| view! { <span>"Best for: " {best}</span> })}
                </div>
            </div>

            <h3>"Selected Items"</h3>
            <table class="selected-items">
                <thead>
                    <tr>
                        <th>"Item"</th>
                        <th>"Weight (kg)"</th>
                        <th>"Value ($)"</th>
                        <th>"Fraction"</th>
                    </tr>
                </thead>
                <tbody>
                    {view_model.item_rows.into_iter().map(|row| {
                        let badge = match row.inclusion {
                            Inclusion::Whole => "badge badge-success",
                            Inclusion::Partial => "badge badge-warning",
                        };
                        view! {
                            <tr>
                                <td>{row.name}</td>
                                <td>{row.weight}</td>
                                <td>{row.value}</td>
                                <td><span class=badge>{row.fraction}</span></td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            {view_model.step_rows.map(|steps| view! { <StepList steps=steps /> })}
        </section>

        <section class="panel charts">
            <div class="charts-grid">
                <ChartCanvas canvas_id=ChartSlot::ValueDistribution.canvas_id() title="Value Distribution" />
                <ChartCanvas canvas_id=ChartSlot::WeightDistribution.canvas_id() title="Weight Distribution" />
            </div>
        </section>
    }
}
