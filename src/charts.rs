//! Result Charts
//!
//! Chart.js configs for the four chart slots and the helpers that redraw them.

use leptos_chartjs::{ChartConfig, ChartData, ChartJs, ChartKind, ChartRegistry, Dataset, Paint};
use serde_json::json;

use crate::catalog::AlgorithmCatalog;
use crate::models::SolveResult;

/// Chart positions on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChartSlot {
    ValueDistribution,
    WeightDistribution,
    TimeComparison,
    ProfitComparison,
}

impl leptos_chartjs::ChartSlot for ChartSlot {
    fn canvas_id(self) -> &'static str {
        match self {
            ChartSlot::ValueDistribution => "valueChart",
            ChartSlot::WeightDistribution => "weightChart",
            ChartSlot::TimeComparison => "timeComparisonChart",
            ChartSlot::ProfitComparison => "profitComparisonChart",
        }
    }
}

pub type Charts = ChartRegistry<ChartSlot, ChartJs>;

const VALUE_PALETTE: [&str; 7] = ["#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#14b8a6"];
const TIME_FILL: [&str; 5] = ["#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6"];
const TIME_BORDER: [&str; 5] = ["#2563eb", "#059669", "#d97706", "#dc2626", "#7c3aed"];
const PROFIT_FILL: [&str; 5] = ["#10b981", "#3b82f6", "#f59e0b", "#ef4444", "#8b5cf6"];
const PROFIT_BORDER: [&str; 5] = ["#059669", "#2563eb", "#d97706", "#dc2626", "#7c3aed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Dark when the root element carries the `dark` class
    pub fn detect() -> Self {
        let dark = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|root| root.class_list().contains("dark"))
            .unwrap_or(false);
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn text(self) -> &'static str {
        match self {
            Theme::Light => "#1f2937",
            Theme::Dark => "#e5e7eb",
        }
    }

    fn grid(self) -> &'static str {
        match self {
            Theme::Light => "#e5e7eb",
            Theme::Dark => "#374151",
        }
    }
}

fn axis(theme: Theme, from_zero: bool, small_labels: bool) -> serde_json::Value {
    let mut ticks = json!({ "color": theme.text() });
    if small_labels {
        ticks["font"] = json!({ "size": 10 });
    }
    json!({
        "beginAtZero": from_zero,
        "ticks": ticks,
        "grid": { "color": theme.grid() },
    })
}

fn item_labels(result: &SolveResult) -> Vec<String> {
    result.selected_items.iter().map(|item| item.name.clone()).collect()
}

/// Doughnut of the value each selected item contributes
pub fn value_distribution(result: &SolveResult, theme: Theme) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: item_labels(result),
            datasets: vec![Dataset {
                label: None,
                data: result.selected_items.iter().map(|item| item.value * item.fraction).collect(),
                background_color: Paint::indexed(&VALUE_PALETTE),
                border_color: Some(Paint::Solid("#fff".to_string())),
                border_width: 2,
            }],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": true,
            "plugins": {
                "legend": {
                    "position": "bottom",
                    "labels": { "color": theme.text(), "padding": 10, "font": { "size": 11 } },
                },
            },
        }),
    }
}

/// Bar of the weight each selected item takes up
pub fn weight_distribution(result: &SolveResult, theme: Theme) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: item_labels(result),
            datasets: vec![Dataset {
                label: Some("Weight (kg)".to_string()),
                data: result.selected_items.iter().map(|item| item.weight * item.fraction).collect(),
                background_color: Paint::Solid("#10b981".to_string()),
                border_color: Some(Paint::Solid("#059669".to_string())),
                border_width: 1,
            }],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": true,
            "scales": { "y": axis(theme, true, false), "x": axis(theme, false, false) },
            "plugins": { "legend": { "display": false } },
        }),
    }
}

fn algorithm_labels(results: &[SolveResult], catalog: &AlgorithmCatalog) -> Vec<String> {
    results.iter().map(|r| catalog.describe(&r.algorithm).name).collect()
}

pub fn time_comparison(results: &[SolveResult], catalog: &AlgorithmCatalog, theme: Theme) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: algorithm_labels(results, catalog),
            datasets: vec![Dataset {
                label: Some("Execution Time (µs)".to_string()),
                data: results.iter().map(|r| r.execution_time).collect(),
                background_color: Paint::indexed(&TIME_FILL),
                border_color: Some(Paint::indexed(&TIME_BORDER)),
                border_width: 1,
            }],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": true,
            "scales": { "y": axis(theme, true, false), "x": axis(theme, false, true) },
            "plugins": { "legend": { "display": false } },
        }),
    }
}

/// Horizontal bars, one per algorithm
pub fn profit_comparison(results: &[SolveResult], catalog: &AlgorithmCatalog, theme: Theme) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: algorithm_labels(results, catalog),
            datasets: vec![Dataset {
                label: Some("Max Profit ($)".to_string()),
                data: results.iter().map(|r| r.max_profit).collect(),
                background_color: Paint::indexed(&PROFIT_FILL),
                border_color: Some(Paint::indexed(&PROFIT_BORDER)),
                border_width: 1,
            }],
        },
        options: json!({
            "indexAxis": "y",
            "responsive": true,
            "maintainAspectRatio": true,
            "scales": { "x": axis(theme, true, false), "y": axis(theme, false, true) },
            "plugins": { "legend": { "display": false } },
        }),
    }
}

fn draw(charts: &mut Charts, slot: ChartSlot, config: &ChartConfig) {
    if let Err(e) = charts.render(slot, config) {
        log::error!("could not draw {:?}: {}", slot, e);
    }
}

/// Destroy every live chart before a new outcome takes over the page
pub fn reset_all(charts: &mut Charts) {
    charts.clear_all();
}

pub fn render_result_charts(charts: &mut Charts, result: &SolveResult) {
    let theme = Theme::detect();
    draw(charts, ChartSlot::ValueDistribution, &value_distribution(result, theme));
    draw(charts, ChartSlot::WeightDistribution, &weight_distribution(result, theme));
}

pub fn render_comparison_charts(charts: &mut Charts, results: &[SolveResult], catalog: &AlgorithmCatalog) {
    let theme = Theme::detect();
    draw(charts, ChartSlot::TimeComparison, &time_comparison(results, catalog, theme));
    draw(charts, ChartSlot::ProfitComparison, &profit_comparison(results, catalog, theme));
}

pub fn clear_result_charts(charts: &mut Charts) {
    charts.clear(ChartSlot::ValueDistribution);
    charts.clear(ChartSlot::WeightDistribution);
}

pub fn clear_comparison_charts(charts: &mut Charts) {
    charts.clear(ChartSlot::TimeComparison);
    charts.clear(ChartSlot::ProfitComparison);
}
