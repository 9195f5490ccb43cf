//! Result Presentation
//!
//! Pure mappings from service payloads to render models. All number
//! formatting (rounding, percentages, units) lives here.

use crate::catalog::AlgorithmCatalog;
use crate::models::{AlgorithmDescriptor, Decision, Recommendation, SolveResult};

/// At most two decimals, trailing zeros dropped (`240.00` -> `240`)
pub fn format_amount(x: f64) -> String {
    let fixed = format!("{:.2}", x);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn money_label(x: f64) -> String {
    format!("${}", format_amount(x))
}

pub fn weight_label(x: f64) -> String {
    format!("{} kg", format_amount(x))
}

pub fn time_label(micros: f64) -> String {
    format!("{} µs", format_amount(micros))
}

// ========================
// Single Result
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Profit,
    Weight,
    Time,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
    pub tone: CardTone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmInfo {
    pub name: String,
    pub description: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub best_for: Option<String>,
}

impl From<&AlgorithmDescriptor> for AlgorithmInfo {
    fn from(algo: &AlgorithmDescriptor) -> Self {
        Self {
            name: algo.name.clone(),
            description: algo.description.clone(),
            time_complexity: algo.time_complexity.clone(),
            space_complexity: algo.space_complexity.clone(),
            best_for: algo.best_for.clone(),
        }
    }
}

/// Whole items and partial items are badged differently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    Whole,
    Partial,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub name: String,
    pub weight: String,
    pub value: String,
    pub fraction: String,
    pub inclusion: Inclusion,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepRow {
    pub number: u32,
    pub description: String,
    pub weight: String,
    pub profit: String,
    pub decision: Option<Decision>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub summary_cards: Vec<SummaryCard>,
    pub algorithm_info: AlgorithmInfo,
    pub item_rows: Vec<ItemRow>,
    /// `None` hides the steps region entirely
    pub step_rows: Option<Vec<StepRow>>,
}

pub fn to_result_view(result: &SolveResult, algorithm: &AlgorithmDescriptor) -> ResultView {
    let summary_cards = vec![
        SummaryCard {
            label: "Max Profit",
            value: money_label(result.max_profit),
            tone: CardTone::Profit,
        },
        SummaryCard {
            label: "Total Weight",
            value: weight_label(result.total_weight),
            tone: CardTone::Weight,
        },
        SummaryCard {
            label: "Execution Time",
            value: time_label(result.execution_time),
            tone: CardTone::Time,
        },
    ];

    let item_rows = result
        .selected_items
        .iter()
        .map(|item| ItemRow {
            name: item.name.clone(),
            weight: format_amount(item.weight),
            value: format_amount(item.value),
            fraction: format!("{:.0}%", item.fraction * 100.0),
            inclusion: if item.is_whole() { Inclusion::Whole } else { Inclusion::Partial },
        })
        .collect();

    // Received order is kept as-is
    let step_rows = result.steps.as_ref().filter(|steps| !steps.is_empty()).map(|steps| {
        steps
            .iter()
            .map(|step| StepRow {
                number: step.step_number,
                description: step.description.clone(),
                weight: weight_label(step.current_weight),
                profit: money_label(step.current_profit),
                decision: step.decision,
            })
            .collect()
    });

    ResultView {
        summary_cards,
        algorithm_info: AlgorithmInfo::from(algorithm),
        item_rows,
        step_rows,
    }
}

// ========================
// Recommendation
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    /// Thresholds apply to the rounded percentage
    pub fn from_percent(percent: u32) -> Self {
        if percent >= 80 {
            ConfidenceTier::High
        } else if percent >= 60 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationView {
    pub algorithm_name: String,
    pub reason: String,
    pub time_complexity: String,
    pub confidence_percent: u32,
    pub confidence_tier: ConfidenceTier,
    pub time_label: String,
}

pub fn to_recommendation_view(recommendation: &Recommendation) -> RecommendationView {
    let confidence_percent = (recommendation.confidence.clamp(0.0, 1.0) * 100.0).round() as u32;
    RecommendationView {
        algorithm_name: recommendation.metadata.name.clone(),
        reason: recommendation.reason.clone(),
        time_complexity: recommendation.metadata.time_complexity.clone(),
        confidence_percent,
        confidence_tier: ConfidenceTier::from_percent(confidence_percent),
        time_label: format!("~{:.2} µs", recommendation.estimated_time),
    }
}

// ========================
// Comparison
// ========================

/// Index of the best entry under `better`; ties keep the first one.
/// Entries that carry their own error only count when nothing succeeded.
fn pick_best(results: &[SolveResult], better: impl Fn(&SolveResult, &SolveResult) -> bool) -> Option<usize> {
    let any_ok = results.iter().any(|r| r.error.is_none());
    let mut best: Option<(usize, &SolveResult)> = None;
    for (index, result) in results.iter().enumerate() {
        if any_ok && result.error.is_some() {
            continue;
        }
        match best {
            Some((_, current)) if !better(result, current) => {}
            _ => best = Some((index, result)),
        }
    }
    best.map(|(index, _)| index)
}

/// Minimal execution time, first occurrence on ties
pub fn fastest_index(results: &[SolveResult]) -> Option<usize> {
    pick_best(results, |a, b| a.execution_time < b.execution_time)
}

/// Maximal profit, first occurrence on ties
pub fn most_profitable_index(results: &[SolveResult]) -> Option<usize> {
    pick_best(results, |a, b| a.max_profit > b.max_profit)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub algorithm_id: String,
    pub algorithm_name: String,
    pub time_complexity: String,
    pub profit: String,
    pub weight: String,
    pub items_selected: usize,
    pub time: String,
    pub is_fastest: bool,
    pub is_most_profitable: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Champion {
    pub index: usize,
    pub algorithm_id: String,
    pub algorithm_name: String,
    pub headline: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonView {
    pub fastest: Champion,
    pub most_profitable: Champion,
    pub rows: Vec<ComparisonRow>,
}

/// `None` for an empty set, which the service never sends
pub fn to_comparison_view(results: &[SolveResult], catalog: &AlgorithmCatalog) -> Option<ComparisonView> {
    let fastest = fastest_index(results)?;
    let most_profitable = most_profitable_index(results)?;

    let champion = |index: usize, headline: String| {
        let id = results[index].algorithm.clone();
        Champion {
            index,
            algorithm_name: catalog.describe(&id).name,
            algorithm_id: id,
            headline,
        }
    };

    let rows = results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            let algo = catalog.describe(&result.algorithm);
            ComparisonRow {
                algorithm_id: result.algorithm.clone(),
                algorithm_name: algo.name,
                time_complexity: algo.time_complexity,
                profit: money_label(result.max_profit),
                weight: weight_label(result.total_weight),
                items_selected: result.selected_items.len(),
                time: time_label(result.execution_time),
                is_fastest: index == fastest,
                is_most_profitable: index == most_profitable,
                error: result.error.clone(),
            }
        })
        .collect();

    Some(ComparisonView {
        fastest: champion(fastest, time_label(results[fastest].execution_time)),
        most_profitable: champion(most_profitable, money_label(results[most_profitable].max_profit)),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SelectedItem, Step};
    use crate::orchestrator::tests::result;
    use proptest::prelude::*;

    fn greedy() -> AlgorithmDescriptor {
        AlgorithmDescriptor {
            id: "greedy".to_string(),
            name: "Greedy Algorithm".to_string(),
            description: "Sorts items by value-to-weight ratio".to_string(),
            time_complexity: "O(n log n)".to_string(),
            space_complexity: "O(1)".to_string(),
            best_for: Some("Fractional knapsack problems".to_string()),
            worst_case: None,
            optimal: Some(false),
            category: Some("greedy".to_string()),
        }
    }

    fn selected(name: &str, weight: f64, value: f64, fraction: f64) -> SelectedItem {
        SelectedItem {
            name: name.to_string(),
            weight,
            value,
            fraction,
        }
    }

    /// Fractional relaxation of the small delivery instance
    fn fractional() -> SolveResult {
        SolveResult {
            algorithm: "greedy".to_string(),
            max_profit: 240.0,
            total_weight: 50.0,
            execution_time: 18.73,
            selected_items: vec![
                selected("Package A", 10.0, 60.0, 1.0),
                selected("Package B", 20.0, 100.0, 1.0),
                selected("Package C", 30.0, 120.0, 0.6667),
            ],
            steps: None,
            error: None,
        }
    }

    fn step(number: u32, weight: f64, profit: f64) -> Step {
        Step {
            step_number: number,
            description: format!("step {}", number),
            current_weight: weight,
            current_profit: profit,
            decision: None,
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(240.0), "240");
        assert_eq!(format_amount(18.73), "18.73");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(80.000_000_1), "80");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(-0.001), "0");
    }

    #[test]
    fn test_fractional_result_view() {
        let view = to_result_view(&fractional(), &greedy());

        let values: Vec<&str> = view.summary_cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["$240", "50 kg", "18.73 µs"]);

        let badges: Vec<(&str, Inclusion)> = view
            .item_rows
            .iter()
            .map(|row| (row.fraction.as_str(), row.inclusion))
            .collect();
        assert_eq!(
            badges,
            vec![("100%", Inclusion::Whole), ("100%", Inclusion::Whole), ("67%", Inclusion::Partial)]
        );
        assert_eq!(view.algorithm_info.name, "Greedy Algorithm");
    }

    #[test]
    fn test_missing_or_empty_steps_hide_region() {
        let mut result = fractional();
        assert!(to_result_view(&result, &greedy()).step_rows.is_none());

        result.steps = Some(Vec::new());
        assert!(to_result_view(&result, &greedy()).step_rows.is_none());
    }

    #[test]
    fn test_steps_keep_received_order() {
        let mut result = fractional();
        result.steps = Some(vec![step(1, 10.0, 60.0), step(2, 30.0, 160.0), step(3, 50.0, 240.0)]);

        let rows = to_result_view(&result, &greedy()).step_rows.unwrap();
        let numbers: Vec<u32> = rows.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(rows[1].weight, "30 kg");
        assert_eq!(rows[1].profit, "$160");
    }

    #[test]
    fn test_confidence_tiers() {
        let mut recommendation = Recommendation {
            metadata: greedy(),
            reason: "Capacity exceeds total weight".to_string(),
            confidence: 0.85,
            estimated_time: 0.03,
        };

        let view = to_recommendation_view(&recommendation);
        assert_eq!(view.confidence_percent, 85);
        assert_eq!(view.confidence_tier, ConfidenceTier::High);
        assert_eq!(view.time_label, "~0.03 µs");

        for (confidence, percent, tier) in [
            (0.8, 80, ConfidenceTier::High),
            (0.79, 79, ConfidenceTier::Medium),
            (0.6, 60, ConfidenceTier::Medium),
            (0.595, 60, ConfidenceTier::Medium),
            (0.59, 59, ConfidenceTier::Low),
        ] {
            recommendation.confidence = confidence;
            let view = to_recommendation_view(&recommendation);
            assert_eq!((view.confidence_percent, view.confidence_tier), (percent, tier), "confidence {}", confidence);
        }
    }

    #[test]
    fn test_comparison_champions() {
        let results = vec![
            result("greedy", 100.0, 12.0),
            result("dp-tabulation", 80.0, 5.0),
            result("branch-bound", 150.0, 30.0),
        ];

        assert_eq!(fastest_index(&results), Some(1));
        assert_eq!(most_profitable_index(&results), Some(2));

        let view = to_comparison_view(&results, &AlgorithmCatalog::default()).unwrap();
        assert_eq!(view.fastest.algorithm_id, "dp-tabulation");
        assert_eq!(view.fastest.headline, "5 µs");
        assert_eq!(view.most_profitable.algorithm_id, "branch-bound");
        assert_eq!(view.most_profitable.headline, "$150");
        assert!(view.rows[1].is_fastest && !view.rows[1].is_most_profitable);
        assert_eq!(view.rows[0].items_selected, 1);
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let results = vec![
            result("a", 150.0, 7.0),
            result("b", 150.0, 7.0),
            result("c", 90.0, 7.0),
        ];
        assert_eq!(fastest_index(&results), Some(0));
        assert_eq!(most_profitable_index(&results), Some(0));
    }

    #[test]
    fn test_failed_entries_are_not_champions() {
        let mut failed = result("recursion", 0.0, 0.0);
        failed.error = Some("maximum recursion depth exceeded".to_string());
        let results = vec![failed, result("greedy", 100.0, 12.0)];

        assert_eq!(fastest_index(&results), Some(1));

        let view = to_comparison_view(&results, &AlgorithmCatalog::default()).unwrap();
        assert_eq!(view.rows[0].error.as_deref(), Some("maximum recursion depth exceeded"));
    }

    #[test]
    fn test_empty_comparison() {
        assert!(to_comparison_view(&[], &AlgorithmCatalog::default()).is_none());
    }

    fn distinct_results() -> impl Strategy<Value = Vec<SolveResult>> {
        (
            prop::collection::hash_set(1u32..100_000, 1..8),
            prop::collection::hash_set(0u32..100_000, 8),
        )
            .prop_map(|(times, profits)| {
                times
                    .into_iter()
                    .zip(profits)
                    .enumerate()
                    .map(|(i, (time, profit))| result(&format!("algo-{}", i), profit as f64, time as f64))
                    .collect()
            })
    }

    proptest! {
        #[test]
        fn prop_champions_ignore_order(
            (original, shuffled) in distinct_results()
                .prop_flat_map(|results| (Just(results.clone()), Just(results).prop_shuffle()))
        ) {
            let fastest = |results: &[SolveResult]| fastest_index(results).map(|i| results[i].algorithm.clone());
            let richest = |results: &[SolveResult]| most_profitable_index(results).map(|i| results[i].algorithm.clone());

            prop_assert_eq!(fastest(&original), fastest(&shuffled));
            prop_assert_eq!(richest(&original), richest(&shuffled));
        }
    }
}
