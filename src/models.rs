//! Frontend Models
//!
//! Data structures matching the solver service's JSON payloads.

use serde::{Deserialize, Serialize};

/// Algorithm used until the user picks another one
pub const DEFAULT_ALGORITHM: &str = "greedy";

/// Candidate item (name travels as `item` on the wire)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "item")]
    pub name: String,
    pub weight: f64,
    pub value: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: f64, value: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
        }
    }
}

/// Editable item field
#[derive(Debug, Clone, PartialEq)]
pub enum ItemField {
    Name(String),
    Weight(f64),
    Value(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Example problem instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub category: Option<String>,
    pub capacity: f64,
    pub items: Vec<Item>,
}

/// Algorithm metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub time_complexity: String,
    pub space_complexity: String,
    #[serde(default)]
    pub best_for: Option<String>,
    #[serde(default)]
    pub worst_case: Option<String>,
    #[serde(default)]
    pub optimal: Option<bool>,
    #[serde(default)]
    pub category: Option<String>,
}

fn full_fraction() -> f64 {
    1.0
}

/// Item as chosen by a solver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedItem {
    #[serde(rename = "item")]
    pub name: String,
    pub weight: f64,
    pub value: f64,
    #[serde(default = "full_fraction")]
    pub fraction: f64,
}

impl SelectedItem {
    pub fn is_whole(&self) -> bool {
        self.fraction == 1.0
    }
}

/// Solver's decision for one step of its trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Include,
    Partial,
    Skip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub step_number: u32,
    pub description: String,
    pub current_weight: f64,
    pub current_profit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,
}

/// One algorithm's answer; `execution_time` is in microseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    pub algorithm: String,
    pub max_profit: f64,
    pub total_weight: f64,
    pub execution_time: f64,
    #[serde(default)]
    pub selected_items: Vec<SelectedItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
    /// Set on comparison entries whose algorithm failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub metadata: AlgorithmDescriptor,
    pub reason: String,
    pub confidence: f64,
    pub estimated_time: f64,
}

/// Result of a solve cycle; the recommendation is advisory and may be missing
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    pub result: SolveResult,
    pub recommendation: Option<Recommendation>,
}

/// Everything currently shown in the results area
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Solved(SolveOutcome),
    Compared(Vec<SolveResult>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_uses_wire_name() {
        let json = serde_json::to_value(Item::new("Package A", 10.0, 60.0)).unwrap();
        assert_eq!(json, serde_json::json!({"item": "Package A", "weight": 10.0, "value": 60.0}));
    }

    #[test]
    fn test_solve_result_without_steps() {
        let result: SolveResult = serde_json::from_value(serde_json::json!({
            "algorithm": "dp-tabulation",
            "maxProfit": 220,
            "totalWeight": 50,
            "executionTime": 41.5,
            "selectedItems": [{"item": "Package B", "weight": 20, "value": 100}]
        }))
        .unwrap();

        assert!(result.steps.is_none());
        assert!(result.selected_items[0].is_whole());
        assert_eq!(result.execution_time, 41.5);
    }

    #[test]
    fn test_step_decision_is_optional() {
        let step: Step = serde_json::from_value(serde_json::json!({
            "stepNumber": 3,
            "description": "Partially including Package C",
            "currentWeight": 50,
            "currentProfit": 240,
            "decision": "partial"
        }))
        .unwrap();
        assert_eq!(step.decision, Some(Decision::Partial));

        let bare: Step = serde_json::from_value(serde_json::json!({
            "stepNumber": 1,
            "description": "start",
            "currentWeight": 0,
            "currentProfit": 0
        }))
        .unwrap();
        assert_eq!(bare.decision, None);
    }
}
