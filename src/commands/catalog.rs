//! Catalog Commands
//!
//! Presets and algorithm metadata, fetched once at startup.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::get_json;
use crate::error::ClientError;
use crate::models::{AlgorithmDescriptor, Preset};

#[derive(Deserialize)]
struct PresetsReply {
    presets: Vec<Preset>,
}

/// `algorithms` is an object keyed by id; key order is display order
#[derive(Deserialize)]
struct AlgorithmsReply {
    algorithms: Map<String, Value>,
}

pub async fn list_presets(base: &str) -> Result<Vec<Preset>, ClientError> {
    let reply: PresetsReply = get_json(base, "/presets").await?;
    Ok(reply.presets)
}

pub async fn list_algorithms(base: &str) -> Result<Vec<AlgorithmDescriptor>, ClientError> {
    let reply: AlgorithmsReply = get_json(base, "/algorithms").await?;
    descriptors_in_order(reply.algorithms)
}

fn descriptors_in_order(algorithms: Map<String, Value>) -> Result<Vec<AlgorithmDescriptor>, ClientError> {
    algorithms
        .into_iter()
        .map(|(id, value)| {
            serde_json::from_value(value).map_err(|e| ClientError::Decode {
                endpoint: "/algorithms".to_string(),
                message: format!("{}: {}", id, e),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::decode_reply;

    #[test]
    fn test_algorithms_keep_service_order() {
        let reply: AlgorithmsReply = decode_reply(
            "/algorithms",
            200,
            r#"{"algorithms": {
                "greedy": {"id": "greedy", "name": "Greedy Algorithm", "description": "", "timeComplexity": "O(n log n)", "spaceComplexity": "O(1)"},
                "dp-tabulation": {"id": "dp-tabulation", "name": "DP Tabulation", "description": "", "timeComplexity": "O(n × W)", "spaceComplexity": "O(n × W)"},
                "branch-bound": {"id": "branch-bound", "name": "Branch & Bound", "description": "", "timeComplexity": "O(2^n)", "spaceComplexity": "O(n)"}
            }}"#,
        )
        .unwrap();

        let ids: Vec<String> = descriptors_in_order(reply.algorithms)
            .unwrap()
            .into_iter()
            .map(|algo| algo.id)
            .collect();
        assert_eq!(ids, vec!["greedy", "dp-tabulation", "branch-bound"]);
    }

    #[test]
    fn test_presets_reply() {
        let reply: PresetsReply = decode_reply(
            "/presets",
            200,
            r#"{"presets": [{
                "name": "Small Delivery",
                "category": "logistics",
                "difficulty": "easy",
                "description": "Light cargo delivery scenario with 3 packages",
                "capacity": 50,
                "items": [{"item": "Package A", "weight": 10, "value": 60}]
            }]}"#,
        )
        .unwrap();

        assert_eq!(reply.presets[0].items[0].name, "Package A");
        assert_eq!(reply.presets[0].capacity, 50.0);
    }
}
