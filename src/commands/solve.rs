//! Solve Commands
//!
//! Recommend, solve and compare. All three post the same problem shape.

use serde::{Deserialize, Serialize};

use super::post_json;
use crate::error::ClientError;
use crate::items::Problem;
use crate::models::{Item, Recommendation, SolveResult};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct SolveArgs<'a> {
    items: &'a [Item],
    capacity: f64,
    algorithm: &'a str,
}

#[derive(Deserialize)]
struct CompareReply {
    results: Vec<SolveResult>,
}

// ========================
// Commands
// ========================

pub async fn recommend(base: &str, problem: &Problem) -> Result<Recommendation, ClientError> {
    post_json(base, "/recommend", problem).await
}

pub async fn solve(base: &str, problem: &Problem, algorithm: &str) -> Result<SolveResult, ClientError> {
    let args = SolveArgs {
        items: &problem.items,
        capacity: problem.capacity,
        algorithm,
    };
    post_json(base, "/solve", &args).await
}

/// Every algorithm's result, in service order (never empty)
pub async fn compare(base: &str, problem: &Problem) -> Result<Vec<SolveResult>, ClientError> {
    let reply: CompareReply = post_json(base, "/compare", problem).await?;
    if reply.results.is_empty() {
        return Err(ClientError::Decode {
            endpoint: "/compare".to_string(),
            message: "no results".to_string(),
        });
    }
    Ok(reply.results)
}
