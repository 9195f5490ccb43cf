//! Recommendation Panel Component

use leptos::prelude::*;

use crate::presentation::{ConfidenceTier, RecommendationView};

#[component]
pub fn RecommendationPanel(recommendation: RecommendationView) -> impl IntoView {
    let tier_class = match recommendation.confidence_tier {
        ConfidenceTier::High => "confidence confidence-high",
        ConfidenceTier::Medium => "confidence confidence-medium",
        ConfidenceTier::Low => "confidence confidence-low",
    };

    view! {
        <section class="panel recommendation">
            <h2>"Recommended Algorithm"</h2>
            <div class="recommendation-header">
                <div>
                    <h3>{recommendation.algorithm_name}</h3>
                    <p class="recommendation-reason">{recommendation.reason}</p>
                </div>
                <div class="recommendation-confidence">
                    <div class=tier_class>{format!("{}%", recommendation.confidence_percent)}</div>
                    <div class="caption">"Confidence"</div>
                </div>
            </div>
            <div class="recommendation-facts">
                <div class="fact">
                    <div class="fact-label">"Time Complexity"</div>
                    <div>{recommendation.time_complexity}</div>
                </div>
                <div class="fact">
                    <div class="fact-label">"Est. Time"</div>
                    <div>{recommendation.time_label}</div>
                </div>
            </div>
        </section>
    }
}
