//! 比較結果パネル

use leptos::prelude::*;

use crate::components::comparison_page::ComparisonSignal;

#[component]
pub fn SimilarityResult(session: ComparisonSignal) -> impl IntoView {
    move || {
        session.with(|s| s.result()).map(|score| {
            let tier = score.tier();
            view! {
                <div class="card result">
                    <h3>"Comparison Results"</h3>
                    <div class="result-row">
                        <span>"Similarity Score:"</span>
                        <span class=format!("score score-{}", tier.as_str())>{score.to_string()}</span>
                    </div>
                    <div class="result-message">{tier.message()}</div>
                </div>
            }
        })
    }
}
