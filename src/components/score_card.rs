//! Score Card Components
//!
//! Cards for the report panel and the analytics stats row.

use leptos::*;

/// Threshold above which a call is considered compliant.
pub const GOOD_SCORE_THRESHOLD: f64 = 7.0;

/// Status label for a compliance score, if one is present.
pub fn score_status(score: Option<f64>) -> (&'static str, &'static str) {
    match score {
        Some(s) if s >= GOOD_SCORE_THRESHOLD => ("✅ Good", "text-green-400"),
        Some(_) => ("⚠️ Needs Improvement", "text-yellow-400"),
        None => ("Pending analysis", "text-gray-400"),
    }
}

/// Large compliance score card shown at the top of the report panel
#[component]
pub fn ScoreCard(
    #[prop(into)]
    score: Signal<Option<f64>>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 text-center">
            <div class="text-gray-400 text-sm uppercase tracking-wide">"Compliance Score"</div>
            <div class="text-5xl font-bold mt-3">
                {move || {
                    score.get()
                        .map(|s| format!("{}", s))
                        .unwrap_or_else(|| "—".to_string())
                }}
            </div>
            <div class="mt-3">
                {move || {
                    let (label, color) = score_status(score.get());
                    view! { <span class=format!("text-sm font-medium {}", color)>{label}</span> }
                }}
            </div>
        </div>
    }
}

/// Compact count card (violations found, recommendations, totals)
#[component]
pub fn CountCard(
    icon: &'static str,
    title: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="text-2xl">{icon}</div>
            <div class="text-gray-400 text-sm mt-1">{title}</div>
            <div class="text-2xl font-bold mt-1">{move || value.get()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_status_threshold() {
        assert_eq!(score_status(Some(7.0)).0, "✅ Good");
        assert_eq!(score_status(Some(6.9)).0, "⚠️ Needs Improvement");
        assert_eq!(score_status(None).0, "Pending analysis");
    }
}
