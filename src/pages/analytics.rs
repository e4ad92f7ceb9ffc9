//! Analytics Page
//!
//! Aggregate view over the fetched records: headline summary figures and
//! the two distribution charts. All figures come from the pure aggregator
//! in `crate::core`, recomputed on every render.

use leptos::*;

use crate::api;
use crate::components::{CountCard, EmotionChart, Loading, NoData, ScoreChart};
use crate::core::summarize;
use crate::state::global::GlobalState;

/// Analytics page component
#[component]
pub fn Analytics() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Make sure analysis records are loaded when navigating straight here
    let state_for_effect = state.clone();
    create_effect(move |_| {
        if !state_for_effect.analyses.get_untracked().is_empty() {
            return;
        }
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.analyses_loading.set(true);
            match api::fetch_analyses().await {
                Ok(records) => {
                    state.analyses.set(records);
                    state.mark_refreshed();
                }
                Err(e) => {
                    state.show_error(&format!("Error loading analysis data: {}", e));
                }
            }
            state.analyses_loading.set(false);
        });
    });

    let state_for_view = state.clone();
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Analytics"</h1>
                <p class="text-gray-400 mt-1">"Compliance and sentiment across all analyzed calls"</p>
            </div>

            {move || {
                let state = state_for_view.clone();
                if state.analyses_loading.get() {
                    view! { <Loading /> }.into_view()
                } else if summarize(&state.analyses.get()).is_none() {
                    view! {
                        <NoData
                            title="Nothing to Aggregate"
                            message="No scored analysis results are available yet."
                        />
                    }.into_view()
                } else {
                    view! { <AnalyticsBody /> }.into_view()
                }
            }}
        </div>
    }
}

/// Summary cards and charts, shown once scored records exist
#[component]
fn AnalyticsBody() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_avg = state.clone();
    let average = Signal::derive(move || {
        summarize(&state_avg.analyses.get())
            .map(|s| format!("{:.2}", s.average_compliance))
            .unwrap_or_else(|| "—".to_string())
    });

    let state_total = state.clone();
    let total = Signal::derive(move || {
        summarize(&state_total.analyses.get())
            .map(|s| s.total_calls.to_string())
            .unwrap_or_else(|| "0".to_string())
    });

    let state_emotion = state.clone();
    let top_emotion = Signal::derive(move || {
        summarize(&state_emotion.analyses.get())
            .and_then(|s| s.most_common_emotion)
            .unwrap_or_else(|| "—".to_string())
    });

    view! {
        <div class="space-y-8">
            // Stat cards
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <CountCard icon="🎯" title="Average Compliance" value=average />
                <CountCard icon="📞" title="Total Calls" value=total />
                <CountCard icon="💬" title="Most Common Emotion" value=top_emotion />
            </div>

            // Charts
            <div class="grid lg:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Customer Emotion Distribution"</h2>
                    <EmotionChart />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Compliance Score Distribution"</h2>
                    <ScoreChart />
                </section>
            </div>
        </div>
    }
}
