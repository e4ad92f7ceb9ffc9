//! Dashboard Page
//!
//! Main view: the selected call's analysis report plus the sortable
//! history table. The two upstream fetches are started independently on
//! mount, so the report renders even when the customer source is down.

use leptos::*;

use crate::api;
use crate::components::{AnalysisTable, CountCard, Loading, NoData, ScoreCard};
use crate::core::AnalysisRecord;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch both sources on mount, independently
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.analyses_loading.set(true);
            match api::fetch_analyses().await {
                Ok(records) => {
                    // Default selection: first record of the fetch
                    if state.selected.get_untracked().is_none() {
                        if let Some(first) = records.first() {
                            state.select(&first.contact_id);
                        }
                    }
                    state.analyses.set(records);
                    state.mark_refreshed();
                }
                Err(e) => {
                    state.show_error(&format!("Error loading analysis data: {}", e));
                }
            }
            state.analyses_loading.set(false);
        });

        let state = state_for_effect.clone();
        spawn_local(async move {
            state.customers_loading.set(true);
            match api::fetch_customers().await {
                Ok(records) => {
                    state.customers.set(records);
                }
                Err(e) => {
                    // Customer data is auxiliary here; degrade quietly
                    web_sys::console::error_1(
                        &format!("Failed to fetch customers: {}", e).into(),
                    );
                }
            }
            state.customers_loading.set(false);
        });
    });

    let state_for_view = state.clone();
    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Call Analysis Results"</h1>
                    <p class="text-gray-400 mt-1">"Compliance reports for analyzed calls"</p>
                </div>

                <div class="text-sm text-gray-400">
                    {move || format!("{} calls", state.analyses.get().len())}
                </div>
            </div>

            {move || {
                let state = state_for_view.clone();
                if state.analyses_loading.get() {
                    view! { <Loading /> }.into_view()
                } else if state.analyses.get().is_empty() {
                    view! { <NoData /> }.into_view()
                } else {
                    view! {
                        <div class="space-y-8">
                            {move || {
                                state.selected_analysis().map(|record| view! {
                                    <ReportPanel record=record />
                                })
                            }}
                            <HistorySection />
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Detail panel for the selected analysis record
#[component]
fn ReportPanel(record: AnalysisRecord) -> impl IntoView {
    let analysis = record.analysis.clone().unwrap_or_default();
    let score = record.compliance_score();
    let violations = analysis.violations.clone();
    let recommendations = analysis.recommendations.clone();
    let violation_count = violations.len().to_string();
    let recommendation_count = recommendations.len().to_string();

    let customer_line = record
        .customer_info
        .as_ref()
        .map(|c| c.full_name())
        .filter(|n| !n.is_empty());

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            // Report header
            <div class="mb-6">
                <h2 class="text-xl font-semibold">"Call Analysis Report"</h2>
                <div class="flex flex-wrap gap-4 text-sm text-gray-400 mt-2">
                    <span>"🕒 " {crate::components::analysis_table::format_timestamp(&record.analysis_timestamp)}</span>
                    <span>"📁 " {record.contact_id.clone()}</span>
                    <span>"📞 " {record.phone_number.clone()}</span>
                    {customer_line.map(|name| view! { <span>"👤 " {name}</span> })}
                </div>
            </div>

            // Score and summary counts
            <div class="grid md:grid-cols-3 gap-4">
                <ScoreCard score=Signal::derive(move || score) />
                <CountCard
                    icon="⚠️"
                    title="Violations Found"
                    value=Signal::derive(move || violation_count.clone())
                />
                <CountCard
                    icon="💡"
                    title="Recommendations"
                    value=Signal::derive(move || recommendation_count.clone())
                />
            </div>

            // Violations and recommendations
            <div class="grid md:grid-cols-2 gap-6 mt-6">
                <NumberedList title="⚠️ Violations Detected" items=violations />
                <NumberedList title="💡 Improvement Recommendations" items=recommendations />
            </div>

            // Detailed analysis
            <div class="mt-6">
                <h3 class="font-semibold mb-2">"📋 Detailed Analysis"</h3>
                <p class="text-gray-300 text-sm leading-relaxed bg-gray-700/40 rounded-lg p-4">
                    {if analysis.detailed_analysis.is_empty() {
                        "No detailed analysis available.".to_string()
                    } else {
                        analysis.detailed_analysis.clone()
                    }}
                </p>
            </div>

            // Emotion cards
            <div class="grid md:grid-cols-2 gap-6 mt-6">
                <div class="bg-gray-700/40 rounded-lg p-4">
                    <h3 class="font-semibold mb-2">"Customer Emotion"</h3>
                    <p class="text-gray-300 text-sm">
                        {if analysis.customer_emotion.is_empty() {
                            "—".to_string()
                        } else {
                            analysis.customer_emotion.clone()
                        }}
                    </p>
                </div>
                <div class="bg-gray-700/40 rounded-lg p-4">
                    <h3 class="font-semibold mb-2">"📊 Emotion Analysis"</h3>
                    <p class="text-gray-300 text-sm">
                        {if analysis.emotion_details.is_empty() {
                            "—".to_string()
                        } else {
                            analysis.emotion_details.clone()
                        }}
                    </p>
                </div>
            </div>
        </section>
    }
}

/// Numbered list for violations / recommendations
#[component]
fn NumberedList(title: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <div>
            <h3 class="font-semibold mb-2">{title}</h3>
            {if items.is_empty() {
                view! { <p class="text-gray-500 text-sm">"None"</p> }.into_view()
            } else {
                view! {
                    <ul class="space-y-2">
                        {items.into_iter().enumerate().map(|(idx, item)| view! {
                            <li class="flex items-start space-x-3 text-sm text-gray-300">
                                <span class="bg-gray-700 rounded-full w-6 h-6 flex items-center
                                             justify-center flex-shrink-0 text-xs">
                                    {idx + 1}
                                </span>
                                <span>{item}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_view()
            }}
        </div>
    }
}

/// History table section
#[component]
fn HistorySection() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="mb-4">
                <h2 class="text-xl font-semibold">"Analysis History"</h2>
                <p class="text-gray-400 text-sm mt-1">"Select an analysis result to view details"</p>
            </div>
            <AnalysisTable />
        </section>
    }
}
