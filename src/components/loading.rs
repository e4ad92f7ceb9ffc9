//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
            <div class="text-gray-400 text-sm mt-3">"Loading analysis data..."</div>
        </div>
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-700 rounded h-12" />
            }).collect_view()}
        </div>
    }
}

/// Empty-state message shown when a fetch returned no records
#[component]
pub fn NoData(
    #[prop(default = "No Analysis Data Available")]
    title: &'static str,
    #[prop(default = "There are currently no analysis results to display.")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 text-center">
            <div class="text-5xl mb-4">"📈"</div>
            <h3 class="text-xl font-semibold">{title}</h3>
            <p class="text-gray-400 mt-2">{message}</p>
        </div>
    }
}
