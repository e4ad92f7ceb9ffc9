//! Notification Components
//!
//! User-facing messages from the two fetch flows. Errors render as a
//! dismissible banner below the header so a failed fetch stays visible
//! until acknowledged or timed out; successes render as a short-lived
//! pill in the corner.

use leptos::*;

use crate::state::global::GlobalState;

/// Notification layer fed by the global error/success signals
#[component]
pub fn Notifications() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let error = state.error;
    let success = state.success;

    view! {
        // Error banner, dismissible
        {move || {
            error.get().map(|msg| view! {
                <div class="fixed top-20 left-1/2 -translate-x-1/2 z-50 w-full max-w-2xl px-4">
                    <div class="flex items-center justify-between bg-red-900/90 border border-red-600
                                text-red-100 px-4 py-3 rounded-lg shadow-lg">
                        <div class="flex items-center space-x-3">
                            <span class="text-lg">"⚠️"</span>
                            <span class="text-sm">{format!("Error: {}", msg)}</span>
                        </div>
                        <button
                            on:click=move |_| error.set(None)
                            aria-label="Dismiss"
                            class="text-red-300 hover:text-white ml-4"
                        >
                            "✕"
                        </button>
                    </div>
                </div>
            })
        }}

        // Success pill, auto-clears via the state timeout
        {move || {
            success.get().map(|msg| view! {
                <div class="fixed bottom-20 right-4 z-50 flex items-center space-x-2 bg-green-700
                            text-white px-4 py-2 rounded-full shadow-lg text-sm font-medium">
                    <span>"✓"</span>
                    <span>{msg}</span>
                </div>
            })
        }}
    }
}
