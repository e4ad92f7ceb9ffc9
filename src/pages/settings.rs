//! Settings Page
//!
//! Endpoint configuration and display preferences.

use leptos::*;

use crate::api;
use crate::core::SortField;
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure your CallDash dashboard"</p>
            </div>

            // Endpoint configuration
            <EndpointSettings
                title="Analysis Results Endpoint"
                get_url=api::get_analysis_url
                set_url=api::set_analysis_url
                kind=EndpointKind::Analysis
            />
            <EndpointSettings
                title="Customer Profiles Endpoint"
                get_url=api::get_customer_url
                set_url=api::set_customer_url
                kind=EndpointKind::Customer
            />

            // Display Settings
            <DisplaySettings />

            // About
            <AboutSection />
        </div>
    }
}

#[derive(Clone, Copy)]
enum EndpointKind {
    Analysis,
    Customer,
}

/// Configuration block for one endpoint: edit, test, save
#[component]
fn EndpointSettings(
    title: &'static str,
    get_url: fn() -> String,
    set_url: fn(&str),
    kind: EndpointKind,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (url, set_url_signal) = create_signal(get_url());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    let state_for_test = state.clone();
    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        set_url(&url.get());

        let state_clone = state_for_test.clone();
        spawn_local(async move {
            let outcome = match kind {
                EndpointKind::Analysis => api::fetch_analyses().await.map(|r| r.len()),
                EndpointKind::Customer => api::fetch_customers().await.map(|r| r.len()),
            };
            match outcome {
                Ok(count) => {
                    set_test_result.set(Some(true));
                    state_clone.show_success(&format!("Connection successful, {} records", count));
                }
                Err(e) => {
                    set_test_result.set(Some(false));
                    state_clone.show_error(&format!("Connection failed: {}", e));
                }
            }
            set_testing.set(false);
        });
    };

    let state_for_save = state.clone();
    let save_url = move |_| {
        set_url(&url.get());
        state_for_save.show_success("Endpoint URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">{title}</h2>

            <div class="space-y-4">
                <div class="flex space-x-2">
                    <input
                        type="text"
                        prop:value=move || url.get()
                        on:input=move |ev| set_url_signal.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=test_connection
                        disabled=move || testing.get()
                        class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if testing.get() { "Testing..." } else { "Test" }}
                    </button>
                    <button
                        on:click=save_url
                        class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                               rounded-lg font-medium transition-colors"
                    >
                        "Save"
                    </button>
                </div>

                // Connection status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Status:"</span>
                    {move || {
                        match test_result.get() {
                            Some(true) => view! {
                                <span class="text-green-400">"✓ Connected"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Failed"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

/// Display settings
#[component]
fn DisplaySettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let sort_field = state.sort_field;
    let sort_descending = state.sort_descending;

    let fields = [
        SortField::Timestamp,
        SortField::ContactId,
        SortField::Name,
        SortField::PhoneNumber,
        SortField::ComplianceScore,
        SortField::Emotion,
    ];

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Display Settings"</h2>

            <div class="space-y-4">
                // History table sort column
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"History Table Sort Column"</label>
                    <div class="flex flex-wrap gap-2">
                        {fields.into_iter().map(|field| {
                            view! {
                                <button
                                    on:click=move |_| sort_field.set(field)
                                    class=move || {
                                        let base = "px-3 py-2 rounded-lg text-sm font-medium transition-colors";
                                        if sort_field.get() == field {
                                            format!("{} bg-primary-600 text-white", base)
                                        } else {
                                            format!("{} bg-gray-700 text-gray-400 hover:bg-gray-600", base)
                                        }
                                    }
                                >
                                    {field.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>

                // Sort direction
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Sort Direction"</label>
                    <div class="flex gap-2">
                        <button
                            on:click=move |_| sort_descending.set(false)
                            class=move || {
                                let base = "px-3 py-2 rounded-lg text-sm font-medium transition-colors";
                                if !sort_descending.get() {
                                    format!("{} bg-primary-600 text-white", base)
                                } else {
                                    format!("{} bg-gray-700 text-gray-400 hover:bg-gray-600", base)
                                }
                            }
                        >
                            "Ascending"
                        </button>
                        <button
                            on:click=move |_| sort_descending.set(true)
                            class=move || {
                                let base = "px-3 py-2 rounded-lg text-sm font-medium transition-colors";
                                if sort_descending.get() {
                                    format!("{} bg-primary-600 text-white", base)
                                } else {
                                    format!("{} bg-gray-700 text-gray-400 hover:bg-gray-600", base)
                                }
                            }
                        >
                            "Descending"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"About"</h2>
            <div class="space-y-2 text-sm text-gray-400">
                <p>"CallDash renders call compliance analysis results and customer profiles."</p>
                <p>
                    "Data is fetched read-only from two upstream endpoints; nothing is stored "
                    "beyond the endpoint URLs in this browser's local storage."
                </p>
            </div>
        </section>
    }
}
