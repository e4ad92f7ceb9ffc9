//! Customers Page
//!
//! Table of customer profiles from the second data source, with a
//! client-side name/phone filter.

use leptos::*;

use crate::api;
use crate::components::ListSkeleton;
use crate::core::CustomerRecord;
use crate::state::global::GlobalState;

/// Customers page component
#[component]
pub fn Customers() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (filter, set_filter) = create_signal(String::new());

    // Fetch customers on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.customers_loading.set(true);
            match api::fetch_customers().await {
                Ok(records) => {
                    state.customers.set(records);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            state.customers_loading.set(false);
        });
    });

    let state_for_count = state.clone();
    let state_for_rows = state.clone();
    let filtered = move || {
        let query = filter.get().to_lowercase();
        state_for_rows
            .customers
            .get()
            .into_iter()
            .filter(|c| {
                query.is_empty()
                    || c.full_name().to_lowercase().contains(&query)
                    || c.phone_number
                        .as_deref()
                        .map(|p| p.contains(&query))
                        .unwrap_or(false)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Customers"</h1>
                    <p class="text-gray-400 mt-1">"Customer profiles from the call records"</p>
                </div>

                <div class="text-sm text-gray-400">
                    {move || format!("{} customers", state_for_count.customers.get().len())}
                </div>
            </div>

            // Filter input
            <input
                type="text"
                placeholder="Filter by name or phone number..."
                prop:value=move || filter.get()
                on:input=move |ev| set_filter.set(event_target_value(&ev))
                class="w-full md:w-96 bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />

            // Customer table
            <section class="bg-gray-800 rounded-xl p-6">
                {move || {
                    if state.customers_loading.get() {
                        view! { <ListSkeleton count=5 /> }.into_view()
                    } else {
                        let rows = filtered();
                        if rows.is_empty() {
                            view! {
                                <p class="text-gray-400 text-center py-8">"No matching customers"</p>
                            }.into_view()
                        } else {
                            view! {
                                <div class="overflow-x-auto">
                                    <table class="w-full text-sm">
                                        <thead>
                                            <tr class="border-b border-gray-700 text-left text-gray-400">
                                                <th class="px-4 py-3 font-medium">"Customer"</th>
                                                <th class="px-4 py-3 font-medium">"Phone Number"</th>
                                                <th class="px-4 py-3 font-medium">"Email"</th>
                                                <th class="px-4 py-3 font-medium">"Address"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows.into_iter().map(|customer| view! {
                                                <CustomerRow customer=customer />
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            }.into_view()
                        }
                    }
                }}
            </section>
        </div>
    }
}

/// One customer table row
#[component]
fn CustomerRow(customer: CustomerRecord) -> impl IntoView {
    let name = {
        let n = customer.full_name();
        if n.is_empty() { "—".to_string() } else { n }
    };

    view! {
        <tr class="border-b border-gray-700 hover:bg-gray-700/30">
            <td class="px-4 py-3">
                <div>{name}</div>
                <div class="text-xs text-gray-500 font-mono">{customer.customer_id.clone()}</div>
            </td>
            <td class="px-4 py-3">{customer.phone_number.clone().unwrap_or_else(|| "—".to_string())}</td>
            <td class="px-4 py-3">{customer.email.clone().unwrap_or_else(|| "—".to_string())}</td>
            <td class="px-4 py-3 text-gray-300">{customer.address.clone().unwrap_or_else(|| "—".to_string())}</td>
        </tr>
    }
}
