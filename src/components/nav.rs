//! Navigation Component
//!
//! Header bar: brand with a live count of loaded analyses, and the route
//! links.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

const LINKS: [(&str, &str); 4] = [
    ("/", "Dashboard"),
    ("/customers", "Customers"),
    ("/analytics", "Analytics"),
    ("/settings", "Settings"),
];

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let analyses = state.analyses;

    view! {
        <header class="bg-gray-800 border-b border-gray-700 sticky top-0 z-40">
            <div class="container mx-auto px-4 h-16 flex items-center">
                // Brand and loaded-record badge
                <A href="/" class="flex items-center space-x-2 mr-8">
                    <span class="text-2xl">"📞"</span>
                    <span class="text-xl font-bold text-white">"CallDash"</span>
                    <span class="hidden md:inline-block bg-gray-700 text-gray-300 text-xs
                                 rounded-full px-2 py-0.5">
                        {move || format!("{} calls", analyses.get().len())}
                    </span>
                </A>

                // Route links
                <div class="flex items-center space-x-1 ml-auto">
                    {LINKS.into_iter().map(|(href, label)| view! {
                        <A
                            href=href
                            class="px-3 py-2 rounded-md text-sm text-gray-300 hover:text-white
                                   hover:bg-gray-700 transition-colors"
                            active_class="bg-gray-700 text-white"
                        >
                            {label}
                        </A>
                    }).collect_view()}
                </div>
            </div>
        </header>
    }
}
