//! Global Application State
//!
//! Reactive state management using Leptos signals. The two fetch flows
//! write into independent signals so each page can render whatever data
//! has arrived; the pure core in `crate::core` is invoked fresh on every
//! render with the current records and sort state.

use leptos::*;

use crate::core::{self, AnalysisRecord, CustomerRecord, SortField};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Analysis records from the results endpoint
    pub analyses: RwSignal<Vec<AnalysisRecord>>,
    /// Customer records from the profiles endpoint
    pub customers: RwSignal<Vec<CustomerRecord>>,
    /// Contact id of the record shown in the report panel
    pub selected: RwSignal<Option<String>>,
    /// Current history-table sort column
    pub sort_field: RwSignal<SortField>,
    /// Sort direction flag
    pub sort_descending: RwSignal<bool>,
    /// Analysis fetch in flight
    pub analyses_loading: RwSignal<bool>,
    /// Customer fetch in flight
    pub customers_loading: RwSignal<bool>,
    /// Completion timestamp of the last successful fetch
    pub last_refresh: RwSignal<Option<i64>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for the notification pill)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        analyses: create_rw_signal(Vec::new()),
        customers: create_rw_signal(Vec::new()),
        selected: create_rw_signal(None),
        sort_field: create_rw_signal(SortField::Timestamp),
        sort_descending: create_rw_signal(true),
        analyses_loading: create_rw_signal(false),
        customers_loading: create_rw_signal(false),
        last_refresh: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Analysis records ordered by the current sort column and direction.
    /// Recomputed from the raw records on every call; the stored list is
    /// never reordered.
    pub fn sorted_analyses(&self) -> Vec<AnalysisRecord> {
        core::sort_records(
            &self.analyses.get(),
            self.sort_field.get(),
            self.sort_descending.get(),
        )
    }

    /// The record currently shown in the report panel.
    pub fn selected_analysis(&self) -> Option<AnalysisRecord> {
        let id = self.selected.get()?;
        self.analyses
            .get()
            .into_iter()
            .find(|r| r.contact_id == id)
    }

    /// Select a record by contact id.
    pub fn select(&self, contact_id: &str) {
        self.selected.set(Some(contact_id.to_string()));
    }

    /// Sort by `field`; a second click on the active column flips the
    /// direction instead.
    pub fn toggle_sort(&self, field: SortField) {
        if self.sort_field.get() == field {
            self.sort_descending.update(|d| *d = !*d);
        } else {
            self.sort_field.set(field);
            self.sort_descending.set(false);
        }
    }

    /// Either fetch still in flight.
    pub fn loading(&self) -> bool {
        self.analyses_loading.get() || self.customers_loading.get()
    }

    /// Record that a fetch finished just now.
    pub fn mark_refreshed(&self) {
        self.last_refresh
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
