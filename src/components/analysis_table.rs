//! Analysis History Table
//!
//! Sortable table of all fetched analysis records. Clicking a column
//! header sorts by that column through the core sorter; a second click
//! flips the direction. Clicking a row selects it for the report panel.

use leptos::*;

use crate::core::{parse_timestamp, AnalysisRecord, SortField};
use crate::components::score_card::GOOD_SCORE_THRESHOLD;
use crate::state::global::GlobalState;

const COLUMNS: [SortField; 6] = [
    SortField::ContactId,
    SortField::Name,
    SortField::PhoneNumber,
    SortField::Timestamp,
    SortField::ComplianceScore,
    SortField::Emotion,
];

/// Sortable history table
#[component]
pub fn AnalysisTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-sm">
                <thead>
                    <tr class="border-b border-gray-700 text-left">
                        {COLUMNS.into_iter().map(|field| {
                            view! { <SortHeader field=field /> }
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let selected = state.selected.get();
                        state
                            .sorted_analyses()
                            .into_iter()
                            .map(|record| {
                                let is_selected =
                                    selected.as_deref() == Some(record.contact_id.as_str());
                                view! { <AnalysisRow record=record selected=is_selected /> }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Clickable column header with direction indicator
#[component]
fn SortHeader(field: SortField) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let state_for_click = state.clone();

    let indicator = move || {
        if state.sort_field.get() == field {
            if state.sort_descending.get() { " ▼" } else { " ▲" }
        } else {
            ""
        }
    };

    view! {
        <th
            on:click=move |_| state_for_click.toggle_sort(field)
            class="px-4 py-3 font-medium text-gray-400 cursor-pointer select-none hover:text-white"
        >
            {field.label()}
            {indicator}
        </th>
    }
}

/// One table row
#[component]
fn AnalysisRow(record: AnalysisRecord, selected: bool) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let contact_id = record.contact_id.clone();

    let row_class = if selected {
        "border-b border-gray-700 bg-gray-700/50 cursor-pointer"
    } else {
        "border-b border-gray-700 hover:bg-gray-700/30 cursor-pointer"
    };

    let name = record
        .customer_info
        .as_ref()
        .map(|c| c.full_name())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "—".to_string());

    let score = record.compliance_score();
    let score_class = match score {
        Some(s) if s >= GOOD_SCORE_THRESHOLD => "text-green-400 font-semibold",
        Some(_) => "text-red-400 font-semibold",
        None => "text-gray-500",
    };
    let score_text = score.map(|s| format!("{}", s)).unwrap_or_else(|| "—".to_string());

    let emotion = record.emotion().unwrap_or("—").to_string();

    view! {
        <tr
            class=row_class
            on:click=move |_| state.select(&contact_id)
        >
            <td class="px-4 py-3 font-mono text-xs">{record.contact_id.clone()}</td>
            <td class="px-4 py-3">{name}</td>
            <td class="px-4 py-3">{record.phone_number.clone()}</td>
            <td class="px-4 py-3 text-gray-300">{format_timestamp(&record.analysis_timestamp)}</td>
            <td class=format!("px-4 py-3 text-center {}", score_class)>{score_text}</td>
            <td class="px-4 py-3">{emotion}</td>
        </tr>
    }
}

/// Human-readable timestamp; falls back to the raw string when the
/// upstream value does not parse.
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .and_then(chrono::DateTime::from_timestamp_millis)
        .map(|dt| dt.format("%b %d, %Y %H:%M:%S").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-01-01 10:00:00"), "Jan 01, 2024 10:00:00");
    }

    #[test]
    fn test_format_timestamp_falls_back_to_raw() {
        assert_eq!(format_timestamp("pending"), "pending");
    }
}
