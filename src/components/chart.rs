//! Chart Components
//!
//! Bar charts for the analytics page, drawn on HTML5 Canvas: the emotion
//! distribution and the compliance score histogram. Both redraw whenever
//! the record set changes.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::core::{bucket_by_score_range, group_by_emotion};
use crate::state::global::GlobalState;

/// Default bar color (primary orange, matches the score histogram).
const BAR_COLOR: &str = "#FF9800";

/// Color for an emotion label. Case-insensitive exact match against a
/// fixed vocabulary; unrecognized labels default to neutral gray. Note
/// this folds case even though the aggregation grouping does not.
pub fn emotion_color(label: &str) -> &'static str {
    match label.to_lowercase().as_str() {
        "positive" | "tích cực" => "#4CAF50",
        "neutral" | "trung tính" | "calm" => "#9ca3af",
        "negative" | "tiêu cực" | "frustrated" => "#F44336",
        _ => "#9ca3af",
    }
}

/// One drawable bar.
struct Bar {
    label: String,
    count: usize,
    color: &'static str,
}

/// Emotion distribution chart
#[component]
pub fn EmotionChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the record set changes
    create_effect(move |_| {
        let bars: Vec<Bar> = group_by_emotion(&state.analyses.get())
            .into_iter()
            .map(|g| Bar {
                color: emotion_color(&g.emotion),
                label: g.emotion,
                count: g.count,
            })
            .collect();

        if let Some(canvas) = canvas_ref.get() {
            draw_bar_chart(&canvas, &bars);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="600"
                height="300"
                class="w-full h-64 rounded-lg"
            />
            <EmotionLegend />
        </div>
    }
}

/// Legend showing the distinct emotion labels in first-seen order
#[component]
fn EmotionLegend() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                group_by_emotion(&state.analyses.get())
                    .into_iter()
                    .map(|group| {
                        let color = emotion_color(&group.emotion);
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-300">
                                    {format!("{} ({})", group.emotion, group.count)}
                                </span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Compliance score histogram over the five fixed buckets
#[component]
pub fn ScoreChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let bars: Vec<Bar> = bucket_by_score_range(&state.analyses.get())
            .into_iter()
            .map(|b| Bar {
                label: b.label.to_string(),
                count: b.count,
                color: BAR_COLOR,
            })
            .collect();

        if let Some(canvas) = canvas_ref.get() {
            draw_bar_chart(&canvas, &bars);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="600"
                height="300"
                class="w-full h-64 rounded-lg"
            />
            <div class="text-center text-sm text-gray-400 mt-4">"Compliance score range"</div>
        </div>
    }
}

/// Draw a labeled bar chart on canvas
fn draw_bar_chart(canvas: &HtmlCanvasElement, bars: &[Bar]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 40.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let max_count = bars.iter().map(|b| b.count).max().unwrap_or(0);

    if max_count == 0 {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data to display", width / 2.0 - 70.0, height / 2.0);
        return;
    }

    // Round the y-axis ceiling up so the grid lines land on whole counts
    let y_max = max_count.max(5);

    // Horizontal grid lines (5 lines)
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = y_max as f64 - (i as f64 / 5.0) * y_max as f64;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // Draw the bars with even spacing
    let slot_width = chart_width / bars.len() as f64;
    let bar_width = (slot_width * 0.6).min(80.0);

    for (i, bar) in bars.iter().enumerate() {
        let bar_height = (bar.count as f64 / y_max as f64) * chart_height;
        let x = margin_left + i as f64 * slot_width + (slot_width - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&bar.color.into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        // Count above the bar
        if bar.count > 0 {
            ctx.set_fill_style(&"#e5e7eb".into()); // gray-200
            ctx.set_font("12px sans-serif");
            let _ = ctx.fill_text(
                &bar.count.to_string(),
                x + bar_width / 2.0 - 4.0,
                (y - 6.0).max(margin_top + 10.0),
            );
        }

        // X-axis label
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("12px sans-serif");
        let label_x = margin_left + i as f64 * slot_width + slot_width / 2.0
            - bar.label.len() as f64 * 3.0;
        let _ = ctx.fill_text(&bar.label, label_x, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotion_color_vocabulary() {
        assert_eq!(emotion_color("positive"), "#4CAF50");
        assert_eq!(emotion_color("tích cực"), "#4CAF50");
        assert_eq!(emotion_color("negative"), "#F44336");
        assert_eq!(emotion_color("frustrated"), "#F44336");
        assert_eq!(emotion_color("calm"), "#9ca3af");
    }

    #[test]
    fn test_emotion_color_is_case_insensitive() {
        assert_eq!(emotion_color("Positive"), "#4CAF50");
        assert_eq!(emotion_color("NEUTRAL"), "#9ca3af");
    }

    #[test]
    fn test_unrecognized_emotion_defaults_to_gray() {
        assert_eq!(emotion_color("bewildered"), "#9ca3af");
        assert_eq!(emotion_color(""), "#9ca3af");
    }
}
