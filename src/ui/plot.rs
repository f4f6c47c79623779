use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Rating chart (bottom panel)
// ---------------------------------------------------------------------------

/// Bar per shown recommendation, coloured by type.
pub fn rating_chart(ui: &mut Ui, state: &AppState) {
    let Some(recs) = &state.results else {
        return;
    };

    let bars: Vec<Bar> = recs
        .records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            let color = state
                .color_map
                .as_ref()
                .map(|cm| cm.color_for(&rec.kind))
                .unwrap_or(Color32::LIGHT_BLUE);
            Bar::new(i as f64, rec.rating)
                .name(&rec.name)
                .fill(color)
                .width(0.7)
        })
        .collect();

    Plot::new("rating_chart")
        .x_axis_label("Rank")
        .y_axis_label("Rating")
        .include_y(0.0)
        .include_y(10.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
