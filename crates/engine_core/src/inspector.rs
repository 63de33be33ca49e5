use egui::{Color32, Context, Ui};

/// Host-side numbers shown above the game's own rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostStats {
    pub ticks: u64,
    pub elapsed_ms: u64,
    pub surface: (u32, u32),
    pub field_scale: f32,
    /// `IntentSet::bits` of the last tick.
    pub intent_bits: u32,
}

pub fn show(ctx: &Context, stats: &HostStats, rows: &[(&'static str, String)], open: &mut bool) {
    egui::Window::new("Inspector")
        .open(open)
        .default_pos([10.0, 60.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Host");
            ui.separator();
            egui::Grid::new("host_stats").num_columns(2).show(ui, |ui| {
                row(ui, "tick", stats.ticks.to_string());
                row(ui, "elapsed", format!("{:.1} s", stats.elapsed_ms as f64 / 1000.0));
                row(ui, "surface", format!("{}x{}", stats.surface.0, stats.surface.1));
                row(ui, "scale", format!("{:.2}", stats.field_scale));
                row(ui, "intents", format!("{:#06x}", stats.intent_bits));
            });

            ui.add_space(6.0);
            ui.heading("Game");
            ui.separator();
            if rows.is_empty() {
                ui.colored_label(Color32::from_gray(100), "(nothing to inspect)");
                return;
            }
            egui::Grid::new("game_rows").num_columns(2).striped(true).show(ui, |ui| {
                for (label, value) in rows {
                    row(ui, label, value.clone());
                }
            });
        });
}

fn row(ui: &mut Ui, label: &str, value: String) {
    ui.colored_label(Color32::GRAY, label);
    ui.label(value);
    ui.end_row();
}
