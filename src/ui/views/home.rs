use crate::IceTrialsApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_home(app: &mut IceTrialsApp, ctx: &Context) {
    centered_panel(ctx, 360.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🐟").size(56.0));
            ui.heading(RichText::new("Ice Trials").size(28.0));
            ui.add_space(24.0);

            let btn_w = (ui.available_width() * 0.9).clamp(160.0, 320.0);
            let btn_h = 44.0;

            if big_list_button(ui, "▶  Play".into(), btn_w, btn_h, true) {
                app.open_levels();
            }
            ui.add_space(8.0);
            if big_list_button(ui, "👑  Crownfish Collection".into(), btn_w, btn_h, true) {
                app.open_collection();
            }
            ui.add_space(8.0);
            if big_list_button(ui, "💡  Fish Facts".into(), btn_w, btn_h, true) {
                app.open_facts();
            }
            ui.add_space(8.0);
            if big_list_button(ui, "⭐  Favorites".into(), btn_w, btn_h, true) {
                app.open_favorites();
            }
        });
    });
}
