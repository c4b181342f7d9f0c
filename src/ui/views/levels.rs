use crate::IceTrialsApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::{simple_panel, top_bar};
use egui::{Context, ScrollArea};

pub fn ui_levels(app: &mut IceTrialsApp, ctx: &Context) {
    top_bar(app, ctx, "Ice Trials", |a| a.open_home());

    simple_panel(ctx, 420.0, |ui| {
        ui.label("Levels:");
        ui.add_space(8.0);

        let rows = app.level_rows();
        let btn_w = ui.available_width().min(400.0);
        let btn_h = 38.0;

        ScrollArea::vertical().show(ui, |ui| {
            for row in &rows {
                // Una fila bloqueada se dibuja deshabilitada; pulsar un nivel
                // bloqueado no navega ni muta nada.
                if big_list_button(ui, row.label(), btn_w, btn_h, row.unlocked) {
                    app.press_level(row.index);
                }
                ui.add_space(6.0);
            }
        });
    });
}
