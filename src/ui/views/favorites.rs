use crate::IceTrialsApp;
use crate::ui::layout::{simple_panel, top_bar};
use egui::{Context, Frame, RichText, ScrollArea};

pub fn ui_favorites(app: &mut IceTrialsApp, ctx: &Context) {
    top_bar(app, ctx, "Favorites", |a| a.open_facts());

    simple_panel(ctx, 440.0, |ui| {
        let favorites: Vec<_> = app.favorite_facts().into_iter().cloned().collect();

        if favorites.is_empty() {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("No favorites yet").heading().weak());
                ui.add_space(6.0);
                ui.label("Star a fact to keep it here.");
            });
            return;
        }

        ScrollArea::vertical().show(ui, |ui| {
            for fact in &favorites {
                Frame::default()
                    .fill(ui.visuals().extreme_bg_color)
                    .corner_radius(egui::CornerRadius::same(12))
                    .inner_margin(egui::Margin::symmetric(16, 12))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width().min(400.0));
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&fact.title).strong());
                                ui.label(RichText::new(&fact.text).size(14.0));
                            });
                        });
                        ui.horizontal(|ui| {
                            if ui.button("★ Remove").clicked() {
                                app.remove_favorite(&fact.id);
                            }
                            if ui.button("📋 Share").clicked() {
                                ctx.copy_text(IceTrialsApp::<crate::store::FileStore>::share_text(fact));
                            }
                        });
                    });
                ui.add_space(8.0);
            }
        });
    });
}
