use crate::IceTrialsApp;
use crate::ui::helpers::two_button_row;
use crate::ui::layout::{centered_panel, top_bar};
use egui::{Context, Frame, RichText};

pub fn ui_facts(app: &mut IceTrialsApp, ctx: &Context) {
    top_bar(app, ctx, "Fish Facts", |a| a.open_home());

    let Some(fact) = app.current_fact().cloned() else {
        return;
    };
    let is_fav = app.is_current_favorite();
    let position = format!("{} / {}", app.fact_index + 1, app.facts.len());

    centered_panel(ctx, 380.0, 440.0, |ui| {
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().extreme_bg_color)
                .corner_radius(egui::CornerRadius::same(14))
                .inner_margin(egui::Margin::symmetric(20, 16))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width().min(380.0));
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("FACT").small().weak());
                        ui.add_space(4.0);
                        ui.heading(&fact.title);
                        ui.add_space(8.0);
                        ui.label(RichText::new(&fact.text).size(15.0));
                        ui.add_space(10.0);

                        let star = if is_fav { "★ Saved" } else { "☆ Save" };
                        if ui.button(star).clicked() {
                            app.toggle_current_favorite();
                        }
                    });
                });

            ui.add_space(6.0);
            ui.label(RichText::new(position).weak());
            ui.add_space(10.0);

            let (prev, next) = two_button_row(ui, 300.0, "⟵ Previous", "Next ⟶");
            if prev {
                app.prev_fact();
            }
            if next {
                app.next_fact();
            }

            ui.add_space(8.0);
            let (share, favs) = two_button_row(ui, 300.0, "📋 Share", "⭐ Favorites");
            if share {
                ctx.copy_text(IceTrialsApp::<crate::store::FileStore>::share_text(&fact));
            }
            if favs {
                app.open_favorites();
            }
        });
    });
}
