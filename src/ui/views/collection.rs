use crate::IceTrialsApp;
use crate::ui::layout::{simple_panel, top_bar};
use egui::{Context, Frame, RichText, ScrollArea, Vec2};

pub fn ui_collection(app: &mut IceTrialsApp, ctx: &Context) {
    top_bar(app, ctx, "Crownfish Collection", |a| a.open_home());

    simple_panel(ctx, 440.0, |ui| {
        let cards = app.collection_cards();
        let unlocked = cards.iter().filter(|c| c.unlocked).count();
        ui.label(format!("Unlocked: {} / {}", unlocked, cards.len()));
        ui.add_space(8.0);

        let gap = 10.0;
        let card_w = ((ui.available_width() - 2.0 * gap) / 3.0).clamp(110.0, 150.0);
        let card_h = card_w * 0.9;

        ScrollArea::vertical().show(ui, |ui| {
            for row in cards.chunks(3) {
                ui.horizontal(|ui| {
                    for card in row {
                        Frame::default()
                            .fill(ui.visuals().extreme_bg_color)
                            .corner_radius(egui::CornerRadius::same(10))
                            .inner_margin(egui::Margin::same(8))
                            .show(ui, |ui| {
                                ui.set_min_size(Vec2::new(card_w, card_h));
                                ui.vertical_centered(|ui| {
                                    ui.add_space(6.0);
                                    ui.label(RichText::new(card.icon()).size(40.0));
                                    ui.add_space(6.0);
                                    let title = if card.unlocked {
                                        RichText::new(&card.title).strong()
                                    } else {
                                        RichText::new("???").weak()
                                    };
                                    ui.label(title);
                                });
                            });
                    }
                });
                ui.add_space(gap);
            }
        });
    });
}
