use crate::IceTrialsApp;
use crate::app::SessionResult;
use crate::ui::helpers::{keypad, two_button_row};
use crate::ui::layout::top_bar;
use egui::{Button, CentralPanel, Color32, Context, Frame, RichText};

// Tintes de fondo por etapa, en lugar de los Task1/2/3.png originales.
const STAGE_TINTS: [Color32; 3] = [
    Color32::from_rgb(22, 38, 66),
    Color32::from_rgb(18, 48, 82),
    Color32::from_rgb(14, 58, 98),
];

pub fn ui_play(app: &mut IceTrialsApp, ctx: &Context) {
    // Copias baratas del estado de sesión para no pelear con el borrow
    // mientras se dibuja.
    let (Some(level), Some(session)) = (app.current_level().cloned(), app.session.clone()) else {
        app.open_levels();
        return;
    };
    let task = match level.tasks.get(session.task_index) {
        Some(t) => t.clone(),
        None => {
            app.open_levels();
            return;
        }
    };

    top_bar(app, ctx, &level.title, |a| a.open_levels());

    let now = ctx.input(|i| i.time);
    let shaking = now < session.shake_until;
    // Pequeño temblor horizontal mientras dura el rechazo.
    let dx = if shaking {
        ((now * 45.0).sin() * 8.0) as f32
    } else {
        0.0
    };
    if shaking {
        ctx.request_repaint();
    }

    CentralPanel::default()
        .frame(Frame::default().fill(STAGE_TINTS[session.stage.min(2)]))
        .show(ctx, |ui| {
            let max_width = 420.0;
            let panel_width = (ui.available_width() * 0.92).min(max_width);
            let estimated_h = 420.0;
            let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
            ui.add_space(vs / 2.0);

            ui.vertical_centered(|ui| {
                // Tarjeta con el patrón
                ui.horizontal(|ui| {
                    ui.add_space((ui.available_width() - panel_width) / 2.0 + dx);
                    Frame::default()
                        .fill(ui.visuals().extreme_bg_color)
                        .corner_radius(egui::CornerRadius::same(12))
                        .inner_margin(egui::Margin::symmetric(20, 16))
                        .show(ui, |ui| {
                            ui.set_width(panel_width - 40.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new(format!("TASK {}", session.task_index + 1))
                                        .small()
                                        .weak(),
                                );
                                ui.add_space(6.0);
                                for line in &task.grid {
                                    ui.label(
                                        RichText::new(line).monospace().size(22.0).strong(),
                                    );
                                }
                            });
                        });
                });

                ui.add_space(10.0);
                ui.label(RichText::new(&task.prompt).size(17.0).strong());
                ui.add_space(12.0);

                // Caja de respuesta
                let shown = if session.answer.is_empty() {
                    "?"
                } else {
                    &session.answer
                };
                Frame::default()
                    .fill(ui.visuals().extreme_bg_color)
                    .corner_radius(egui::CornerRadius::same(10))
                    .inner_margin(egui::Margin::symmetric(28, 10))
                    .show(ui, |ui| {
                        ui.label(RichText::new(shown).size(26.0).strong().monospace());
                    });

                ui.add_space(8.0);
                if ui.add_sized([140.0, 38.0], Button::new("Check")).clicked() {
                    app.check_answer(now);
                }

                ui.add_space(14.0);
                if let Some(key) = keypad(ui, panel_width, 44.0) {
                    app.key_press(key);
                }
            });

            ui.add_space(vs / 2.0);
        });

    if session.result == SessionResult::Win {
        win_overlay(app, ctx);
    }
}

/// Estado terminal del nivel: solo se sale con "Next Level" o "Menu".
fn win_overlay(app: &mut IceTrialsApp, ctx: &Context) {
    egui::Window::new("Complete!")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(300.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("👑🐟").size(56.0));
                ui.add_space(10.0);

                if app.has_next_level() {
                    let (next, menu) = two_button_row(ui, 280.0, "Next Level", "Menu");
                    if next {
                        app.next_level();
                    }
                    if menu {
                        app.open_home();
                    }
                } else if ui.add_sized([160.0, 38.0], Button::new("Menu")).clicked() {
                    app.open_home();
                }
            });
        });
}
