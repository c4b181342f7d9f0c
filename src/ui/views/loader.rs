use crate::IceTrialsApp;
use egui::{CentralPanel, Context, RichText, Spinner};

// El original mostraba un copo de nieve animado ~1.5s antes del onboarding.
const SPLASH_SECS: f64 = 1.4;

pub fn ui_loader(app: &mut IceTrialsApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let estimated_h = 180.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs);

        ui.vertical_centered(|ui| {
            ui.label(RichText::new("❄").size(64.0));
            ui.add_space(8.0);
            ui.heading("Ice Trials");
            ui.add_space(18.0);
            ui.add(Spinner::new().size(32.0));
        });
    });

    let now = ctx.input(|i| i.time);
    let started = *app.loader_started.get_or_insert(now);
    if now - started >= SPLASH_SECS {
        app.finish_loading();
    }
    ctx.request_repaint();
}
