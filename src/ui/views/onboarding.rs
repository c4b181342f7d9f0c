use crate::IceTrialsApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

struct Page {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    button: &'static str,
}

const PAGES: [Page; 4] = [
    Page {
        icon: "🧊",
        title: "Think. Break the ice.",
        text: "Solve logic puzzles hidden beneath\nthe frozen lake.",
        button: "Next",
    },
    Page {
        icon: "❓",
        title: "Solve 3 Logic Puzzles",
        text: "Each correct answer cracks\nthe ice and brings you closer to the fish.",
        button: "Next",
    },
    Page {
        icon: "👑",
        title: "Earn Crownfish",
        text: "Complete all puzzles to unlock\na crowned fish for your collection.",
        button: "Next",
    },
    Page {
        icon: "⭐",
        title: "Learn & Save Facts",
        text: "Discover interesting fish facts\nand save your favorites.",
        button: "Play Now",
    },
];

pub fn ui_onboarding(app: &mut IceTrialsApp, ctx: &Context) {
    let page = &PAGES[app.onboarding_page.min(PAGES.len() - 1)];

    centered_panel(ctx, 320.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(page.icon).size(72.0));
            ui.add_space(16.0);
            ui.heading(page.title);
            ui.add_space(8.0);
            ui.label(page.text);
            ui.add_space(18.0);

            // Indicador de página (puntos)
            let dots: String = (0..PAGES.len())
                .map(|i| if i == app.onboarding_page { '●' } else { '○' })
                .collect();
            ui.label(dots);
            ui.add_space(14.0);

            if ui
                .add_sized([160.0, 42.0], Button::new(page.button))
                .clicked()
            {
                app.advance_onboarding(PAGES.len());
            }
        });
    });
}
