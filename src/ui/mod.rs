mod helpers;
pub mod layout;
pub mod views;

use crate::app::IceTrialsApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;

impl App for IceTrialsApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Dispatch por estado a las funciones en views/
        match self.state {
            AppState::Loader => views::loader::ui_loader(self, ctx),
            AppState::Onboarding => views::onboarding::ui_onboarding(self, ctx),
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Levels => views::levels::ui_levels(self, ctx),
            AppState::LevelPlay => views::play::ui_play(self, ctx),
            AppState::Collection => views::collection::ui_collection(self, ctx),
            AppState::FishFacts => views::facts::ui_facts(self, ctx),
            AppState::Favorites => views::favorites::ui_favorites(self, ctx),
        }
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        // El progreso ya se escribe en cada lote; esto solo re-vuelca por si
        // la última escritura falló.
        self.tracker.store().persist();
    }
}
