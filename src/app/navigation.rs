use super::*;
use crate::progress::NavigationDecision;
use crate::view_models::{CollectionCard, LevelRow};

impl<S: KvStore> IceTrialsApp<S> {
    /// Splash terminado: el onboarding se muestra siempre tras el loader,
    /// igual que en la app original.
    pub fn finish_loading(&mut self) {
        self.loader_started = None;
        self.onboarding_page = 0;
        self.state = AppState::Onboarding;
    }

    pub fn advance_onboarding(&mut self, total_pages: usize) {
        if self.onboarding_page + 1 < total_pages {
            self.onboarding_page += 1;
        } else {
            self.open_home();
        }
    }

    pub fn open_home(&mut self) {
        self.session = None;
        self.state = AppState::Home;
    }

    /// Entra a la lista de niveles releyendo los contadores globales, el
    /// equivalente al refresh-on-focus de la pantalla original.
    pub fn open_levels(&mut self) {
        self.unlock = self.tracker.unlock_state();
        self.session = None;
        self.state = AppState::Levels;
    }

    pub fn open_collection(&mut self) {
        self.unlock = self.tracker.unlock_state();
        self.state = AppState::Collection;
    }

    pub fn open_facts(&mut self) {
        self.load_fact_state();
        self.state = AppState::FishFacts;
    }

    pub fn open_favorites(&mut self) {
        self.load_fact_state();
        self.state = AppState::Favorites;
    }

    /// Tap en la fila `index` de la lista. Un nivel bloqueado se ignora.
    pub fn press_level(&mut self, index: usize) {
        match self.tracker.select_level(index, self.levels.len()) {
            NavigationDecision::Locked => {}
            NavigationDecision::Rewind(level) | NavigationDecision::Resume(level) => {
                self.unlock = self.tracker.unlock_state();
                self.start_session(level);
            }
        }
    }

    pub fn level_rows(&self) -> Vec<LevelRow> {
        let max_unlocked = self.unlock.unlocked.min(self.levels.len());
        self.levels
            .iter()
            .enumerate()
            .map(|(i, level)| LevelRow {
                index: i,
                number: level.number,
                title: level.title.clone(),
                unlocked: level.number <= max_unlocked,
            })
            .collect()
    }

    /// Cada nivel completado desbloquea una carta: nivel desbloqueado N
    /// equivale a N-1 cartas.
    pub fn collection_cards(&self) -> Vec<CollectionCard> {
        let unlocked_cards = self
            .unlock
            .unlocked
            .saturating_sub(1)
            .min(self.collection.len());
        self.collection
            .iter()
            .enumerate()
            .map(|(i, fish)| CollectionCard {
                title: fish.title.clone(),
                fish_index: fish.fish_index,
                unlocked: i < unlocked_cards,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn app() -> IceTrialsApp<MemoryStore> {
        IceTrialsApp::with_store(MemoryStore::new())
    }

    #[test]
    fn loader_leads_to_onboarding_then_home() {
        let mut app = app();
        app.finish_loading();
        assert_eq!(app.state, AppState::Onboarding);

        for _ in 0..4 {
            app.advance_onboarding(4);
        }
        assert_eq!(app.state, AppState::Home);
    }

    #[test]
    fn pressing_a_locked_level_does_nothing() {
        let mut app = app();
        app.open_levels();
        app.press_level(5);
        assert_eq!(app.state, AppState::Levels);
        assert!(app.session.is_none());
    }

    #[test]
    fn pressing_an_unlocked_level_starts_a_session() {
        let mut app = app();
        app.open_levels();
        app.press_level(0);
        assert_eq!(app.state, AppState::LevelPlay);
        assert_eq!(app.session.as_ref().unwrap().level_number, 1);
    }

    #[test]
    fn level_rows_follow_the_unlock_count() {
        let mut app = app();
        app.tracker.store_mut().set(crate::progress::KEY_UNLOCKED, "4");
        app.open_levels();

        let rows = app.level_rows();
        assert_eq!(rows.len(), 15);
        assert!(rows[3].unlocked);
        assert!(!rows[4].unlocked);
        assert!(rows[4].label().contains("🔒"));
    }

    #[test]
    fn collection_unlocks_one_card_per_completed_level() {
        let mut app = app();
        app.tracker.store_mut().set(crate::progress::KEY_UNLOCKED, "3");
        app.open_collection();

        let cards = app.collection_cards();
        assert_eq!(cards.iter().filter(|c| c.unlocked).count(), 2);

        // Nivel 1 sin completar: ninguna carta.
        app.tracker.store_mut().set(crate::progress::KEY_UNLOCKED, "1");
        app.open_collection();
        assert!(app.collection_cards().iter().all(|c| !c.unlocked));
    }
}
