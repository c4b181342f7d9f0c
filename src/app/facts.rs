use super::*;

// Claves heredadas de las pantallas de facts originales.
pub const KEY_FAVORITES: &str = "fish_facts_favorites_v1";
pub const KEY_FACT_INDEX: &str = "fish_facts_index_v1";

fn clamp_index(i: usize, len: usize) -> usize {
    if len == 0 { 0 } else { i.min(len - 1) }
}

impl<S: KvStore> IceTrialsApp<S> {
    /// Relee índice y favoritos del store; se llama al entrar en las
    /// pantallas de facts. Valores ausentes o corruptos cuentan como vacíos.
    pub fn load_fact_state(&mut self) {
        let store = self.tracker.store();
        self.favorites = store
            .get(KEY_FAVORITES)
            .and_then(|raw| serde_yaml::from_str::<Vec<String>>(&raw).ok())
            .unwrap_or_default();
        let stored = store
            .get(KEY_FACT_INDEX)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0);
        self.fact_index = clamp_index(stored, self.facts.len());
    }

    pub fn current_fact(&self) -> Option<&FishFact> {
        self.facts.get(self.fact_index)
    }

    pub fn is_current_favorite(&self) -> bool {
        self.current_fact()
            .is_some_and(|f| self.favorites.contains(&f.id))
    }

    pub fn next_fact(&mut self) {
        if self.facts.is_empty() {
            return;
        }
        self.set_fact_index((self.fact_index + 1) % self.facts.len());
    }

    pub fn prev_fact(&mut self) {
        if self.facts.is_empty() {
            return;
        }
        self.set_fact_index((self.fact_index + self.facts.len() - 1) % self.facts.len());
    }

    fn set_fact_index(&mut self, index: usize) {
        self.fact_index = clamp_index(index, self.facts.len());
        let v = self.fact_index.to_string();
        self.tracker.store_mut().set(KEY_FACT_INDEX, &v);
    }

    pub fn toggle_current_favorite(&mut self) {
        let Some(id) = self.current_fact().map(|f| f.id.clone()) else {
            return;
        };
        if let Some(pos) = self.favorites.iter().position(|x| x == &id) {
            self.favorites.remove(pos);
        } else {
            self.favorites.push(id);
        }
        self.persist_favorites();
    }

    pub fn remove_favorite(&mut self, id: &str) {
        self.favorites.retain(|x| x != id);
        self.persist_favorites();
    }

    fn persist_favorites(&mut self) {
        match serde_yaml::to_string(&self.favorites) {
            Ok(raw) => self.tracker.store_mut().set(KEY_FAVORITES, &raw),
            Err(e) => log::warn!("no se pudo serializar favoritos: {e}"),
        }
    }

    pub fn favorite_facts(&self) -> Vec<&FishFact> {
        self.facts
            .iter()
            .filter(|f| self.favorites.contains(&f.id))
            .collect()
    }

    /// Texto para el portapapeles; el share sheet nativo queda fuera.
    pub fn share_text(fact: &FishFact) -> String {
        format!("{}\n\n{}", fact.title, fact.text)
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
    fn favorites_toggle_round_trips_through_the_store() {
        let mut app = app();
        app.toggle_current_favorite();
        assert!(app.is_current_favorite());

        // Otra instancia sobre el mismo store ve el favorito.
        let raw = app.tracker.store().get(KEY_FAVORITES).unwrap();
        let ids: Vec<String> = serde_yaml::from_str(&raw).unwrap();
        assert_eq!(ids, vec!["icefish".to_owned()]);

        app.toggle_current_favorite();
        assert!(!app.is_current_favorite());
        assert!(app.favorite_facts().is_empty());
    }

    #[test]
    fn fact_index_persists_and_wraps() {
        let mut app = app();
        for _ in 0..app.facts.len() {
            app.next_fact();
        }
        assert_eq!(app.fact_index, 0);

        app.prev_fact();
        assert_eq!(app.fact_index, app.facts.len() - 1);
        assert_eq!(
            app.tracker.store().get(KEY_FACT_INDEX),
            Some((app.facts.len() - 1).to_string())
        );
    }

    #[test]
    fn stored_fact_index_is_clamped_into_range() {
        let mut app = app();
        app.tracker.store_mut().set(KEY_FACT_INDEX, "999");
        app.tracker.store_mut().set(KEY_FAVORITES, "not a : [ list");
        app.load_fact_state();

        assert_eq!(app.fact_index, app.facts.len() - 1);
        assert!(app.favorites.is_empty());
    }

    #[test]
    fn remove_favorite_only_drops_the_given_id() {
        let mut app = app();
        app.toggle_current_favorite();
        app.next_fact();
        app.toggle_current_favorite();
        assert_eq!(app.favorite_facts().len(), 2);

        app.remove_favorite("icefish");
        let remaining = app.favorite_facts();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "pike");
    }
}
