use serde::{Deserialize, Serialize};

/// One puzzle inside a level: a short grid of pattern lines, a prompt and
/// the expected answer (decimal string, compared after trimming).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Task {
    pub grid: Vec<String>,
    pub prompt: String,
    pub answer: String,
}

/// A themed set of exactly three ordered tasks. Compiled-in data, never
/// mutated at runtime.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Level {
    pub number: usize,
    pub title: String,
    pub tasks: Vec<Task>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FishFact {
    pub id: String,
    pub title: String,
    pub text: String,
}

/// A collectible fish card. `fish_index` (0..=4) picks the card artwork
/// variant in the gallery.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CollectionFish {
    pub id: String,
    pub title: String,
    pub fish_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Loader,
    Onboarding,
    Home,
    Levels,
    LevelPlay,
    Collection,
    FishFacts,
    Favorites,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loader
    }
}
