use crate::data::{read_collection_embedded, read_facts_embedded, read_levels_embedded};
use crate::model::{AppState, CollectionFish, FishFact, Level};
use crate::progress::{ProgressTracker, UnlockState};
use crate::store::{FileStore, KvStore};

// Submódulos
pub mod facts;
pub mod navigation;
pub mod session;

pub use session::{KeyPress, PlaySession, SessionResult};

pub const SAVE_FILE: &str = "ice_trials_save.yaml";

pub struct IceTrialsApp<S: KvStore = FileStore> {
    pub levels: Vec<Level>,
    pub facts: Vec<FishFact>,
    pub collection: Vec<CollectionFish>,
    pub tracker: ProgressTracker<S>,

    pub state: AppState,
    /// Unlock counters as last read on entering a list screen; screens work
    /// against this snapshot, not against the store directly.
    pub unlock: UnlockState,
    pub session: Option<PlaySession>,

    pub onboarding_page: usize,
    pub loader_started: Option<f64>,

    pub fact_index: usize,
    pub favorites: Vec<String>,
}

impl IceTrialsApp<FileStore> {
    pub fn new() -> Self {
        Self::with_store(FileStore::open(SAVE_FILE))
    }
}

impl Default for IceTrialsApp<FileStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: KvStore> IceTrialsApp<S> {
    pub fn with_store(store: S) -> Self {
        let tracker = ProgressTracker::new(store);
        let unlock = tracker.unlock_state();
        let mut app = Self {
            levels: read_levels_embedded(),
            facts: read_facts_embedded(),
            collection: read_collection_embedded(),
            tracker,
            state: AppState::Loader,
            unlock,
            session: None,
            onboarding_page: 0,
            loader_started: None,
            fact_index: 0,
            favorites: Vec::new(),
        };
        app.load_fact_state();
        app
    }

    pub fn current_level(&self) -> Option<&Level> {
        let session = self.session.as_ref()?;
        self.levels.get(session.level_number.checked_sub(1)?)
    }
}
