use std::collections::BTreeMap;
use std::path::PathBuf;

/// String key/value store behind the progress tracker and the facts screens.
///
/// Writes are best-effort: a failed persist leaves durable state stale until
/// the next successful write, and nothing is surfaced to the caller. The
/// `multi_*` operations are treated as logically atomic by callers even
/// though the backing file gives no cross-key guarantee.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);

    fn multi_get(&self, keys: &[&str]) -> Vec<Option<String>> {
        keys.iter().map(|k| self.get(k)).collect()
    }

    fn multi_set(&mut self, pairs: &[(&str, &str)]) {
        for (k, v) in pairs {
            self.set(k, v);
        }
    }

    fn multi_remove(&mut self, keys: &[&str]) {
        for k in keys {
            self.remove(k);
        }
    }
}

/// In-memory store, used by the tests as a stand-in for the real backend.
#[derive(Default, Debug, Clone)]
pub struct MemoryStore {
    map: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.map.remove(key);
    }
}

/// File-backed store: a YAML map loaded once at startup and rewritten after
/// each batch. A missing or unparseable file is valid initial state.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    map: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_yaml::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("save file {} corrupto, empezando de cero: {e}", path.display());
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self { path, map }
    }

    pub fn persist(&self) {
        let raw = match serde_yaml::to_string(&self.map) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("no se pudo serializar el save file: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, raw) {
            log::warn!("no se pudo escribir {}: {e}", self.path.display());
        }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_owned(), value.to_owned());
        self.persist();
    }

    fn remove(&mut self, key: &str) {
        if self.map.remove(key).is_some() {
            self.persist();
        }
    }

    // Una sola escritura a disco por lote.
    fn multi_set(&mut self, pairs: &[(&str, &str)]) {
        for (k, v) in pairs {
            self.map.insert((*k).to_owned(), (*v).to_owned());
        }
        self.persist();
    }

    fn multi_remove(&mut self, keys: &[&str]) {
        let mut changed = false;
        for k in keys {
            changed |= self.map.remove(*k).is_some();
        }
        if changed {
            self.persist();
        }
    }
}
