use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::config::{Settings, Theme, PROJECTS_KEY, SETTINGS_KEY, THEME_KEY};
use crate::core::error::{AppError, Result};
use crate::core::models::Project;
use crate::core::services::codec::decode_stored;
use crate::core::store::ProjectStore;

/// String key/value storage, the shape of the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Persistence boundary for the project collection. Only whole-collection
/// snapshots cross it.
pub trait ProjectRepository {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<Project>>>;
    fn save(&self, projects: &[Project]) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

impl<S: KeyValueStore> ProjectRepository for S {
    fn load(&self) -> Result<Option<Vec<Project>>> {
        match self.get(PROJECTS_KEY)? {
            Some(raw) if !raw.is_empty() => decode_stored(&raw).map(Some),
            _ => Ok(None),
        }
    }

    fn save(&self, projects: &[Project]) -> Result<()> {
        let json = serde_json::to_string(projects)?;
        self.set(PROJECTS_KEY, &json)
    }

    fn clear(&self) -> Result<()> {
        self.remove(PROJECTS_KEY)
    }
}

/// Loads the stored collection, substituting the seed dataset when nothing usable
/// is stored. A load error is handed back so the caller can report it.
pub fn load_or_seed<R: ProjectRepository>(repo: &R, now_ms: i64) -> (ProjectStore, Option<AppError>) {
    match repo.load() {
        Ok(Some(projects)) => (ProjectStore::new(projects), None),
        Ok(None) => (ProjectStore::seeded(now_ms), None),
        Err(e) => (ProjectStore::seeded(now_ms), Some(e)),
    }
}

pub fn load_settings<S: KeyValueStore>(store: &S) -> Settings {
    match store.get(SETTINGS_KEY) {
        Ok(Some(raw)) => Settings::from_json(&raw),
        _ => Settings::default(),
    }
}

pub fn save_settings<S: KeyValueStore>(store: &S, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string(settings)?;
    store.set(SETTINGS_KEY, &json)
}

pub fn load_theme<S: KeyValueStore>(store: &S) -> Theme {
    match store.get(THEME_KEY) {
        Ok(Some(raw)) => Theme::parse(&raw),
        _ => Theme::default(),
    }
}

pub fn save_theme<S: KeyValueStore>(store: &S, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())
}

/// The browser's `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn handle(&self) -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| AppError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.handle()?
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("read {}: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.handle()?
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("write {}: {:?}", key, e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.handle()?
            .remove_item(key)
            .map_err(|e| AppError::Storage(format!("remove {}: {:?}", key, e)))
    }
}

/// In-process store used where no browser is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::seed_projects;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn empty_storage_loads_the_seed() {
        let store = MemoryStore::default();
        let (projects, err) = load_or_seed(&store, NOW);
        assert!(err.is_none());
        assert_eq!(projects.snapshot(), seed_projects(NOW).as_slice());
    }

    #[test]
    fn saved_collection_is_loaded_back() {
        let store = MemoryStore::default();
        let mut projects = ProjectStore::seeded(NOW);
        projects.create("Stored".into(), String::new(), "x", NOW);
        store.save(projects.snapshot()).unwrap();

        let (loaded, err) = load_or_seed(&store, NOW + 5);
        assert!(err.is_none());
        assert_eq!(loaded.snapshot(), projects.snapshot());
    }

    #[test]
    fn corrupt_storage_falls_back_to_seed_and_reports() {
        let store = MemoryStore::default();
        store.set(PROJECTS_KEY, "{broken").unwrap();
        let (projects, err) = load_or_seed(&store, NOW);
        assert!(matches!(err, Some(AppError::Serialize(_))));
        assert_eq!(projects.len(), 2);
    }

    #[test]
    fn clear_removes_the_collection() {
        let store = MemoryStore::default();
        store.save(&seed_projects(NOW)).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn settings_and_theme_round_trip() {
        let store = MemoryStore::default();
        assert_eq!(load_settings(&store), Settings::default());
        assert_eq!(load_theme(&store), Theme::Light);

        let mut settings = Settings::default();
        settings.autosave = false;
        settings.set_card_gap(30);
        save_settings(&store, &settings).unwrap();
        save_theme(&store, Theme::Dark).unwrap();

        assert_eq!(load_settings(&store), settings);
        assert_eq!(load_theme(&store), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }
}
