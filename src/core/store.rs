use crate::core::models::{seed_projects, Project};

/// A single inline edit captured from a project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectEdit {
    Title(String),
    Desc(String),
    /// Raw tag tokens as read back from the rendered tag list.
    Tags(Vec<String>),
}

/// Issues project ids. Ids stay close to the creation timestamp but are strictly
/// increasing, so two projects created within the same millisecond never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdAllocator {
    highest: u64,
}

impl IdAllocator {
    pub fn seeded_from(projects: &[Project]) -> Self {
        Self {
            highest: projects.iter().map(|p| p.id).max().unwrap_or(0),
        }
    }

    /// Next id not held by any project in `taken`. Once the counter is exhausted
    /// the lowest free id is reused instead.
    pub fn issue(&mut self, now_ms: i64, taken: &[Project]) -> u64 {
        let candidate = u64::try_from(now_ms).unwrap_or(0);
        match self.highest.checked_add(1) {
            Some(next) => {
                self.highest = candidate.max(next);
                self.highest
            }
            None => (1..=u64::MAX)
                .find(|id| taken.iter().all(|p| p.id != *id))
                .unwrap_or(0),
        }
    }
}

/// The project collection owned by the board. Display order is collection order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    ids: IdAllocator,
}

impl ProjectStore {
    pub fn new(projects: Vec<Project>) -> Self {
        let ids = IdAllocator::seeded_from(&projects);
        Self { projects, ids }
    }

    pub fn seeded(now_ms: i64) -> Self {
        Self::new(seed_projects(now_ms))
    }

    pub fn snapshot(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Creates a project from the new-project form and puts it first.
    pub fn create(&mut self, title: String, desc: String, raw_tags: &str, now_ms: i64) -> u64 {
        let id = self.ids.issue(now_ms, &self.projects);
        self.projects
            .insert(0, Project::new(id, title, desc, raw_tags, now_ms));
        id
    }

    /// Applies an inline edit. Returns false when the project no longer exists.
    pub fn update_field(&mut self, id: u64, edit: ProjectEdit) -> bool {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        match edit {
            ProjectEdit::Title(title) => project.update_title(title),
            ProjectEdit::Desc(desc) => project.update_desc(desc),
            ProjectEdit::Tags(tokens) => project.set_tags(tokens),
        }
        true
    }

    /// Returns the new favorite flag, or None when the project no longer exists.
    pub fn toggle_fav(&mut self, id: u64) -> Option<bool> {
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .map(Project::toggle_fav)
    }

    pub fn delete(&mut self, id: u64) -> Option<Project> {
        let index = self.projects.iter().position(|p| p.id == id)?;
        Some(self.projects.remove(index))
    }

    /// Replaces the whole collection, as done by import and by loading from storage.
    pub fn replace_all(&mut self, projects: Vec<Project>) {
        *self = Self::new(projects);
    }

    pub fn reset_to_seed(&mut self, now_ms: i64) {
        *self = Self::seeded(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn create_prepends_with_parsed_tags() {
        let mut store = ProjectStore::seeded(NOW);
        let id = store.create("New".into(), "d".into(), "a, b ,c", NOW);
        let first = &store.snapshot()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.tags, vec!["a", "b", "c"]);
        assert!(!first.fav);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn ids_never_collide_within_one_millisecond() {
        let mut store = ProjectStore::default();
        let a = store.create("a".into(), String::new(), "", NOW);
        let b = store.create("b".into(), String::new(), "", NOW);
        let c = store.create("c".into(), String::new(), "", NOW - 10);
        assert!(a < b && b < c);
    }

    #[test]
    fn allocator_starts_above_loaded_ids() {
        let mut store = ProjectStore::new(vec![Project::new(5_000, "x".into(), String::new(), "", 0)]);
        assert_eq!(store.create("y".into(), String::new(), "", 10), 5_001);
    }

    #[test]
    fn exhausted_counter_still_issues_a_free_id() {
        let mut store = ProjectStore::new(vec![
            Project::new(u64::MAX, "max".into(), String::new(), "", 0),
            Project::new(1, "one".into(), String::new(), "", 0),
        ]);
        let a = store.create("a".into(), String::new(), "", NOW);
        let b = store.create("b".into(), String::new(), "", NOW);
        assert_eq!((a, b), (2, 3));

        let mut ids: Vec<u64> = store.snapshot().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn update_field_edits_only_the_target() {
        let mut store = ProjectStore::seeded(NOW);
        assert!(store.update_field(2, ProjectEdit::Title("Renamed".into())));
        assert!(store.update_field(2, ProjectEdit::Tags(vec![" ux ".into(), "".into(), "ui".into()])));
        let p = store.get(2).unwrap();
        assert_eq!(p.title, "Renamed");
        assert_eq!(p.tags, vec!["ux", "ui"]);
        assert_eq!(store.get(1).unwrap().title, "Proyecto Ejemplo 1");
    }

    #[test]
    fn operations_on_missing_projects_are_no_ops() {
        let mut store = ProjectStore::seeded(NOW);
        let before = store.clone();
        assert!(!store.update_field(99, ProjectEdit::Desc("x".into())));
        assert_eq!(store.toggle_fav(99), None);
        assert_eq!(store.delete(99), None);
        assert_eq!(store, before);
    }

    #[test]
    fn toggle_and_delete() {
        let mut store = ProjectStore::seeded(NOW);
        assert_eq!(store.toggle_fav(1), Some(false));
        assert_eq!(store.toggle_fav(1), Some(true));
        let removed = store.delete(1).unwrap();
        assert_eq!(removed.id, 1);
        assert!(store.get(1).is_none());
    }

    #[test]
    fn reset_restores_the_seed() {
        let mut store = ProjectStore::default();
        store.create("temp".into(), String::new(), "", NOW);
        store.reset_to_seed(NOW);
        assert_eq!(store.snapshot(), seed_projects(NOW).as_slice());
    }
}
