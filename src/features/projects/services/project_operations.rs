use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::config::{Settings, Theme, EXPORT_FILE_NAME, FLASH_MS};
use crate::core::models::ViewState;
use crate::core::services::browser::{apply_theme, confirm, download_json, read_file_text};
use crate::core::services::{
    export_projects, import_projects, save_settings, save_theme, LocalStorage, ProjectRepository,
};
use crate::core::{ProjectEdit, ProjectStore};

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

static NEXT_NOTICE: AtomicU64 = AtomicU64::new(1);

/// A flash notice. Each one gets its own sequence number so that repeating the
/// same text still counts as a new notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub text: String,
}

impl Notice {
    pub fn new(text: String) -> Self {
        Self {
            seq: NEXT_NOTICE.fetch_add(1, Ordering::Relaxed),
            text,
        }
    }
}

// Only the notice that started a timer may be cleared by it
fn expire_notice(slot: &mut Option<Notice>, seq: u64) -> bool {
    if slot.as_ref().is_some_and(|n| n.seq == seq) {
        *slot = None;
        true
    } else {
        false
    }
}

// Show a transient notice; a newer notice is never cleared by an older timer
pub fn flash_message(flash: RwSignal<Option<Notice>>, message: String) {
    let notice = Notice::new(message);
    let seq = notice.seq;
    flash.set(Some(notice));
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(FLASH_MS).await;
        if flash.with_untracked(|n| n.as_ref().is_some_and(|n| n.seq == seq)) {
            flash.update(|slot| {
                expire_notice(slot, seq);
            });
        }
    });
}

// Write the whole collection to localStorage
pub fn persist_projects(store: RwSignal<ProjectStore>) {
    let result = store.with_untracked(|s| LocalStorage.save(s.snapshot()));
    match result {
        Ok(()) => web_sys::console::log_1(
            &format!("Saved {} project(s)", store.with_untracked(|s| s.len())).into(),
        ),
        Err(e) => web_sys::console::error_1(&format!("Failed to save projects: {}", e).into()),
    }
}

pub fn create_project(store: RwSignal<ProjectStore>, title: String, desc: String, raw_tags: String) {
    let mut new_id = 0;
    store.update(|s| {
        new_id = s.create(title, desc, &raw_tags, now_ms());
    });
    web_sys::console::log_1(&format!("Created project {}", new_id).into());
    persist_projects(store);
}

// Inline edits are only captured while autosave is on. The card already shows
// the edited text, so subscribers are not notified and the focused card survives.
pub fn apply_inline_edit(
    store: RwSignal<ProjectStore>,
    settings: RwSignal<Settings>,
    project_id: u64,
    edit: ProjectEdit,
) -> bool {
    if !settings.with_untracked(|s| s.autosave) {
        return false;
    }

    let unchanged = store.with_untracked(|s| {
        s.get(project_id).is_some_and(|p| match &edit {
            ProjectEdit::Title(t) => &p.title == t,
            ProjectEdit::Desc(d) => &p.desc == d,
            ProjectEdit::Tags(_) => false,
        })
    });
    if unchanged {
        return false;
    }

    store
        .try_update_untracked(|s| s.update_field(project_id, edit))
        .unwrap_or(false)
}

pub fn update_project_field(
    store: RwSignal<ProjectStore>,
    settings: RwSignal<Settings>,
    project_id: u64,
    edit: ProjectEdit,
) {
    if apply_inline_edit(store, settings, project_id, edit) {
        persist_projects(store);
    }
}

pub fn toggle_favorite(store: RwSignal<ProjectStore>, project_id: u64) {
    let mut toggled = None;
    store.update(|s| {
        toggled = s.toggle_fav(project_id);
    });
    if toggled.is_some() {
        persist_projects(store);
    }
}

pub fn delete_project(store: RwSignal<ProjectStore>, project_id: u64) {
    let Some(title) = store.with_untracked(|s| s.get(project_id).map(|p| p.title.clone())) else {
        return;
    };
    if !confirm(&format!("Are you sure you want to delete the project \"{}\"?", title)) {
        return;
    }

    let mut removed = false;
    store.update(|s| {
        removed = s.delete(project_id).is_some();
    });
    if removed {
        web_sys::console::log_1(&format!("Project {} deleted", project_id).into());
        persist_projects(store);
    }
}

pub fn export_to_file(store: RwSignal<ProjectStore>, flash: RwSignal<Option<Notice>>) {
    let result = store
        .with_untracked(|s| export_projects(s.snapshot()))
        .and_then(|json| download_json(EXPORT_FILE_NAME, &json));
    if let Err(e) = result {
        web_sys::console::error_1(&format!("Export failed: {}", e).into());
        flash_message(flash, format!("Export failed: {}", e));
    }
}

// Replace the collection with a picked file; a rejected file leaves it untouched
pub fn import_from_file(
    store: RwSignal<ProjectStore>,
    flash: RwSignal<Option<Notice>>,
    file: web_sys::File,
) {
    spawn_local(async move {
        let imported = match read_file_text(file).await {
            Ok(raw) => import_projects(&raw),
            Err(e) => Err(e),
        };
        match imported {
            Ok(projects) => {
                let count = projects.len();
                store.update(|s| s.replace_all(projects));
                persist_projects(store);
                web_sys::console::log_1(&format!("Imported {} project(s)", count).into());
                flash_message(flash, format!("Imported {} project(s)", count));
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Import rejected: {}", e).into());
                flash_message(flash, "Error importing the JSON file.".to_string());
            }
        }
    });
}

pub fn reset_to_examples(store: RwSignal<ProjectStore>, view_state: RwSignal<ViewState>) {
    if !confirm("Are you sure you want to reset the data to the initial examples?") {
        return;
    }
    if let Err(e) = LocalStorage.clear() {
        web_sys::console::error_1(&format!("Failed to clear stored projects: {}", e).into());
    }
    store.update(|s| s.reset_to_seed(now_ms()));
    view_state.update(|v| v.page_index = 0);
    web_sys::console::log_1(&"Projects reset to examples".into());
}

pub fn update_settings(settings: RwSignal<Settings>, f: impl FnOnce(&mut Settings)) {
    settings.update(f);
    if let Err(e) = settings.with_untracked(|s| save_settings(&LocalStorage, s)) {
        web_sys::console::error_1(&format!("Failed to save settings: {}", e).into());
    }
}

pub fn set_theme(theme_signal: RwSignal<Theme>, theme: Theme) {
    theme_signal.set(theme);
    if let Err(e) = apply_theme(theme) {
        web_sys::console::error_1(&format!("Failed to apply theme: {}", e).into());
    }
    if let Err(e) = save_theme(&LocalStorage, theme) {
        web_sys::console::error_1(&format!("Failed to save theme: {}", e).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    // Counts how many times subscribers of `store` were notified.
    fn notifications(store: RwSignal<ProjectStore>) -> Memo<usize> {
        Memo::new(move |prev: Option<&usize>| {
            store.track();
            prev.map_or(0, |n| n + 1)
        })
    }

    #[test]
    fn inline_edit_does_not_notify_subscribers() {
        let store = RwSignal::new(ProjectStore::seeded(NOW));
        let settings = RwSignal::new(Settings::default());
        let renders = notifications(store);
        assert_eq!(renders.get_untracked(), 0);

        assert!(apply_inline_edit(store, settings, 1, ProjectEdit::Title("Renamed".into())));
        assert_eq!(renders.get_untracked(), 0);
        assert_eq!(
            store.with_untracked(|s| s.get(1).map(|p| p.title.clone())),
            Some("Renamed".to_string())
        );

        store.update(|_| {});
        assert_eq!(renders.get_untracked(), 1);
    }

    #[test]
    fn inline_edit_is_skipped_when_unchanged_missing_or_autosave_off() {
        let store = RwSignal::new(ProjectStore::seeded(NOW));
        let settings = RwSignal::new(Settings::default());
        let title = store.with_untracked(|s| s.get(1).map(|p| p.title.clone())).unwrap();

        assert!(!apply_inline_edit(store, settings, 1, ProjectEdit::Title(title)));
        assert!(!apply_inline_edit(store, settings, 99, ProjectEdit::Desc("x".into())));

        settings.update(|s| s.autosave = false);
        assert!(!apply_inline_edit(store, settings, 1, ProjectEdit::Desc("x".into())));
        assert_ne!(store.with_untracked(|s| s.get(1).map(|p| p.desc.clone())), Some("x".to_string()));
    }

    #[test]
    fn repeated_text_is_a_new_notice() {
        let first = Notice::new("Imported 2 project(s)".into());
        let second = Notice::new("Imported 2 project(s)".into());
        assert_ne!(first.seq, second.seq);

        let mut slot = Some(second.clone());
        assert!(!expire_notice(&mut slot, first.seq));
        assert_eq!(slot, Some(second.clone()));
        assert!(expire_notice(&mut slot, second.seq));
        assert_eq!(slot, None);
    }
}
