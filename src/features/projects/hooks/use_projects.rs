use chrono::Utc;
use leptos::prelude::*;

use crate::core::config::{Settings, Theme};
use crate::core::models::{Filter, ViewState};
use crate::core::services::browser::apply_theme;
use crate::core::services::{load_or_seed, load_settings, load_theme, LocalStorage};
use crate::core::{derive_page, PageView, ProjectEdit, ProjectStore};
use crate::features::projects::services::{
    create_project, delete_project, export_to_file, flash_message, import_from_file,
    reset_to_examples, set_theme, toggle_favorite, update_project_field, update_settings, Notice,
};

/// Board state shared through context by every page.
#[derive(Clone, Copy)]
pub struct ProjectsHook {
    pub store: RwSignal<ProjectStore>,
    pub view_state: RwSignal<ViewState>,
    pub settings: RwSignal<Settings>,
    pub theme: RwSignal<Theme>,
    pub flash: RwSignal<Option<Notice>>,
    pub page: Memo<PageView>,
}

pub fn use_projects() -> ProjectsHook {
    let (loaded, load_error) = load_or_seed(&LocalStorage, Utc::now().timestamp_millis());
    match load_error {
        Some(e) => web_sys::console::error_1(
            &format!("Stored projects unreadable, using examples: {}", e).into(),
        ),
        None => web_sys::console::log_1(&format!("Loaded {} project(s)", loaded.len()).into()),
    }

    let initial_settings = load_settings(&LocalStorage);
    let initial_theme = load_theme(&LocalStorage);
    if let Err(e) = apply_theme(initial_theme) {
        web_sys::console::error_1(&format!("Failed to apply theme: {}", e).into());
    }

    let store = RwSignal::new(loaded);
    let view_state = RwSignal::new(ViewState::new(initial_settings.page_size));
    let settings = RwSignal::new(initial_settings);
    let theme = RwSignal::new(initial_theme);
    let flash = RwSignal::new(None::<Notice>);

    let page = Memo::new(move |_| {
        store.with(|s| view_state.with(|v| derive_page(s.snapshot(), v)))
    });

    // Keep a stale page index from outliving a shrunken filtered set
    Effect::new(move |_| {
        let effective = page.with(|p| p.info.current_page_index);
        if view_state.with_untracked(|v| v.page_index != effective) {
            view_state.update(|v| {
                v.clamp_to(effective);
            });
        }
    });

    ProjectsHook {
        store,
        view_state,
        settings,
        theme,
        flash,
        page,
    }
}

impl ProjectsHook {
    pub fn create(&self, title: String, desc: String, raw_tags: String) {
        create_project(self.store, title, desc, raw_tags);
    }

    pub fn edit(&self, project_id: u64, edit: ProjectEdit) {
        update_project_field(self.store, self.settings, project_id, edit);
    }

    pub fn toggle_fav(&self, project_id: u64) {
        toggle_favorite(self.store, project_id);
    }

    pub fn delete(&self, project_id: u64) {
        delete_project(self.store, project_id);
    }

    pub fn export(&self) {
        export_to_file(self.store, self.flash);
    }

    pub fn import(&self, file: web_sys::File) {
        import_from_file(self.store, self.flash, file);
    }

    pub fn reset(&self) {
        reset_to_examples(self.store, self.view_state);
    }

    pub fn set_filter(&self, filter: Filter) {
        self.view_state.update(|v| v.set_filter(filter));
    }

    pub fn set_search(&self, term: String) {
        self.view_state.update(|v| v.set_search_term(term));
    }

    pub fn prev_page(&self) {
        self.view_state.update(ViewState::prev_page);
    }

    pub fn next_page(&self) {
        if self.page.with_untracked(|p| p.info.has_next()) {
            self.view_state.update(ViewState::next_page);
        }
    }

    /// Applies the per-page input; invalid values are refused with a notice.
    pub fn set_page_size_input(&self, raw: String) {
        let mut applied = None;
        let mut rejected = None;
        self.view_state.update(|v| match v.set_page_size_input(&raw) {
            Ok(size) => applied = Some(size),
            Err(e) => rejected = Some(e),
        });
        if let Some(size) = applied {
            update_settings(self.settings, |s| s.page_size = size);
        }
        if let Some(e) = rejected {
            web_sys::console::error_1(&format!("{}", e).into());
            flash_message(self.flash, "Projects per page must be a positive number.".to_string());
        }
    }

    pub fn set_autosave(&self, enabled: bool) {
        update_settings(self.settings, |s| s.autosave = enabled);
    }

    pub fn set_card_gap(&self, gap: u32) {
        update_settings(self.settings, |s| s.set_card_gap(gap));
    }

    pub fn toggle_theme(&self) {
        set_theme(self.theme, self.theme.get_untracked().toggled());
    }
}
