use leptos::html::Dialog;
use leptos::prelude::*;

use crate::components::{NavBar, NewProjectForm, NewProjectModal};
use crate::features::projects::{use_projects, FlashNotice};
use crate::pages::{Home, Projects};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Home,
    Projects,
}

impl AppView {
    pub fn label(&self) -> &'static str {
        match self {
            AppView::Home => "Home",
            AppView::Projects => "Projects",
        }
    }

    pub fn all() -> Vec<AppView> {
        vec![AppView::Home, AppView::Projects]
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (current_view, set_current_view) = signal(AppView::Home);
    provide_context(set_current_view);

    let hook = use_projects();
    provide_context(hook);

    // One creation dialog shared by the hero button and the board toolbar
    let new_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let open_new_dialog = Callback::new(move |_: ()| {
        if let Some(dialog) = new_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    });

    let create_project = Callback::new(move |form: NewProjectForm| {
        hook.create(form.title, form.desc, form.raw_tags);
        set_current_view.set(AppView::Projects);
    });

    view! {
        <main class="app">
            <NavBar current_view=current_view />
            {move || match current_view.get() {
                AppView::Home => view! { <Home on_add=open_new_dialog /> }.into_any(),
                AppView::Projects => view! { <Projects on_add=open_new_dialog /> }.into_any(),
            }}
            <NewProjectModal on_create=create_project dialog_ref=new_dialog_ref />
            <FlashNotice message=hook.flash />
        </main>
    }
}
