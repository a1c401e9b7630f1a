use leptos::prelude::*;

use crate::app::AppView;
use crate::features::projects::ProjectsHook;

#[component]
pub fn Home(#[prop(into)] on_add: Callback<()>) -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");
    let hook = use_context::<ProjectsHook>().expect("ProjectsHook context");

    let favorites = move || hook.store.with(|s| s.snapshot().iter().filter(|p| p.fav).count());

    view! {
        <section class="page hero" id="page-home">
            <h1>"Project Board"</h1>
            <p>"Keep track of what you are building, tag it, and star what matters."</p>
            <p class="hero-stats">
                {move || format!("{} project(s), {} favorite(s)", hook.store.with(|s| s.len()), favorites())}
            </p>
            <div class="hero-actions">
                <button id="hero-add" class="btn-primary" on:click=move |_| on_add.run(())>"+ New project"</button>
                <button class="btn-secondary goto" on:click=move |_| navigate.set(AppView::Projects)>"See projects"</button>
            </div>
        </section>
    }
}
