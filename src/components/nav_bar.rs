use leptos::prelude::*;

use crate::app::AppView;
use crate::features::projects::ProjectsHook;

#[component]
pub fn NavBar(#[prop(into)] current_view: Signal<AppView>) -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");
    let hook = use_context::<ProjectsHook>().expect("ProjectsHook context");

    view! {
        <header class="topbar">
            <nav class="nav">
                {AppView::all().into_iter().map(|target| {
                    view! {
                        <button
                            class="nav-btn"
                            class:active=move || current_view.get() == target
                            on:click=move |_| navigate.set(target)
                        >{target.label()}</button>
                    }
                }).collect::<Vec<_>>()}
            </nav>
            <div class="topbar-actions">
                <button id="btn-theme" class="btn-secondary" on:click=move |_| hook.toggle_theme()>
                    {move || hook.theme.get().label()}
                </button>
                <button id="btn-export" class="btn-secondary" on:click=move |_| hook.export()>"Export"</button>
            </div>
        </header>
    }
}
