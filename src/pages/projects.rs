use leptos::prelude::*;

use crate::core::models::Filter;
use crate::core::ProjectEdit;
use crate::features::projects::{BoardToolbar, FilterTabs, Pager, ProjectCard, ProjectsHook};

#[component]
pub fn Projects(#[prop(into)] on_add: Callback<()>) -> impl IntoView {
    let hook = use_context::<ProjectsHook>().expect("ProjectsHook context");

    let on_edit = Callback::new(move |(id, edit): (u64, ProjectEdit)| hook.edit(id, edit));
    let on_toggle_fav = Callback::new(move |id: u64| hook.toggle_fav(id));
    let on_delete = Callback::new(move |id: u64| hook.delete(id));

    view! {
        <section class="page" id="page-projects">
            <FilterTabs
                view_state=hook.view_state
                on_select=Callback::new(move |filter: Filter| hook.set_filter(filter))
            />
            <BoardToolbar on_add=on_add />

            <div
                id="cards"
                class="cards-grid"
                style:gap=move || format!("{}px", hook.settings.with(|s| s.card_gap))
            >
                {move || {
                    let items = hook.page.with(|p| p.items.clone());
                    if items.is_empty() {
                        view! { <p class="empty">"No projects to show."</p> }.into_any()
                    } else {
                        items
                            .into_iter()
                            .map(|project| view! {
                                <ProjectCard
                                    project=project
                                    on_edit=on_edit
                                    on_toggle_fav=on_toggle_fav
                                    on_delete=on_delete
                                />
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>

            <Pager
                page=hook.page
                on_prev=Callback::new(move |_: ()| hook.prev_page())
                on_next=Callback::new(move |_: ()| hook.next_page())
            />
        </section>
    }
}
