use leptos::prelude::*;

use crate::core::PageView;

#[component]
pub fn Pager(
    #[prop(into)] page: Signal<PageView>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pager-bar">
            <button
                id="prev-page"
                class="btn-secondary"
                prop:disabled=move || page.with(|p| !p.info.has_prev())
                on:click=move |_| on_prev.run(())
            >"‹"</button>
            <span id="pager">{move || page.with(|p| p.info.label())}</span>
            <button
                id="next-page"
                class="btn-secondary"
                prop:disabled=move || page.with(|p| !p.info.has_next())
                on:click=move |_| on_next.run(())
            >"›"</button>
            <span id="page-indicator">
                {move || page.with(|p| format!("Page {}", p.info.current_page_index + 1))}
            </span>
        </div>
    }
}
