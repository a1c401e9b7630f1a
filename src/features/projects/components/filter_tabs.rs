use leptos::prelude::*;

use crate::core::models::{Filter, ViewState};

#[component]
pub fn FilterTabs(
    #[prop(into)] view_state: Signal<ViewState>,
    #[prop(into)] on_select: Callback<Filter>,
) -> impl IntoView {
    view! {
        <div class="tabs">
            {Filter::all().into_iter().map(|filter| {
                view! {
                    <button
                        class="tab"
                        class:active=move || view_state.with(|v| v.filter == filter)
                        data-filter=filter.as_str()
                        on:click=move |_| on_select.run(filter)
                    >{filter.label()}</button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
