use leptos::prelude::*;

use crate::features::projects::services::Notice;

#[component]
pub fn FlashNotice(#[prop(into)] message: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        message.get().map(|notice| {
            view! { <div class="flash" role="status">{notice.text}</div> }
        })
    }
}
