use leptos::html::Input;
use leptos::prelude::*;

use crate::core::config::MAX_CARD_GAP;
use crate::features::projects::hooks::ProjectsHook;

#[component]
pub fn BoardToolbar(#[prop(into)] on_add: Callback<()>) -> impl IntoView {
    let hook = use_context::<ProjectsHook>().expect("ProjectsHook context");
    let file_input_ref: NodeRef<Input> = NodeRef::new();

    let pick_file = move |_| {
        if let Some(input) = file_input_ref.get_untracked() {
            input.click();
        }
    };

    let on_file_chosen = move |_| {
        let Some(input) = file_input_ref.get_untracked() else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            hook.import(file);
        }
        // allow picking the same file again
        input.set_value("");
    };

    view! {
        <div class="toolbar">
            <input
                id="search"
                type="search"
                placeholder="Search by title or tag..."
                prop:value=move || hook.view_state.with(|v| v.search_term.clone())
                on:input=move |ev| hook.set_search(event_target_value(&ev))
            />
            <button id="btn-add" class="btn-primary" on:click=move |_| on_add.run(())>"+ New"</button>

            <label class="toolbar-field">
                "Per page"
                <input
                    id="per-page"
                    type="number"
                    min="1"
                    prop:value=move || hook.view_state.with(|v| v.page_size.get().to_string())
                    on:change=move |ev| hook.set_page_size_input(event_target_value(&ev))
                />
            </label>

            <label class="toolbar-field">
                "Spacing"
                <input
                    id="margin-range"
                    type="range"
                    min="0"
                    max=MAX_CARD_GAP.to_string()
                    prop:value=move || hook.settings.with(|s| s.card_gap.to_string())
                    on:input=move |ev| {
                        if let Ok(gap) = event_target_value(&ev).parse::<u32>() {
                            hook.set_card_gap(gap);
                        }
                    }
                />
            </label>

            <label class="toolbar-field">
                <input
                    id="autosave"
                    type="checkbox"
                    prop:checked=move || hook.settings.with(|s| s.autosave)
                    on:change=move |ev| hook.set_autosave(event_target_checked(&ev))
                />
                "Autosave"
            </label>

            <button id="btn-import" class="btn-secondary" on:click=pick_file>"Import"</button>
            <input
                id="file-import"
                node_ref=file_input_ref
                type="file"
                accept="application/json,.json"
                style="display: none;"
                on:change=on_file_chosen
            />
            <button id="btn-reset" class="btn-secondary danger" on:click=move |_| hook.reset()>"Reset"</button>
        </div>
    }
}
