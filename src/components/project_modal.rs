use leptos::prelude::*;
use leptos::{ev, html::Dialog};

/// Form values of a new project. Tags are still the raw comma separated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProjectForm {
    pub title: String,
    pub desc: String,
    pub raw_tags: String,
}

#[component]
pub fn NewProjectModal(
    #[prop(into)] on_create: Callback<NewProjectForm>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (desc, set_desc) = signal(String::new());
    let (tags, set_tags) = signal(String::new());

    let reset_form = move || {
        set_title.set(String::new());
        set_desc.set(String::new());
        set_tags.set(String::new());
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        on_create.run(NewProjectForm {
            title: title.get_untracked(),
            desc: desc.get_untracked(),
            raw_tags: tags.get_untracked(),
        });

        reset_form();
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref id="dialog-new" class="modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"New project"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form id="form-new" on:submit=handle_submit>
                    <div class="form-group">
                        <label for="new-title">"Title"</label>
                        <input
                            id="new-title"
                            type="text"
                            placeholder="Project title..."
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="new-desc">"Description"</label>
                        <textarea
                            id="new-desc"
                            rows="4"
                            placeholder="What is it about?"
                            on:input=move |ev| set_desc.set(event_target_value(&ev))
                            prop:value=move || desc.get()
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label for="new-tags">"Tags"</label>
                        <input
                            id="new-tags"
                            type="text"
                            placeholder="dev, web, design"
                            on:input=move |ev| set_tags.set(event_target_value(&ev))
                            prop:value=move || tags.get()
                        />
                        <small class="form-help">"Comma separated"</small>
                    </div>
                    <div class="modal-actions">
                        <button type="button" id="cancel-new" class="btn-secondary" on:click=close_modal>"Cancel"</button>
                        <button type="submit" id="accept-new" class="btn-primary">"Create"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
