use chrono::DateTime;
use leptos::html::{Div, P, H3};
use leptos::prelude::*;

use crate::core::models::Project;
use crate::core::services::browser::span_texts;
use crate::core::ProjectEdit;

fn created_label(date_ms: i64) -> String {
    DateTime::from_timestamp_millis(date_ms)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

// Card with contenteditable title, description and tags; edits are read back on focus loss
#[component]
pub fn ProjectCard(
    project: Project,
    #[prop(into)] on_edit: Callback<(u64, ProjectEdit)>,
    #[prop(into)] on_toggle_fav: Callback<u64>,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    let id = project.id;
    let title_ref: NodeRef<H3> = NodeRef::new();
    let desc_ref: NodeRef<P> = NodeRef::new();
    let tags_ref: NodeRef<Div> = NodeRef::new();

    let commit_title = move |_| {
        if let Some(el) = title_ref.get_untracked() {
            on_edit.run((id, ProjectEdit::Title(el.text_content().unwrap_or_default())));
        }
    };
    let commit_desc = move |_| {
        if let Some(el) = desc_ref.get_untracked() {
            on_edit.run((id, ProjectEdit::Desc(el.text_content().unwrap_or_default())));
        }
    };
    let commit_tags = move |_| {
        if let Some(el) = tags_ref.get_untracked() {
            on_edit.run((id, ProjectEdit::Tags(span_texts(&el))));
        }
    };

    view! {
        <article class="card" data-id=id.to_string()>
            <div class="card-header">
                <h3 node_ref=title_ref contenteditable="true" data-field="title" on:focusout=commit_title>
                    {project.title.clone()}
                </h3>
                <button
                    class="fav-btn"
                    class:active=project.fav
                    title="Favorite"
                    on:click=move |_| on_toggle_fav.run(id)
                >"♥"</button>
                <button class="delete-btn" title="Delete" on:click=move |_| on_delete.run(id)>"🗑️"</button>
            </div>
            <p node_ref=desc_ref contenteditable="true" data-field="desc" on:focusout=commit_desc>
                {project.desc.clone()}
            </p>
            <div node_ref=tags_ref class="tags" contenteditable="true" data-field="tags" on:focusout=commit_tags>
                {project.tags.iter().map(|tag| view! { <span>{tag.clone()}</span> }).collect::<Vec<_>>()}
            </div>
            <small class="card-date">{created_label(project.date)}</small>
        </article>
    }
}
