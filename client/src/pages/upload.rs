//! Single-file upload page.
//!
//! The `File` handle is read from the input element at submit time; only its
//! name and size live in the view state.

use enquiry_core::forms::SelectedFile;
use enquiry_core::{Backend, Session, flows};
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::session_actions::SessionActions;
use crate::net::api::HttpBackend;
use crate::state::upload::UploadState;

type Selection = (SelectedFile, <HttpBackend as Backend>::Upload);

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn current_selection(input: NodeRef<Input>) -> Option<Selection> {
    let file = input.get_untracked()?.files()?.get(0)?;
    let meta = SelectedFile { name: file.name(), size: file.size() as u64 };
    Some((meta, file))
}

#[cfg(not(feature = "hydrate"))]
fn current_selection(_input: NodeRef<Input>) -> Option<Selection> {
    None
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let backend = expect_context::<HttpBackend>();
    let state = RwSignal::new(UploadState::default());
    let file_input = NodeRef::<Input>::new();

    let on_change = move |_| {
        let meta = current_selection(file_input).map(|(meta, _)| meta);
        state.update(|s| s.select(meta));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.loading) {
            return;
        }
        let selection = current_selection(file_input);
        state.update(UploadState::begin);

        let session = session.clone();
        let backend = backend.clone();
        spawn_local(async move {
            let result = flows::upload(&backend, &session, selection).await;
            state.update(|s| s.finish(flows::upload_message(&result)));
        });
    };

    view! {
        <div class="page page--upload">
            <div class="card">
                <h1>"Upload Document"</h1>
                <form class="upload-form" on:submit=on_submit>
                    <input class="upload-form__file" type="file" node_ref=file_input on:change=on_change/>
                    {move || state.with(|s| s.selected.clone()).map(|file| view! {
                        <p class="upload-form__selected">{format!("{} ({} bytes)", file.name, file.size)}</p>
                    })}
                    <button class="btn" type="submit" disabled=move || !state.with(UploadState::can_submit)>
                        {move || if state.with(|s| s.loading) { "Uploading..." } else { "Upload" }}
                    </button>
                </form>
                {move || state.with(|s| s.message.clone()).map(|m| view! { <p class="card__message">{m}</p> })}
                <SessionActions back=true/>
            </div>
        </div>
    }
}
