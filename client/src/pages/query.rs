//! Query/chat page: pick a document, ask questions, read answers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The document page is fetched once after mount. A failed fetch shows an
//! empty picker; the id can still be typed by hand.

use enquiry_core::forms::validate_query;
use enquiry_core::{Session, flows};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::document_picker::DocumentPicker;
use crate::components::session_actions::SessionActions;
use crate::components::transcript_view::TranscriptView;
use crate::net::api::HttpBackend;
use crate::state::query::QueryState;

#[component]
pub fn QueryPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let backend = expect_context::<HttpBackend>();
    let state = RwSignal::new(QueryState { documents_loading: true, ..QueryState::default() });

    let requested = RwSignal::new(false);
    {
        let session = session.clone();
        let backend = backend.clone();
        Effect::new(move || {
            if requested.get_untracked() {
                return;
            }
            requested.set(true);
            let session = session.clone();
            let backend = backend.clone();
            spawn_local(async move {
                let documents = flows::load_documents(&backend, &session).await;
                state.update(|s| s.set_documents(documents));
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.loading) {
            return;
        }
        let request = match state.with_untracked(|s| validate_query(&s.document_id, &s.question)) {
            Ok(request) => request,
            Err(e) => {
                state.update(|s| s.notice = Some(e.message));
                return;
            }
        };
        state.update(|s| s.begin(&request));

        let session = session.clone();
        let backend = backend.clone();
        spawn_local(async move {
            let outcome = flows::query(&backend, &session, &request).await;
            state.update(|s| s.finish(flows::answer_text(outcome)));
        });
    };

    let documents = Signal::derive(move || state.with(|s| s.documents.clone()));
    let selected = Signal::derive(move || state.with(|s| s.document_id.clone()));
    let documents_loading = Signal::derive(move || state.with(|s| s.documents_loading));
    let transcript = Signal::derive(move || state.with(|s| s.transcript.clone()));
    let pending = Signal::derive(move || state.with(|s| s.loading));
    let on_select = Callback::new(move |id: String| state.update(|s| s.document_id = id));

    view! {
        <div class="page page--query">
            <div class="query-layout">
                <DocumentPicker documents=documents selected=selected loading=documents_loading on_select=on_select/>
                <div class="query-chat">
                    <h1>"Query Documents"</h1>
                    {move || state.with(|s| s.selected_title().map(str::to_owned)).map(|title| view! {
                        <p class="query-chat__selected">"Selected: " {title}</p>
                    })}
                    <TranscriptView transcript=transcript pending=pending/>
                    {move || state.with(|s| s.notice.clone()).map(|n| view! { <p class="card__message">{n}</p> })}
                    <form class="query-form" on:submit=on_submit>
                        <input
                            class="query-form__input query-form__input--id"
                            type="text"
                            placeholder="Document ID"
                            prop:value=move || state.with(|s| s.document_id.clone())
                            on:input=move |ev| state.update(|s| s.document_id = event_target_value(&ev))
                        />
                        <input
                            class="query-form__input"
                            type="text"
                            placeholder="Ask a question..."
                            prop:value=move || state.with(|s| s.question.clone())
                            on:input=move |ev| state.update(|s| s.question = event_target_value(&ev))
                        />
                        <button
                            class="btn"
                            class:btn--muted=move || !state.with(QueryState::can_submit)
                            type="submit"
                            disabled=move || state.with(|s| s.loading)
                        >
                            {move || if state.with(|s| s.loading) { "Asking..." } else { "Ask" }}
                        </button>
                    </form>
                    <SessionActions back=true/>
                </div>
            </div>
        </div>
    }
}
