//! Chat-style transcript of questions and answers.

use enquiry_core::{Role, Transcript};
use leptos::prelude::*;

use crate::util::markdown::render_markdown_html;

/// Transcript rendered top to bottom, scrolled to the newest entry.
#[component]
pub fn TranscriptView(#[prop(into)] transcript: Signal<Transcript>, #[prop(into)] pending: Signal<bool>) -> impl IntoView {
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = transcript.with(Transcript::len);
        let _ = pending.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="transcript" node_ref=messages_ref>
            {move || {
                let transcript = transcript.get();
                if transcript.is_empty() {
                    return view! { <div class="transcript__empty">"Ask a question about the selected document."</div> }
                        .into_any();
                }

                transcript
                    .entries()
                    .iter()
                    .map(|msg| {
                        let is_answer = msg.role == Role::Answer;
                        let body = if is_answer {
                            let rendered = render_markdown_html(&msg.text);
                            view! { <div class="transcript__markdown" inner_html=rendered></div> }.into_any()
                        } else {
                            view! { <span>{msg.text.clone()}</span> }.into_any()
                        };
                        view! {
                            <div
                                class="transcript__message"
                                class:transcript__message--question=!is_answer
                                class:transcript__message--answer=is_answer
                            >
                                <div class="transcript__role">{if is_answer { "Answer" } else { "You" }}</div>
                                {body}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}

            {move || pending.get().then(|| view! { <div class="transcript__loading">"Thinking..."</div> })}
        </div>
    }
}
