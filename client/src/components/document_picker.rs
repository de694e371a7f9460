//! Picker over the first page of the user's documents.

use enquiry_core::DocumentRef;
use leptos::prelude::*;

#[component]
pub fn DocumentPicker(
    #[prop(into)] documents: Signal<Vec<DocumentRef>>,
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] loading: Signal<bool>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="document-picker">
            <h2>"Documents"</h2>
            <ul class="document-picker__list">
                {move || {
                    if loading.get() {
                        return view! { <li class="document-picker__empty">"Loading documents..."</li> }
                            .into_any();
                    }
                    let docs = documents.get();
                    if docs.is_empty() {
                        return view! { <li class="document-picker__empty">"No documents available"</li> }
                            .into_any();
                    }
                    docs.into_iter()
                        .map(|doc| {
                            let id = doc.id.clone();
                            let is_selected = {
                                let id = id.clone();
                                move || selected.get().trim() == id
                            };
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class="document-picker__item"
                                        class:document-picker__item--selected=is_selected
                                        on:click=move |_| on_select.run(id.clone())
                                    >
                                        <span class="document-picker__title">{doc.title}</span>
                                        {doc.status.map(|status| view! {
                                            <span class="document-picker__status">{status}</span>
                                        })}
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </ul>
        </div>
    }
}
