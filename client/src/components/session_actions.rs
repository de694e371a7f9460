//! "Back to Selection" and "Logout" actions shown on protected views.

use enquiry_core::{Route, Session, flows};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SessionActions(#[prop(optional)] back: bool) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let error = RwSignal::new(None::<String>);

    let on_logout = move |_| match flows::logout(&session) {
        Ok(target) => navigate(target.path(), NavigateOptions::default()),
        Err(e) => error.set(Some(e.user_message("Logout failed."))),
    };

    view! {
        <div class="session-actions">
            {back.then(|| view! {
                <a class="btn" href=Route::Select.path()>"Back to Selection"</a>
            })}
            <button class="btn btn--secondary" type="button" on:click=on_logout>
                "Logout"
            </button>
            {move || error.get().map(|m| view! { <p class="card__message">{m}</p> })}
        </div>
    }
}
