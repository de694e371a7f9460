//! Login and signup page, parameterized by [`AuthMode`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Login stores the token through the injected session and moves to the
//! selection hub. Signup moves to `/login` with a flag so the login form can
//! show the confirmation.

use enquiry_core::forms::validate_credentials;
use enquiry_core::{Route, Session, flows};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api::HttpBackend;
use crate::state::auth::{AuthFormState, AuthMode, REGISTERED_FLAG, login_after_signup_path};

#[component]
pub fn AuthPage(mode: AuthMode) -> impl IntoView {
    let session = expect_context::<Session>();
    let backend = expect_context::<HttpBackend>();
    let navigate = use_navigate();
    let query = use_query_map();
    let form = RwSignal::new(AuthFormState::default());

    let registered = move || mode == AuthMode::Login && query.with(|q| q.get(REGISTERED_FLAG).is_some());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if current.loading {
            return;
        }
        if let Err(e) = validate_credentials(&current.username, &current.password) {
            form.update(|f| f.message = Some(e.message));
            return;
        }
        form.update(AuthFormState::begin);

        let session = session.clone();
        let backend = backend.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = match mode {
                AuthMode::Login => flows::login(&backend, &session, &current.username, &current.password)
                    .await
                    .map(|route| (route.path().to_owned(), None)),
                AuthMode::Signup => flows::signup(&backend, &current.username, &current.password)
                    .await
                    .map(|text| (login_after_signup_path(), Some(text))),
            };
            match outcome {
                Ok((target, confirmation)) => {
                    form.update(|f| {
                        f.loading = false;
                        f.message = confirmation.map(str::to_owned);
                    });
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => form.update(|f| f.finish(e.user_message(mode.failure_text()))),
            }
        });
    };

    let alternate = mode.alternate();

    view! {
        <div class="page page--auth">
            <div class="card">
                <h1>{mode.title()}</h1>
                <Show when=registered>
                    <p class="card__notice">{flows::SIGNUP_SUCCEEDED}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-form__input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                    <input
                        class="auth-form__input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=move || form.with(|f| f.loading)>
                        {move || if form.with(|f| f.loading) { "Please wait..." } else { mode.title() }}
                    </button>
                </form>
                {move || form.with(|f| f.message.clone()).map(|m| view! { <p class="card__message">{m}</p> })}
                <div class="card__links">
                    <a href=Route::Home.path()>"Back to Home"</a>
                    <a href=alternate.route().path()>{alternate.title()}</a>
                </div>
            </div>
        </div>
    }
}
