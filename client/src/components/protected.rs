//! Route guard wrapper for views that need a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders every visitor as logged out, so the decision is taken
//! in an effect after hydration. Until then the fallback is shown, which
//! keeps server and client markup identical.

use enquiry_core::{GuardDecision, Route, Session, guard};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Render `children` only when `route` passes the session guard; otherwise
/// replace the history entry with the redirect target.
#[component]
pub fn Protected(route: Route, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let allowed = RwSignal::new(false);

    Effect::new(move || match guard(route, &session) {
        GuardDecision::Render => allowed.set(true),
        GuardDecision::Redirect(target) => {
            navigate(target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || allowed.get()
            fallback=|| view! { <p class="page__notice">"Checking session..."</p> }
        >
            {children()}
        </Show>
    }
}
