//! Root application component with routing and context providers.

use enquiry_core::Route as AppRoute;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::Protected;
use crate::net::api::HttpBackend;
use crate::pages::{
    auth::AuthPage, home::HomePage, query::QueryPage, select::SelectionPage, upload::UploadPage,
};
use crate::state::auth::AuthMode;
use crate::state::session::browser_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session handle and HTTP adapter as context so every view
/// receives them explicitly instead of reaching for browser globals.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(browser_session());
    provide_context(HttpBackend::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/enquiry.css"/>
        <Title text="Document Enquiry System"/>

        <Router>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=|| view! { <AuthPage mode=AuthMode::Login/> }/>
                    <Route path=StaticSegment("signup") view=|| view! { <AuthPage mode=AuthMode::Signup/> }/>
                    <Route
                        path=StaticSegment("select")
                        view=|| view! { <Protected route=AppRoute::Select><SelectionPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("upload")
                        view=|| view! { <Protected route=AppRoute::Upload><UploadPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("query")
                        view=|| view! { <Protected route=AppRoute::Query><QueryPage/></Protected> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
