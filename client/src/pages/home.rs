//! Public landing page.

use enquiry_core::Route;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <div class="card">
                <h1>"Welcome to the Document Enquiry System"</h1>
                <p class="card__subtitle">"Upload documents and ask questions about them."</p>
                <div class="card__actions">
                    <a class="btn" href=Route::Signup.path()>"Signup"</a>
                    <a class="btn btn--secondary" href=Route::Login.path()>"Login"</a>
                </div>
            </div>
        </div>
    }
}
