//! Selection hub shown after login.

use enquiry_core::Route;
use leptos::prelude::*;

use crate::components::session_actions::SessionActions;

#[component]
pub fn SelectionPage() -> impl IntoView {
    view! {
        <div class="page page--select">
            <div class="card">
                <h1>"Choose an Action"</h1>
                <div class="card__actions">
                    <a class="btn" href=Route::Upload.path()>"Upload Document"</a>
                    <a class="btn" href=Route::Query.path()>"Query Documents"</a>
                </div>
                <SessionActions/>
            </div>
        </div>
    }
}
