//! Fallback for paths outside the route table.

use leptos::prelude::*;

use crate::routes::DASHBOARD_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <a href=DASHBOARD_PATH class="btn">"Back to dashboard"</a>
        </div>
    }
}
