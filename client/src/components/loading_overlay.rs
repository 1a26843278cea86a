//! Full-screen busy overlay driven by `LoadingState`.

use leptos::prelude::*;

use crate::state::loading::LoadingState;

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let loading = expect_context::<RwSignal<LoadingState>>();

    view! {
        <Show when=move || loading.with(|l| l.is_loading)>
            <div class="loading-overlay">
                <div class="loading-overlay__spinner" aria-hidden="true"></div>
                <p class="loading-overlay__text">{move || loading.with(|l| l.text.clone())}</p>
            </div>
        </Show>
    }
}
