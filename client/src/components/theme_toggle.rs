//! Light/dark switch button.

use leptos::prelude::*;

use crate::state::theme::ThemeState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    view! {
        <button
            class="btn toolbar__dark-toggle"
            on:click=move |_| {
                let next = crate::util::theme::toggle(theme.get_untracked().theme);
                theme.set(ThemeState { theme: next });
            }
            title="Toggle dark mode"
        >
            {move || if theme.get().theme.is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
