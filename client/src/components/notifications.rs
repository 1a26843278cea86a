//! Toast stack rendered above every page.

use leptos::prelude::*;

use crate::state::notification::NotificationState;

/// Renders queued notifications; clicking the close button dismisses early.
#[component]
pub fn Notifications() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    view! {
        <div class="notifications" aria-live="polite">
            <For
                each=move || notifications.get().items
                key=|n| n.id.clone()
                children=move |n| {
                    let id = n.id.clone();
                    let class = format!("notification notification--{}", n.kind.as_str());
                    view! {
                        <div class=class role="status">
                            <span class="notification__message">{n.message}</span>
                            <button
                                class="notification__close"
                                title="Dismiss"
                                on:click=move |_| notifications.update(|s| s.remove(&id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
