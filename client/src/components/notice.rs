//! Inline error and status lines under the lobby forms.

use leptos::prelude::*;

/// Red validation text; hidden while `message` is `None`.
#[component]
pub fn ErrorLine(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="lobby-message lobby-message--error" role="alert">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}

/// Neutral status text, e.g. clipboard feedback.
#[component]
pub fn NoticeLine(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="lobby-message" role="status">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
