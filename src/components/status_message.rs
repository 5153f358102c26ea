//! Status line shown under a card's registration form.

use leptos::prelude::*;

use crate::state::status::StatusMessage;

/// Renders the current message of one status slot, hidden while empty.
#[component]
pub fn StatusMessageView(#[prop(into)] status: Signal<Option<StatusMessage>>) -> impl IntoView {
    let class = move || match status.get() {
        Some(message) => format!("message {}", message.kind.class()),
        None => "message hidden".to_owned(),
    };

    view! {
        <div class=class role="status" aria-live="polite">
            {move || status.get().map(|m| m.text).unwrap_or_default()}
        </div>
    }
}
