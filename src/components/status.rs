//! Full-width status panels: spinner, notice and error.

use leptos::prelude::*;

#[component]
pub fn LoadingPanel(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="status-panel">
            <div class="status-panel__spinner"></div>
            <p class="status-panel__text">{text}</p>
        </div>
    }
}

#[component]
pub fn NoticePanel(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="status-panel status-panel--notice">
            <p class="status-panel__text">{text}</p>
        </div>
    }
}

/// Error text in place of a screen or its content.
#[component]
pub fn ErrorPanel(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="status-panel status-panel--error" role="alert">
            <p class="status-panel__text">{text}</p>
        </div>
    }
}
