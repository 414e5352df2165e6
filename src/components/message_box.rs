//! Inline success/error message under a form.

#[cfg(test)]
#[path = "message_box_test.rs"]
mod message_box_test;

use std::time::Duration;

use leptos::prelude::*;

/// How long a message stays visible.
pub const MESSAGE_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    pub tone: Tone,
    pub text: String,
}

impl Flash {
    pub fn success(text: impl Into<String>) -> Self {
        Self { tone: Tone::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { tone: Tone::Error, text: text.into() }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.tone {
            Tone::Success => "message-box success",
            Tone::Error => "message-box error",
        }
    }

    /// CSS class and text, split for rendering.
    #[must_use]
    pub fn into_parts(self) -> (&'static str, String) {
        (self.class(), self.text)
    }
}

/// Show `flash` in `slot`, clearing it after [`MESSAGE_LIFETIME`] unless a
/// newer message has replaced it by then.
pub fn show_flash(slot: RwSignal<Option<Flash>>, flash: Flash) {
    slot.set(Some(flash.clone()));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(MESSAGE_LIFETIME).await;
        slot.try_update(|current| {
            if current.as_ref() == Some(&flash) {
                *current = None;
            }
        });
    });
}

#[component]
pub fn MessageBox(slot: RwSignal<Option<Flash>>) -> impl IntoView {
    view! {
        <div class="message-container">
            {move || {
                slot.get()
                    .map(|flash| {
                        let (class, text) = flash.into_parts();
                        view! { <div class=class>{text}</div> }
                    })
            }}
        </div>
    }
}
