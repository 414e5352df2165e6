//! Profile setup: nickname plus one of four field positions.

#[cfg(test)]
#[path = "position_selection_test.rs"]
mod position_selection_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::components::message_box::{Flash, MessageBox, show_flash};
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::Position;
use crate::state::context::AppContext;
use crate::state::router::{RouterState, Screen};
use crate::storage::SessionStore;

/// Pause between a successful save and the switch to the dashboard.
pub const SAVE_REDIRECT_DELAY: Duration = Duration::from_secs(1);

pub const SAVED_FALLBACK_MESSAGE: &str = "Profile saved!";

/// Form state of the screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionDraft {
    pub nickname: String,
    pub position: Option<Position>,
    pub saving: bool,
}

impl PositionDraft {
    /// Start from the cached nickname, with no position picked.
    pub fn from_session(session: &SessionStore) -> Self {
        Self { nickname: session.nickname().unwrap_or_default(), ..Self::default() }
    }

    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.saving && !self.nickname.trim().is_empty() && self.position.is_some()
    }

    /// Trimmed nickname and position, when the form can be submitted.
    #[must_use]
    pub fn submission(&self) -> Option<(String, Position)> {
        let position = self.position.filter(|_| self.can_save())?;
        Some((self.nickname.trim().to_owned(), position))
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.saving { "Saving…" } else { "Save" }
    }
}

/// Cache an in-progress nickname so it survives a reload.
pub fn remember_nickname(session: &SessionStore, nickname: &str) {
    if let Err(e) = session.set_nickname(nickname) {
        tracing::warn!(error = %e, "failed to cache nickname");
    }
}

/// Save the profile and return the message to show the player.
///
/// # Errors
///
/// Propagates the [`ApiError`] from the profile update.
pub async fn save_profile(api: &ApiClient, nickname: &str, position: Position) -> Result<String, ApiError> {
    let profile = api.update_profile(nickname, position).await?;
    Ok(profile.message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| SAVED_FALLBACK_MESSAGE.to_owned()))
}

#[component]
pub fn PositionSelectionPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let router = expect_context::<RwSignal<RouterState>>();

    let draft = RwSignal::new(PositionDraft::from_session(&ctx.session));
    let message = RwSignal::new(None::<Flash>);

    let session = ctx.session.clone();
    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        remember_nickname(&session, &value);
        draft.update(|d| d.nickname = value);
    };

    let cards = Position::ALL
        .into_iter()
        .map(|position| {
            let selected = move || draft.with(|d| d.position == Some(position));
            view! {
                <button
                    class="position-card"
                    class:selected-card=selected
                    data-id=position.code()
                    on:click=move |_| draft.update(|d| d.position = Some(position))
                >
                    <Show when=selected>
                        <span class="check-icon material-icons">"check"</span>
                    </Show>
                    <span class="material-symbols-outlined">{position.icon()}</span>
                    <span class="position-card__label">{position.label()}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    let api = ctx.api.clone();
    let on_save = move |_| {
        let Some((nickname, position)) = draft.with_untracked(PositionDraft::submission) else {
            return;
        };
        draft.update(|d| d.saving = true);
        message.set(None);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match save_profile(&api, &nickname, position).await {
                    Ok(text) => {
                        show_flash(message, Flash::success(text));
                        gloo_timers::future::sleep(SAVE_REDIRECT_DELAY).await;
                        router.try_update(|r| r.navigate(Screen::Dashboard));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, code = e.error_code(), "profile save failed");
                        draft.try_update(|d| d.saving = false);
                        show_flash(message, Flash::error(e.to_string()));
                    }
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, nickname, position, router);
        }
    };

    view! {
        <section class="position-selection">
            <h1 class="screen-title">"Choose your position"</h1>
            <label class="field">
                <span class="field__label">"Nickname"</span>
                <input
                    id="nickname-input"
                    class="field__input"
                    type="text"
                    placeholder="@ivan_football"
                    prop:value=move || draft.with(|d| d.nickname.clone())
                    on:input=on_input
                />
            </label>
            <div class="position-grid">{cards}</div>
            <MessageBox slot=message/>
            <button
                id="save-button"
                class="btn btn--primary"
                disabled=move || !draft.with(PositionDraft::can_save)
                on:click=on_save
            >
                {move || draft.with(PositionDraft::button_label)}
            </button>
        </section>
    }
}
