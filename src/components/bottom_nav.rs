//! Bottom navigation bar shown under the main screens.

use leptos::prelude::*;

use crate::state::router::{RouterState, Screen};

/// Navigation bar highlighting `current`. Rebuilt with every screen.
#[component]
pub fn BottomNav(current: Screen) -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();

    let buttons = Screen::NAV
        .into_iter()
        .map(|screen| {
            let on_click = move |_| router.update(|r| r.navigate(screen));

            view! {
                <button
                    class="bottom-nav__item"
                    class:bottom-nav__item--active=screen == current
                    on:click=on_click
                >
                    <span class="material-symbols-outlined">{screen.nav_icon()}</span>
                    <span class="bottom-nav__label">{screen.nav_label()}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! { <nav class="bottom-nav">{buttons}</nav> }
}
