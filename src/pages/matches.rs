//! Matches hub: create a fixture or browse history.

#[cfg(test)]
#[path = "matches_test.rs"]
mod matches_test;

use leptos::prelude::*;

use super::create_match::CreateMatchPage;

pub const HISTORY_PLACEHOLDER: &str = "Match history is coming soon.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchesTab {
    #[default]
    Create,
    History,
}

impl MatchesTab {
    pub const ALL: [MatchesTab; 2] = [Self::Create, Self::History];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "Create match",
            Self::History => "Match history",
        }
    }
}

#[component]
pub fn MatchesPage() -> impl IntoView {
    let tab = RwSignal::new(MatchesTab::default());

    let buttons = MatchesTab::ALL
        .into_iter()
        .map(|t| {
            view! {
                <button
                    class="tabs__btn"
                    class:tabs__btn--active=move || tab.get() == t
                    on:click=move |_| tab.set(t)
                >
                    {t.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="matches">
            <h1 class="screen-title">"Matches"</h1>
            <div class="tabs">{buttons}</div>
            <div class="matches__content">
                {move || match tab.get() {
                    MatchesTab::Create => view! { <CreateMatchPage/> }.into_any(),
                    MatchesTab::History => {
                        view! { <p class="matches__placeholder">{HISTORY_PLACEHOLDER}</p> }.into_any()
                    }
                }}
            </div>
        </section>
    }
}
