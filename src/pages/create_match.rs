//! Form for recording an upcoming fixture.

#[cfg(test)]
#[path = "create_match_test.rs"]
mod create_match_test;

use leptos::prelude::*;

use crate::components::message_box::{Flash, MessageBox, Tone, show_flash};
use crate::net::types::NewMatch;
use crate::state::context::AppContext;

pub const INCOMPLETE_FORM_MESSAGE: &str = "Fill in all fields!";
pub const MATCH_CREATED_MESSAGE: &str = "Match created!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchField {
    Opponent,
    Date,
    Time,
    Location,
}

impl MatchField {
    pub const ALL: [MatchField; 4] = [Self::Opponent, Self::Date, Self::Time, Self::Location];

    fn input_id(self) -> &'static str {
        match self {
            Self::Opponent => "opponent-name-input",
            Self::Date => "match-date-input",
            Self::Time => "match-time-input",
            Self::Location => "match-location-input",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Opponent => "Opponent",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Location => "Location",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::Opponent | Self::Location => "text",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchForm {
    pub opponent: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

impl MatchForm {
    #[must_use]
    pub fn get(&self, field: MatchField) -> &str {
        match field {
            MatchField::Opponent => &self.opponent,
            MatchField::Date => &self.date,
            MatchField::Time => &self.time,
            MatchField::Location => &self.location,
        }
    }

    pub fn set(&mut self, field: MatchField, value: String) {
        let slot = match field {
            MatchField::Opponent => &mut self.opponent,
            MatchField::Date => &mut self.date,
            MatchField::Time => &mut self.time,
            MatchField::Location => &mut self.location,
        };
        *slot = value;
    }

    /// Request body with trimmed values, or `None` if any field is blank.
    #[must_use]
    pub fn validate(&self) -> Option<NewMatch> {
        let fields = MatchField::ALL.map(|field| self.get(field).trim());
        if fields.iter().any(|f| f.is_empty()) {
            return None;
        }
        let [opponent, date, time, location] = fields.map(str::to_owned);
        Some(NewMatch { opponent_team_name: opponent, match_date: date, match_time: time, location })
    }
}

/// Validate and submit the form, returning the message to show. A missing
/// token is reported before anything is sent.
///
/// Returns `None` without sending when another submission is still in flight.
pub async fn submit_match(ctx: &AppContext, form: &MatchForm) -> Option<Flash> {
    let _ticket = ctx.init.create_match.try_acquire()?;

    let Some(new_match) = form.validate() else {
        return Some(Flash::error(INCOMPLETE_FORM_MESSAGE));
    };
    let flash = match ctx.api.create_match(&new_match).await {
        Ok(()) => Flash::success(MATCH_CREATED_MESSAGE),
        Err(e) => {
            tracing::error!(error = %e, code = e.error_code(), "match creation failed");
            Flash::error(e.to_string())
        }
    };
    Some(flash)
}

#[component]
pub fn CreateMatchPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let form = RwSignal::new(MatchForm::default());
    let message = RwSignal::new(None::<Flash>);
    let submitting = RwSignal::new(false);

    let on_submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        message.set(None);
        let current = form.get_untracked();

        #[cfg(feature = "csr")]
        {
            submitting.set(true);
            let ctx = ctx.clone();
            leptos::task::spawn_local(async move {
                let outcome = submit_match(&ctx, &current).await;
                submitting.try_set(false);
                let Some(flash) = outcome else { return };
                if flash.tone == Tone::Success {
                    form.try_set(MatchForm::default());
                }
                show_flash(message, flash);
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = (&ctx, current);
        }
    };

    view! {
        <section class="create-match">
            <h2 class="screen-title">"New match"</h2>
            {MatchField::ALL
                .into_iter()
                .map(|field| view! { <FormField field=field form=form/> })
                .collect::<Vec<_>>()}
            <MessageBox slot=message/>
            <button
                id="create-match-button"
                class="btn btn--primary"
                disabled=move || submitting.get()
                on:click=on_submit
            >
                {move || if submitting.get() { "Creating…" } else { "Create match" }}
            </button>
        </section>
    }
}

/// One labelled input bound to a field of the form signal.
#[component]
fn FormField(field: MatchField, form: RwSignal<MatchForm>) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{field.label()}</span>
            <input
                id=field.input_id()
                class="field__input"
                type=field.input_type()
                prop:value=move || form.with(|f| f.get(field).to_owned())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </label>
    }
}
