//! Player dashboard: profile header, season stats, next match, team progress.
//!
//! DESIGN
//! ======
//! [`DashboardView::build`] turns the optional-everywhere snapshot into
//! display strings, so the component only lays them out. The load state lives
//! in an app-level signal: a remount while a load is in flight observes that
//! load instead of starting a second one.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::status::{ErrorPanel, LoadingPanel};
use crate::net::types::{DashboardSnapshot, MatchSummary, Position};
use crate::state::context::AppContext;

pub const DEFAULT_DISPLAY_NAME: &str = "Player";

// =============================================================================
// VIEW MODEL
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTone {
    Win,
    Draw,
    Loss,
}

impl ResultTone {
    /// `"Win"` and `"Draw"` are recognised; anything else counts as a loss.
    #[must_use]
    pub fn classify(result: &str) -> Self {
        match result.trim() {
            r if r.eq_ignore_ascii_case("win") => Self::Win,
            r if r.eq_ignore_ascii_case("draw") => Self::Draw,
            _ => Self::Loss,
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Win => "result-chip result-chip--win",
            Self::Draw => "result-chip result-chip--draw",
            Self::Loss => "result-chip result-chip--loss",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultChip {
    pub text: String,
    pub tone: ResultTone,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NextMatchCard {
    pub opponent: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

impl From<&MatchSummary> for NextMatchCard {
    fn from(m: &MatchSummary) -> Self {
        Self {
            opponent: m.opponent_team_name.clone().unwrap_or_default(),
            date: m.match_date.clone().unwrap_or_default(),
            time: m.match_time.clone().unwrap_or_default(),
            location: m.location.clone().unwrap_or_default(),
        }
    }
}

/// Everything the dashboard shows, already formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardView {
    pub display_name: String,
    /// `"{label} • {team}"`, or just the label without a team.
    pub position_line: String,
    pub goals: u32,
    pub assists: u32,
    pub matches: u32,
    pub next_match: Option<NextMatchCard>,
    /// `"{score} / 10"`.
    pub chemistry_text: String,
    /// Bar width, 0 to 100.
    pub chemistry_percent: u32,
    pub recent_results: Vec<ResultChip>,
}

impl DashboardView {
    /// `cached_label` is the position label saved by the last profile update;
    /// it wins over the backend's position code.
    #[must_use]
    pub fn build(snapshot: &DashboardSnapshot, cached_label: Option<&str>) -> Self {
        let display_name = first_present([snapshot.custom_nickname.as_deref(), snapshot.nickname.as_deref()])
            .unwrap_or(DEFAULT_DISPLAY_NAME)
            .to_owned();

        let label = match first_present([cached_label]) {
            Some(label) => label.to_owned(),
            None => snapshot.position.as_deref().map(Position::label_for_code).unwrap_or_default(),
        };
        let position_line = match first_present([snapshot.team_name.as_deref()]) {
            Some(team) => format!("{label} • {team}"),
            None => label,
        };

        let progress = snapshot.team_progress.clone().unwrap_or_default();
        let score = progress.chemistry_score.unwrap_or(0.0);

        Self {
            display_name,
            position_line,
            goals: snapshot.season_goals.unwrap_or(0),
            assists: snapshot.season_assists.unwrap_or(0),
            matches: snapshot.season_matches.unwrap_or(0),
            next_match: snapshot.next_match.as_ref().map(NextMatchCard::from),
            chemistry_text: format!("{score} / 10"),
            chemistry_percent: chemistry_percent(score),
            recent_results: progress
                .recent_results
                .unwrap_or_default()
                .into_iter()
                .map(|text| ResultChip { tone: ResultTone::classify(&text), text })
                .collect(),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn chemistry_percent(score: f64) -> u32 {
    (score * 10.0).round().clamp(0.0, 100.0) as u32
}

fn first_present<const N: usize>(values: [Option<&str>; N]) -> Option<&str> {
    values.into_iter().flatten().find(|v| !v.trim().is_empty())
}

// =============================================================================
// LOADING
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DashboardState {
    #[default]
    Loading,
    Ready(DashboardView),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardLoad {
    /// Another load holds the guard; its result will land in the shared state.
    AlreadyLoading,
    Ready(DashboardView),
    Failed(String),
}

/// Fetch and format the dashboard. Overlapping calls are refused; the guard
/// is released when this returns, success or failure.
pub async fn load_dashboard(ctx: &AppContext) -> DashboardLoad {
    let Some(_ticket) = ctx.init.dashboard.try_acquire() else {
        return DashboardLoad::AlreadyLoading;
    };

    match ctx.api.fetch_dashboard().await {
        Ok(snapshot) => {
            tracing::debug!("dashboard loaded");
            DashboardLoad::Ready(DashboardView::build(&snapshot, ctx.session.position_label().as_deref()))
        }
        Err(e) => {
            tracing::error!(error = %e, code = e.error_code(), "dashboard load failed");
            DashboardLoad::Failed(format!("Could not load the dashboard: {e}"))
        }
    }
}

impl DashboardLoad {
    /// New shared state, or `None` to leave it to the load in flight.
    #[must_use]
    pub fn into_state(self) -> Option<DashboardState> {
        match self {
            Self::AlreadyLoading => None,
            Self::Ready(view) => Some(DashboardState::Ready(view)),
            Self::Failed(message) => Some(DashboardState::Failed(message)),
        }
    }
}

// =============================================================================
// COMPONENT
// =============================================================================

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = expect_context::<RwSignal<DashboardState>>();

    if !ctx.init.dashboard.is_busy() {
        state.set(DashboardState::Loading);
    }

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        if let Some(next) = load_dashboard(&ctx).await.into_state() {
            state.try_set(next);
        }
    });

    #[cfg(not(feature = "csr"))]
    let _ = ctx;

    view! {
        <section class="dashboard">
            {move || match state.get() {
                DashboardState::Loading => {
                    view! { <LoadingPanel text="Loading dashboard…"/> }.into_any()
                }
                DashboardState::Failed(message) => view! { <ErrorPanel text=message/> }.into_any(),
                DashboardState::Ready(dashboard) => view! { <DashboardBody dashboard=dashboard/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn DashboardBody(dashboard: DashboardView) -> impl IntoView {
    let DashboardView {
        display_name,
        position_line,
        goals,
        assists,
        matches,
        next_match,
        chemistry_text,
        chemistry_percent,
        recent_results,
    } = dashboard;

    let next_match = match next_match {
        Some(card) => view! {
            <div id="upcoming-match-card" class="match-card">
                <p class="match-card__opponent">{card.opponent}</p>
                <p class="match-card__when">
                    <span>{card.date}</span>
                    " "
                    <span>{card.time}</span>
                </p>
                <p class="match-card__location">{card.location}</p>
            </div>
        }
        .into_any(),
        None => view! {
            <div id="empty-match-state" class="match-card match-card--empty">
                "No upcoming matches"
            </div>
        }
        .into_any(),
    };

    let chips = recent_results
        .into_iter()
        .map(|chip| {
            let class = chip.tone.class();
            view! { <span class=class>{chip.text}</span> }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="dashboard__profile">
            <h1 id="player-nickname">{display_name}</h1>
            <p id="player-position">{position_line}</p>
        </header>
        <div class="dashboard__stats">
            <Stat label="Goals" value=goals/>
            <Stat label="Assists" value=assists/>
            <Stat label="Matches" value=matches/>
        </div>
        <h2 class="dashboard__heading">"Next match"</h2>
        {next_match}
        <h2 class="dashboard__heading">"Team progress"</h2>
        <div class="chemistry">
            <span class="chemistry__label">"Team chemistry"</span>
            <span id="team-chemistry">{chemistry_text}</span>
            <div class="chemistry__track">
                <div id="chemistry-bar" class="chemistry__bar" style:width=format!("{chemistry_percent}%")></div>
            </div>
        </div>
        <div id="results-container" class="results">{chips}</div>
    }
}

#[component]
fn Stat(label: &'static str, value: u32) -> impl IntoView {
    view! {
        <div class="stat">
            <span class="stat__value">{value}</span>
            <span class="stat__label">{label}</span>
        </div>
    }
}
