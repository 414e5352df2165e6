//! Root application component: context providers and the screen switch.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::bottom_nav::BottomNav;
use crate::components::status::{ErrorPanel, LoadingPanel, NoticePanel};
use crate::pages::dashboard::{DashboardPage, DashboardState};
use crate::pages::matches::MatchesPage;
use crate::pages::position_selection::PositionSelectionPage;
use crate::state::context::AppContext;
use crate::state::router::{RouteView, RouterState, Screen};
use crate::telegram::LaunchContext;

/// Root application component.
///
/// Provides the app context plus router and dashboard signals, starts the
/// bootstrapper and renders whatever the router currently points at.
#[component]
pub fn App(ctx: AppContext, launch: LaunchContext) -> impl IntoView {
    provide_meta_context();

    let router = RwSignal::new(RouterState::default());
    let dashboard = RwSignal::new(DashboardState::default());

    provide_context(ctx.clone());
    provide_context(router);
    provide_context(dashboard);
    let session = ctx.session.clone();

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = crate::bootstrap::boot(&ctx, &launch).await;
        router.update(|r| r.apply_boot(&outcome));
    });

    #[cfg(not(feature = "csr"))]
    let _ = (ctx, launch);

    view! {
        <Title text="Kickoff"/>
        <main class="app-root">
            {move || render_route(router.get().view, session.profile_setup_needed() != Some(false))}
        </main>
    }
}

fn render_route(view: RouteView, setup_pending: bool) -> AnyView {
    match view {
        RouteView::Booting => view! { <LoadingPanel text="Signing in…"/> }.into_any(),
        RouteView::Notice(text) => view! { <NoticePanel text=text/> }.into_any(),
        RouteView::Failed(text) => view! { <ErrorPanel text=text/> }.into_any(),
        RouteView::Screen(screen) => view! {
            <div class="screen">{render_screen(screen)}</div>
            {screen.shows_nav(setup_pending).then(|| view! { <BottomNav current=screen/> })}
        }
        .into_any(),
    }
}

fn render_screen(screen: Screen) -> AnyView {
    match screen {
        Screen::PositionSelection => view! { <PositionSelectionPage/> }.into_any(),
        Screen::Dashboard => view! { <DashboardPage/> }.into_any(),
        Screen::Matches => view! { <MatchesPage/> }.into_any(),
    }
}
