use crate::domain::a001_society::ui::settings::SettingsPage;
use crate::domain::a002_user::ui::list::ResidentsPage;
use crate::domain::a003_complaint::ui::board::ComplaintsPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    ctx.init_location_integration();

    view! {
        <Shell center=move || match ctx.active.get() {
            Page::Residents => view! { <ResidentsPage /> }.into_any(),
            Page::Complaints => view! { <ComplaintsPage /> }.into_any(),
            Page::Settings => view! { <SettingsPage /> }.into_any(),
        } />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
