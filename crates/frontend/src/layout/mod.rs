pub mod global_context;
pub mod sidebar;

use leptos::prelude::*;

use crate::system::auth::context::{do_logout, use_auth};
use sidebar::Sidebar;

/// Main console shell.
///
/// ```text
/// +-----------------------------------------+
/// |  Sidebar  |  TopBar (admin, logout)     |
/// |  (pages)  +-----------------------------+
/// |           |  Content                    |
/// +-----------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    let (auth_state, set_auth_state) = use_auth();

    view! {
        <div class="app-layout">
            <Sidebar />
            <div class="app-main">
                <header class="top-header">
                    <div class="top-header__user">
                        <span class="top-header__avatar">
                            {move || auth_state.get().display_name().chars().next().unwrap_or('A').to_string()}
                        </span>
                        <div>
                            <div class="top-header__name">{move || auth_state.get().display_name()}</div>
                            <div class="top-header__role">{move || auth_state.get().display_role()}</div>
                        </div>
                    </div>
                    <button class="button button--secondary" on:click=move |_| do_logout(set_auth_state)>
                        "Log out"
                    </button>
                </header>
                <main class="app-content">{move || center()}</main>
            </div>
        </div>
    }
}
