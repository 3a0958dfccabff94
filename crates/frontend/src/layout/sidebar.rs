use leptos::prelude::*;

use super::global_context::{AppGlobalContext, Page};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Society SaaS"</div>
            <nav class="sidebar__nav">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class=move || {
                                    if ctx.active.get() == page {
                                        "sidebar__link sidebar__link--active"
                                    } else {
                                        "sidebar__link"
                                    }
                                }
                                on:click=move |_| ctx.open(page)
                            >
                                {page.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
