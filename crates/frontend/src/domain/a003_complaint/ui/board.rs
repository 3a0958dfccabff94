use contracts::domain::a002_user::{User, UserId, UserRole};
use contracts::domain::a003_complaint::{
    Complaint, ComplaintFilter, ComplaintId, ComplaintStatus, MediaKind,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_user::api as users_api;
use crate::domain::a003_complaint::api;
use crate::shared::api_utils::CURRENT_SOCIETY_ID;

fn status_badge(complaint: &Complaint) -> (&'static str, String) {
    match complaint.known_status() {
        Some(ComplaintStatus::Resolved) => ("badge badge--success", "Resolved".to_string()),
        Some(ComplaintStatus::Open) => ("badge badge--warning", "Open".to_string()),
        Some(ComplaintStatus::PendingVerification) => {
            ("badge badge--neutral", "Pending Checks".to_string())
        }
        None => ("badge badge--neutral", complaint.status.clone()),
    }
}

#[component]
pub fn ComplaintsPage() -> impl IntoView {
    let complaints: RwSignal<Vec<Complaint>> = RwSignal::new(Vec::new());
    let vendors: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let status_filter = RwSignal::new("ALL".to_string());
    let search = RwSignal::new(String::new());

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_complaints(CURRENT_SOCIETY_ID).await {
                Ok(data) => complaints.set(data),
                Err(e) => {
                    log::error!("Failed to fetch complaints: {}", e);
                    set_error.set(Some(format!("Failed to load complaints: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    let load_vendors = move || {
        spawn_local(async move {
            match users_api::fetch_by_role(UserRole::Vendor.as_str()).await {
                Ok(data) => vendors.set(data),
                Err(e) => log::warn!("Failed to fetch vendors: {}", e),
            }
        });
    };

    Effect::new(move |_| {
        load_data();
        load_vendors();
    });

    let resolve = move |id: ComplaintId| {
        spawn_local(async move {
            match api::update_status(id, ComplaintStatus::Resolved).await {
                Ok(()) => load_data(),
                Err(e) => {
                    log::error!("Failed to resolve complaint {}: {}", id, e);
                    set_error.set(Some("Failed to resolve complaint.".to_string()));
                }
            }
        });
    };

    let assign = move |id: ComplaintId, vendor_id: UserId| {
        spawn_local(async move {
            match api::assign_vendor(id, vendor_id).await {
                Ok(()) => load_data(),
                Err(e) => {
                    log::error!("Failed to assign vendor to {}: {}", id, e);
                    set_error.set(Some("Failed to assign vendor.".to_string()));
                }
            }
        });
    };

    let visible = Memo::new(move |_| {
        let filter = ComplaintFilter::new(Some(status_filter.get().as_str()), search.get());
        complaints.with(|all| filter.apply(all))
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Complaints Directory"</h1>
                    <Badge>{move || visible.get().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 320px;">
                            <Input value=search placeholder="Search tickets..." />
                        </div>
                        <select
                            class="select"
                            on:change=move |ev| status_filter.set(event_target_value(&ev))
                            prop:value=move || status_filter.get()
                        >
                            <option value="ALL">"All Statuses"</option>
                            {ComplaintStatus::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect_view()}
                        </select>
                    </Flex>
                </div>

                <div class="complaint-grid">
                    <For
                        each=move || visible.get()
                        key=|c| (c.id, c.status.clone(), c.assigned_vendor.as_ref().map(|v| v.id))
                        children=move |complaint| {
                            let id = complaint.id;
                            let (badge_class, badge_text) = status_badge(&complaint);
                            let resolved = complaint.is_resolved();
                            let media = complaint.image_url.clone().zip(complaint.media_kind());
                            view! {
                                <div class="complaint-card">
                                    <div class="complaint-card__header">
                                        <span class=badge_class>{badge_text}</span>
                                        {complaint.is_emergency().then(|| view! {
                                            <span class="badge badge--error">"EMERGENCY"</span>
                                        })}
                                        <span class="muted">
                                            {complaint.category.clone().unwrap_or_else(|| "General".to_string())}
                                        </span>
                                    </div>
                                    <h3 class="complaint-card__title">{complaint.title.clone()}</h3>
                                    <p class="complaint-card__text">{complaint.description.clone()}</p>
                                    {media.map(|(url, kind)| match kind {
                                        MediaKind::Video => view! {
                                            <video class="complaint-card__media" src=url controls=true></video>
                                        }.into_any(),
                                        MediaKind::Image => view! {
                                            <img class="complaint-card__media" src=url alt="Evidence" />
                                        }.into_any(),
                                    })}
                                    <div class="complaint-card__footer">
                                        <span>{complaint.reporter_name().unwrap_or("Unknown").to_string()}</span>
                                        <span>{format!("{} upvotes", complaint.upvotes)}</span>
                                        {complaint.assigned_vendor.as_ref().map(|v| view! {
                                            <span>{format!("Vendor: {}", v.full_name)}</span>
                                        })}
                                    </div>
                                    <Show when=move || !resolved>
                                        <div class="complaint-card__actions">
                                            <select
                                                class="select"
                                                on:change=move |ev| {
                                                    if let Ok(vendor_id) = event_target_value(&ev).parse::<i64>() {
                                                        assign(id, UserId(vendor_id));
                                                    }
                                                }
                                            >
                                                <option value="">"Assign vendor..."</option>
                                                {move || vendors
                                                    .get()
                                                    .into_iter()
                                                    .map(|v| view! {
                                                        <option value=v.id.0.to_string()>{v.full_name.clone()}</option>
                                                    })
                                                    .collect_view()}
                                            </select>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                on_click=move |_| resolve(id)
                                            >
                                                "Mark Resolved"
                                            </Button>
                                        </div>
                                    </Show>
                                </div>
                            }
                        }
                    />
                </div>

                <Show when=move || !loading.get() && visible.get().is_empty()>
                    <div class="empty-state">"No complaints match the current filters."</div>
                </Show>
            </div>
        </div>
    }
}
