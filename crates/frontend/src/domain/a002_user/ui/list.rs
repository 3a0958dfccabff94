use contracts::domain::a002_user::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_user::api;
use crate::shared::api_utils::CURRENT_SOCIETY_ID;
use crate::usecases::u501_import_residents::ResidentImport;

#[component]
pub fn ResidentsPage() -> impl IntoView {
    let residents: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_residents(CURRENT_SOCIETY_ID).await {
                Ok(data) => residents.set(data),
                Err(e) => {
                    log::error!("Error fetching residents: {}", e);
                    set_error.set(Some(format!("Failed to load residents: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Society Residents"</h1>
                    <Badge>{move || residents.get().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                    <ResidentImport on_complete=Callback::new(move |users: Vec<User>| residents.set(users)) />
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Resident"</TableHeaderCell>
                            <TableHeaderCell>"Flat"</TableHeaderCell>
                            <TableHeaderCell>"Phone"</TableHeaderCell>
                            <TableHeaderCell>"Role"</TableHeaderCell>
                            <TableHeaderCell>"Reputation"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || residents.get()
                            key=|u| u.id
                            children=move |user| {
                                let role_class = if user.is_admin() {
                                    "badge badge--warning"
                                } else {
                                    "badge badge--neutral"
                                };
                                let initial = user.initial();
                                let full_name = user.full_name.clone();
                                let email = user.email.clone();
                                let flat_label = user.flat_label().to_string();
                                let phone_label = user.phone_label().to_string();
                                let role = user.role.clone();
                                let reputation = user.reputation_score.to_string();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span class="avatar">{initial}</span>
                                                <span style="font-weight: 500;">{full_name}</span>
                                                <span class="muted">{email}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{flat_label}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{phone_label}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=role_class>{role}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{reputation}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <Show when=move || !loading.get() && residents.get().is_empty()>
                    <div class="empty-state">"No residents registered yet."</div>
                </Show>
            </div>
        </div>
    }
}
