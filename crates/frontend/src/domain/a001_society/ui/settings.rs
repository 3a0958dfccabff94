use contracts::domain::a001_society::{parse_count, SocietyUpdateDto, AMENITIES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_society::api;
use crate::shared::api_utils::CURRENT_SOCIETY_ID;
use crate::system::auth::context::use_auth;

fn count_text(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let form: RwSignal<SocietyUpdateDto> = RwSignal::new(SocietyUpdateDto::default());
    let (message, set_message) = signal::<Option<(bool, String)>>(None);
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_society(CURRENT_SOCIETY_ID).await {
                Ok(society) => form.set(SocietyUpdateDto::from(&society)),
                Err(e) => {
                    log::error!("Failed to fetch society data: {}", e);
                    set_message.set(Some((false, format!("Failed to load society: {}", e))));
                }
            }
            set_loading.set(false);
        });
    });

    let save = move |_: leptos::ev::MouseEvent| {
        let dto = form.get_untracked();
        set_saving.set(true);
        set_message.set(None);
        spawn_local(async move {
            match api::update_society(CURRENT_SOCIETY_ID, &dto).await {
                Ok(()) => set_message.set(Some((
                    true,
                    "Society infrastructure saved successfully!".to_string(),
                ))),
                Err(e) => {
                    log::error!("Failed to save settings: {}", e);
                    set_message.set(Some((false, "Failed to save settings.".to_string())));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Account & Society Settings"</h1>
                </div>
            </div>

            <div class="page__content settings">
                {move || message.get().map(|(ok, text)| {
                    let class = if ok { "alert alert--success" } else { "alert alert--error" };
                    view! { <div class=class>{text}</div> }
                })}

                <section class="settings__card">
                    <h2>"Admin Profile"</h2>
                    <div class="settings__row">
                        <span class="avatar">
                            {move || auth_state.get().display_name().chars().next().unwrap_or('A').to_string()}
                        </span>
                        <div>
                            <div class="settings__name">{move || auth_state.get().display_name()}</div>
                            <div class="muted">{move || auth_state.get().display_role()}</div>
                        </div>
                    </div>
                </section>

                <section class="settings__card">
                    <h2>"Society Infrastructure"</h2>

                    <h3>"1. Core Registration"</h3>
                    <div class="form-group">
                        <label>"Society Name"</label>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Registration Number"</label>
                        <input
                            type="text"
                            placeholder="e.g. MH/MUM/1234/2010"
                            prop:value=move || form.with(|f| f.registration_number.clone())
                            on:input=move |ev| form.update(|f| f.registration_number = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Address"</label>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.address.clone())
                            on:input=move |ev| form.update(|f| f.address = event_target_value(&ev))
                        />
                    </div>

                    <h3>"2. Physical Layout"</h3>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Total Wings"</label>
                            <input
                                type="number"
                                min="0"
                                prop:value=move || form.with(|f| count_text(f.total_wings))
                                on:input=move |ev| form.update(|f| f.total_wings = parse_count(&event_target_value(&ev)))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Floors per Wing"</label>
                            <input
                                type="number"
                                min="0"
                                prop:value=move || form.with(|f| count_text(f.total_floors))
                                on:input=move |ev| form.update(|f| f.total_floors = parse_count(&event_target_value(&ev)))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Total Flats"</label>
                            <input
                                type="number"
                                min="0"
                                prop:value=move || form.with(|f| count_text(f.total_flats))
                                on:input=move |ev| form.update(|f| f.total_flats = parse_count(&event_target_value(&ev)))
                            />
                        </div>
                    </div>

                    <h3>"3. Managed Amenities"</h3>
                    <div class="amenity-grid">
                        {AMENITIES
                            .into_iter()
                            .map(|amenity| view! {
                                <label class="amenity">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.with(|f| f.has_amenity(amenity))
                                        on:change=move |_| form.update(|f| f.toggle_amenity(amenity))
                                    />
                                    {amenity}
                                </label>
                            })
                            .collect_view()}
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=save
                        disabled=Signal::derive(move || saving.get() || loading.get())
                    >
                        {move || if saving.get() { "Saving..." } else { "Save Infrastructure" }}
                    </Button>
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_text() {
        assert_eq!(count_text(Some(12)), "12");
        assert_eq!(count_text(None), "");
    }
}
