use contracts::domain::a002_user::User;
use contracts::usecases::u501_import_residents::{
    ImportResidents, ImportStatus, ResidentImporter, RowResult,
};
use contracts::usecases::common::UseCaseMetadata;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use super::registry::{read_file_bytes, WebResidentRegistry};
use crate::shared::api_utils::CURRENT_SOCIETY_ID;

fn banner_class(status: &ImportStatus) -> &'static str {
    match status {
        ImportStatus::ParseError { .. } => "alert alert--error",
        ImportStatus::Complete { failed, .. } if *failed > 0 => "alert alert--warning",
        ImportStatus::Complete { .. } => "alert alert--success",
        _ => "alert alert--info",
    }
}

/// Кнопка "Bulk Import CSV" со строкой статуса.
///
/// `on_complete` receives the reloaded resident list once every row has been
/// submitted.
#[component]
pub fn ResidentImport(on_complete: Callback<Vec<User>>) -> impl IntoView {
    let status = RwSignal::new(ImportStatus::Idle);
    let failures: RwSignal<Vec<RowResult>> = RwSignal::new(Vec::new());

    let handle_file_select = move |ev: web_sys::Event| {
        if status.get_untracked().is_running() {
            return;
        }
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // тот же файл можно выбрать повторно
        input.set_value("");

        failures.set(Vec::new());
        status.set(ImportStatus::Parsing);

        spawn_local(async move {
            log::info!("{}: {}", ImportResidents::full_name(), file.name());

            let bytes = match read_file_bytes(&file).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    status.set(ImportStatus::ParseError { message: e });
                    return;
                }
            };

            let registry = WebResidentRegistry;
            let importer = ResidentImporter::new(&registry, CURRENT_SOCIETY_ID);
            match importer.run(&bytes, |s| status.set(s.clone())).await {
                Ok(report) => {
                    failures.set(report.outcome.failures().cloned().collect());
                    match report.residents {
                        Ok(users) => on_complete.run(users),
                        Err(e) => log::error!("Error fetching residents: {}", e),
                    }
                }
                Err(e) => log::error!("Error parsing CSV: {}", e),
            }
        });
    };

    view! {
        <div class="resident-import">
            <label
                class=move || {
                    if status.get().is_running() {
                        "button button--primary button--disabled"
                    } else {
                        "button button--primary"
                    }
                }
                for="resident-csv-input"
            >
                {move || if status.get().is_running() { "Importing..." } else { "Bulk Import CSV" }}
            </label>
            <input
                id="resident-csv-input"
                type="file"
                accept=".csv"
                class="hidden"
                on:change=handle_file_select
                disabled=move || status.get().is_running()
            />

            {move || {
                let current = status.get();
                (current != ImportStatus::Idle).then(|| {
                    view! { <div class=banner_class(&current)>{current.to_string()}</div> }
                })
            }}

            <Show when=move || !failures.get().is_empty()>
                <ul class="resident-import__failures">
                    <For
                        each=move || failures.get()
                        key=|row| row.row_number
                        children=|row| {
                            view! {
                                <li>
                                    {format!(
                                        "Row {} ({}): {}",
                                        row.row_number,
                                        row.email.clone().unwrap_or_else(|| "no email".to_string()),
                                        row.error.clone().unwrap_or_default(),
                                    )}
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
