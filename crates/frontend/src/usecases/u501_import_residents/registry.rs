use contracts::domain::a001_society::SocietyId;
use contracts::domain::a002_user::{RegisterUserDto, User};
use contracts::usecases::u501_import_residents::ResidentRegistry;
use wasm_bindgen_futures::JsFuture;

use crate::domain::a002_user::api;

/// Регистрация жильцов через API из браузера
#[derive(Debug, Clone, Copy, Default)]
pub struct WebResidentRegistry;

impl ResidentRegistry for WebResidentRegistry {
    type Error = String;

    async fn register(&self, request: &RegisterUserDto) -> Result<(), String> {
        api::register_user(request).await
    }

    async fn refresh_residents(&self, society_id: SocietyId) -> Result<Vec<User>, String> {
        api::fetch_residents(society_id).await
    }
}

/// Read the selected file into memory
pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    Ok(js_sys::Uint8Array::new(&array_buffer).to_vec())
}
