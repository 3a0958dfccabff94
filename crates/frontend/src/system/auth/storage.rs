use contracts::system::session::{Session, SessionStore, SessionStoreError};
use web_sys::window;

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "role";
const FULL_NAME_KEY: &str = "fullName";
const USER_ID_KEY: &str = "userId";

const ALL_KEYS: [&str; 4] = [TOKEN_KEY, ROLE_KEY, FULL_NAME_KEY, USER_ID_KEY];

fn get_local_storage() -> Result<web_sys::Storage, SessionStoreError> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| SessionStoreError::new("localStorage is not available"))
}

fn js_error(action: &str, key: &str) -> SessionStoreError {
    SessionStoreError::new(format!("cannot {} '{}' in localStorage", action, key))
}

/// Сессия в `localStorage` браузера, по ключу на поле.
///
/// Only what the console shows is kept: token, role, name and user id.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSessionStore;

impl SessionStore for LocalStorageSessionStore {
    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let storage = get_local_storage()?;
        let get = |key: &str| -> Result<Option<String>, SessionStoreError> {
            storage
                .get_item(key)
                .map_err(|_| js_error("read", key))
                .map(|v| v.filter(|s| !s.is_empty()))
        };

        let Some(token) = get(TOKEN_KEY)? else {
            return Ok(None);
        };

        let mut session = Session::new(token);
        session.role = get(ROLE_KEY)?;
        session.full_name = get(FULL_NAME_KEY)?;
        session.user_id = get(USER_ID_KEY)?.and_then(|id| id.parse().ok());
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let storage = get_local_storage()?;
        let set = |key: &str, value: Option<String>| match value {
            Some(value) => storage.set_item(key, &value).map_err(|_| js_error("write", key)),
            None => storage.remove_item(key).map_err(|_| js_error("remove", key)),
        };

        set(TOKEN_KEY, Some(session.token.clone()))?;
        set(ROLE_KEY, session.role.clone())?;
        set(FULL_NAME_KEY, session.full_name.clone())?;
        set(USER_ID_KEY, session.user_id.map(|id| id.to_string()))?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let storage = get_local_storage()?;
        for key in ALL_KEYS {
            storage.remove_item(key).map_err(|_| js_error("remove", key))?;
        }
        Ok(())
    }
}
