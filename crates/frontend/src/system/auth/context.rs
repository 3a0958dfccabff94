use contracts::system::auth::LoginRequest;
use contracts::system::session::{Session, SessionStore};
use leptos::prelude::*;

use super::api;
use super::storage::LocalStorageSessionStore;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn display_name(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.display_name().to_string())
            .unwrap_or_else(|| "Admin User".to_string())
    }

    pub fn display_role(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.display_role().to_string())
            .unwrap_or_else(|| "ADMIN".to_string())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Сессия из localStorage восстанавливается сразу, без запроса к API
    let restored = match LocalStorageSessionStore.load() {
        Ok(session) => session,
        Err(e) => {
            log::warn!("cannot restore session: {}", e);
            None
        }
    };
    let (auth_state, set_auth_state) = signal(AuthState { session: restored });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Вход: запрос к API, сохранение сессии, обновление состояния
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let request = LoginRequest::new(&email, &password);
    if !request.is_complete() {
        return Err("Email and password are required".to_string());
    }

    let response = api::login(&request).await?;
    let session = Session::from_login(response, None);

    if let Err(e) = LocalStorageSessionStore.save(&session) {
        log::error!("cannot persist session: {}", e);
    }
    set_auth_state.set(AuthState {
        session: Some(session),
    });
    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Err(e) = LocalStorageSessionStore.clear() {
        log::error!("cannot clear session: {}", e);
    }
    set_auth_state.set(AuthState::default());
}
