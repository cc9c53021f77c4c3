//! Контекст авторизации: текущий пользователь, флаг загрузки и последняя ошибка.
//!
//! Создаётся один раз в корне приложения (`AuthProvider`); компоненты
//! получают его через `use_auth`.

use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn signed_in(&mut self, user: UserInfo) {
        self.user = Some(user);
        self.is_loading = false;
        self.error = None;
    }

    /// The cached user (if any) is kept
    pub fn failed(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    pub fn signed_out(&mut self) {
        *self = AuthState::default();
    }
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
        }
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.user.is_some())
    }

    pub fn is_admin(&self) -> bool {
        self.state
            .with(|s| s.user.as_ref().map(|u| u.is_admin()).unwrap_or(false))
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    /// Credentials -> session. Failure leaves the message in `error`.
    pub fn login(&self, username: String, password: String) {
        let state = self.state;
        state.update(|s| s.begin());
        spawn_local(async move {
            match api::login(username, password).await {
                Ok(response) => {
                    storage::save_access_token(&response.access_token);
                    storage::save_refresh_token(&response.refresh_token);
                    log::info!("signed in as {}", response.user.username);
                    state.update(|s| s.signed_in(response.user));
                }
                Err(message) => state.update(|s| s.failed(message)),
            }
        });
    }

    /// Revokes the refresh token (best effort) and drops the session
    pub fn logout(&self) {
        let state = self.state;
        state.update(|s| s.begin());
        spawn_local(async move {
            if let Some(refresh_token) = storage::get_refresh_token() {
                if let Err(e) = api::logout(refresh_token).await {
                    log::warn!("{}", e);
                }
            }
            storage::clear_tokens();
            state.update(|s| s.signed_out());
        });
    }

    /// Restore the session from the stored access token; on failure try the
    /// refresh token once, otherwise clear storage.
    fn restore(&self) {
        let Some(access_token) = storage::get_access_token() else {
            return;
        };
        let state = self.state;
        state.update(|s| s.begin());
        spawn_local(async move {
            if let Ok(user) = api::get_current_user(&access_token).await {
                state.update(|s| s.signed_in(user));
                return;
            }

            let refreshed = match storage::get_refresh_token() {
                Some(refresh_token) => match api::refresh_token(refresh_token).await {
                    Ok(response) => {
                        storage::save_access_token(&response.access_token);
                        api::get_current_user(&response.access_token).await.ok()
                    }
                    Err(_) => None,
                },
                None => None,
            };

            match refreshed {
                Some(user) => state.update(|s| s.signed_in(user)),
                None => {
                    storage::clear_tokens();
                    state.update(|s| s.signed_out());
                }
            }
        });
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);
    auth.restore();

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("use_auth must be used within an AuthProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::UserRole;

    fn admin() -> UserInfo {
        UserInfo {
            id: 1,
            username: "admin".into(),
            full_name: "Administrador".into(),
            email: "admin@localhost.local".into(),
            role: UserRole::Admin,
            photo_url: String::new(),
        }
    }

    #[test]
    fn test_login_success_caches_user() {
        let mut state = AuthState::default();
        state.begin();
        assert!(state.is_loading);
        state.signed_in(admin());
        assert_eq!(state.user.as_ref().map(|u| u.id), Some(1));
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_login_failure_surfaces_message() {
        let mut state = AuthState::default();
        state.begin();
        state.failed(api::LOGIN_FALLBACK.to_string());
        assert_eq!(state.user, None);
        assert_eq!(state.error.as_deref(), Some("Credenciais inválidas. Tente novamente."));

        // A new attempt clears the previous error
        state.begin();
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_logout_clears_user() {
        let mut state = AuthState::default();
        state.signed_in(admin());
        state.signed_out();
        assert_eq!(state, AuthState::default());
    }

    #[test]
    #[should_panic(expected = "use_auth must be used within an AuthProvider")]
    fn test_use_auth_outside_provider_panics() {
        let _ = use_auth();
    }
}
