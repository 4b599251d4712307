#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

#[cfg(not(target_arch = "wasm32"))]
pub mod helpers {
    use crate::api::SessionUser;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn regular_user() -> SessionUser {
        SessionUser {
            id: "u-regular".into(),
            username: "member".into(),
            display_name: "Regular User".into(),
            role: "member".into(),
        }
    }

    pub fn provide_auth(
        user: Option<SessionUser>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            user,
            is_authenticated: true,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
