use super::utils::{self, INVALID_CREDENTIALS_MESSAGE};
use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use leptos::*;

#[derive(Clone)]
pub struct LoginViewModel {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

/// What the UI does once a login attempt settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Navigate(String),
    ShowError(String),
}

/// Pure completion policy: success navigates to the resolved target,
/// every failure collapses to the one fixed hint string.
pub fn completion_outcome(result: &Result<(), ApiError>, redirect_target: &str) -> LoginOutcome {
    match result {
        Ok(()) => LoginOutcome::Navigate(redirect_target.to_string()),
        Err(_) => LoginOutcome::ShowError(INVALID_CREDENTIALS_MESSAGE.to_string()),
    }
}

/// `redirect_target` comes from the router's query map; `on_authenticated`
/// performs the actual navigation (history-replacing) and is injected so
/// the view model stays router-agnostic.
pub fn use_login_view_model(
    redirect_target: Signal<String>,
    on_authenticated: Callback<String>,
) -> LoginViewModel {
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            if let Err(err) = &result {
                log::warn!("authentication failed: {}", err);
            }
            match completion_outcome(&result, &redirect_target.get_untracked()) {
                LoginOutcome::Navigate(target) => {
                    error.set(None);
                    on_authenticated.call(target);
                }
                LoginOutcome::ShowError(message) => error.set(Some(message)),
            }
        }
    });

    LoginViewModel {
        username,
        password,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let (redirect, _) = create_signal(utils::DEFAULT_REDIRECT_PATH.to_string());
            let vm = use_login_view_model(redirect.into(), Callback::new(|_: String| {}));
            assert!(vm.error.get().is_none());
            assert!(vm.username.get().is_empty());
            assert!(vm.password.get().is_empty());
            assert!(!vm.login_action.pending().get());
        });
    }

    #[test]
    fn success_without_prior_destination_navigates_to_overview() {
        let outcome = completion_outcome(&Ok(()), &utils::redirect_target(None));
        assert_eq!(
            outcome,
            LoginOutcome::Navigate("/dashboard/overview".into())
        );
    }

    #[test]
    fn success_with_prior_destination_navigates_there() {
        let target = utils::redirect_target(Some("/dashboard/reports".into()));
        let outcome = completion_outcome(&Ok(()), &target);
        assert_eq!(outcome, LoginOutcome::Navigate("/dashboard/reports".into()));
    }

    #[test]
    fn any_failure_maps_to_the_fixed_hint() {
        for err in [
            ApiError::request_failed("connection refused"),
            ApiError::unknown("HTTP 502"),
            ApiError {
                error: "invalid username or password".into(),
                code: "INVALID_CREDENTIALS".into(),
                details: None,
            },
        ] {
            let outcome = completion_outcome(&Err(err), utils::DEFAULT_REDIRECT_PATH);
            assert_eq!(
                outcome,
                LoginOutcome::ShowError(INVALID_CREDENTIALS_MESSAGE.into())
            );
        }
    }
}
