use crate::{
    api::LoginRequest,
    pages::login::{components::form::LoginForm, utils, view_model::use_login_view_model},
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::{use_navigate, use_query_map};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let query = use_query_map();
    let redirect_target =
        Signal::derive(move || utils::redirect_target(query.get().get("redirect").cloned()));

    let navigate = use_navigate();
    let on_authenticated = Callback::new(move |target: String| {
        navigate(&target, utils::replace_navigation());
    });

    let vm = use_login_view_model(redirect_target, on_authenticated);
    let username = vm.username;
    let password = vm.password;
    let error = vm.error;
    let login_action = vm.login_action;
    let pending = login_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        error.set(None);
        login_action.dispatch(LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        });
    });

    view! {
        <LoginForm
            username=username
            password=password
            error=error.into()
            pending=pending.into()
            on_submit=handle_submit
        />
    }
}
