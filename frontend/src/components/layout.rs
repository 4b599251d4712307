use crate::state::auth::{self, use_auth};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let account_label = move || {
        auth.get()
            .user
            .map(|user| {
                if user.display_name.is_empty() {
                    user.username
                } else {
                    user.display_name
                }
            })
            .unwrap_or_default()
    };

    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href("/login");
            }
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };

    view! {
        <header class="bg-white shadow-sm border-b border-gray-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-gray-900">
                        "Client Reporting Portal"
                    </h1>
                    <div class="flex items-center gap-4">
                        <nav class="hidden sm:flex space-x-4">
                            <a href="/dashboard/overview" class="text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium">
                                "Overview"
                            </a>
                            <a href="/dashboard/reports" class="text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium">
                                "Reports"
                            </a>
                        </nav>
                        <span class="text-sm text-gray-500">{account_label}</span>
                        <button
                            on:click=on_logout
                            class="text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50"
                            disabled=move || logout_pending.get()
                        >
                            "Sign out"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-orange-50">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-orange-600"></div>
        </div>
    }
}
