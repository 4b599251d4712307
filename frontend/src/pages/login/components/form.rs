use crate::pages::login::components::{
    messages::InlineErrorMessage, overlay::AuthenticatingOverlay,
};
use leptos::{ev::SubmitEvent, *};

/// Presentational login card. All state lives in the view model; this
/// component only binds signals to markup. Empty-field checking is left
/// to the browser via the `required` attributes.
#[component]
pub fn LoginForm(
    username: RwSignal<String>,
    password: RwSignal<String>,
    error: Signal<Option<String>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let overlay = Signal::derive(move || overlay_visible(pending.get(), error.get().is_some()));

    view! {
        <div class="flex items-center justify-center min-h-screen bg-gradient-to-br from-orange-50 to-orange-100 p-4">
            <div class="bg-white rounded-2xl shadow-xl w-full max-w-md overflow-hidden border border-gray-100 relative">
                <div class="bg-orange-600 p-8 text-center">
                    <h1 class="text-2xl font-bold text-white tracking-wide">"The ERROR's"</h1>
                    <p class="text-orange-100 text-sm mt-1">"Client Reporting Portal"</p>
                </div>

                <div class="p-8">
                    <div class="text-center mb-6">
                        <h2 class="text-lg font-semibold text-gray-700">"Access Your Annual Report"</h2>
                        <p class="text-xs text-gray-500 mt-1">"Secure login for Boss Drive In Management"</p>
                    </div>

                    <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                        <div>
                            <label for="username" class="block text-xs font-bold text-gray-500 uppercase mb-1">
                                "Username (Email)"
                            </label>
                            <input
                                id="username"
                                name="username"
                                type="text"
                                required
                                class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-orange-500"
                                placeholder="Enter email"
                                prop:value=username
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="block text-xs font-bold text-gray-500 uppercase mb-1">
                                "Password"
                            </label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required
                                class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-orange-500"
                                placeholder="Enter password"
                                prop:value=password
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>

                        <InlineErrorMessage error=error />

                        <button
                            type="submit"
                            disabled=pending
                            class="w-full bg-orange-600 hover:bg-orange-700 text-white font-bold py-3 rounded-lg shadow-md disabled:opacity-70 disabled:cursor-not-allowed"
                        >
                            {move || if pending.get() { "Authenticating..." } else { "Access Dashboard" }}
                        </button>
                    </form>

                    <div class="mt-6 text-center">
                        <p class="text-xs text-gray-400">
                            "Restricted Access · Encrypted Connection"
                        </p>
                    </div>
                </div>

                <AuthenticatingOverlay visible=overlay />
            </div>
        </div>
    }
}

/// The three visual states are mutually exclusive: an error always
/// implies the in-flight flag was reset, so the overlay only shows while
/// pending with no error set.
fn overlay_visible(pending: bool, has_error: bool) -> bool {
    pending && !has_error
}
