use leptos::*;

/// Full-screen overlay dimming the form while a credential check is in
/// flight. Hidden as soon as an error is set, so the banner and the
/// overlay are never visible together.
#[component]
pub fn AuthenticatingOverlay(visible: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get() fallback=|| ()>
            <div class="absolute inset-0 bg-white/95 flex flex-col items-center justify-center z-50">
                <div class="w-12 h-12 border-4 border-orange-200 border-t-orange-600 rounded-full animate-spin mb-4"></div>
                <p class="text-sm font-bold text-gray-600">"Connecting to Search Console..."</p>
            </div>
        </Show>
    }
}
