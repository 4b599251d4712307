use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="text-red-500 text-xs text-center font-bold bg-red-50 p-2 rounded">
                {error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
