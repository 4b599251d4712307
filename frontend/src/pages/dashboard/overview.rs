use crate::components::layout::Layout;
use leptos::*;

/// Default landing page after login.
#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="px-4 sm:px-0">
                <h2 class="text-2xl font-bold text-gray-900">"Annual Report Overview"</h2>
                <p class="mt-1 text-sm text-gray-500">
                    "Year-to-date performance across all reporting channels."
                </p>
                <div class="mt-6 grid grid-cols-1 gap-5 sm:grid-cols-3">
                    <OverviewCard title="Search Impressions" value="—" />
                    <OverviewCard title="Total Clicks" value="—" />
                    <OverviewCard title="Published Reports" value="—" />
                </div>
            </div>
        </Layout>
    }
}

#[component]
fn OverviewCard(title: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white overflow-hidden shadow rounded-lg px-4 py-5">
            <dt class="text-sm font-medium text-gray-500 truncate">{title}</dt>
            <dd class="mt-1 text-3xl font-semibold text-gray-900">{value}</dd>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn overview_renders_summary_cards() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <OverviewPage /> }
        });
        assert!(html.contains("Annual Report Overview"));
        assert!(html.contains("Search Impressions"));
    }
}
