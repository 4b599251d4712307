use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="px-4 sm:px-0">
                <h2 class="text-2xl font-bold text-gray-900">"Reports"</h2>
                <p class="mt-1 text-sm text-gray-500">
                    "Monthly client reports, newest first."
                </p>
                <div class="mt-6 bg-white shadow rounded-lg">
                    <div class="px-4 py-12 text-center text-sm text-gray-400">
                        "No reports published yet."
                    </div>
                </div>
            </div>
        </Layout>
    }
}
