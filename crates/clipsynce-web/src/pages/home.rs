use leptos::prelude::*;
use shared::CONFIG;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="text-lg text-gray-600">{CONFIG.tagline}</div>
    }
}
