use leptos::prelude::*;
use shared::CONFIG;

/// Page shell - centered, width-constrained frame with the product heading.
/// Children are rendered untouched after the heading.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <main>
            <div class="flex flex-col flex-wrap w-full max-w-screen-xl px-4 mx-auto">
                <div class="mt-4 mb-4">
                    <p class="text-3xl font-bold">{CONFIG.name}</p>
                </div>
                {children()}
            </div>
        </main>
    }
}
